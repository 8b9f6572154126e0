use crate::types::report::HabitReport;

const BAR_WIDTH: usize = 20;

pub fn to_markdown(report: &HabitReport) -> String {
    let mut output = String::new();
    output.push_str("# Habit Report\n\n");
    output.push_str(&format!("As of {}\n\n", report.today));

    if report.habits.is_empty() {
        output.push_str("- no habits\n");
        return output;
    }

    output.push_str("| Habit | Schedule | Strength | Streak | Best | Total | Rate |\n");
    output.push_str("|-------|----------|----------|--------|------|-------|------|\n");
    for habit in &report.habits {
        let stats = &habit.stats;
        output.push_str(&format!(
            "| {} | {} | {:.1}% | {} | {} | {} | {:.0}% |\n",
            escape_cell(&habit.name),
            habit.schedule,
            stats.score * 100.0,
            stats.current_streak,
            stats.best_streak,
            stats.total,
            stats.completion_rate * 100.0
        ));
    }

    output
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

pub fn history_to_markdown(report: &HabitReport) -> String {
    let mut output = String::new();
    output.push_str("# Score History\n\n");

    for habit in &report.habits {
        output.push_str(&format!("## {} ({})\n\n", habit.name, habit.schedule));
        if habit.stats.score_history.is_empty() {
            output.push_str("- no data\n\n");
            continue;
        }
        for point in &habit.stats.score_history {
            let filled = (point.score * BAR_WIDTH as f64).round() as usize;
            output.push_str(&format!(
                "{} {:<width$} {:.3}\n",
                point.date,
                "#".repeat(filled.min(BAR_WIDTH)),
                point.score,
                width = BAR_WIDTH
            ));
        }
        output.push('\n');
    }

    output
}
