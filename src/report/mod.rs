pub mod json;
pub mod md;

use crate::engine;
use crate::error::HabitError;
use crate::store::StoredHabit;
use crate::types::config::EngineSettings;
use crate::types::report::{HabitEntry, HabitReport};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

/// Runs the engine over every habit and collects the results, strongest first.
pub fn build_report(
    habits: &[StoredHabit],
    today: NaiveDate,
    settings: &EngineSettings,
) -> Result<HabitReport, HabitError> {
    let habits = habits
        .iter()
        .map(|habit| -> Result<HabitEntry, HabitError> {
            Ok(HabitEntry {
                name: habit.name().to_string(),
                schedule: habit.schedule.label(),
                source: habit.source.display().to_string(),
                snapshot_key: engine::snapshot_key(
                    &habit.completions,
                    &habit.schedule,
                    today,
                    settings,
                )?,
                stats: engine::habit_stats(&habit.completions, &habit.schedule, today, settings),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut report = HabitReport { today, habits };
    report.sort_by_score();
    Ok(report)
}

pub fn render(report: &HabitReport, format: OutputFormat) -> Result<String, HabitError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(HabitError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn render_history(report: &HabitReport, format: OutputFormat) -> Result<String, HabitError> {
    match format {
        OutputFormat::Json => json::history_to_json(report).map_err(HabitError::Json),
        OutputFormat::Md => Ok(md::history_to_markdown(report)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::completion::CompletionSet;
    use crate::types::habit::HabitRecord;
    use crate::types::schedule::Schedule;
    use std::path::PathBuf;

    fn habit(name: &str, completions: &[&str]) -> StoredHabit {
        StoredHabit {
            source: PathBuf::from(format!("{name}.toml")),
            record: HabitRecord {
                name: name.to_string(),
                ..Default::default()
            },
            schedule: Schedule::Daily,
            completions: CompletionSet::from_iso(completions).expect("dates parse"),
            created_on: None,
        }
    }

    #[test]
    fn build_report_orders_by_strength() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 3).expect("valid date");
        let habits = vec![
            habit("Floss", &["2024-01-03"]),
            habit("Read", &["2024-01-01", "2024-01-02", "2024-01-03"]),
        ];

        let report =
            build_report(&habits, today, &EngineSettings::default()).expect("report builds");

        assert_eq!(report.habits[0].name, "Read");
        assert_eq!(report.habits[1].name, "Floss");
        assert_eq!(report.habits[0].stats.current_streak, 3);
        assert_eq!(report.habits[0].snapshot_key.len(), 64);
    }
}
