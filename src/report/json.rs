use crate::types::report::HabitReport;
use crate::types::stats::ScorePoint;
use serde::Serialize;

pub fn to_json(report: &HabitReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[derive(Serialize)]
struct HistorySeries<'a> {
    name: &'a str,
    points: &'a [ScorePoint],
}

pub fn history_to_json(report: &HabitReport) -> Result<String, serde_json::Error> {
    let series = report
        .habits
        .iter()
        .map(|habit| HistorySeries {
            name: &habit.name,
            points: &habit.stats.score_history,
        })
        .collect::<Vec<_>>();
    serde_json::to_string_pretty(&series)
}
