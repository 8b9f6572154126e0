use super::schedule::{is_day_scheduled, window};
use crate::types::completion::CompletionSet;
use crate::types::schedule::Schedule;
use chrono::NaiveDate;

/// Share of scheduled days in the trailing window that were completed.
pub fn completion_rate(
    completions: &CompletionSet,
    schedule: &Schedule,
    today: NaiveDate,
    days: u32,
) -> f64 {
    let (scheduled, completed) = window(today, days)
        .filter(|day| is_day_scheduled(*day, schedule))
        .fold((0u32, 0u32), |(scheduled, completed), day| {
            (scheduled + 1, completed + u32::from(completions.contains(day)))
        });

    if scheduled == 0 {
        0.0
    } else {
        f64::from(completed) / f64::from(scheduled)
    }
}
