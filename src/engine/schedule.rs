use crate::types::schedule::{weekday_index, Schedule};
use chrono::{Duration, NaiveDate};

/// Whether `date` counts toward scoring under `schedule`.
pub fn is_day_scheduled(date: NaiveDate, schedule: &Schedule) -> bool {
    match schedule {
        Schedule::Daily | Schedule::Weekly { .. } => true,
        Schedule::Interval { every, anchor } => {
            let elapsed = date.signed_duration_since(*anchor).num_days();
            elapsed >= 0 && elapsed % i64::from((*every).max(1)) == 0
        }
        Schedule::SpecificDays { days } => days.contains(weekday_index(date)),
    }
}

/// The `days` calendar days ending at `today`, oldest first.
pub fn window(today: NaiveDate, days: u32) -> impl Iterator<Item = NaiveDate> {
    (0..i64::from(days))
        .rev()
        .filter_map(move |offset| today.checked_sub_signed(Duration::days(offset)))
}

/// Scheduled dates in `[from, from + days)`.
pub fn scheduled_days(schedule: &Schedule, from: NaiveDate, days: u32) -> Vec<NaiveDate> {
    from.iter_days()
        .take(days as usize)
        .filter(|date| is_day_scheduled(*date, schedule))
        .collect()
}
