use super::schedule::is_day_scheduled;
use crate::types::completion::CompletionSet;
use crate::types::schedule::Schedule;
use chrono::{Duration, NaiveDate};

/// Consecutive completed scheduled days ending today, or yesterday when
/// today is scheduled but not yet done. Unscheduled days neither count nor
/// break the run. The walk covers `max_lookback_days` days counted back from
/// `today`, whichever day it starts on.
pub fn current_streak(
    completions: &CompletionSet,
    schedule: &Schedule,
    today: NaiveDate,
    max_lookback_days: u32,
) -> u32 {
    if completions.is_empty() {
        return 0;
    }

    let today_pending = is_day_scheduled(today, schedule) && !completions.contains(today);
    let first_offset = i64::from(today_pending);

    let mut streak = 0;
    for offset in first_offset..i64::from(max_lookback_days) {
        let Some(day) = today.checked_sub_signed(Duration::days(offset)) else {
            break;
        };
        if !is_day_scheduled(day, schedule) {
            continue;
        }
        if !completions.contains(day) {
            break;
        }
        streak += 1;
    }
    streak
}

/// Longest run of completed scheduled days between the first completion
/// and `today`.
pub fn best_streak(completions: &CompletionSet, schedule: &Schedule, today: NaiveDate) -> u32 {
    let Some(first) = completions.earliest() else {
        return 0;
    };

    let mut best = 0;
    let mut running = 0;
    for day in first.iter_days().take_while(|day| *day <= today) {
        if !is_day_scheduled(day, schedule) {
            continue;
        }
        if completions.contains(day) {
            running += 1;
            best = best.max(running);
        } else {
            running = 0;
        }
    }
    best
}
