//! Strength score: a running value in [0, 1] that rises on completed
//! scheduled days and decays on missed ones.

use super::schedule::{is_day_scheduled, window};
use crate::types::completion::CompletionSet;
use crate::types::config::ScoringParams;
use crate::types::schedule::Schedule;
use crate::types::stats::{Score, ScorePoint};
use chrono::NaiveDate;

/// Increase shrinks as the score approaches 1.0.
pub fn apply_completion(score: Score, params: &ScoringParams) -> Score {
    (score + params.increase_rate * (1.0 - score * 0.5)).min(1.0)
}

/// Decay grows with the score; floored at 0.0.
pub fn apply_miss(score: Score, params: &ScoringParams) -> Score {
    (score - params.decrease_rate * (0.5 + score * 0.5)).max(0.0)
}

fn step(
    score: Score,
    day: NaiveDate,
    completions: &CompletionSet,
    schedule: &Schedule,
    params: &ScoringParams,
) -> Score {
    if !is_day_scheduled(day, schedule) {
        score
    } else if completions.contains(day) {
        apply_completion(score, params)
    } else {
        apply_miss(score, params)
    }
}

/// Score after walking the `lookback_days` days ending at `today`.
pub fn habit_score(
    completions: &CompletionSet,
    schedule: &Schedule,
    today: NaiveDate,
    lookback_days: u32,
    params: &ScoringParams,
) -> Score {
    window(today, lookback_days).fold(0.0, |score, day| {
        step(score, day, completions, schedule, params)
    })
}

/// One point per calendar day of the window, oldest first.
pub fn score_history(
    completions: &CompletionSet,
    schedule: &Schedule,
    today: NaiveDate,
    days: u32,
    params: &ScoringParams,
) -> Vec<ScorePoint> {
    let mut score = 0.0;
    window(today, days)
        .map(|date| {
            score = step(score, date, completions, schedule, params);
            ScorePoint { date, score }
        })
        .collect()
}
