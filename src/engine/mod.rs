//! The scoring engine: pure functions from a completion history and a
//! schedule to strength, streak and completion statistics.
//!
//! Nothing here reads the clock or touches shared state. "Today" is always
//! passed in, so results are reproducible and safe to call from any thread.

pub mod fingerprint;
pub mod rate;
pub mod schedule;
pub mod score;
pub mod streak;

pub use fingerprint::snapshot_key;
pub use rate::completion_rate;
pub use schedule::{is_day_scheduled, scheduled_days};
pub use score::{habit_score, score_history};
pub use streak::{best_streak, current_streak};

use crate::types::completion::CompletionSet;
use crate::types::config::EngineSettings;
use crate::types::schedule::Schedule;
use crate::types::stats::HabitStats;
use chrono::NaiveDate;

pub fn habit_stats(
    completions: &CompletionSet,
    schedule: &Schedule,
    today: NaiveDate,
    settings: &EngineSettings,
) -> HabitStats {
    let windows = &settings.windows;
    let stats = HabitStats {
        score: habit_score(
            completions,
            schedule,
            today,
            windows.score_lookback_days,
            &settings.params,
        ),
        current_streak: current_streak(
            completions,
            schedule,
            today,
            windows.streak_max_lookback_days,
        ),
        best_streak: best_streak(completions, schedule, today),
        total: completions.len(),
        completion_rate: completion_rate(
            completions,
            schedule,
            today,
            windows.completion_rate_days,
        ),
        score_history: score_history(
            completions,
            schedule,
            today,
            windows.history_days,
            &settings.params,
        ),
    };
    tracing::debug!(
        schedule = %schedule.label(),
        score = stats.score,
        current_streak = stats.current_streak,
        best_streak = stats.best_streak,
        "computed habit stats"
    );
    stats
}
