//! Habit strength and streak scoring.
//!
//! [`engine`] holds the pure scoring functions; the other modules load habit
//! records from disk, layer configuration and render reports for the CLI.

pub mod config;
pub mod engine;
pub mod error;
pub mod lint;
pub mod report;
pub mod store;
pub mod types;

pub use engine::habit_stats;
pub use error::{HabitError, Result};
pub use types::completion::CompletionSet;
pub use types::config::{EngineSettings, ScoringParams, Windows};
pub use types::schedule::{Schedule, WeekdaySet};
pub use types::stats::{HabitStats, ScorePoint};
