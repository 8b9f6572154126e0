use chrono::NaiveDate;
use serde::Serialize;

pub type Score = f64;

/// Running strength score at the end of one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScorePoint {
    pub date: NaiveDate,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitStats {
    pub score: Score,
    pub current_streak: u32,
    pub best_streak: u32,
    pub total: usize,
    pub completion_rate: f64,
    pub score_history: Vec<ScorePoint>,
}
