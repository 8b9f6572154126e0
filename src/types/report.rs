use crate::types::stats::HabitStats;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HabitEntry {
    pub name: String,
    pub schedule: String,
    pub source: String,
    pub snapshot_key: String,
    pub stats: HabitStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct HabitReport {
    pub today: NaiveDate,
    pub habits: Vec<HabitEntry>,
}

impl HabitReport {
    pub fn sort_by_score(&mut self) {
        self.habits.sort_by(|a, b| {
            b.stats
                .score
                .total_cmp(&a.stats.score)
                .then_with(|| a.name.cmp(&b.name))
        });
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
    pub file: Option<String>,
}
