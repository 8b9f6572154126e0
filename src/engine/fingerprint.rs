use crate::error::Result;
use crate::types::completion::{CompletionSet, DATE_FORMAT};
use crate::types::config::EngineSettings;
use crate::types::schedule::Schedule;
use chrono::NaiveDate;
use sha2::{Digest, Sha256};

/// Cache key for a stats computation: identical inputs always hash the same.
pub fn snapshot_key(
    completions: &CompletionSet,
    schedule: &Schedule,
    today: NaiveDate,
    settings: &EngineSettings,
) -> Result<String> {
    let mut hasher = Sha256::new();
    hasher.update(serde_json::to_vec(schedule)?);
    hasher.update(b"\n");
    hasher.update(serde_json::to_vec(settings)?);
    hasher.update(b"\n");
    hasher.update(today.format(DATE_FORMAT).to_string());
    for day in completions.sorted() {
        hasher.update(b"\n");
        hasher.update(day.format(DATE_FORMAT).to_string());
    }
    let digest = hasher.finalize();
    Ok(format!("{digest:x}"))
}
