use crate::error::{HabitError, Result};
use crate::types::completion::DATE_FORMAT;
use crate::types::habit::{FrequencyKind, HabitRecord};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

/// A fresh record with the fields its frequency uses filled with defaults.
pub fn new_record(name: &str, frequency: FrequencyKind, today: NaiveDate) -> HabitRecord {
    let mut record = HabitRecord {
        name: name.to_string(),
        frequency: Some(frequency.as_str().to_string()),
        created_at: Some(today.format(DATE_FORMAT).to_string()),
        ..Default::default()
    };
    match frequency {
        FrequencyKind::Daily => {}
        FrequencyKind::Weekly => record.times_per_week = Some(3),
        FrequencyKind::Interval => record.interval = Some(2),
        FrequencyKind::SpecificDays => record.specific_days = Some(vec![1, 3, 5]),
    }
    record
}

pub fn render_record(path: &Path, record: &HabitRecord) -> Result<String> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if is_json {
        Ok(serde_json::to_string_pretty(record)?)
    } else {
        Ok(toml::to_string(record)?)
    }
}

pub fn write_record(path: &Path, record: &HabitRecord, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(HabitError::AlreadyExists(path.display().to_string()));
    }
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let content = render_record(path, record)?;
    fs::write(path, content)?;
    tracing::info!(path = %path.display(), habit = %record.name, "wrote habit record");
    Ok(())
}
