//! Loads habit records from files on disk.

pub mod filesystem;
pub mod template;

use crate::error::{HabitError, Result};
use crate::types::completion::CompletionSet;
use crate::types::habit::HabitRecord;
use crate::types::schedule::Schedule;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// A habit record together with its normalised engine inputs.
#[derive(Debug, Clone)]
pub struct StoredHabit {
    pub source: PathBuf,
    pub record: HabitRecord,
    pub schedule: Schedule,
    pub completions: CompletionSet,
    pub created_on: Option<NaiveDate>,
}

impl StoredHabit {
    pub fn from_record(source: &Path, record: HabitRecord) -> Result<Self> {
        let created_on = record.created_on()?;
        let schedule = record.schedule()?;
        let completions = record.completion_set()?;
        Ok(Self {
            source: source.to_path_buf(),
            record,
            schedule,
            completions,
            created_on,
        })
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }
}

/// Parses one habit file; the format follows the extension.
pub fn read_record(path: &Path) -> Result<HabitRecord> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let record: HabitRecord = if is_json {
        serde_json::from_str(&content)
            .map_err(|e| HabitError::InvalidHabit(format!("{}: {}", path.display(), e)))?
    } else {
        toml::from_str(&content)
            .map_err(|e| HabitError::InvalidHabit(format!("{}: {}", path.display(), e)))?
    };
    if record.name.trim().is_empty() {
        return Err(HabitError::InvalidHabit(format!(
            "{}: name must not be empty",
            path.display()
        )));
    }
    Ok(record)
}

pub fn load_habit(path: &Path) -> Result<StoredHabit> {
    let record = read_record(path)?;
    StoredHabit::from_record(path, record)
}

/// Loads a single habit file, or every habit file below a directory.
pub fn load_habits(path: &Path) -> Result<Vec<StoredHabit>> {
    if !path.exists() {
        return Err(HabitError::PathNotFound(path.display().to_string()));
    }
    let files = if path.is_dir() {
        filesystem::list_habit_files(path)
    } else {
        vec![path.to_path_buf()]
    };
    tracing::debug!(root = %path.display(), count = files.len(), "discovered habit files");

    files.iter().map(|file| load_habit(file)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_habits_reads_toml_and_json() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(
            dir.path().join("read.toml"),
            r#"
name = "Read"
frequency = "daily"
completions = ["2024-01-01"]
"#,
        )
        .expect("toml habit should write");
        fs::write(
            dir.path().join("run.json"),
            r#"{"name": "Run", "frequency": "specific_days", "specificDays": [1, 3]}"#,
        )
        .expect("json habit should write");

        let habits = load_habits(dir.path()).expect("habits should load");
        assert_eq!(habits.len(), 2);
        assert_eq!(habits[0].name(), "Read");
        assert_eq!(habits[0].completions.len(), 1);
        assert_eq!(habits[1].name(), "Run");
        assert!(matches!(habits[1].schedule, Schedule::SpecificDays { .. }));
    }

    #[test]
    fn from_record_rejects_bad_created_at_for_every_frequency() {
        for frequency in ["daily", "weekly", "specific_days", "interval"] {
            let record = HabitRecord {
                name: "Read".to_string(),
                frequency: Some(frequency.to_string()),
                created_at: Some("yesterday".to_string()),
                ..Default::default()
            };
            let err = StoredHabit::from_record(Path::new("read.toml"), record)
                .expect_err("created_at must be a date");
            assert!(
                matches!(err, HabitError::InvalidDate(_)),
                "{frequency}: unexpected error {err:?}"
            );
        }
    }

    #[test]
    fn from_record_keeps_created_date() {
        let record = HabitRecord {
            name: "Read".to_string(),
            created_at: Some("2024-01-05T07:00:00Z".to_string()),
            ..Default::default()
        };
        let habit = StoredHabit::from_record(Path::new("read.toml"), record)
            .expect("record should load");
        assert_eq!(habit.created_on, NaiveDate::from_ymd_opt(2024, 1, 5));
    }

    #[test]
    fn load_habits_rejects_bad_created_at_on_daily_habit() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("read.toml");
        fs::write(
            &path,
            "name = \"Read\"\nfrequency = \"daily\"\ncreated_at = \"yesterday\"\n",
        )
        .expect("habit should write");
        assert!(matches!(
            load_habits(&path),
            Err(HabitError::InvalidDate(_))
        ));
    }

    #[test]
    fn load_habits_fails_on_missing_path() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load_habits(&dir.path().join("nope")).expect_err("path is missing");
        assert!(matches!(err, HabitError::PathNotFound(_)));
    }

    #[test]
    fn read_record_rejects_blank_name() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("blank.toml");
        fs::write(&path, "name = \"  \"").expect("habit should write");
        let err = read_record(&path).expect_err("blank name is invalid");
        assert!(err.to_string().contains("name must not be empty"));
    }

    #[test]
    fn read_record_names_the_file_on_parse_errors() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").expect("habit should write");
        let err = read_record(&path).expect_err("invalid json");
        assert!(err.to_string().contains("broken.json"));
    }
}
