use crate::store::{self, filesystem::list_habit_files, StoredHabit};
use crate::types::config::HabitConfig;
use crate::types::habit::{FrequencyKind, HabitRecord};
use crate::types::report::Finding;
use crate::types::schedule::DEFAULT_INTERVAL;
use chrono::NaiveDate;
use std::path::Path;

pub fn lint_path(path: &Path, config: Option<&HabitConfig>, today: NaiveDate) -> Vec<Finding> {
    let mut findings = Vec::new();

    if config.is_none() {
        findings.push(Finding {
            id: "config.missing".to_string(),
            title: "No project configuration".to_string(),
            body: "habitscore.toml is missing; default scoring rates and windows apply."
                .to_string(),
            blocking: false,
            file: None,
        });
    }

    let files = if path.is_dir() {
        list_habit_files(path)
    } else {
        vec![path.to_path_buf()]
    };
    if files.is_empty() {
        findings.push(Finding {
            id: "store.empty".to_string(),
            title: "No habit records found".to_string(),
            body: format!("No *.toml or *.json habit files under {}.", path.display()),
            blocking: false,
            file: None,
        });
    }

    for file in &files {
        let source = file.display().to_string();
        let record = match store::read_record(file) {
            Ok(record) => record,
            Err(e) => {
                findings.push(Finding {
                    id: "habit.parse_error".to_string(),
                    title: "Habit record cannot be parsed".to_string(),
                    body: e.to_string(),
                    blocking: true,
                    file: Some(source),
                });
                continue;
            }
        };
        findings.extend(lint_record(&record, file, today));
    }

    findings
}

pub fn lint_record(record: &HabitRecord, source: &Path, today: NaiveDate) -> Vec<Finding> {
    let file = Some(source.display().to_string());
    let finding = |id: &str, title: &str, body: String, blocking: bool| Finding {
        id: id.to_string(),
        title: title.to_string(),
        body,
        blocking,
        file: file.clone(),
    };
    let mut findings = Vec::new();

    let habit = match StoredHabit::from_record(source, record.clone()) {
        Ok(habit) => habit,
        Err(e) => {
            findings.push(finding(
                "habit.invalid",
                "Habit record is invalid",
                e.to_string(),
                true,
            ));
            return findings;
        }
    };

    match (record.frequency.as_deref(), record.frequency_kind()) {
        (Some(raw), None) => findings.push(finding(
            "habit.unknown_frequency",
            "Unknown frequency",
            format!("{}: frequency '{raw}' is not recognised; scored as daily.", record.name),
            false,
        )),
        (_, Some(FrequencyKind::Interval))
            if record.interval.map_or(true, |every| every < i64::from(DEFAULT_INTERVAL)) =>
        {
            findings.push(finding(
                "habit.interval_defaulted",
                "Interval missing or too small",
                format!(
                    "{}: interval must be at least {DEFAULT_INTERVAL}; using {DEFAULT_INTERVAL}.",
                    record.name
                ),
                false,
            ))
        }
        (_, Some(FrequencyKind::SpecificDays)) => {
            let days = record.specific_days.as_deref().unwrap_or_default();
            if days.is_empty() {
                findings.push(finding(
                    "habit.specific_days_defaulted",
                    "No weekdays selected",
                    format!("{}: specific_days is empty; every weekday counts.", record.name),
                    false,
                ));
            } else if days.iter().any(|day| !(0..7).contains(day)) {
                findings.push(finding(
                    "habit.specific_days_out_of_range",
                    "Weekday index out of range",
                    format!(
                        "{}: specific_days entries must be 0 (Sunday) through 6 (Saturday).",
                        record.name
                    ),
                    false,
                ));
            }
        }
        _ => {}
    }

    if habit.completions.latest().is_some_and(|latest| latest > today) {
        let future = habit
            .completions
            .sorted()
            .into_iter()
            .filter(|day| *day > today)
            .count();
        findings.push(finding(
            "habit.future_completions",
            "Completions dated in the future",
            format!(
                "{}: {future} completion(s) after {today} are ignored by streaks and scores.",
                record.name
            ),
            false,
        ));
    }

    if let (Some(created_on), Some(earliest)) = (habit.created_on, habit.completions.earliest()) {
        if earliest < created_on {
            findings.push(finding(
                "habit.before_created",
                "Completions precede created_at",
                format!(
                    "{}: earliest completion {earliest} is before created_at {created_on}.",
                    record.name
                ),
                false,
            ));
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
    }

    fn record(toml_str: &str) -> HabitRecord {
        toml::from_str(toml_str).expect("record should parse")
    }

    fn ids(findings: &[Finding]) -> Vec<&str> {
        findings.iter().map(|finding| finding.id.as_str()).collect()
    }

    #[test]
    fn clean_record_has_no_findings() {
        let findings = lint_record(
            &record(
                r#"
name = "Read"
frequency = "daily"
created_at = "2024-01-01"
completions = ["2024-01-02"]
"#,
            ),
            Path::new("read.toml"),
            today(),
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn defaulted_fields_are_warnings() {
        let findings = lint_record(
            &record(
                r#"
name = "Plants"
frequency = "interval"
interval = 1
created_at = "2024-02-01"
completions = ["2024-01-15", "2024-04-01"]
"#,
            ),
            Path::new("plants.toml"),
            today(),
        );
        assert_eq!(
            ids(&findings),
            vec![
                "habit.interval_defaulted",
                "habit.future_completions",
                "habit.before_created"
            ]
        );
        assert!(findings.iter().all(|finding| !finding.blocking));
    }

    #[test]
    fn unknown_frequency_and_empty_weekdays_warn() {
        let unknown = lint_record(
            &record("name = \"A\"\nfrequency = \"hourly\""),
            Path::new("a.toml"),
            today(),
        );
        assert_eq!(ids(&unknown), vec!["habit.unknown_frequency"]);

        let empty_days = lint_record(
            &record("name = \"B\"\nfrequency = \"specific_days\"\nspecific_days = []"),
            Path::new("b.toml"),
            today(),
        );
        assert_eq!(ids(&empty_days), vec!["habit.specific_days_defaulted"]);
    }

    #[test]
    fn invalid_dates_are_blocking() {
        let findings = lint_record(
            &record("name = \"C\"\ncompletions = [\"2024-02-30\"]"),
            Path::new("c.toml"),
            today(),
        );
        assert_eq!(ids(&findings), vec!["habit.invalid"]);
        assert!(findings[0].blocking);
    }

    #[test]
    fn unparseable_created_at_blocks_daily_habits() {
        let findings = lint_record(
            &record(
                r#"
name = "D"
frequency = "daily"
created_at = "not-a-date"
completions = ["2024-02-01"]
"#,
            ),
            Path::new("d.toml"),
            today(),
        );
        assert_eq!(ids(&findings), vec!["habit.invalid"]);
        assert!(findings[0].blocking);
        assert!(findings[0].body.contains("not-a-date"));
    }

    #[test]
    fn out_of_range_weekday_warns() {
        let findings = lint_record(
            &record("name = \"E\"\nfrequency = \"specific_days\"\nspecific_days = [1, 9]"),
            Path::new("e.toml"),
            today(),
        );
        assert_eq!(ids(&findings), vec!["habit.specific_days_out_of_range"]);
        assert!(!findings[0].blocking);
    }

    #[test]
    fn lint_path_reports_parse_errors_and_missing_config() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join("broken.toml"), "name = ").expect("habit should write");

        let findings = lint_path(dir.path(), None, today());
        assert!(findings
            .iter()
            .any(|finding| finding.id == "config.missing" && !finding.blocking));
        assert!(findings
            .iter()
            .any(|finding| finding.id == "habit.parse_error" && finding.blocking));
    }

    #[test]
    fn lint_path_warns_on_empty_directory() {
        let dir = TempDir::new().expect("temp dir should be created");
        let config = HabitConfig::default();
        let findings = lint_path(dir.path(), Some(&config), today());
        assert_eq!(ids(&findings), vec!["store.empty"]);
    }
}
