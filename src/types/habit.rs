//! On-disk habit records and their normalisation into engine inputs.

use crate::error::{HabitError, Result};
use crate::types::completion::{parse_date, CompletionSet};
use crate::types::schedule::{Schedule, WeekdaySet};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyKind {
    Daily,
    Weekly,
    Interval,
    SpecificDays,
}

impl FrequencyKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "interval" => Some(Self::Interval),
            "specific_days" | "specific-days" => Some(Self::SpecificDays),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Interval => "interval",
            Self::SpecificDays => "specific_days",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HabitRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(
        default,
        alias = "timesPerWeek",
        skip_serializing_if = "Option::is_none"
    )]
    pub times_per_week: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,
    #[serde(
        default,
        alias = "specificDays",
        skip_serializing_if = "Option::is_none"
    )]
    pub specific_days: Option<Vec<i64>>,
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, alias = "completedDates")]
    pub completions: Vec<String>,
}

impl HabitRecord {
    /// Frequency as written, `None` when missing or unrecognised.
    pub fn frequency_kind(&self) -> Option<FrequencyKind> {
        self.frequency.as_deref().and_then(FrequencyKind::parse)
    }

    pub fn created_on(&self) -> Result<Option<NaiveDate>> {
        self.created_at.as_deref().map(parse_anchor).transpose()
    }

    /// Normalises the record into a [`Schedule`], filling defaults for
    /// missing or out-of-range fields.
    pub fn schedule(&self) -> Result<Schedule> {
        let kind = match self.frequency_kind() {
            Some(kind) => kind,
            None => {
                if let Some(raw) = &self.frequency {
                    tracing::warn!(habit = %self.name, frequency = %raw, "unknown frequency, treating as daily");
                }
                FrequencyKind::Daily
            }
        };

        let schedule = match kind {
            FrequencyKind::Daily => Schedule::Daily,
            FrequencyKind::Weekly => Schedule::Weekly {
                times_per_week: self.times_per_week.unwrap_or(1).clamp(1, 7) as u8,
            },
            FrequencyKind::Interval => {
                let anchor = self.created_on()?.ok_or_else(|| {
                    HabitError::InvalidHabit(format!(
                        "{}: interval habits require created_at",
                        self.name
                    ))
                })?;
                let every = self
                    .interval
                    .and_then(|every| u32::try_from(every).ok())
                    .unwrap_or(0);
                Schedule::interval(every, anchor)
            }
            FrequencyKind::SpecificDays => Schedule::specific_days(
                self.specific_days
                    .as_ref()
                    .map(|days| WeekdaySet::from_indices(days.iter().copied()))
                    .unwrap_or(WeekdaySet::ALL),
            ),
        };
        Ok(schedule)
    }

    pub fn completion_set(&self) -> Result<CompletionSet> {
        CompletionSet::from_iso(&self.completions).map_err(|e| match e {
            HabitError::InvalidDate(detail) => {
                HabitError::InvalidDate(format!("{}: {}", self.name, detail))
            }
            other => other,
        })
    }
}

/// Accepts a bare date or a timestamp, keeping only the calendar day.
fn parse_anchor(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = parse_date(trimmed) {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.date_naive());
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|timestamp| timestamp.date())
        .map_err(|_| HabitError::InvalidDate(format!("created_at: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn parse_toml_record() {
        let record: HabitRecord = toml::from_str(
            r#"
name = "Stretch"
frequency = "specific_days"
specific_days = [1, 3, 5]
created_at = "2024-01-01"
completions = ["2024-01-01", "2024-01-03"]
"#,
        )
        .expect("record should parse");

        assert_eq!(
            record.schedule().expect("schedule should build"),
            Schedule::SpecificDays {
                days: WeekdaySet::from_indices([1, 3, 5])
            }
        );
        assert_eq!(record.completion_set().expect("dates parse").len(), 2);
    }

    #[test]
    fn parse_json_record_with_camel_case_fields() {
        let record: HabitRecord = serde_json::from_str(
            r#"{
                "name": "Run",
                "frequency": "interval",
                "interval": 3,
                "createdAt": "2024-01-01T18:30:00Z",
                "completedDates": ["2024-01-04"]
            }"#,
        )
        .expect("record should parse");

        assert_eq!(
            record.schedule().expect("schedule should build"),
            Schedule::Interval {
                every: 3,
                anchor: date(2024, 1, 1)
            }
        );
        assert_eq!(record.completions, vec!["2024-01-04".to_string()]);
    }

    #[test]
    fn unknown_or_missing_frequency_defaults_to_daily() {
        let missing = HabitRecord {
            name: "Water".to_string(),
            ..Default::default()
        };
        assert_eq!(missing.schedule().expect("schedule"), Schedule::Daily);

        let unknown = HabitRecord {
            name: "Water".to_string(),
            frequency: Some("fortnightly".to_string()),
            ..Default::default()
        };
        assert_eq!(unknown.frequency_kind(), None);
        assert_eq!(unknown.schedule().expect("schedule"), Schedule::Daily);
    }

    #[test]
    fn interval_defaults_and_requires_anchor() {
        let record = HabitRecord {
            name: "Plants".to_string(),
            frequency: Some("interval".to_string()),
            interval: Some(-4),
            created_at: Some("2024-02-10".to_string()),
            ..Default::default()
        };
        assert_eq!(
            record.schedule().expect("schedule"),
            Schedule::Interval {
                every: 2,
                anchor: date(2024, 2, 10)
            }
        );

        let no_anchor = HabitRecord {
            created_at: None,
            ..record
        };
        let err = no_anchor.schedule().expect_err("anchor is required");
        assert!(err.to_string().contains("require created_at"));
    }

    #[test]
    fn weekly_keeps_times_per_week_for_labels() {
        let record = HabitRecord {
            name: "Gym".to_string(),
            frequency: Some("Weekly".to_string()),
            times_per_week: Some(12),
            ..Default::default()
        };
        assert_eq!(
            record.schedule().expect("schedule"),
            Schedule::Weekly { times_per_week: 7 }
        );
    }

    #[test]
    fn missing_specific_days_means_all_days() {
        let record = HabitRecord {
            name: "Journal".to_string(),
            frequency: Some("specific_days".to_string()),
            ..Default::default()
        };
        assert_eq!(
            record.schedule().expect("schedule"),
            Schedule::SpecificDays {
                days: WeekdaySet::ALL
            }
        );
    }

    #[test]
    fn invalid_created_at_is_rejected() {
        let record = HabitRecord {
            name: "Read".to_string(),
            created_at: Some("yesterday".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            record.created_on(),
            Err(HabitError::InvalidDate(_))
        ));
    }

    #[test]
    fn malformed_completion_names_the_habit() {
        let record = HabitRecord {
            name: "Read".to_string(),
            completions: vec!["01/02/2024".to_string()],
            ..Default::default()
        };
        let err = record.completion_set().expect_err("bad date");
        assert!(matches!(err, HabitError::InvalidDate(_)));
        assert!(err.to_string().contains("Read"));
        assert!(err.to_string().contains("01/02/2024"));
    }
}
