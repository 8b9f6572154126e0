//! Habit schedules: which calendar days a habit expects a completion on.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const DEFAULT_INTERVAL: u32 = 2;

/// A set of weekday indices, Sunday = 0 through Saturday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "Vec<u8>")]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    pub const ALL: WeekdaySet = WeekdaySet(0b0111_1111);

    pub fn empty() -> Self {
        Self(0)
    }

    /// Builds a set from raw indices, dropping anything outside 0..=6.
    pub fn from_indices<I>(indices: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        indices
            .into_iter()
            .filter(|index| (0..7).contains(index))
            .fold(Self::empty(), |set, index| set.with(index as u8))
    }

    pub fn with(self, index: u8) -> Self {
        Self(self.0 | (1 << index))
    }

    pub fn contains(&self, index: u8) -> bool {
        index < 7 && self.0 & (1 << index) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn indices(&self) -> impl Iterator<Item = u8> + '_ {
        (0..7u8).filter(move |index| self.contains(*index))
    }
}

impl From<WeekdaySet> for Vec<u8> {
    fn from(set: WeekdaySet) -> Self {
        set.indices().collect()
    }
}

/// Weekday index of a date with Sunday = 0.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "frequency", rename_all = "snake_case")]
pub enum Schedule {
    Daily,
    /// Every day counts as scheduled; `times_per_week` only changes the label.
    Weekly { times_per_week: u8 },
    /// Every `every` days starting at `anchor`.
    Interval { every: u32, anchor: NaiveDate },
    SpecificDays { days: WeekdaySet },
}

impl Schedule {
    pub fn interval(every: u32, anchor: NaiveDate) -> Self {
        let every = if every < DEFAULT_INTERVAL {
            DEFAULT_INTERVAL
        } else {
            every
        };
        Self::Interval { every, anchor }
    }

    pub fn specific_days(days: WeekdaySet) -> Self {
        let days = if days.is_empty() {
            WeekdaySet::ALL
        } else {
            days
        };
        Self::SpecificDays { days }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Daily => "Daily".to_string(),
            Self::Weekly { times_per_week } => format!("{times_per_week}x per week"),
            Self::Interval { every, .. } => format!("Every {every} days"),
            Self::SpecificDays { days } if *days == WeekdaySet::ALL => "Every day".to_string(),
            Self::SpecificDays { days } => days
                .indices()
                .map(|index| WEEKDAY_NAMES[index as usize])
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}
