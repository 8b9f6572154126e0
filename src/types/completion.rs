use crate::error::{HabitError, Result};
use chrono::NaiveDate;
use std::collections::HashSet;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a strict `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|e| HabitError::InvalidDate(format!("{raw}: {e}")))
}

/// The set of days a habit was completed on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionSet {
    days: HashSet<NaiveDate>,
}

impl CompletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_iso<I, S>(raw: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raw.into_iter()
            .map(|date| parse_date(date.as_ref()))
            .collect::<Result<HashSet<_>>>()
            .map(|days| Self { days })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn earliest(&self) -> Option<NaiveDate> {
        self.days.iter().min().copied()
    }

    pub fn latest(&self) -> Option<NaiveDate> {
        self.days.iter().max().copied()
    }

    pub fn sorted(&self) -> Vec<NaiveDate> {
        let mut days = self.days.iter().copied().collect::<Vec<_>>();
        days.sort_unstable();
        days
    }
}

impl FromIterator<NaiveDate> for CompletionSet {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}
