use crate::error::HabitError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_INCREASE_RATE: f64 = 0.052;
pub const DEFAULT_DECREASE_RATE: f64 = 0.035;
pub const DEFAULT_SCORE_LOOKBACK_DAYS: u32 = 60;
pub const DEFAULT_HISTORY_DAYS: u32 = 30;
pub const DEFAULT_COMPLETION_RATE_DAYS: u32 = 30;
pub const DEFAULT_STREAK_MAX_LOOKBACK_DAYS: u32 = 365;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HabitConfig {
    pub scoring: Option<ScoringConfig>,
    pub windows: Option<WindowsConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub increase_rate: Option<f64>,
    pub decrease_rate: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindowsConfig {
    pub score_lookback_days: Option<u32>,
    pub history_days: Option<u32>,
    pub completion_rate_days: Option<u32>,
    pub streak_max_lookback_days: Option<u32>,
}

/// Rates applied on each scheduled day of the strength walk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringParams {
    pub increase_rate: f64,
    pub decrease_rate: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            increase_rate: DEFAULT_INCREASE_RATE,
            decrease_rate: DEFAULT_DECREASE_RATE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Windows {
    pub score_lookback_days: u32,
    pub history_days: u32,
    pub completion_rate_days: u32,
    pub streak_max_lookback_days: u32,
}

impl Default for Windows {
    fn default() -> Self {
        Self {
            score_lookback_days: DEFAULT_SCORE_LOOKBACK_DAYS,
            history_days: DEFAULT_HISTORY_DAYS,
            completion_rate_days: DEFAULT_COMPLETION_RATE_DAYS,
            streak_max_lookback_days: DEFAULT_STREAK_MAX_LOOKBACK_DAYS,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EngineSettings {
    pub params: ScoringParams,
    pub windows: Windows,
}

impl HabitConfig {
    pub fn scoring_params(&self) -> ScoringParams {
        let defaults = ScoringParams::default();
        match &self.scoring {
            Some(scoring) => ScoringParams {
                increase_rate: scoring.increase_rate.unwrap_or(defaults.increase_rate),
                decrease_rate: scoring.decrease_rate.unwrap_or(defaults.decrease_rate),
            },
            None => defaults,
        }
    }

    pub fn windows(&self) -> Windows {
        let defaults = Windows::default();
        match &self.windows {
            Some(windows) => Windows {
                score_lookback_days: windows
                    .score_lookback_days
                    .unwrap_or(defaults.score_lookback_days),
                history_days: windows.history_days.unwrap_or(defaults.history_days),
                completion_rate_days: windows
                    .completion_rate_days
                    .unwrap_or(defaults.completion_rate_days),
                streak_max_lookback_days: windows
                    .streak_max_lookback_days
                    .unwrap_or(defaults.streak_max_lookback_days),
            },
            None => defaults,
        }
    }

    pub fn settings(&self) -> EngineSettings {
        EngineSettings {
            params: self.scoring_params(),
            windows: self.windows(),
        }
    }

    pub fn validate(&self) -> Result<(), HabitError> {
        let params = self.scoring_params();
        for (key, rate) in [
            ("increase_rate", params.increase_rate),
            ("decrease_rate", params.decrease_rate),
        ] {
            if !(rate > 0.0 && rate <= 1.0) {
                return Err(HabitError::ConfigParse(format!(
                    "scoring.{key} must be greater than 0.0 and at most 1.0 (found {rate})"
                )));
            }
        }

        let windows = self.windows();
        for (key, days) in [
            ("score_lookback_days", windows.score_lookback_days),
            ("history_days", windows.history_days),
            ("completion_rate_days", windows.completion_rate_days),
            ("streak_max_lookback_days", windows.streak_max_lookback_days),
        ] {
            if days == 0 {
                return Err(HabitError::ConfigParse(format!(
                    "windows.{key} must be greater than 0"
                )));
            }
        }

        Ok(())
    }
}
