//! Round timer configuration and its validation

use serde::{Deserialize, Serialize};

use crate::error::TimerError;

/// Immutable training configuration supplied when a timer starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerConfig {
    pub round_count: u32,
    pub round_duration_seconds: u32,
    pub rest_duration_seconds: u32,
}

impl TimerConfig {
    pub fn new(round_count: u32, round_duration_seconds: u32, rest_duration_seconds: u32) -> Self {
        Self {
            round_count,
            round_duration_seconds,
            rest_duration_seconds,
        }
    }

    /// Build a config from loosely typed input where any field may be absent.
    ///
    /// Missing, zero, negative or oversized values are all `InvalidConfig`.
    pub fn from_optional(
        round_count: Option<i64>,
        round_duration_seconds: Option<i64>,
        rest_duration_seconds: Option<i64>,
    ) -> Result<Self, TimerError> {
        let config = Self {
            round_count: positive("roundCount", round_count)?,
            round_duration_seconds: positive("roundDurationSeconds", round_duration_seconds)?,
            rest_duration_seconds: positive("restDurationSeconds", rest_duration_seconds)?,
        };
        Ok(config)
    }

    /// Check that every field is a positive integer
    pub fn validate(&self) -> Result<(), TimerError> {
        let fields = [
            ("roundCount", self.round_count),
            ("roundDurationSeconds", self.round_duration_seconds),
            ("restDurationSeconds", self.rest_duration_seconds),
        ];
        for (name, value) in fields {
            if value == 0 {
                return Err(TimerError::invalid(format!("{name} must be positive")));
            }
        }
        Ok(())
    }

    /// Seconds from start to finish, including the initial countdown
    pub fn total_seconds(&self) -> u64 {
        let per_round = u64::from(self.round_duration_seconds) + u64::from(self.rest_duration_seconds);
        u64::from(crate::state::INITIAL_COUNTDOWN_SECONDS) + per_round * u64::from(self.round_count)
    }
}

fn positive(name: &str, value: Option<i64>) -> Result<u32, TimerError> {
    let value = value.ok_or_else(|| TimerError::invalid(format!("{name} is missing")))?;
    if value <= 0 {
        return Err(TimerError::invalid(format!("{name} must be positive, got {value}")));
    }
    u32::try_from(value).map_err(|_| TimerError::invalid(format!("{name} is too large: {value}")))
}
