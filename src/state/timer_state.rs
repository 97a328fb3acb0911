//! Timer state snapshot and phases

use serde::{Deserialize, Serialize};

/// Seconds shown on the "get ready" countdown before the first round
pub const INITIAL_COUNTDOWN_SECONDS: u32 = 3;

/// Segment of the training sequence the timer is currently in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Initial,
    Round,
    Rest,
    Finished,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Finished)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Phase::Initial => "initial",
            Phase::Round => "round",
            Phase::Rest => "rest",
            Phase::Finished => "finished",
        };
        write!(f, "{label}")
    }
}

/// Snapshot of the timer handed to the presentation layer after every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    pub phase: Phase,
    pub remaining_seconds: u32,
    /// Rounds started so far, including the one in progress
    pub completed_rounds: u32,
}

impl TimerState {
    /// State right after `start`: the short countdown before round one
    pub fn initial() -> Self {
        Self {
            phase: Phase::Initial,
            remaining_seconds: INITIAL_COUNTDOWN_SECONDS,
            completed_rounds: 0,
        }
    }

    /// Terminal state once every round and its rest are done
    pub fn finished(completed_rounds: u32) -> Self {
        Self {
            phase: Phase::Finished,
            remaining_seconds: 0,
            completed_rounds,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_terminal()
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::initial()
    }
}
