//! Error types shared across the crate

use thiserror::Error;

/// Errors raised synchronously when a timer cannot be started
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    #[error("invalid timer config: {0}")]
    InvalidConfig(String),
}

impl TimerError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

/// Failures reported by sound or notification collaborators.
///
/// The engine logs these and carries on; they never change timer state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EffectError {
    #[error("sound playback failed: {0}")]
    Sound(String),

    #[error("notification failed: {0}")]
    Notification(String),
}

/// Errors surfaced by the application state that backs the HTTP API
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Timer(#[from] TimerError),

    #[error("failed to lock session state: {0}")]
    Lock(String),
}
