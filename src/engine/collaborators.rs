//! Seams between the engine and the outside world

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::EffectError;

/// Sound cues the engine can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundKind {
    /// Bell rung when the last rest expires and the session ends
    RoundEnd,
    /// Cue played when a round ends and rest begins
    RestStart,
}

impl SoundKind {
    /// Asset file name for this cue
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundKind::RoundEnd => "roundEnd.mp3",
            SoundKind::RestStart => "rest.mp3",
        }
    }
}

impl std::fmt::Display for SoundKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoundKind::RoundEnd => write!(f, "round end"),
            SoundKind::RestStart => write!(f, "rest start"),
        }
    }
}

/// Plays sound cues. Implementations must not block on playback.
pub trait SoundPlayer: Send + Sync {
    fn play(&self, kind: SoundKind) -> Result<(), EffectError>;
}

/// Presents and dismisses the round notification
pub trait Notifier: Send + Sync {
    /// Show `text`, replacing any notification presented earlier
    fn present(&self, text: &str) -> Result<(), EffectError>;
    fn dismiss(&self) -> Result<(), EffectError>;
}

/// Single-shot tick source: each scheduled tick fires once, one second later
pub trait Scheduler: Send {
    type Handle: Send;

    fn schedule_tick(&mut self) -> Self::Handle;
    /// Cancel a tick. Cancelling a tick that already fired is a no-op.
    fn cancel_tick(&mut self, handle: Self::Handle);
}

impl<T: SoundPlayer + ?Sized> SoundPlayer for Arc<T> {
    fn play(&self, kind: SoundKind) -> Result<(), EffectError> {
        (**self).play(kind)
    }
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn present(&self, text: &str) -> Result<(), EffectError> {
        (**self).present(text)
    }

    fn dismiss(&self) -> Result<(), EffectError> {
        (**self).dismiss()
    }
}
