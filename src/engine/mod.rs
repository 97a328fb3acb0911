//! Round timer engine
//!
//! A pure transition function decides what follows an expired phase; the
//! `RoundTimer` applies the resulting effects on injected collaborators and
//! keeps exactly one tick scheduled while it runs.

pub mod collaborators;
pub mod round_timer;
pub mod timer_config;
pub mod transition;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types
pub use collaborators::{Notifier, Scheduler, SoundKind, SoundPlayer};
pub use round_timer::RoundTimer;
pub use timer_config::TimerConfig;
pub use transition::{transition, Effect};
