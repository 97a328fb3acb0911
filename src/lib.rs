//! Round Timer - a boxing round timer
//!
//! Counts down through an initial countdown, rounds and rest periods,
//! playing sound cues and presenting a notification for every round. The
//! state machine lives in [`engine`]; terminal and HTTP presentation layers
//! drive it through [`tasks::spawn_session`].

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use engine::{RoundTimer, TimerConfig};
pub use error::{EffectError, SessionError, TimerError};
pub use state::{AppState, Phase, TimerState};
pub use tasks::{spawn_session, SessionHandle};
pub use utils::signals::shutdown_signal;
