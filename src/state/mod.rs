//! State management module
//!
//! Timer snapshots published to presentation layers and the shared state
//! behind the HTTP API.

pub mod app_state;
pub mod timer_state;

// Re-export main types
pub use app_state::{AppState, SessionStatus};
pub use timer_state::{Phase, TimerState, INITIAL_COUNTDOWN_SECONDS};
