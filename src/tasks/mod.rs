//! Background tasks module
//!
//! Tick scheduling and the task that drives a training session.

pub mod session_runner;
pub mod tick_scheduler;

// Re-export main types
pub use session_runner::{spawn_session, SessionHandle};
pub use tick_scheduler::{TokioScheduler, TICK_PERIOD};
