//! Utility functions module
//!
//! Localized strings, terminal rendering and shutdown signal handling.

pub mod display;
pub mod locale;
pub mod signals;

// Re-export main items
pub use display::{describe_config, format_clock, progress_percent, render_state};
pub use locale::Locale;
pub use signals::shutdown_signal;
