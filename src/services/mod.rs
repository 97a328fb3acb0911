//! Effect collaborator implementations
//!
//! Sound players and notifiers used by the binary, plus helpers for the
//! external programs they run.

pub mod notifier;
pub mod sound;
pub mod system;

// Re-export main types
pub use notifier::{DesktopNotifier, LogNotifier, NOTIFY_PROGRAM};
pub use sound::{CommandSoundPlayer, TerminalBell, DEFAULT_SOUND_COMMAND};
pub use system::{check_program_available, run_program, spawn_program};
