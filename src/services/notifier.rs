//! Round notification presenters

use tracing::{debug, info};

use crate::{engine::Notifier, error::EffectError};

use super::system::spawn_program;

/// Program used for desktop notifications
pub const NOTIFY_PROGRAM: &str = "notify-send";

/// Shared tag so each round notification replaces the previous one
const REPLACE_HINT: &str = "string:x-canonical-private-synchronous:round-timer";

/// Desktop notifications through `notify-send`
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    program: String,
}

impl DesktopNotifier {
    pub fn new() -> Self {
        Self {
            program: NOTIFY_PROGRAM.to_string(),
        }
    }

    fn present_args(text: &str) -> Vec<String> {
        vec![
            "--app-name=round-timer".to_string(),
            format!("--hint={}", REPLACE_HINT),
            text.to_string(),
        ]
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for DesktopNotifier {
    fn present(&self, text: &str) -> Result<(), EffectError> {
        debug!("Presenting desktop notification: {}", text);
        spawn_program(self.program.clone(), Self::present_args(text)).map_err(EffectError::Notification)
    }

    fn dismiss(&self) -> Result<(), EffectError> {
        // notify-send cannot close a notification; it expires on its own
        debug!("Desktop notification left to expire");
        Ok(())
    }
}

/// Writes notifications to the log instead of the desktop
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn present(&self, text: &str) -> Result<(), EffectError> {
        info!("Notification: {}", text);
        Ok(())
    }

    fn dismiss(&self) -> Result<(), EffectError> {
        debug!("Notification dismissed");
        Ok(())
    }
}
