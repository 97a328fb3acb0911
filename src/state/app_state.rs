//! Main application state for the HTTP presentation layer

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    engine::{Notifier, SoundPlayer, TimerConfig},
    error::SessionError,
    tasks::{spawn_session, SessionHandle},
    utils::Locale,
};

use super::TimerState;

/// What clients see of the current (or last) session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub config: TimerConfig,
    pub timer: TimerState,
    /// Set once every round is done; clients go back to configuration
    pub finished: bool,
    pub running: bool,
    pub started_at: DateTime<Utc>,
}

/// Application state shared by all HTTP handlers
pub struct AppState {
    /// At most one session at a time
    pub session: Arc<Mutex<Option<SessionHandle>>>,
    /// Collaborators handed to every new session
    pub sound: Arc<dyn SoundPlayer>,
    pub notifier: Arc<dyn Notifier>,
    pub locale: Locale,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("session", &self.session)
            .field("locale", &self.locale)
            .field("port", &self.port)
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(
        port: u16,
        host: String,
        sound: Arc<dyn SoundPlayer>,
        notifier: Arc<dyn Notifier>,
        locale: Locale,
    ) -> Self {
        Self {
            session: Arc::new(Mutex::new(None)),
            sound,
            notifier,
            locale,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        }
    }

    /// Start a session with `config`, replacing any session already running
    pub fn start_session(&self, config: TimerConfig) -> Result<SessionStatus, SessionError> {
        let mut session = self.session.lock()
            .map_err(|e| SessionError::Lock(e.to_string()))?;

        // Validation happens before the running session is touched
        let handle = spawn_session(config, Arc::clone(&self.sound), Arc::clone(&self.notifier), self.locale)?;

        if let Some(mut previous) = session.take() {
            if previous.is_running() {
                info!("Replacing running session");
            }
            previous.stop();
        }

        let status = status_of(&handle);
        *session = Some(handle);
        drop(session);

        self.record_action("start");
        info!(
            "Session started: {} rounds of {}s with {}s rest",
            config.round_count, config.round_duration_seconds, config.rest_duration_seconds
        );
        Ok(status)
    }

    /// Stop the current session. Returns whether one was still running.
    pub fn stop_session(&self) -> Result<bool, SessionError> {
        let mut session = self.session.lock()
            .map_err(|e| SessionError::Lock(e.to_string()))?;

        let was_running = match session.as_mut() {
            Some(handle) => {
                let running = handle.is_running() && !handle.is_finished();
                handle.stop();
                running
            }
            None => false,
        };
        drop(session);

        self.record_action("stop");
        if was_running {
            info!("Session stopped");
        }
        Ok(was_running)
    }

    /// Status of the current or most recent session
    pub fn session_status(&self) -> Result<Option<SessionStatus>, SessionError> {
        self.session.lock()
            .map(|session| session.as_ref().map(status_of))
            .map_err(|e| SessionError::Lock(e.to_string()))
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }
}

fn status_of(handle: &SessionHandle) -> SessionStatus {
    let timer = handle.snapshot();
    SessionStatus {
        config: handle.config(),
        timer,
        finished: timer.is_finished(),
        running: handle.is_running() && !timer.is_finished(),
        started_at: handle.started_at(),
    }
}
