//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    engine::TimerConfig,
    error::TimerError,
    state::SessionStatus,
};

/// Body of POST /session. Fields are optional so that a missing value is
/// reported as an invalid config rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSessionRequest {
    pub round_count: Option<i64>,
    pub round_duration_seconds: Option<i64>,
    pub rest_duration_seconds: Option<i64>,
}

impl TryFrom<StartSessionRequest> for TimerConfig {
    type Error = TimerError;

    fn try_from(request: StartSessionRequest) -> Result<Self, Self::Error> {
        TimerConfig::from_optional(
            request.round_count,
            request.round_duration_seconds,
            request.rest_duration_seconds,
        )
    }
}

/// API response structure for session endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub session: Option<SessionStatus>,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, session: Option<SessionStatus>) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            session,
        }
    }

    pub fn running(message: String, session: SessionStatus) -> Self {
        Self::new("running".to_string(), message, Some(session))
    }

    pub fn stopped(message: String, session: Option<SessionStatus>) -> Self {
        Self::new("stopped".to_string(), message, session)
    }

    pub fn error(message: String) -> Self {
        Self::new("error".to_string(), message, None)
    }
}

/// Status response with session and server information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub session: Option<SessionStatus>,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
