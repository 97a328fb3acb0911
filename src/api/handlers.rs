//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};

use crate::{
    engine::TimerConfig,
    error::{SessionError, TimerError},
    state::AppState,
};
use super::responses::{ApiResponse, HealthResponse, StartSessionRequest, StatusResponse};

type HandlerResult = Result<Json<ApiResponse>, (StatusCode, Json<ApiResponse>)>;

fn failure(status: StatusCode, message: String) -> (StatusCode, Json<ApiResponse>) {
    (status, Json(ApiResponse::error(message)))
}

/// Handle POST /session - Start a training session
pub async fn start_session_handler(
    State(state): State<Arc<AppState>>,
    request: Result<Json<StartSessionRequest>, JsonRejection>,
) -> HandlerResult {
    // Wrongly typed fields are an invalid config like missing ones
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => {
            let e = TimerError::InvalidConfig(rejection.body_text());
            warn!("Rejected session request: {}", e);
            return Err(failure(StatusCode::BAD_REQUEST, e.to_string()));
        }
    };

    let config = match TimerConfig::try_from(request) {
        Ok(config) => config,
        Err(e) => {
            warn!("Rejected session request: {}", e);
            return Err(failure(StatusCode::BAD_REQUEST, e.to_string()));
        }
    };

    match state.start_session(config) {
        Ok(session) => {
            info!("Session endpoint called - session started");
            Ok(Json(ApiResponse::running("Session started".to_string(), session)))
        }
        Err(SessionError::Timer(e)) => {
            warn!("Rejected session config: {}", e);
            Err(failure(StatusCode::BAD_REQUEST, e.to_string()))
        }
        Err(e) => {
            error!("Failed to start session: {}", e);
            Err(failure(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

/// Handle POST /session/stop - Stop the running session, if any
pub async fn stop_session_handler(State(state): State<Arc<AppState>>) -> HandlerResult {
    let was_running = match state.stop_session() {
        Ok(was_running) => was_running,
        Err(e) => {
            error!("Failed to stop session: {}", e);
            return Err(failure(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };

    let message = if was_running {
        "Session stopped"
    } else {
        "No session running"
    };
    info!("Stop endpoint called - {}", message.to_lowercase());

    // The status is read back after the stop so clients see the final snapshot
    let session = state.session_status().ok().flatten();
    Ok(Json(ApiResponse::stopped(message.to_string(), session)))
}

/// Handle GET /status - Return current session status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let session = match state.session_status() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to get session status: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        session,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
