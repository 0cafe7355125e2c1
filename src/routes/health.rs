//! Health check endpoint for container orchestration.
//!
//! A liveness probe only: it answers 200 whenever the process can serve HTTP
//! and does not inspect any dependency.

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::config::HEALTH_VERSION;
use crate::environment::environment_name;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// RFC 3339 UTC, millisecond precision
    pub timestamp: String,
    /// Configured environment name, unrecognized values included
    pub environment: String,
    pub version: &'static str,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        environment: environment_name(state.env.as_ref()),
        version: HEALTH_VERSION,
    })
}
