//! Liveness and public status endpoints.
//!
//! Neither touches authentication, so load balancers and uptime monitors can
//! poll them without a key.

use axum::{extract::State, Json};

use crate::models::{HealthStatus, PublicStatus};
use crate::state::AppState;

/// Health check handler.
///
/// Always reports healthy; this only checks that the process can respond.
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        platform: state.config.branding.platform.clone(),
    })
}

pub async fn public_status(State(state): State<AppState>) -> Json<PublicStatus> {
    Json(PublicStatus {
        status: "online",
        message: format!("{} is running", state.config.branding.api_name),
    })
}
