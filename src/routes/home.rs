//! Service info endpoint.

use axum::{extract::State, Json};

use crate::models::ServiceInfo;
use crate::state::AppState;

/// Names the API and how to authenticate against it.
pub async fn index(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: state.config.branding.api_name.clone(),
        status: "online",
        auth: "Bearer token required for /chat",
    })
}
