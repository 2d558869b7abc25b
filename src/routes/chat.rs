//! Advice chat endpoint.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::instrument;

use crate::advice::AdviceTopic;
use crate::error::AppError;
use crate::models::{ChatRequest, ChatResponse};
use crate::state::AppState;

/// Answer a message with canned advice for its topic.
///
/// Authentication is enforced by the route layer before this runs.
#[instrument(name = "chat::respond", skip_all)]
pub async fn respond(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;

    let topic = AdviceTopic::classify(&request.message);
    tracing::debug!(
        topic = topic.label(),
        team_mode = request.team_mode(),
        message_len = request.message.len(),
        "Selected advice"
    );

    Ok(Json(ChatResponse::success(
        topic.text(),
        state.config.branding.team_name.as_str(),
    )))
}
