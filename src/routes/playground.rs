//! Playground discovery endpoints used by agent UI clients.

use axum::Json;

use crate::models::{AgentDescriptor, PlaygroundStatus, AGENTS};

pub async fn status() -> Json<PlaygroundStatus> {
    Json(PlaygroundStatus {
        playground: "available",
        teams: true,
    })
}

pub async fn agents() -> Json<Vec<AgentDescriptor>> {
    Json(AGENTS.to_vec())
}
