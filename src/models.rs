//! Request and response bodies for the JSON API.

use serde::{Deserialize, Serialize};

/// Team mode assumed when the client does not send one
pub const DEFAULT_TEAM_MODE: &str = "coordinate";

/// Body of `POST /chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Accepted for client compatibility. Does not affect advice selection.
    #[serde(default)]
    pub team_mode: Option<String>,
}

impl ChatRequest {
    pub fn team_mode(&self) -> &str {
        self.team_mode.as_deref().unwrap_or(DEFAULT_TEAM_MODE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub team_used: String,
    pub status: String,
}

impl ChatResponse {
    pub fn success(response: impl Into<String>, team_used: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            team_used: team_used.into(),
            status: "success".to_string(),
        }
    }
}

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: String,
    pub status: &'static str,
    pub auth: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub platform: String,
}

#[derive(Debug, Serialize)]
pub struct PublicStatus {
    pub status: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct PlaygroundStatus {
    pub playground: &'static str,
    pub teams: bool,
}

/// An agent advertised by the playground listing.
#[derive(Debug, Clone, Serialize)]
pub struct AgentDescriptor {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
}

/// The agents offered by this service.
pub const AGENTS: [AgentDescriptor; 1] = [AgentDescriptor {
    name: "PFM Advisor",
    kind: "agent",
    description: "Financial planning specialist",
}];
