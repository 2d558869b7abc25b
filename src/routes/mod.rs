//! HTTP route handlers for the JSON API.
//!
//! Routes are grouped by caching policy. Advice and liveness responses are
//! never cached; the descriptive endpoints get a short public max-age.
//!
//! Only `/chat` requires an API key. Request tracing wraps every route via
//! middleware that generates a unique request ID per request.

pub mod chat;
pub mod health;
pub mod home;
pub mod playground;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::auth::require_api_key;
use crate::config::{CACHE_CONTROL_INFO, CACHE_CONTROL_NO_STORE};
use crate::middleware::{cors_layer, request_id_layer};
use crate::state::AppState;

/// Creates the Axum router with all routes, cache headers, auth and CORS.
pub fn create_router(state: AppState) -> Router {
    // Chat - authenticated, never cached
    let chat_routes = Router::new()
        .route("/chat", post(chat::respond))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_api_key))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    // Liveness and status - always fresh for probes
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/public/status", get(health::public_status))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    // Service info and playground discovery - only change on redeploy
    let info_routes = Router::new()
        .route("/", get(home::index))
        .route("/v1/playground/status", get(playground::status))
        .route("/v1/playground/agents", get(playground::agents))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_INFO),
        ));

    let cors = cors_layer(&state.config.cors);

    Router::new()
        .merge(chat_routes)
        .merge(health_routes)
        .merge(info_routes)
        .with_state(state)
        .layer(cors)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

#[cfg(test)]
mod tests {
    use axum::extract::State;

    use super::*;
    use crate::auth::ApiKey;
    use crate::config::AppConfig;

    fn test_state() -> AppState {
        let config = AppConfig::from_toml("[http]\nhost = \"127.0.0.1\"\nport = 0\n").unwrap();
        let api_key = ApiKey::resolve_from(Some("test-key".into()), &config.auth);
        AppState::with_api_key(config, api_key)
    }

    #[tokio::test]
    async fn health_reports_healthy_on_default_platform() {
        let axum::Json(body) = health::health(State(test_state())).await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.platform, "vercel");
    }

    #[tokio::test]
    async fn public_status_is_online() {
        let axum::Json(body) = health::public_status(State(test_state())).await;
        assert_eq!(body.status, "online");
        assert!(body.message.contains("PFM Minimal API"));
    }

    #[tokio::test]
    async fn index_names_the_api() {
        let axum::Json(body) = home::index(State(test_state())).await;
        assert_eq!(body.message, "PFM Minimal API");
        assert_eq!(body.status, "online");
    }

    #[tokio::test]
    async fn playground_lists_single_agent() {
        let axum::Json(agents) = playground::agents().await;
        assert_eq!(agents.len(), 1);
        assert_eq!(agents[0].name, "PFM Advisor");

        let axum::Json(status) = playground::status().await;
        assert_eq!(status.playground, "available");
        assert!(status.teams);
    }

    #[tokio::test]
    async fn chat_handler_uses_configured_team_name() {
        let request = crate::models::ChatRequest {
            message: "Any debt tips?".to_string(),
            team_mode: None,
        };
        let axum::Json(body) = chat::respond(State(test_state()), Ok(axum::Json(request)))
            .await
            .unwrap();
        assert!(body.response.starts_with("**Debt Strategy:**"));
        assert_eq!(body.team_used, "PFM Team");
        assert_eq!(body.status, "success");
    }
}
