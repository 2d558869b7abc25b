//! Shared application state for request handlers.

use std::sync::Arc;

use crate::auth::ApiKey;
use crate::config::AppConfig;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Immutable after startup: the configuration and the API key resolved from
/// the environment or config file.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub api_key: Arc<ApiKey>,
}

impl AppState {
    /// Creates application state, resolving the API key from the environment.
    pub fn new(config: AppConfig) -> Self {
        let api_key = ApiKey::resolve(&config.auth);
        Self::with_api_key(config, api_key)
    }

    pub fn with_api_key(config: AppConfig, api_key: ApiKey) -> Self {
        Self {
            config: Arc::new(config),
            api_key: Arc::new(api_key),
        }
    }
}
