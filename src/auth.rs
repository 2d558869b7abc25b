//! API key authentication for the chat endpoint.
//!
//! The expected key is resolved once at startup from `PFM_API_KEY`, then the
//! `[auth]` config section, then a built-in development key. Requests present
//! it as `Authorization: Bearer <key>` and it is compared by exact equality.

use std::fmt;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};

use crate::config::{AuthConfig, API_KEY_ENV, DEFAULT_DEV_API_KEY};
use crate::error::AppError;
use crate::state::AppState;

/// Where the active API key came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeySource {
    Environment,
    ConfigFile,
    DevelopmentDefault,
}

impl fmt::Display for ApiKeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiKeySource::Environment => write!(f, "environment ({})", API_KEY_ENV),
            ApiKeySource::ConfigFile => write!(f, "config file"),
            ApiKeySource::DevelopmentDefault => write!(f, "built-in development default"),
        }
    }
}

/// The API key callers must present.
#[derive(Clone)]
pub struct ApiKey {
    value: String,
    source: ApiKeySource,
}

// Never print the key itself.
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey")
            .field("value", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

impl ApiKey {
    /// Resolve the key from the process environment and config.
    pub fn resolve(config: &AuthConfig) -> Self {
        Self::resolve_from(std::env::var(API_KEY_ENV).ok(), config)
    }

    /// Resolve from an explicit environment value. Blank values count as unset.
    pub fn resolve_from(env_value: Option<String>, config: &AuthConfig) -> Self {
        if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
            return Self {
                value,
                source: ApiKeySource::Environment,
            };
        }

        match &config.api_key {
            Some(value) => Self {
                value: value.clone(),
                source: ApiKeySource::ConfigFile,
            },
            None => Self {
                value: DEFAULT_DEV_API_KEY.to_string(),
                source: ApiKeySource::DevelopmentDefault,
            },
        }
    }

    pub fn source(&self) -> ApiKeySource {
        self.source
    }

    pub fn is_development_default(&self) -> bool {
        self.source == ApiKeySource::DevelopmentDefault
    }

    /// Check a presented bearer token.
    pub fn verify(&self, presented: Option<&str>) -> Result<(), AppError> {
        match presented {
            None => Err(AppError::MissingApiKey),
            Some(token) if token == self.value => Ok(()),
            Some(_) => Err(AppError::InvalidApiKey),
        }
    }
}

/// Middleware rejecting requests without the configured bearer token.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let bearer = request.headers().typed_get::<Authorization<Bearer>>();

    if let Err(err) = state.api_key.verify(bearer.as_ref().map(|auth| auth.token())) {
        tracing::warn!(reason = %err, "Rejected request with bad credentials");
        return Err(err);
    }

    Ok(next.run(request).await)
}
