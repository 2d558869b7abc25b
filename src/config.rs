//! Configuration loading and constants.
//!
//! Loads application configuration from TOML files and defines constants for
//! HTTP cache headers, API key resolution, logging and default paths.
//! `AppConfig` is the root configuration struct containing all settings.

use axum::http::HeaderValue;
use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// Advice and liveness responses are never cached. Descriptive endpoints whose
// content only changes on redeploy get a short public max-age.

/// Service info and playground descriptors - only change on redeploy
pub const HTTP_CACHE_INFO_MAX_AGE: u32 = 60;
pub const HTTP_CACHE_INFO_SWR: u32 = 30;

pub const CACHE_CONTROL_INFO: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}",
    HTTP_CACHE_INFO_MAX_AGE,
    HTTP_CACHE_INFO_SWR
);

/// Chat, health and status responses
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Authentication
// =============================================================================

/// Environment variable holding the API key for `/chat`
pub const API_KEY_ENV: &str = "PFM_API_KEY";

/// Development fallback key used when neither the environment nor the config
/// file provide one. Startup logs a warning when this is in effect.
pub const DEFAULT_DEV_API_KEY: &str = "pfm-dev-key";

// =============================================================================
// Branding Defaults
// =============================================================================

pub const DEFAULT_API_NAME: &str = "PFM Minimal API";
pub const DEFAULT_TEAM_NAME: &str = "PFM Team";
pub const DEFAULT_PLATFORM: &str = "vercel";

// =============================================================================
// Server Constants
// =============================================================================

/// Seconds to wait for in-flight requests after a shutdown signal
pub const GRACEFUL_SHUTDOWN_SECS: u64 = 30;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "pfm_minimal=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    /// Names and labels echoed in responses
    #[serde(default)]
    pub branding: BrandingConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub tls: TlsConfig,
}

/// How the server terminates TLS
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TlsMode {
    /// Plain HTTP, for development or behind a TLS-terminating proxy
    #[default]
    None,
    /// User-provided certificate and key files
    Manual,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TlsConfig {
    #[serde(default)]
    pub mode: TlsMode,
    /// PEM certificate chain (manual mode)
    pub cert_path: Option<String>,
    /// PEM private key (manual mode)
    pub key_path: Option<String>,
    /// Run a plain HTTP listener that redirects to HTTPS
    #[serde(default)]
    pub redirect_http: bool,
    #[serde(default = "TlsConfig::default_redirect_port")]
    pub redirect_port: u16,
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            mode: TlsMode::None,
            cert_path: None,
            key_path: None,
            redirect_http: false,
            redirect_port: Self::default_redirect_port(),
        }
    }
}

impl TlsConfig {
    fn default_redirect_port() -> u16 {
        80
    }
}

/// API key settings. `PFM_API_KEY` takes precedence over `api_key`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins. Empty allows any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BrandingConfig {
    /// Shown by `GET /`
    #[serde(default = "BrandingConfig::default_api_name")]
    pub api_name: String,
    /// Reported as `team_used` on every chat response
    #[serde(default = "BrandingConfig::default_team_name")]
    pub team_name: String,
    /// Reported by `GET /health`
    #[serde(default = "BrandingConfig::default_platform")]
    pub platform: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            api_name: Self::default_api_name(),
            team_name: Self::default_team_name(),
            platform: Self::default_platform(),
        }
    }
}

impl BrandingConfig {
    fn default_api_name() -> String {
        DEFAULT_API_NAME.to_string()
    }
    fn default_team_name() -> String {
        DEFAULT_TEAM_NAME.to_string()
    }
    fn default_platform() -> String {
        DEFAULT_PLATFORM.to_string()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let tls = &self.http.tls;
        if tls.mode == TlsMode::Manual && (tls.cert_path.is_none() || tls.key_path.is_none()) {
            return Err(ConfigError::Validation(
                "http.tls.mode = \"manual\" requires both cert_path and key_path".to_string(),
            ));
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(ConfigError::Validation(format!(
                "logging.format must be \"text\" or \"json\", got \"{}\"",
                self.logging.format
            )));
        }

        for origin in &self.cors.allowed_origins {
            let trimmed = origin.trim();
            if trimmed == "*" {
                return Err(ConfigError::Validation(
                    "cors.allowed_origins must not contain \"*\"; leave it empty to allow any origin"
                        .to_string(),
                ));
            }
            if trimmed.is_empty() || HeaderValue::from_str(trimmed).is_err() {
                return Err(ConfigError::Validation(format!(
                    "cors.allowed_origins contains an invalid origin: {:?}",
                    origin
                )));
            }
        }

        if let Some(key) = &self.auth.api_key {
            if key.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "auth.api_key must not be empty; remove it to fall back to PFM_API_KEY"
                        .to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r#"
        [http]
        host = "127.0.0.1"
        port = 8000
    "#;

    #[test]
    fn minimal_config_uses_defaults() {
        let config = AppConfig::from_toml(MINIMAL).unwrap();
        assert_eq!(config.http.port, 8000);
        assert_eq!(config.http.tls.mode, TlsMode::None);
        assert_eq!(config.http.tls.redirect_port, 80);
        assert!(config.auth.api_key.is_none());
        assert!(config.cors.allowed_origins.is_empty());
        assert_eq!(config.branding.team_name, "PFM Team");
        assert_eq!(config.branding.platform, "vercel");
        assert_eq!(config.branding.api_name, "PFM Minimal API");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn manual_tls_requires_cert_and_key() {
        let toml = r#"
            [http]
            host = "0.0.0.0"
            port = 443
            [http.tls]
            mode = "manual"
            cert_path = "/etc/pfm/cert.pem"
        "#;
        let err = AppConfig::from_toml(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let toml = format!("{MINIMAL}\n[logging]\nformat = \"xml\"\n");
        assert!(matches!(
            AppConfig::from_toml(&toml),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn rejects_blank_api_key() {
        let toml = format!("{MINIMAL}\n[auth]\napi_key = \"  \"\n");
        assert!(matches!(
            AppConfig::from_toml(&toml),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn rejects_invalid_cors_origin() {
        for origin in ["https://pfm.example\\u007f", "", "  ", "*"] {
            let toml = format!("{MINIMAL}\n[cors]\nallowed_origins = [\"{origin}\"]\n");
            assert!(
                matches!(AppConfig::from_toml(&toml), Err(ConfigError::Validation(_))),
                "origin {:?} accepted",
                origin
            );
        }
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{MINIMAL}\n[auth]\napi_key = \"from-file\"\n[cors]\nallowed_origins = [\"https://pfm.example\"]\n"
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.auth.api_key.as_deref(), Some("from-file"));
        assert_eq!(config.cors.allowed_origins, vec!["https://pfm.example"]);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        assert!(matches!(
            AppConfig::from_toml("[http\nport = 1"),
            Err(ConfigError::Parse(_))
        ));
    }
}
