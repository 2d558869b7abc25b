//! PFM Minimal: application entry point.
//!
//! Initializes tracing, loads configuration from a TOML file, resolves the
//! API key, builds the Axum router and runs the HTTP server until shutdown.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pfm_minimal::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use pfm_minimal::{create_router, http, AppState};

/// PFM Minimal: a financial advice API
#[derive(Parser, Debug)]
#[command(name = "pfm-minimal", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "pfm_minimal=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration first so the log format is known
    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(path = %args.config, "Loaded configuration");

    let state = AppState::new(config.clone());
    if state.api_key.is_development_default() {
        tracing::warn!(
            "No API key configured; using the built-in development key. Set PFM_API_KEY in production."
        );
    } else {
        tracing::info!(source = %state.api_key.source(), "API key configured");
    }

    tracing::info!(
        team = %config.branding.team_name,
        platform = %config.branding.platform,
        cors_origins = ?config.cors.allowed_origins,
        "Initialized application state"
    );

    let app = create_router(state);

    http::start_server(app, &config).await?;

    tracing::info!("Server stopped");
    Ok(())
}
