use anyhow::{Context, Result};
use gemini_relay::{config, server};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

/// JSON logs filtered by `RUST_LOG`, or by `server.logs.level` when it is unset.
fn init_logging(configured_level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            validate_log_level(configured_level)?;
            EnvFilter::try_new(configured_level)?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}

#[tokio::main]
async fn main() -> Result<()> {
    // No subscriber exists yet, so config errors go straight to stderr.
    let config = config::load()
        .await
        .context("Failed to load configuration")?;

    init_logging(&config.server.logs.level)?;

    info!(
        "Starting Gemini relay (model {}, log level {})",
        config.gemini.model, config.server.logs.level
    );

    if config.gemini.api_key.is_empty() {
        warn!(
            "{} not set; requests to Gemini will likely fail.",
            config::API_KEY_ENV
        );
    }

    server::run(config)
        .await
        .context("Server terminated with an error")
}
