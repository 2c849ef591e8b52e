mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Loads configuration from `CONFIG_PATH` (or `config.yaml` when present),
/// then reads the API key from the environment.
///
/// An explicitly set `CONFIG_PATH` must exist; the default file is optional.
pub async fn load() -> Result<Config> {
    let mut config = match env::var("CONFIG_PATH") {
        Ok(path) => load_from(&path).await?,
        Err(_) if Path::new("config.yaml").exists() => load_from("config.yaml").await?,
        Err(_) => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    config.gemini.api_key = env::var(API_KEY_ENV).unwrap_or_default();

    Ok(config)
}

pub async fn load_from(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    // An empty file deserializes to `null`, which serde_yaml rejects for a struct.
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_yaml::from_str(config_str)?;
    if config.gemini.model.trim().is_empty() {
        return Err(Error::config("gemini.model must not be empty"));
    }

    Ok(config)
}
