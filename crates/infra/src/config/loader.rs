//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the required variables are missing, falls back to a config file
//! 3. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `EVERGREEN_API_BASE_URL`: Backend base URL (required for env loading)
//! - `EVERGREEN_API_TIMEOUT_SECS`: Request timeout in seconds
//! - `EVERGREEN_API_AUTH_TOKEN`: Bearer token for backend calls
//! - `EVERGREEN_FRESHNESS_MINUTES`: Cache freshness window
//! - `EVERGREEN_WINDOW_PAD_DAYS`: Prefetch padding around requested windows

use std::path::{Path, PathBuf};

use evergreen_domain::constants::{
    DEFAULT_FRESHNESS_MINUTES, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_WINDOW_PAD_DAYS,
};
use evergreen_domain::{ApiConfig, Config, EvergreenError, Result, SyncConfig};

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `EvergreenError::Config` if configuration cannot be loaded from
/// either source, or a value is invalid.
pub fn load() -> Result<Config> {
    dotenvy::dotenv().ok();

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `EVERGREEN_API_BASE_URL` must be present; the remaining variables default
/// to the domain constants.
pub fn load_from_env() -> Result<Config> {
    let base_url = std::env::var("EVERGREEN_API_BASE_URL").map_err(|_| {
        EvergreenError::Config("Missing required environment variable: EVERGREEN_API_BASE_URL".into())
    })?;

    Ok(Config {
        api: ApiConfig {
            base_url,
            timeout_seconds: env_number("EVERGREEN_API_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
            auth_token: std::env::var("EVERGREEN_API_AUTH_TOKEN").ok(),
        },
        sync: SyncConfig {
            freshness_minutes: env_number("EVERGREEN_FRESHNESS_MINUTES", DEFAULT_FRESHNESS_MINUTES)?,
            window_pad_days: env_number("EVERGREEN_WINDOW_PAD_DAYS", DEFAULT_WINDOW_PAD_DAYS)?,
        },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the working directory for
/// `config.{json,toml}` and `evergreen.{json,toml}`. Format is detected by
/// extension.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(EvergreenError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            EvergreenError::Config("No config file found in the working directory".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| EvergreenError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| EvergreenError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| EvergreenError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(EvergreenError::Config(format!("Unsupported config format: {}", extension))),
    }
}

fn probe_config_paths() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    [
        cwd.join("config.json"),
        cwd.join("config.toml"),
        cwd.join("evergreen.json"),
        cwd.join("evergreen.toml"),
    ]
    .into_iter()
    .find(|path| path.exists())
}

fn env_number<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|e| EvergreenError::Config(format!("Invalid value for {key}: {e}"))),
        Err(_) => Ok(default),
    }
}
