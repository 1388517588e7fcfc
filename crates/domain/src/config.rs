//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FRESHNESS_MINUTES, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_WINDOW_PAD_DAYS,
};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub sync: SyncConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    #[serde(skip_serializing)]
    pub auth_token: Option<String>,
}

/// Calendar sync configuration
///
/// Freshness and padding were hardcoded in the original client; here they are
/// configuration with conservative defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    pub freshness_minutes: u32,
    pub window_pad_days: u32,
}

impl SyncConfig {
    /// Freshness window as a chrono duration.
    pub fn freshness_window(&self) -> chrono::Duration {
        chrono::Duration::minutes(i64::from(self.freshness_minutes))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:3000".to_string(),
                timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECS,
                auth_token: None,
            },
            sync: SyncConfig::default(),
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            freshness_minutes: DEFAULT_FRESHNESS_MINUTES,
            window_pad_days: DEFAULT_WINDOW_PAD_DAYS,
        }
    }
}
