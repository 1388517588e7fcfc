//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Evergreen
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum EvergreenError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transient network failure, including timeouts. Retry is user-initiated
    /// (next explicit load), never scheduled automatically.
    #[error("Network error: {0}")]
    Network(String),

    /// OAuth token for the external calendar provider has expired. Surfaced
    /// distinctly so the caller can prompt reconnection.
    #[error("Authentication expired: {0}")]
    AuthExpired(String),

    /// External calendar provider is not connected. Informational: callers
    /// degrade to cache-only behaviour instead of failing.
    #[error("Provider not connected: {0}")]
    ProviderNotConnected(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Malformed upstream data (e.g. inverted time range). Reported, never
    /// fatal for a whole window load.
    #[error("Data quality error: {0}")]
    DataQuality(String),

    /// Routine result of a superseded load. Not reported to the user.
    #[error("Cancelled: {0}")]
    Cancelled(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl EvergreenError {
    /// Whether a failed refresh should keep the previously served cache
    /// rather than surfacing a hard failure.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Internal(_))
    }
}

/// Result type alias for Evergreen operations
pub type Result<T> = std::result::Result<T, EvergreenError>;
