//! # Evergreen Infra
//!
//! Infrastructure adapters for the Evergreen core:
//! - Backend REST API client and port adapters
//! - In-memory window-keyed calendar cache
//! - Configuration loading
//! - External-error conversions
//!
//! All adapters implement the port traits defined in `evergreen-core`; no
//! business logic lives here.

use std::sync::Arc;

use evergreen_core::SyncCoordinator;
use evergreen_domain::{Config, Result};

pub mod api;
pub mod cache;
pub mod config;
pub mod errors;
pub mod http;

pub use api::{ApiCalendarSource, ApiClient, ApiIntegrationsGateway, ApiSessionSource};
pub use cache::InMemoryCacheStore;
pub use errors::InfraError;
pub use http::HttpClient;

/// Wire a sync coordinator against the backend API and an in-memory cache.
pub fn build_sync_coordinator(config: &Config) -> Result<SyncCoordinator> {
    let client = ApiClient::new(&config.api)?;
    Ok(SyncCoordinator::new(
        Arc::new(InMemoryCacheStore::new()),
        Arc::new(ApiSessionSource::new(client.clone())),
        Arc::new(ApiCalendarSource::new(client.clone())),
        Arc::new(ApiIntegrationsGateway::new(client)),
        config.sync.clone(),
    ))
}
