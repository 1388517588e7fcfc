//! Backend REST API adapters
//!
//! Thin adapters that implement the core port traits against the practice
//! backend. All endpoints speak camelCase JSON; status-code classification
//! into the domain error taxonomy lives in [`client`].

mod calendar;
mod client;
mod integrations;
mod sessions;

pub use calendar::ApiCalendarSource;
pub use client::ApiClient;
pub use integrations::ApiIntegrationsGateway;
pub use sessions::ApiSessionSource;
