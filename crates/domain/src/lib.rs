//! # Evergreen Domain
//!
//! Business domain types and models for Evergreen.
//!
//! This crate contains:
//! - Domain data types (Session, SyncedCalendarEvent, CalendarEvent, etc.)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other Evergreen crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::{ApiConfig, Config, SyncConfig};
pub use errors::{EvergreenError, Result};
pub use types::calendar::{
    CacheEntry, CalendarEvent, ConnectionStatus, DateWindow, EventOrigin, ExternalSource,
    SyncReport, SyncedCalendarEvent,
};
pub use types::session::{Session, SessionStatus};
