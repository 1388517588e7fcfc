//! # Evergreen Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the cache store, remote sources,
//!   and the integrations gateway
//! - The calendar merge/dedup projection
//! - The sync coordinator and its cancellation policy
//! - The session status service
//!
//! ## Architecture Principles
//! - Only depends on `evergreen-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod calendar;
pub mod session;

// Re-export specific items to avoid ambiguity
pub use calendar::coordinator::{LoadOutcome, LoadUpdate, SyncCoordinator, UpdateOrigin};
pub use calendar::merge::{merge_window, MergeOutcome};
pub use calendar::ports::{
    CalendarEventSource, CalendarViewSink, IntegrationsGateway, LocalCacheStore, SessionSource,
};
pub use calendar::sync_session::SyncSession;
pub use session::SessionService;
