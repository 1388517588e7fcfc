//! Port interfaces for calendar synchronization
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use evergreen_domain::{
    CacheEntry, ConnectionStatus, DateWindow, Result, Session, SessionStatus, SyncReport,
    SyncedCalendarEvent,
};

use super::coordinator::LoadUpdate;

/// Window-keyed store for the last-synced set of calendar events.
///
/// Reads are synchronous so a cached window can be served before any network
/// call suspends. Entries are replaced whole per key, never merged
/// field-by-field, which keeps writes last-write-wins without a cross-window
/// lock.
pub trait LocalCacheStore: Send + Sync {
    /// Read the cached entry for a window, if any.
    fn get(&self, window: &DateWindow) -> Option<CacheEntry>;

    /// Store an entry for a window. Returns `false` (and leaves the store
    /// untouched) when the entry's `fetched_at` is older than what is already
    /// stored, so a consumer never regresses to an older refresh.
    fn put(&self, window: &DateWindow, entry: CacheEntry) -> bool;
}

/// Remote accessor for the practice's own scheduled sessions.
#[async_trait]
pub trait SessionSource: Send + Sync {
    /// Fetch sessions scheduled within the window.
    async fn get_sessions(&self, window: &DateWindow) -> Result<Vec<Session>>;

    /// Apply a status transition with a single remote call, returning the
    /// updated session.
    async fn update_session_status(&self, id: &str, status: SessionStatus) -> Result<Session>;
}

/// Remote accessor for calendar events already synced into the backend from
/// the external provider.
#[async_trait]
pub trait CalendarEventSource: Send + Sync {
    /// Fetch synced events within the window.
    async fn get_events(&self, window: &DateWindow) -> Result<Vec<SyncedCalendarEvent>>;

    /// Ask the backend to re-sync the external provider for the window.
    async fn sync_calendar(&self, window: &DateWindow) -> Result<SyncReport>;
}

/// Connection state of the external calendar provider, reached only via the
/// backend OAuth relay.
#[async_trait]
pub trait IntegrationsGateway: Send + Sync {
    async fn connection_status(&self) -> Result<ConnectionStatus>;
}

/// Consumer-facing emission channel.
///
/// The coordinator holds no UI dependency; every result and status string
/// flows through this sink.
pub trait CalendarViewSink: Send + Sync {
    fn emit(&self, update: LoadUpdate);
}
