//! Cache-first calendar loading with cancellation-safe background refresh.
//!
//! For each requested window the coordinator serves the cached entry
//! immediately (even when stale), then refreshes from the remote sources when
//! the external provider is connected and the cache is stale or missing. A
//! failed refresh keeps the served cache; a superseded load discards its
//! result without emitting or writing anything.

use std::sync::Arc;

use chrono::Utc;
use evergreen_domain::{
    CacheEntry, CalendarEvent, DateWindow, EvergreenError, Result, Session, SyncConfig,
    SyncedCalendarEvent,
};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use super::merge::merge_window;
use super::ports::{
    CalendarEventSource, CalendarViewSink, IntegrationsGateway, LocalCacheStore, SessionSource,
};
use super::sync_session::SyncSession;

/// Status strings accompanying every terminal emission. Part of the consumer
/// contract, not cosmetic.
pub mod status {
    pub const SYNCING: &str = "Syncing...";
    pub const NOT_CONNECTED: &str = "Not connected";
    pub const SYNC_ERROR_USING_CACHED: &str = "Sync error (using cached)";
    pub const TOKEN_EXPIRED: &str = "Token expired - reconnect";
    pub const NO_EVENTS: &str = "No events found";
    pub const SYNC_FAILED: &str = "Sync failed";
}

/// One emission from the coordinator to its consuming view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadUpdate {
    pub window: DateWindow,
    pub events: Vec<CalendarEvent>,
    pub status: String,
    pub origin: UpdateOrigin,
}

/// Which stage of a load produced an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UpdateOrigin {
    /// Initial synchronous cache emission.
    Cache,
    /// Refresh-in-progress placeholder.
    Progress,
    /// Successful refresh, merged and cached.
    Merged,
    /// Refresh failed; previously served cache retained.
    StaleKept,
    /// Provider not connected; cache served with no refresh attempt.
    CacheOnly,
    /// Refresh failed with no cache to fall back on.
    Failed,
}

/// Terminal state of one `load` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Cache was fresh; no refresh attempted.
    Fresh,
    /// Provider not connected; served cache (possibly empty) only.
    CacheOnly,
    /// Refresh succeeded and the cache was replaced.
    Merged,
    /// Refresh failed; the cached window stayed in place.
    StaleKept,
    /// A newer load superseded this one. Routine, not an error.
    Cancelled,
}

/// Reconciles cached events, remote-synced calendar events, and scheduled
/// sessions into a single deduplicated view per window.
///
/// One coordinator per consuming view: starting a new load invalidates any
/// in-flight load for that view via the generation counter. Coordinators for
/// different views run independently and share only the cache store, which is
/// last-write-wins per window key.
pub struct SyncCoordinator {
    cache: Arc<dyn LocalCacheStore>,
    sessions: Arc<dyn SessionSource>,
    calendar: Arc<dyn CalendarEventSource>,
    integrations: Arc<dyn IntegrationsGateway>,
    config: SyncConfig,
    view_session: SyncSession,
}

impl SyncCoordinator {
    pub fn new(
        cache: Arc<dyn LocalCacheStore>,
        sessions: Arc<dyn SessionSource>,
        calendar: Arc<dyn CalendarEventSource>,
        integrations: Arc<dyn IntegrationsGateway>,
        config: SyncConfig,
    ) -> Self {
        Self { cache, sessions, calendar, integrations, config, view_session: SyncSession::new() }
    }

    /// Invalidate any in-flight load (the consuming view disappeared).
    pub fn cancel(&self) {
        self.view_session.cancel();
    }

    /// Load one window: cache first, then background refresh.
    ///
    /// Emits through `sink` on every terminal transition except
    /// `Cancelled`. Errors propagate only when there is no cache to serve;
    /// with a cache present every failure degrades to `StaleKept`.
    #[instrument(skip(self, sink), fields(start = %window.start, end = %window.end))]
    pub async fn load(
        &self,
        window: DateWindow,
        sink: &dyn CalendarViewSink,
    ) -> Result<LoadOutcome> {
        let generation = self.view_session.begin();
        let padded = window.padded(self.config.window_pad_days);

        // Cache emission is synchronous: it happens before the first await so
        // the consumer never blocks on the network for an already-known
        // window.
        let cached = self.cache.get(&padded);
        if let Some(entry) = &cached {
            let projection = merge_window(&[], &entry.events);
            sink.emit(LoadUpdate {
                window,
                events: projection.events,
                status: format!("{} events (cached)", entry.events.len()),
                origin: UpdateOrigin::Cache,
            });
        }

        let connection = match self.integrations.connection_status().await {
            Ok(connection) => connection,
            Err(err) => {
                if !self.view_session.is_current(generation) {
                    return Ok(LoadOutcome::Cancelled);
                }
                return self.handle_refresh_failure(window, cached.as_ref(), err, sink);
            }
        };
        if !self.view_session.is_current(generation) {
            return Ok(LoadOutcome::Cancelled);
        }

        if !connection.connected {
            debug!("provider not connected; serving cache only");
            sink.emit(LoadUpdate {
                window,
                events: cached_projection(cached.as_ref()),
                status: status::NOT_CONNECTED.to_string(),
                origin: UpdateOrigin::CacheOnly,
            });
            return Ok(LoadOutcome::CacheOnly);
        }

        if let Some(entry) = &cached {
            if !entry.is_stale(Utc::now(), self.config.freshness_window()) {
                debug!("cache fresh; skipping refresh");
                return Ok(LoadOutcome::Fresh);
            }
        }

        sink.emit(LoadUpdate {
            window,
            events: cached_projection(cached.as_ref()),
            status: status::SYNCING.to_string(),
            origin: UpdateOrigin::Progress,
        });

        // Cooperative cancellation: checked before starting the fetch and
        // again before applying its result.
        if !self.view_session.is_current(generation) {
            return Ok(LoadOutcome::Cancelled);
        }

        match self.refresh(&padded, connection.sync_enabled).await {
            Ok((sessions, events)) => {
                if !self.view_session.is_current(generation) {
                    debug!("discarding superseded refresh result");
                    return Ok(LoadOutcome::Cancelled);
                }

                let outcome = merge_window(&sessions, &events);
                if outcome.dropped_invalid > 0 {
                    warn!(
                        dropped = outcome.dropped_invalid,
                        "excluded malformed events from merged window"
                    );
                }

                if !self.cache.put(&padded, CacheEntry::new(events, Utc::now())) {
                    debug!("cache store rejected non-monotonic refresh");
                }

                let text = if outcome.events.is_empty() {
                    status::NO_EVENTS.to_string()
                } else {
                    format!("{} events", outcome.events.len())
                };
                sink.emit(LoadUpdate {
                    window,
                    events: outcome.events,
                    status: text,
                    origin: UpdateOrigin::Merged,
                });
                Ok(LoadOutcome::Merged)
            }
            Err(err) => {
                if !self.view_session.is_current(generation) {
                    return Ok(LoadOutcome::Cancelled);
                }
                self.handle_refresh_failure(window, cached.as_ref(), err, sink)
            }
        }
    }

    /// Fetch sessions and synced events for the padded window, optionally
    /// asking the backend to relay a provider sync first.
    async fn refresh(
        &self,
        padded: &DateWindow,
        sync_enabled: bool,
    ) -> Result<(Vec<Session>, Vec<SyncedCalendarEvent>)> {
        if sync_enabled {
            let report = self.calendar.sync_calendar(padded).await?;
            debug!(count = report.count, "provider sync relayed through backend");
        }

        tokio::try_join!(self.sessions.get_sessions(padded), self.calendar.get_events(padded))
    }

    fn handle_refresh_failure(
        &self,
        window: DateWindow,
        cached: Option<&CacheEntry>,
        err: EvergreenError,
        sink: &dyn CalendarViewSink,
    ) -> Result<LoadOutcome> {
        if matches!(err, EvergreenError::ProviderNotConnected(_)) {
            debug!("backend reports provider not connected; serving cache only");
            sink.emit(LoadUpdate {
                window,
                events: cached_projection(cached),
                status: status::NOT_CONNECTED.to_string(),
                origin: UpdateOrigin::CacheOnly,
            });
            return Ok(LoadOutcome::CacheOnly);
        }

        let text = match err {
            EvergreenError::AuthExpired(_) => status::TOKEN_EXPIRED,
            _ => status::SYNC_ERROR_USING_CACHED,
        };

        if let Some(entry) = cached {
            warn!(error = %err, "refresh failed; keeping cached window");
            let projection = merge_window(&[], &entry.events);
            sink.emit(LoadUpdate {
                window,
                events: projection.events,
                status: text.to_string(),
                origin: UpdateOrigin::StaleKept,
            });
            return Ok(LoadOutcome::StaleKept);
        }

        // First-ever load with no cache: the only case that surfaces a hard
        // no-data state.
        warn!(error = %err, "refresh failed with no cache to serve");
        let hard_text = match err {
            EvergreenError::AuthExpired(_) => status::TOKEN_EXPIRED,
            _ => status::SYNC_FAILED,
        };
        sink.emit(LoadUpdate {
            window,
            events: Vec::new(),
            status: hard_text.to_string(),
            origin: UpdateOrigin::Failed,
        });
        Err(err)
    }
}

fn cached_projection(cached: Option<&CacheEntry>) -> Vec<CalendarEvent> {
    cached.map(|entry| merge_window(&[], &entry.events).events).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    // The serialized shape is consumed by the UI bridge; keys are camelCase
    // and origins serialize as plain strings.
    #[test]
    fn update_serializes_camel_case_for_the_view() {
        let start = Utc.with_ymd_and_hms(2025, 11, 10, 9, 0, 0).single().unwrap();
        let update = LoadUpdate {
            window: DateWindow::new(start, start + chrono::Duration::hours(1)),
            events: Vec::new(),
            status: status::SYNCING.to_string(),
            origin: UpdateOrigin::Progress,
        };

        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["origin"], "progress");
        assert_eq!(value["status"], "Syncing...");
        assert!(value["window"]["start"].is_string());
        assert_eq!(value["events"], serde_json::json!([]));
    }

    #[test]
    fn stale_kept_origin_serializes_camel_case() {
        let value = serde_json::to_value(UpdateOrigin::StaleKept).unwrap();
        assert_eq!(value, "staleKept");
    }
}
