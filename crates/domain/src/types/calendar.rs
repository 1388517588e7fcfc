//! Calendar types: windows, synced events, the unified projection, and cache
//! entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inclusive date range over which calendar data is requested and cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Expand the window by `days` on each side. Used to pre-warm adjacent
    /// month/week navigation.
    pub fn padded(&self, days: u32) -> Self {
        let pad = chrono::Duration::days(i64::from(days));
        Self { start: self.start - pad, end: self.end + pad }
    }

    /// Stable key for per-window cache storage.
    pub fn cache_key(&self) -> String {
        format!("{}..{}", self.start.timestamp(), self.end.timestamp())
    }
}

/// Origin of a synced calendar event as recorded by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExternalSource {
    Google,
    SimplePractice,
    Internal,
}

/// Third-party calendar event already synced into the backend.
///
/// Read-only to the client: produced by a prior backend sync of the external
/// provider, re-displayed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncedCalendarEvent {
    pub id: String,
    pub external_id: String,
    pub source: ExternalSource,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: Option<String>,
    pub linked_session_id: Option<String>,
    pub linked_client_id: Option<String>,
}

impl SyncedCalendarEvent {
    /// A well-formed event never ends before it starts. Violations are
    /// data-quality errors and are excluded from merged output.
    pub fn has_valid_range(&self) -> bool {
        self.end_time >= self.start_time
    }
}

/// Where a unified calendar entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventOrigin {
    InternalSession,
    ExternalSynced,
}

/// Unified calendar view entity.
///
/// Constructed transiently by the merge step on every read; never persisted.
/// When `origin` is `InternalSession`, `linked_session_id` is always set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: Option<String>,
    pub origin: EventOrigin,
    pub linked_session_id: Option<String>,
    pub linked_client_id: Option<String>,
}

/// Cached synced events for one window, with the fetch timestamp used to
/// compute staleness. Replaced whole on every successful refresh, never
/// partially updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntry {
    pub events: Vec<SyncedCalendarEvent>,
    pub fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(events: Vec<SyncedCalendarEvent>, fetched_at: DateTime<Utc>) -> Self {
        Self { events, fetched_at }
    }

    /// Stale entries are still servable; they trigger a background refresh on
    /// the next load.
    pub fn is_stale(&self, now: DateTime<Utc>, freshness_window: chrono::Duration) -> bool {
        now - self.fetched_at > freshness_window
    }
}

/// Result of a backend-triggered provider sync.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    pub count: usize,
    pub message: String,
}

/// External calendar provider connection state, exposed by the integrations
/// collaborator. The client never holds provider credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionStatus {
    pub connected: bool,
    pub sync_enabled: bool,
    pub email: Option<String>,
    pub last_sync: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, 10, h, 0, 0).single().unwrap()
    }

    #[test]
    fn padded_window_extends_both_sides() {
        let window = DateWindow::new(at(0), at(12));
        let padded = window.padded(7);
        assert_eq!(padded.start, at(0) - chrono::Duration::days(7));
        assert_eq!(padded.end, at(12) + chrono::Duration::days(7));
    }

    #[test]
    fn cache_key_is_stable_per_window() {
        let a = DateWindow::new(at(0), at(12));
        let b = DateWindow::new(at(0), at(12));
        assert_eq!(a.cache_key(), b.cache_key());
        assert_ne!(a.cache_key(), a.padded(1).cache_key());
    }

    #[test]
    fn entry_staleness_uses_freshness_window() {
        let entry = CacheEntry::new(vec![], at(0));
        let fifteen = chrono::Duration::minutes(15);
        assert!(!entry.is_stale(at(0) + chrono::Duration::minutes(10), fifteen));
        assert!(entry.is_stale(at(0) + chrono::Duration::minutes(20), fifteen));
    }

    #[test]
    fn inverted_range_is_invalid() {
        let event = SyncedCalendarEvent {
            id: "e1".into(),
            external_id: "g-1".into(),
            source: ExternalSource::Google,
            title: "Intake".into(),
            start_time: at(10),
            end_time: at(9),
            location: None,
            linked_session_id: None,
            linked_client_id: None,
        };
        assert!(!event.has_valid_range());
    }

    #[test]
    fn synced_event_round_trips_camel_case() {
        let json = r#"{
            "id": "e1",
            "externalId": "g-1",
            "source": "simplePractice",
            "title": "Intake",
            "startTime": "2025-11-10T09:00:00Z",
            "endTime": "2025-11-10T10:00:00Z",
            "location": null,
            "linkedSessionId": "s1",
            "linkedClientId": null
        }"#;
        let event: SyncedCalendarEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.source, ExternalSource::SimplePractice);
        assert_eq!(event.linked_session_id.as_deref(), Some("s1"));
    }
}
