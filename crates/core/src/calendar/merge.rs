//! Merge/dedup projection over already-fetched calendar data.
//!
//! Pure function: no I/O, no hidden state. A synced external event linked to
//! a session in range is subsumed by that session's entry; everything else is
//! emitted standalone. Linking is by `linked_session_id` only - no fuzzy
//! time+client matching, so an independently created duplicate entry stays
//! visible rather than being silently fused.

use std::collections::{HashMap, HashSet};

use evergreen_domain::{CalendarEvent, EventOrigin, Session, SyncedCalendarEvent};
use tracing::warn;

/// Result of a merge pass.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    /// Unified entries ordered by start time.
    pub events: Vec<CalendarEvent>,
    /// Synced events excluded for an inverted time range. Reported, not
    /// fatal.
    pub dropped_invalid: usize,
}

/// Merge sessions and synced events for one window into a single
/// deduplicated, start-time-ordered sequence.
pub fn merge_window(sessions: &[Session], synced: &[SyncedCalendarEvent]) -> MergeOutcome {
    let session_ids: HashSet<&str> = sessions.iter().map(|s| s.id.as_str()).collect();

    let mut dropped_invalid = 0;
    // Title/location of a subsumed event enrich the session entry it links to.
    let mut subsumed: HashMap<&str, &SyncedCalendarEvent> = HashMap::new();
    let mut events = Vec::with_capacity(sessions.len() + synced.len());

    for event in synced {
        if !event.has_valid_range() {
            warn!(event_id = %event.id, "excluding calendar event with inverted time range");
            dropped_invalid += 1;
            continue;
        }

        match event.linked_session_id.as_deref() {
            Some(session_id) if session_ids.contains(session_id) => {
                subsumed.insert(session_id, event);
            }
            _ => events.push(CalendarEvent {
                id: event.id.clone(),
                title: event.title.clone(),
                start_time: event.start_time,
                end_time: event.end_time,
                location: event.location.clone(),
                origin: EventOrigin::ExternalSynced,
                linked_session_id: event.linked_session_id.clone(),
                linked_client_id: event.linked_client_id.clone(),
            }),
        }
    }

    // Every session is emitted, duplicates included: the merge only ever
    // drops subsumed synced events, never session data.
    for session in sessions {
        let linked = subsumed.get(session.id.as_str());
        events.push(CalendarEvent {
            id: session.id.clone(),
            title: linked.map_or_else(|| "Session".to_string(), |e| e.title.clone()),
            start_time: session.scheduled_at,
            end_time: session.ends_at(),
            location: linked.and_then(|e| e.location.clone()),
            origin: EventOrigin::InternalSession,
            linked_session_id: Some(session.id.clone()),
            linked_client_id: Some(session.client_id.clone()),
        });
    }

    events.sort_by_key(|e| e.start_time);

    MergeOutcome { events, dropped_invalid }
}
