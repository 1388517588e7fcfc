//! Session types owned by the practice backend
//!
//! Sessions are read-only to the client core: mutations go through the
//! remote session source and the core treats a session as immutable within a
//! sync cycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled therapy session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub client_id: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: u32,
    pub status: SessionStatus,
    pub notes: Option<String>,
}

impl Session {
    /// End instant derived from the scheduled start and duration.
    pub fn ends_at(&self) -> DateTime<Utc> {
        self.scheduled_at + chrono::Duration::minutes(i64::from(self.duration_minutes))
    }
}

/// Session lifecycle status.
///
/// Transitions are explicit user actions only: `scheduled` moves to any of
/// the outcome states, and `cancelled`/`noShow` move back to `scheduled` via
/// reschedule. Nothing transitions automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionStatus {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

impl SessionStatus {
    /// Whether the status may move to `next` under the transition table.
    pub fn can_transition_to(self, next: SessionStatus) -> bool {
        match (self, next) {
            (Self::Scheduled, Self::Completed | Self::Cancelled | Self::NoShow) => true,
            (Self::Cancelled | Self::NoShow, Self::Scheduled) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduled_reaches_all_outcomes() {
        assert!(SessionStatus::Scheduled.can_transition_to(SessionStatus::Completed));
        assert!(SessionStatus::Scheduled.can_transition_to(SessionStatus::Cancelled));
        assert!(SessionStatus::Scheduled.can_transition_to(SessionStatus::NoShow));
    }

    #[test]
    fn reschedule_only_from_cancelled_or_no_show() {
        assert!(SessionStatus::Cancelled.can_transition_to(SessionStatus::Scheduled));
        assert!(SessionStatus::NoShow.can_transition_to(SessionStatus::Scheduled));
        assert!(!SessionStatus::Completed.can_transition_to(SessionStatus::Scheduled));
    }

    #[test]
    fn no_self_or_sideways_transitions() {
        assert!(!SessionStatus::Scheduled.can_transition_to(SessionStatus::Scheduled));
        assert!(!SessionStatus::Completed.can_transition_to(SessionStatus::Cancelled));
        assert!(!SessionStatus::Cancelled.can_transition_to(SessionStatus::NoShow));
    }

    #[test]
    fn status_uses_camel_case_on_the_wire() {
        let json = serde_json::to_string(&SessionStatus::NoShow).unwrap();
        assert_eq!(json, "\"noShow\"");
    }
}
