//! Session status service - explicit, validated transitions
//!
//! Sessions move `scheduled -> {completed | cancelled | noShow}` through
//! explicit user action, and back to `scheduled` via reschedule. Each
//! transition is a single remote call; on failure the caller's in-memory
//! session is left untouched. After a successful change the merged calendar
//! view must be recomputed, since a status change can alter which synced
//! events are subsumed.

use std::sync::Arc;

use evergreen_domain::{EvergreenError, Result, Session, SessionStatus};
use tracing::{debug, instrument};

use crate::calendar::ports::SessionSource;

/// Applies validated status transitions through the remote session source.
pub struct SessionService {
    source: Arc<dyn SessionSource>,
}

impl SessionService {
    pub fn new(source: Arc<dyn SessionSource>) -> Self {
        Self { source }
    }

    /// Transition `session` to `next`, returning the updated session from the
    /// backend.
    ///
    /// Validates the transition table locally before making the remote call,
    /// so an invalid transition never reaches the network.
    #[instrument(skip(self, session), fields(session_id = %session.id))]
    pub async fn update_status(&self, session: &Session, next: SessionStatus) -> Result<Session> {
        if !session.status.can_transition_to(next) {
            return Err(EvergreenError::InvalidInput(format!(
                "invalid session transition {:?} -> {:?}",
                session.status, next
            )));
        }

        let updated = self.source.update_session_status(&session.id, next).await?;
        debug!(status = ?updated.status, "session status updated");
        Ok(updated)
    }
}
