//! Calendar event source adapter for the backend calendar API.
//!
//! The backend owns the actual Google Calendar sync; this adapter only reads
//! what was synced and can ask for a re-sync of a window through the OAuth
//! relay.

use async_trait::async_trait;
use evergreen_core::CalendarEventSource;
use evergreen_domain::{DateWindow, Result, SyncReport, SyncedCalendarEvent};
use reqwest::Method;
use tracing::instrument;

use super::ApiClient;

/// Synced-event source backed by `GET /api/calendar/events` and
/// `POST /api/calendar/sync`.
pub struct ApiCalendarSource {
    client: ApiClient,
}

impl ApiCalendarSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CalendarEventSource for ApiCalendarSource {
    #[instrument(skip(self), fields(start = %window.start, end = %window.end))]
    async fn get_events(&self, window: &DateWindow) -> Result<Vec<SyncedCalendarEvent>> {
        let query =
            [("start", window.start.to_rfc3339()), ("end", window.end.to_rfc3339())];
        self.client.get_json("api/calendar/events", &query).await
    }

    #[instrument(skip(self), fields(start = %window.start, end = %window.end))]
    async fn sync_calendar(&self, window: &DateWindow) -> Result<SyncReport> {
        self.client.send_json(Method::POST, "api/calendar/sync", window).await
    }
}
