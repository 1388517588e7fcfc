//! Session source adapter for the backend sessions API.

use async_trait::async_trait;
use evergreen_core::SessionSource;
use evergreen_domain::{DateWindow, Result, Session, SessionStatus};
use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use super::ApiClient;

/// Remote session source backed by `GET /api/sessions` and
/// `PATCH /api/sessions/{id}/status`.
pub struct ApiSessionSource {
    client: ApiClient,
}

impl ApiSessionSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusBody {
    status: SessionStatus,
}

#[async_trait]
impl SessionSource for ApiSessionSource {
    #[instrument(skip(self), fields(start = %window.start, end = %window.end))]
    async fn get_sessions(&self, window: &DateWindow) -> Result<Vec<Session>> {
        let query =
            [("start", window.start.to_rfc3339()), ("end", window.end.to_rfc3339())];
        self.client.get_json("api/sessions", &query).await
    }

    #[instrument(skip(self))]
    async fn update_session_status(&self, id: &str, status: SessionStatus) -> Result<Session> {
        let path = format!("api/sessions/{id}/status");
        self.client.send_json(Method::PATCH, &path, &StatusBody { status }).await
    }
}
