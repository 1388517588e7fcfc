//! Integrations gateway adapter.
//!
//! The client never holds provider credentials; it only reads the connected
//! flag and sync toggle that the backend's OAuth relay exposes.

use async_trait::async_trait;
use evergreen_core::IntegrationsGateway;
use evergreen_domain::{ConnectionStatus, Result};
use tracing::instrument;

use super::ApiClient;

/// Connection-state gateway backed by `GET /api/integrations/status`.
pub struct ApiIntegrationsGateway {
    client: ApiClient,
}

impl ApiIntegrationsGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IntegrationsGateway for ApiIntegrationsGateway {
    #[instrument(skip(self))]
    async fn connection_status(&self) -> Result<ConnectionStatus> {
        self.client.get_json("api/integrations/status", &[]).await
    }
}
