//! Shared backend API client: URL handling, JSON decoding, and status-code
//! classification.

use evergreen_domain::{ApiConfig, EvergreenError, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

use crate::errors::InfraError;
use crate::http::HttpClient;

/// Client for the practice backend's REST API.
#[derive(Clone)]
pub struct ApiClient {
    http: HttpClient,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(InfraError::from)?;

        let mut builder = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("evergreen-client");

        if let Some(token) = &config.auth_token {
            let mut headers = HeaderMap::new();
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| EvergreenError::Config("auth token is not a valid header".into()))?;
            headers.insert(AUTHORIZATION, value);
            builder = builder.default_headers(headers);
        }

        Ok(Self { http: builder.build()?, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(|err| InfraError::from(err).into())
    }

    pub(crate) async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let request = self.http.request(Method::GET, url).query(query);
        let response = self.http.send(request).await?;
        Self::decode(response).await
    }

    pub(crate) async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        let request = self.http.request(method, url).json(body);
        let response = self.http.send(request).await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(classify_status(status, &detail));
        }
        response.json::<T>().await.map_err(|err| InfraError::from(err).into())
    }
}

/// Map an unsuccessful backend status into the domain taxonomy.
///
/// 401/403 mean the provider OAuth token (or the user's own token) has
/// expired; 412 is the backend's marker for "provider not connected".
fn classify_status(status: StatusCode, detail: &str) -> EvergreenError {
    let detail = if detail.is_empty() { status.to_string() } else { detail.to_string() };
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => EvergreenError::AuthExpired(detail),
        StatusCode::NOT_FOUND => EvergreenError::NotFound(detail),
        StatusCode::PRECONDITION_FAILED => EvergreenError::ProviderNotConnected(detail),
        s if s.is_client_error() => EvergreenError::InvalidInput(detail),
        _ => EvergreenError::Network(detail),
    }
}
