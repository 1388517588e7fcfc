//! Conversions from external infrastructure errors into domain errors.

use evergreen_domain::EvergreenError;
use reqwest::Error as HttpError;
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub EvergreenError);

impl From<InfraError> for EvergreenError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<EvergreenError> for InfraError {
    fn from(value: EvergreenError) -> Self {
        InfraError(value)
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → EvergreenError */
/* -------------------------------------------------------------------------- */

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        // Timeouts and connection failures are transient by contract: the
        // consumer keeps its cache and retries on the next explicit load.
        let mapped = if value.is_timeout() {
            EvergreenError::Network("request timed out".into())
        } else if value.is_connect() {
            EvergreenError::Network(format!("connection failed: {value}"))
        } else if value.is_decode() {
            EvergreenError::DataQuality(format!("malformed response body: {value}"))
        } else {
            EvergreenError::Network(format!("http error: {value}"))
        };
        InfraError(mapped)
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → EvergreenError */
/* -------------------------------------------------------------------------- */

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        InfraError(EvergreenError::Config(format!("invalid URL: {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_errors_become_config_errors() {
        let err: InfraError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(EvergreenError::from(err), EvergreenError::Config(_)));
    }
}
