// =============================================================================
// FitHub Web - API Client Module
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Error Types
// 3. API Client
// =============================================================================

pub mod tariffs;

pub use tariffs::*;

use fithub_common::TariffError;
use gloo_net::http::{Request, Response};
use thiserror::Error;

// -----------------------------------------------------------------------------
// 2. Error Types
// -----------------------------------------------------------------------------

/// API error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(String),

    #[error("Not found")]
    NotFound,
}

// -----------------------------------------------------------------------------
// 3. API Client
// -----------------------------------------------------------------------------

/// HTTP client for the tariffs API. No auth, no retries.
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Handle API response. Decoding is left to the caller.
    async fn handle_response(response: Response) -> Result<String, ApiError> {
        let status = response.status();

        match status {
            200..=299 => response
                .text()
                .await
                .map_err(|e| ApiError::Network(e.to_string())),
            404 => Err(ApiError::NotFound),
            _ => {
                let message = response.text().await.unwrap_or_default();
                Err(ApiError::Server { status, message })
            }
        }
    }

    /// GET request returning the raw response body.
    pub async fn get_text(&self, endpoint: &str) -> Result<String, ApiError> {
        let response = Request::get(&self.url(endpoint))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::handle_response(response).await
    }
}

impl From<TariffError> for ApiError {
    fn from(err: TariffError) -> Self {
        ApiError::Deserialize(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new("https://t-core.fit-hub.pro/");
        assert_eq!(client.base_url(), "https://t-core.fit-hub.pro");
        assert_eq!(
            client.url(TARIFFS_ENDPOINT),
            "https://t-core.fit-hub.pro/Test/GetTariffs"
        );
    }

    #[test]
    fn test_decode_failure_maps_to_deserialize() {
        let err: ApiError = fithub_common::parse_tariffs("{\"id\": 1}").unwrap_err().into();
        assert!(matches!(err, ApiError::Deserialize(_)));
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Server { status: 502, message: "Bad Gateway".to_string() };
        assert_eq!(err.to_string(), "Server error: 502 - Bad Gateway");
    }
}
