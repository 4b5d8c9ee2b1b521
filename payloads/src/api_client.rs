use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{DateRange, Endpoint};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// Used when no api base is configured at build time.
pub const DEFAULT_API_BASE: &str = "https://chatapi.sinoai.io";

/// Trim a configured base address, falling back to [`DEFAULT_API_BASE`].
pub fn normalize_base(configured: Option<&str>) -> String {
    match configured.map(str::trim) {
        Some(base) if !base.is_empty() => {
            base.strip_suffix('/').unwrap_or(base).to_string()
        }
        _ => DEFAULT_API_BASE.to_string(),
    }
}

/// An API client for interfacing with the analytics backend.
#[derive(Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(address: &str) -> Self {
        Self {
            address: normalize_base(Some(address)),
            inner_client: reqwest::Client::new(),
        }
    }

    /// `path` starts with a slash and may carry a query string.
    pub fn format_url(&self, path: &str) -> String {
        format!("{}{path}", &self.address)
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        self.inner_client.get(self.format_url(path)).send().await
    }
}

/// Methods on the analytics API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.empty_get("/api/health_check").await?;
        ok_empty(response).await
    }

    /// Fetch an endpoint path as untyped JSON.
    pub async fn get_json(&self, path: &str) -> Result<Value, ClientError> {
        let response = self.empty_get(path).await?;
        ok_body(response).await
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ClientError> {
        let response = self.empty_get(path).await?;
        ok_body(response).await
    }

    /// Fetch one analytics endpoint for a date range. The refresh token only
    /// busts caches; the server ignores it.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        range: &DateRange,
        refresh: u64,
    ) -> Result<T, ClientError> {
        self.get(&endpoint.url_for(range, refresh)).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A non-success status, with the response text kept for diagnostics.
    #[error("Request failed with {}", .0.as_u16())]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("Failed to load data: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::APIError(status, _) => Some(*status),
            _ => None,
        }
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        // an unreadable error body must not mask the status
        let status = response.status();
        return Err(ClientError::APIError(
            status,
            response.text().await.unwrap_or_default(),
        ));
    }
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        // an unreadable error body must not mask the status
        let status = response.status();
        return Err(ClientError::APIError(
            status,
            response.text().await.unwrap_or_default(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_address_is_trimmed_or_defaulted() {
        assert_eq!(
            normalize_base(Some("http://localhost:8000/")),
            "http://localhost:8000"
        );
        assert_eq!(normalize_base(Some("  ")), DEFAULT_API_BASE);
        assert_eq!(normalize_base(None), DEFAULT_API_BASE);
    }

    #[test]
    fn status_errors_mention_the_code() {
        let error = ClientError::APIError(
            StatusCode::INTERNAL_SERVER_ERROR,
            "boom".into(),
        );
        assert_eq!(error.to_string(), "Request failed with 500");
        assert_eq!(error.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    /// Answers one request with `status` and a body cut short, so reading
    /// the body fails after the headers arrived.
    async fn truncated_responder(status: &'static str) -> APIClient {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await;
            let head = format!(
                "HTTP/1.1 {status}\r\ncontent-length: 64\r\nconnection: close\r\n\r\npartial"
            );
            let _ = socket.write_all(head.as_bytes()).await;
        });
        APIClient::new(&address)
    }

    #[tokio::test]
    async fn unreadable_error_body_keeps_the_status() {
        let client = truncated_responder("503 Service Unavailable").await;
        let error = client
            .get_json("/api/analytics/users/stats")
            .await
            .unwrap_err();
        assert_eq!(error.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
        assert_eq!(error.to_string(), "Request failed with 503");
    }

    #[tokio::test]
    async fn unreadable_error_body_on_health_check_keeps_the_status() {
        let client = truncated_responder("500 Internal Server Error").await;
        let error = client.health_check().await.unwrap_err();
        assert_eq!(error.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
