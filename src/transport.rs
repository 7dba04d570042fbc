//! HTTP transport abstraction.
//!
//! The client performs no HTTP itself; it hands a fully built request to an
//! injectable transport that owns serialization, the network call and
//! status-code-to-error mapping, and returns the parsed JSON body. Tests
//! inject a recording transport to observe the final URL/headers/body and
//! return synthetic responses without going through `reqwest`.

use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::HeaderMap;
use std::time::Duration;

use crate::error::LlmError;

/// Transport-level request data for JSON requests.
#[derive(Debug, Clone)]
pub struct HttpTransportRequest {
    pub url: String,
    pub method: Method,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

/// Injectable HTTP transport for JSON requests.
///
/// Scoped to one-shot JSON calls: no streaming, and cancellation (if any)
/// is the implementation's concern.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute_json(
        &self,
        request: HttpTransportRequest,
    ) -> Result<serde_json::Value, LlmError>;
}

/// Default transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self, LlmError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                LlmError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
            })?;
        Ok(Self { http_client })
    }

    /// Create a transport from a preconfigured `reqwest` client.
    pub fn with_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    /// Pull the provider message out of a Gemini error envelope
    /// `{"error": {"code", "message", "status"}}`, falling back to the raw
    /// body text.
    fn extract_error_message(body: &str) -> String {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                    .map(ToString::to_string)
            })
            .unwrap_or_else(|| body.to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute_json(
        &self,
        request: HttpTransportRequest,
    ) -> Result<serde_json::Value, LlmError> {
        tracing::debug!(url = %request.url, method = %request.method, "dispatching JSON request");

        let response = self
            .http_client
            .request(request.method, &request.url)
            .headers(request.headers)
            .json(&request.body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let details = serde_json::from_str(&body).ok();
            return Err(LlmError::ApiError {
                code: status.as_u16(),
                message: Self::extract_error_message(&body),
                details,
            });
        }

        let value = response.json::<serde_json::Value>().await?;
        Ok(value)
    }
}
