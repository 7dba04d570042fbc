//! Gemini Client Implementation

use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use std::sync::Arc;
use std::time::Duration;

use crate::error::LlmError;
use crate::traits::ApiClient;
use crate::transport::{HttpTransport, HttpTransportRequest, ReqwestTransport};
use crate::types::{ChatMessage, Settings};

use super::convert;
use super::types::{GeminiConfig, GenerateContentResponse};

/// Message sent by the live step of `check_configuration`.
const CONFIGURATION_PROBE: &str = "Say hello world and nothing else.";

/// Gemini chat client.
///
/// Holds immutable configuration and an injected HTTP transport; there is
/// no other state, so concurrent calls on one instance are independent and
/// there is nothing to tear down.
#[derive(Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.config.base_url)
            .field("model", &self.config.model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a new Gemini client with the given configuration.
    ///
    /// Configuration values are taken as-is; invalid or empty fields only
    /// surface later, through `check_configuration` or the API call itself.
    pub fn new(config: GeminiConfig) -> Result<Self, LlmError> {
        let timeout = Duration::from_secs(config.timeout.unwrap_or(30));
        let transport = ReqwestTransport::new(timeout)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a new Gemini client with a custom HTTP transport.
    pub fn with_transport(config: GeminiConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Create a client from the host application's settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, LlmError> {
        let config = GeminiConfig {
            api_key: settings.gemini_api_settings.key.clone(),
            base_url: settings.gemini_api_settings.url.clone(),
            model: settings.gemini_api_settings.model.clone(),
            model_options: settings.model_options.clone(),
            ..Default::default()
        };
        Self::new(config)
    }

    /// The configuration this client was built with.
    pub const fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Target endpoint for `generateContent` calls.
    ///
    /// Plain string formatting; the key is deliberately not URL-encoded.
    pub fn request_url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.config.base_url, self.config.model, self.config.api_key
        )
    }

    fn request_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Extract `candidates[0].content.parts[0].text` from a parsed response.
    fn extract_text(response: GenerateContentResponse) -> Result<String, LlmError> {
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or_else(|| {
                LlmError::ParseError(
                    "response has no text at candidates[0].content.parts[0].text".to_string(),
                )
            })
    }
}

#[async_trait]
impl ApiClient for GeminiClient {
    async fn query_chat_model(&self, messages: Vec<ChatMessage>) -> Result<String, LlmError> {
        let body = convert::build_request_body(&messages);
        tracing::debug!(model = %self.config.model, messages = messages.len(), "querying chat model");

        let value = self
            .transport
            .execute_json(HttpTransportRequest {
                url: self.request_url(),
                method: Method::POST,
                headers: Self::request_headers(),
                body: serde_json::to_value(&body)?,
            })
            .await?;

        let response: GenerateContentResponse = serde_json::from_value(value)?;
        Self::extract_text(response)
    }

    async fn check_configuration(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.config.api_key.is_empty() {
            errors.push("API key is not set.".to_string());
        }
        if self.config.base_url.is_empty() {
            errors.push("Gemini API url is not set.".to_string());
        }
        // The live check is meaningless without credentials/endpoint.
        if !errors.is_empty() {
            return errors;
        }

        if let Err(err) = self
            .query_chat_model(vec![ChatMessage::user(CONFIGURATION_PROBE)])
            .await
        {
            errors.push(err.message());
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_url_is_plain_concatenation() {
        let client = GeminiClient::new(
            GeminiConfig::new("my key")
                .with_base_url("https://example.com/v1beta/models")
                .with_model("gemini-1.5-flash"),
        )
        .unwrap();
        assert_eq!(
            client.request_url(),
            "https://example.com/v1beta/models/gemini-1.5-flash:generateContent?key=my key"
        );
    }

    #[test]
    fn extract_text_returns_first_candidate_first_part() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"parts": [{"text": "one"}, {"text": "two"}]}},
                {"content": {"parts": [{"text": "other"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(GeminiClient::extract_text(response).unwrap(), "one");
    }

    #[test]
    fn extract_text_rejects_empty_candidates() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": []})).unwrap();
        assert!(matches!(
            GeminiClient::extract_text(response),
            Err(LlmError::ParseError(_))
        ));
    }

    #[test]
    fn extract_text_rejects_textless_part() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"functionCall": {"name": "f"}}]}}]
        }))
        .unwrap();
        assert!(matches!(
            GeminiClient::extract_text(response),
            Err(LlmError::ParseError(_))
        ));
    }

    #[test]
    fn from_settings_copies_all_four_fields() {
        let settings = Settings {
            gemini_api_settings: crate::types::GeminiApiSettings {
                key: "k".to_string(),
                url: "https://example.com/models".to_string(),
                model: "gemini-1.5-flash".to_string(),
            },
            model_options: crate::types::ModelOptions::new().with_temperature(0.5),
        };
        let client = GeminiClient::from_settings(&settings).unwrap();
        assert_eq!(client.config().api_key, "k");
        assert_eq!(client.config().base_url, "https://example.com/models");
        assert_eq!(client.config().model, "gemini-1.5-flash");
        assert_eq!(client.config().model_options.temperature, Some(0.5));
    }
}
