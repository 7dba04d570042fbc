//! Host-application data model consumed by the client.
//!
//! These are the message, option and settings shapes the surrounding
//! application supplies per call or at configuration time. The client
//! stores them immutably and never mutates caller-supplied values.

use serde::{Deserialize, Serialize};

/// Message role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A single turn in a conversation, tagged with a role and carrying text.
///
/// Messages are supplied by the caller per call and are not stored by the
/// client. Empty content is acceptable and forwarded as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// Role
    pub role: MessageRole,
    /// Text content
    pub content: String,
}

impl ChatMessage {
    /// Creates a user message
    pub fn user<S: Into<String>>(content: S) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    /// Creates a system message
    pub fn system<S: Into<String>>(content: S) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// Creates an assistant message
    pub fn assistant<S: Into<String>>(content: S) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Shared model generation options.
///
/// The client stores these for its lifetime but does not currently include
/// them in the outbound request body; field names mirror Gemini's
/// `generationConfig` so forwarding them later is mechanical.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ModelOptions {
    /// Controls the randomness of the output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// The maximum number of tokens to include in a candidate.
    #[serde(skip_serializing_if = "Option::is_none", rename = "maxOutputTokens")]
    pub max_output_tokens: Option<i32>,
    /// The maximum cumulative probability of tokens to consider when sampling.
    #[serde(skip_serializing_if = "Option::is_none", rename = "topP")]
    pub top_p: Option<f64>,
    /// The maximum number of tokens to consider when sampling.
    #[serde(skip_serializing_if = "Option::is_none", rename = "topK")]
    pub top_k: Option<i32>,
}

impl ModelOptions {
    /// Create empty model options
    pub fn new() -> Self {
        Self::default()
    }
    /// Set temperature
    pub fn with_temperature(mut self, t: f64) -> Self {
        self.temperature = Some(t);
        self
    }
    /// Set max output tokens
    pub fn with_max_output_tokens(mut self, max: i32) -> Self {
        self.max_output_tokens = Some(max);
        self
    }
    /// Set top_p
    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }
    /// Set top_k
    pub fn with_top_k(mut self, top_k: i32) -> Self {
        self.top_k = Some(top_k);
        self
    }
}

/// Gemini connection settings as stored by the host application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeminiApiSettings {
    /// API key
    pub key: String,
    /// Base endpoint URL
    pub url: String,
    /// Model identifier
    pub model: String,
}

/// Application settings slice the client is constructed from.
///
/// Only the fields read by [`GeminiClient::from_settings`] are modeled here;
/// schema and versioning of the full settings store belong to the host.
///
/// [`GeminiClient::from_settings`]: crate::providers::gemini::GeminiClient::from_settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Gemini connection settings
    #[serde(rename = "geminiApiSettings")]
    pub gemini_api_settings: GeminiApiSettings,
    /// Shared model options
    #[serde(rename = "modelOptions", default)]
    pub model_options: ModelOptions,
}
