//! Gemini configuration and wire types.

use serde::{Deserialize, Serialize};

use crate::types::ModelOptions;

/// Gemini-specific configuration parameters.
///
/// Set once at construction and immutable for the client's lifetime. No
/// validation happens here; empty values are accepted and only surface
/// through `check_configuration` or the live call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the Gemini API
    pub base_url: String,
    /// Model to use
    pub model: String,
    /// Shared model options (stored, not currently sent on the wire)
    #[serde(default)]
    pub model_options: ModelOptions,
    /// HTTP timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
            model: "gemini-1.5-flash".to_string(),
            model_options: ModelOptions::default(),
            timeout: Some(30),
        }
    }
}

impl GeminiConfig {
    /// Create a new Gemini configuration with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }
    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
    /// Set the model to use
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
    /// Set model options
    pub fn with_model_options(mut self, options: ModelOptions) -> Self {
        self.model_options = options;
        self
    }
    /// Set HTTP timeout in seconds
    pub const fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Gemini Generate Content Request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateContentRequest {
    /// Required. The content of the current conversation with the model.
    pub contents: Vec<Content>,
}

/// A content entry in the request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Content {
    /// Ordered parts of this content entry.
    pub parts: Vec<Part>,
}

/// A text-bearing fragment of a content entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Part {
    pub text: String,
}

/// Gemini Generate Content Response
///
/// Only the fields this client reads are modeled; everything else in the
/// response is ignored. Collections default to empty so sparse responses
/// deserialize and shape problems surface as typed extraction errors
/// instead of serde failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    /// Candidate responses from the model.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One of possibly several alternative generated responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Generated content, absent when the candidate was blocked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<CandidateContent>,
}

/// Content of a response candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// A fragment of a candidate's content; may carry no text (e.g. a
/// function-call part).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponsePart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
