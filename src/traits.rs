//! API client trait
//!
//! The generic seam the host application programs against. Providers other
//! than Gemini would implement the same trait.

use async_trait::async_trait;

use crate::error::LlmError;
use crate::types::ChatMessage;

/// A chat-model API client.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Send an ordered list of chat messages and return the generated text.
    ///
    /// All failures, including transport errors and unexpected response
    /// shapes, surface through the `Err` variant; nothing is retried.
    async fn query_chat_model(&self, messages: Vec<ChatMessage>) -> Result<String, LlmError>;

    /// Diagnostic configuration check.
    ///
    /// Returns human-readable misconfiguration reasons; an empty vector
    /// means the client is configured correctly. Performs at most one
    /// network call per invocation and never raises.
    async fn check_configuration(&self) -> Vec<String>;
}
