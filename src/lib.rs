//! # Gemini Chat
//!
//! A small chat client for the Google Gemini `generateContent` API.
//!
//! The crate maps an ordered list of [`ChatMessage`]s to a single
//! `generateContent` call and back to the generated text. HTTP execution is
//! delegated to an injectable [`HttpTransport`], which makes the client
//! trivial to test and keeps transport policy (timeouts, TLS, proxies) out
//! of the adapter.
//!
//! ```rust,no_run
//! use gemini_chat::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), LlmError> {
//!     let client = GeminiClient::new(GeminiConfig::new("your-api-key"))?;
//!
//!     let reply = client
//!         .query_chat_model(vec![ChatMessage::user("Hello!")])
//!         .await?;
//!     println!("{reply}");
//!     Ok(())
//! }
//! ```
//!
//! There is no retry policy, streaming or response caching here; each call
//! is a one-shot request/response mapping.

pub mod error;
pub mod providers;
pub mod traits;
pub mod transport;
pub mod types;

pub use error::LlmError;
pub use providers::gemini::{GeminiClient, GeminiConfig};
pub use traits::ApiClient;
pub use transport::{HttpTransport, HttpTransportRequest, ReqwestTransport};
pub use types::{ChatMessage, GeminiApiSettings, MessageRole, ModelOptions, Settings};

/// Commonly used types, one import away.
pub mod prelude {
    pub use crate::error::LlmError;
    pub use crate::providers::gemini::{GeminiClient, GeminiConfig};
    pub use crate::traits::ApiClient;
    pub use crate::transport::{HttpTransport, HttpTransportRequest, ReqwestTransport};
    pub use crate::types::{ChatMessage, MessageRole, ModelOptions, Settings};
}
