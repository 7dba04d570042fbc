//! Gemini request conversion helpers (pure functions)
//!
//! These helpers convert chat messages into Gemini's typed request
//! structures without performing HTTP calls.

use crate::types::ChatMessage;

use super::types::{Content, GenerateContentRequest, Part};

/// Build the `generateContent` request body.
///
/// Every message's content becomes one part inside a single content entry,
/// preserving input order. Roles are not represented on the wire; empty
/// content is forwarded as-is.
pub fn build_request_body(messages: &[ChatMessage]) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: messages
                .iter()
                .map(|m| Part {
                    text: m.content.clone(),
                })
                .collect(),
        }],
    }
}
