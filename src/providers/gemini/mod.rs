//! Google Gemini provider
//!
//! One-shot chat adapter for the `generateContent` endpoint. Request
//! construction is pure (`convert`), HTTP goes through the injected
//! transport, and the reply is the text of the first part of the first
//! candidate.

pub mod client;
pub mod convert;
pub mod types;

pub use client::GeminiClient;
pub use types::{
    Candidate, CandidateContent, Content, GeminiConfig, GenerateContentRequest,
    GenerateContentResponse, Part, ResponsePart,
};
