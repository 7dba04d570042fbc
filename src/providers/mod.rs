//! Provider implementations

pub mod gemini;
