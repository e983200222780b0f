//! mindcare-llm
//!
//! Chat-model collaborator: the `ChatProvider` capability, an
//! OpenAI-compatible HTTP client for Groq, and the counselor system prompt.

pub mod chat;
pub mod error;
pub mod groq;
pub mod prompt;
