//! Conversation types and the chat-model capability.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::LlmError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// A single message in a conversation sent to the chat model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Anything that can turn a system prompt plus conversation into a reply.
///
/// Implementations are shared across request handlers, so they must be
/// `Send + Sync`.
pub trait ChatProvider: Send + Sync {
    fn name(&self) -> &str;

    fn generate_response<'a>(
        &'a self,
        system_prompt: &'a str,
        messages: &'a [ChatMessage],
    ) -> Pin<Box<dyn Future<Output = Result<String, LlmError>> + Send + 'a>>;
}

/// Keep only well-formed `{role, content}` entries from a client-supplied
/// history. System messages are dropped since the prompt is built server-side.
pub fn sanitize_history(entries: &[Value]) -> Vec<ChatMessage> {
    entries
        .iter()
        .filter_map(|entry| match serde_json::from_value::<ChatMessage>(entry.clone()) {
            Ok(message) => Some(message),
            Err(e) => {
                warn!(error = %e, "skipping malformed session history entry");
                None
            }
        })
        .collect()
}
