use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ChatSender {
    User,
    Bot,
}

/// A single message of a counseling chat as recorded by the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatTurn {
    pub sender: ChatSender,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl ChatTurn {
    pub fn user(message: impl Into<String>) -> Self {
        Self {
            sender: ChatSender::User,
            message: message.into(),
            timestamp: None,
        }
    }

    pub fn bot(message: impl Into<String>) -> Self {
        Self {
            sender: ChatSender::Bot,
            message: message.into(),
            timestamp: None,
        }
    }
}
