//! Support chatbot: intent classification and reply selection.

pub mod intent;
pub mod replies;
pub mod responder;

pub use intent::{classify, Intent};
pub use responder::{ChatResponder, RandomSelector, ReplySelector};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One chat message on the wire, for both the HTTP endpoint and the
/// WebSocket relay. Bot replies use sender "lawyer", matching what the
/// front end renders.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ChatMessage {
    pub sender: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn from_user(text: impl Into<String>) -> Self {
        Self {
            sender: "user".to_string(),
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn from_bot(text: impl Into<String>) -> Self {
        Self {
            sender: "lawyer".to_string(),
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}
