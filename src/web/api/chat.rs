//! One-shot chat endpoint.
//!
//! Same responder as the WebSocket relay, without the fan-out: one
//! message in, one reply out. Never fails; chatbot backend errors are
//! absorbed upstream.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use crate::chatbot::ChatMessage;
use crate::web::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Reply to one chat message.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatMessage> {
    let reply = state.responder.respond(&payload.message).await;
    Json(ChatMessage::from_bot(reply))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chatbot::replies::pool;
    use crate::chatbot::{ChatResponder, Intent};
    use crate::store::MemStore;

    fn test_state() -> Arc<AppState> {
        AppState::new(
            Arc::new(MemStore::with_sample_data()),
            Arc::new(ChatResponder::new(None)),
            None,
        )
    }

    #[tokio::test]
    async fn test_chat_replies_from_matched_pool() {
        let payload = ChatRequest {
            message: "hi there".to_string(),
        };

        let Json(reply) = chat(State(test_state()), Json(payload)).await;
        assert_eq!(reply.sender, "lawyer");
        assert!(pool(Intent::Greeting).contains(&reply.text.as_str()));
    }

    #[tokio::test]
    async fn test_chat_never_fails_on_garbage() {
        let payload = ChatRequest {
            message: "asdkjasd".to_string(),
        };

        let Json(reply) = chat(State(test_state()), Json(payload)).await;
        assert!(pool(Intent::Help).contains(&reply.text.as_str()));
    }
}
