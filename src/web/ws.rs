//! WebSocket chat relay.
//!
//! One broadcast channel for the whole process: every message, user or
//! bot, fans out to every connected client. Fire-and-forget; a lagging or
//! dropped subscriber loses messages and nothing re-delivers them.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use std::sync::Arc;

use crate::chatbot::ChatMessage;

use super::AppState;

#[derive(Deserialize)]
struct IncomingChat {
    message: String,
}

/// Upgrade to a chat relay connection.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    tracing::debug!("Chat client connected");

    let (mut sink, mut stream) = socket.split();
    let mut rx = state.chat_tx.subscribe();

    // Fan broadcasts out to this client.
    let mut send_task = tokio::spawn(async move {
        while let Ok(msg) = rx.recv().await {
            let Ok(text) = serde_json::to_string(&msg) else {
                continue;
            };
            if sink.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    });

    let tx = state.chat_tx.clone();
    let responder = state.responder.clone();

    // Relay inbound messages and answer them.
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(message)) = stream.next().await {
            let text = match message {
                Message::Text(text) => text,
                Message::Close(_) => break,
                _ => continue,
            };

            // Accept either `{"message": "..."}` or a bare string.
            let inbound = match serde_json::from_str::<IncomingChat>(&text) {
                Ok(parsed) => parsed.message,
                Err(_) => text,
            };

            // Send errors only mean nobody is subscribed right now.
            let _ = tx.send(ChatMessage::from_user(&inbound));

            let reply = responder.respond(&inbound).await;
            let _ = tx.send(ChatMessage::from_bot(reply));
        }
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    tracing::debug!("Chat client disconnected");
}
