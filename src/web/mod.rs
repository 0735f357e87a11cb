//! HTTP API and WebSocket chat relay.

pub mod api;
pub mod error;
pub mod router;
pub mod server;
pub mod ws;

use std::sync::Arc;
use tokio::sync::broadcast;

use crate::chatbot::{ChatMessage, ChatResponder};
use crate::payments::StripeClient;
use crate::store::Store;

pub use server::run_server;

/// How many chat messages a slow subscriber may fall behind before it
/// starts losing them. The relay is fire-and-forget; lost messages are
/// not recovered.
const CHAT_CHANNEL_CAPACITY: usize = 64;

/// Shared per-process state, injected into every handler.
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub responder: Arc<ChatResponder>,
    pub payments: Option<Arc<StripeClient>>,
    pub chat_tx: broadcast::Sender<ChatMessage>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn Store>,
        responder: Arc<ChatResponder>,
        payments: Option<Arc<StripeClient>>,
    ) -> Arc<Self> {
        let (chat_tx, _) = broadcast::channel(CHAT_CHANNEL_CAPACITY);
        Arc::new(Self {
            store,
            responder,
            payments,
            chat_tx,
        })
    }
}
