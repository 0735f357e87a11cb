//! Route definitions for the API server.

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use super::{api, ws, AppState};

/// Create the API router.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        // Lawyers
        .route("/lawyers", get(api::list_lawyers))
        .route("/lawyers/:id", get(api::get_lawyer))
        // Appointments
        .route(
            "/appointments",
            get(api::list_appointments).post(api::create_appointment),
        )
        .route("/appointments/:id", delete(api::delete_appointment))
        // Payments
        .route("/payments/create-intent", post(api::create_payment_intent))
        .route("/payments/confirm-payment", post(api::confirm_payment))
        // Chat (one-shot; the relay lives at /ws)
        .route("/chat", post(api::chat))
}

/// Create the full app router.
pub fn create_app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", create_api_router())
        .route("/ws", get(ws::ws_handler))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
