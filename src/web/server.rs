//! Web server using Axum.

use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::chatbot::ChatResponder;
use crate::config::Settings;
use crate::payments::StripeClient;
use crate::providers::backend_from_settings;
use crate::store::open_store;

use super::router::create_app_router;
use super::AppState;

/// Wire up state from settings and run the server.
pub async fn run_server(settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(&settings);
    let responder = Arc::new(ChatResponder::new(backend_from_settings(&settings)));
    let payments = match (&settings.stripe_secret_key, &settings.stripe_publishable_key) {
        (Some(secret), Some(publishable)) => {
            Some(Arc::new(StripeClient::new(secret.clone(), publishable.clone())))
        }
        _ => None,
    };

    let state = AppState::new(store, responder, payments);

    let app = create_app_router(state).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    );

    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port)
        .parse()
        .map_err(|e| format!("Invalid address: {}", e))?;

    tracing::info!("Starting web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
