//! Completion backend trait.
#![allow(dead_code)]

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not available: {0}")]
    NotAvailable(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Timeout")]
    Timeout,
}

pub type Result<T> = std::result::Result<T, ProviderError>;

/// A stateless text-completion backend: fixed system prompt plus one user
/// message in, free text out. Failure is opaque to callers; the chatbot
/// treats any error as "unavailable" and falls back to canned replies.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Backend name, for logging.
    fn name(&self) -> &str;

    /// Complete one message.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}
