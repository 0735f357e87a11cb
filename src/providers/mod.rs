//! Generative completion backends.

pub mod openai;
pub mod provider;

pub use openai::OpenAiBackend;
pub use provider::{CompletionBackend, ProviderError};

use std::sync::Arc;

use crate::config::Settings;

/// Build the configured backend, if any. No API key means the chatbot
/// runs on canned replies only.
pub fn backend_from_settings(settings: &Settings) -> Option<Arc<dyn CompletionBackend>> {
    settings.openai_api_key.as_ref().map(|key| {
        Arc::new(OpenAiBackend::new(key.clone(), settings.openai_model.clone()))
            as Arc<dyn CompletionBackend>
    })
}
