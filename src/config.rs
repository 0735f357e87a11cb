//! Configuration loading for LawBook.
//!
//! Everything comes from the environment so the service runs unconfigured
//! out of the box: no OpenAI key means the canned chatbot, no Stripe keys
//! mean payment endpoints report "not configured", no data dir override
//! means the platform data directory.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Which storage backend to inject at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreMode {
    /// JSON document collections on disk.
    File,
    /// In-memory collections pre-seeded with the sample lawyer set.
    Memory,
}

/// Runtime settings.
#[derive(Clone, Debug)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub store_mode: StoreMode,
    pub data_dir: Option<PathBuf>,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub stripe_secret_key: Option<String>,
    pub stripe_publishable_key: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            store_mode: StoreMode::File,
            data_dir: None,
            openai_api_key: None,
            openai_model: "gpt-3.5-turbo".to_string(),
            stripe_secret_key: None,
            stripe_publishable_key: None,
        }
    }
}

impl Settings {
    /// Assemble settings from the environment.
    pub fn from_env() -> Result<Self> {
        let defaults = Settings::default();

        let port = match env_var("LAWBOOK_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| Error::Config(format!("Invalid LAWBOOK_PORT: {}", raw)))?,
            None => defaults.port,
        };

        let store_mode = match env_var("LAWBOOK_STORE").as_deref() {
            None | Some("file") => StoreMode::File,
            Some("memory") => StoreMode::Memory,
            Some(other) => {
                return Err(Error::Config(format!(
                    "Invalid LAWBOOK_STORE '{}': expected 'file' or 'memory'",
                    other
                )))
            }
        };

        Ok(Self {
            host: env_var("LAWBOOK_HOST").unwrap_or(defaults.host),
            port,
            store_mode,
            data_dir: env_var("LAWBOOK_DATA_DIR").map(PathBuf::from),
            openai_api_key: env_var("OPENAI_API_KEY"),
            openai_model: env_var("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            stripe_secret_key: env_var("STRIPE_SECRET_KEY"),
            stripe_publishable_key: env_var("STRIPE_PUBLISHABLE_KEY"),
        })
    }

    /// Resolve the data directory, falling back to the platform default.
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }

        let dirs = directories::ProjectDirs::from("com", "lawbook", "lawbook")
            .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?;

        Ok(dirs.data_dir().to_path_buf())
    }

    /// Log which optional integrations are active.
    pub fn announce(&self) {
        if self.openai_api_key.is_some() {
            tracing::info!("OpenAI backend configured (model: {})", self.openai_model);
        } else {
            tracing::info!("OPENAI_API_KEY not set - using canned chatbot replies");
        }

        if self.stripe_secret_key.is_some() {
            tracing::info!("Stripe payments configured");
        } else {
            tracing::info!("STRIPE_SECRET_KEY not set - payment endpoints disabled");
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
