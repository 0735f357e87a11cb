//! Storage abstraction for lawyers and appointments.
//!
//! The store is injected at process start: document collections on disk, or
//! in-memory collections pre-loaded with the sample lawyer set when the
//! persistent store is unavailable or explicitly disabled.

pub mod file;
mod lock;
pub mod memory;

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;

use crate::config::{Settings, StoreMode};
use crate::error::{Error, Result};
use crate::models::{Appointment, Lawyer};

pub use file::FileStore;
pub use memory::MemStore;

/// Document-style collection access for the two durable entities.
///
/// Appointment deletion is a no-op for unknown ids; it still reports
/// success. Nothing here enforces that an appointment references a live
/// lawyer record.
#[async_trait]
pub trait Store: Send + Sync {
    /// Backend name, for logging.
    fn name(&self) -> &str;

    async fn lawyers(&self) -> Result<Vec<Lawyer>>;

    async fn lawyer(&self, id: &str) -> Result<Option<Lawyer>>;

    /// Wipe and repopulate the lawyer collection.
    async fn replace_lawyers(&self, lawyers: Vec<Lawyer>) -> Result<()>;

    async fn appointments(&self) -> Result<Vec<Appointment>>;

    async fn insert_appointment(&self, appointment: Appointment) -> Result<Appointment>;

    async fn delete_appointment(&self, id: &str) -> Result<()>;
}

/// The one constraint the lawyer collection carries: license numbers are
/// unique.
pub(crate) fn check_unique_licenses(lawyers: &[Lawyer]) -> Result<()> {
    let mut seen = HashSet::new();
    for lawyer in lawyers {
        if !seen.insert(lawyer.license_number.as_str()) {
            return Err(Error::Store(format!(
                "Duplicate license number: {}",
                lawyer.license_number
            )));
        }
    }
    Ok(())
}

/// Open the configured store, degrading to the in-memory placeholder set
/// when the persistent store cannot be opened.
pub fn open_store(settings: &Settings) -> Arc<dyn Store> {
    match settings.store_mode {
        StoreMode::Memory => {
            tracing::info!("Using in-memory store with sample data");
            Arc::new(MemStore::with_sample_data())
        }
        StoreMode::File => match settings
            .resolve_data_dir()
            .and_then(|dir| FileStore::open(dir.join("db")))
        {
            Ok(store) => {
                tracing::info!("Using file store");
                Arc::new(store)
            }
            Err(e) => {
                tracing::warn!("File store unavailable - using sample data: {}", e);
                Arc::new(MemStore::with_sample_data())
            }
        },
    }
}
