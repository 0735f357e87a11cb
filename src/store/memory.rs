//! In-memory store, used when the persistent store is unavailable.
//!
//! Holds the same shape of collections behind an `RwLock`; the lawyer
//! collection starts from the fixed sample set so catalog endpoints keep
//! working without a database.
#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::RwLock;

use crate::error::Result;
use crate::models::{Appointment, Lawyer};
use crate::seed::sample_lawyers;

use super::{check_unique_licenses, Store};

#[derive(Default)]
struct Collections {
    lawyers: Vec<Lawyer>,
    appointments: Vec<Appointment>,
}

pub struct MemStore {
    inner: RwLock<Collections>,
}

impl MemStore {
    /// Empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Collections::default()),
        }
    }

    /// Store pre-loaded with the fixed lawyer set.
    pub fn with_sample_data() -> Self {
        Self {
            inner: RwLock::new(Collections {
                lawyers: sample_lawyers(),
                appointments: Vec::new(),
            }),
        }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn lawyers(&self) -> Result<Vec<Lawyer>> {
        let inner = self.inner.read().unwrap();
        Ok(inner.lawyers.clone())
    }

    async fn lawyer(&self, id: &str) -> Result<Option<Lawyer>> {
        let inner = self.inner.read().unwrap();
        Ok(inner.lawyers.iter().find(|l| l.id == id).cloned())
    }

    async fn replace_lawyers(&self, lawyers: Vec<Lawyer>) -> Result<()> {
        check_unique_licenses(&lawyers)?;

        let mut inner = self.inner.write().unwrap();
        inner.lawyers = lawyers;
        Ok(())
    }

    async fn appointments(&self) -> Result<Vec<Appointment>> {
        let inner = self.inner.read().unwrap();
        Ok(inner.appointments.clone())
    }

    async fn insert_appointment(&self, appointment: Appointment) -> Result<Appointment> {
        let mut inner = self.inner.write().unwrap();
        inner.appointments.push(appointment.clone());
        Ok(appointment)
    }

    async fn delete_appointment(&self, id: &str) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        inner.appointments.retain(|a| a.id != id);
        Ok(())
    }
}
