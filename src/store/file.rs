//! JSON document collections on disk.
//!
//! One file per collection (`lawyers.json`, `appointments.json`), written
//! whole under a lock file. Good enough for a single-process service; the
//! store's own concurrency control is the lock, nothing finer.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{Appointment, Lawyer};

use super::lock::with_lock;
use super::{check_unique_licenses, Store};

pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) the store directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;

        tracing::debug!("Opened file store at {}", dir.display());
        Ok(Self { dir })
    }

    fn lawyers_path(&self) -> PathBuf {
        self.dir.join("lawyers.json")
    }

    fn appointments_path(&self) -> PathBuf {
        self.dir.join("appointments.json")
    }
}

fn load_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)?;
    let records: Vec<T> = serde_json::from_str(&content)?;
    Ok(records)
}

fn save_collection<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let content = serde_json::to_string_pretty(records)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[async_trait]
impl Store for FileStore {
    fn name(&self) -> &str {
        "file"
    }

    async fn lawyers(&self) -> Result<Vec<Lawyer>> {
        load_collection(&self.lawyers_path())
    }

    async fn lawyer(&self, id: &str) -> Result<Option<Lawyer>> {
        let lawyers: Vec<Lawyer> = load_collection(&self.lawyers_path())?;
        Ok(lawyers.into_iter().find(|l| l.id == id))
    }

    async fn replace_lawyers(&self, lawyers: Vec<Lawyer>) -> Result<()> {
        check_unique_licenses(&lawyers)?;

        let path = self.lawyers_path();
        with_lock(&path, || save_collection(&path, &lawyers))
    }

    async fn appointments(&self) -> Result<Vec<Appointment>> {
        load_collection(&self.appointments_path())
    }

    async fn insert_appointment(&self, appointment: Appointment) -> Result<Appointment> {
        let path = self.appointments_path();

        with_lock(&path, || {
            let mut records: Vec<Appointment> = load_collection(&path)?;
            records.push(appointment.clone());
            save_collection(&path, &records)
        })?;

        tracing::debug!("Inserted appointment {}", appointment.id);
        Ok(appointment)
    }

    async fn delete_appointment(&self, id: &str) -> Result<()> {
        let path = self.appointments_path();

        with_lock(&path, || {
            let mut records: Vec<Appointment> = load_collection(&path)?;
            records.retain(|a| a.id != id);
            save_collection(&path, &records)
        })?;

        tracing::debug!("Deleted appointment {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppointmentRequest;
    use crate::seed::sample_lawyers;
    use chrono::Utc;
    use tempfile::TempDir;

    fn sample_request(lawyer: &Lawyer) -> AppointmentRequest {
        AppointmentRequest {
            lawyer_id: lawyer.id.clone(),
            lawyer_name: lawyer.name.clone(),
            lawyer_fee: lawyer.fee,
            speciality: lawyer.speciality.clone(),
            appointment_date: Utc::now(),
            user_name: "Alex".to_string(),
            user_email: "alex@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_lawyer_collection_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path()).unwrap();

        assert!(store.lawyers().await.unwrap().is_empty());

        store.replace_lawyers(sample_lawyers()).await.unwrap();

        let lawyers = store.lawyers().await.unwrap();
        assert_eq!(lawyers.len(), 12);

        let found = store.lawyer("3").await.unwrap().unwrap();
        assert_eq!(found.name, "Emily Richardson");

        assert!(store.lawyer("999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_license_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path()).unwrap();

        let mut lawyers = sample_lawyers();
        lawyers[1].license_number = lawyers[0].license_number.clone();

        assert!(store.replace_lawyers(lawyers).await.is_err());
    }

    #[tokio::test]
    async fn test_delete_missing_appointment_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path()).unwrap();

        let lawyers = sample_lawyers();
        let appt = sample_request(&lawyers[0]).into_appointment();
        store.insert_appointment(appt).await.unwrap();

        store.delete_appointment("no-such-id").await.unwrap();
        assert_eq!(store.appointments().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_snapshot_survives_lawyer_changes() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path()).unwrap();

        let lawyers = sample_lawyers();
        store.replace_lawyers(lawyers.clone()).await.unwrap();

        let appt = sample_request(&lawyers[0]).into_appointment();
        let stored = store.insert_appointment(appt).await.unwrap();

        // Alter the referenced lawyer after booking.
        let mut altered = lawyers;
        altered[0].fee = 999.0;
        altered[0].name = "Someone Else".to_string();
        store.replace_lawyers(altered).await.unwrap();

        let appts = store.appointments().await.unwrap();
        assert_eq!(appts[0].id, stored.id);
        assert_eq!(appts[0].lawyer_name, "Sarah Johnson");
        assert_eq!(appts[0].lawyer_fee, 150.0);
    }
}
