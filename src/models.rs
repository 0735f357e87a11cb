//! Durable entities: lawyers and appointments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A lawyer in the catalog. Created by seeding, read-mostly thereafter.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lawyer {
    pub id: String,
    pub name: String,
    pub speciality: String,
    /// Years of experience.
    pub experience: u32,
    /// Unique across the collection.
    pub license_number: String,
    pub image: String,
    /// Consultation fee in whole dollars.
    pub fee: f64,
    /// Ordered weekday names, e.g. "Monday".
    pub availability: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A booked appointment.
///
/// The `lawyer_name`/`lawyer_fee`/`speciality` fields are a point-in-time
/// snapshot of the referenced lawyer taken at booking and are never
/// reconciled if the lawyer record changes later. Nothing ties `lawyer_id`
/// to a live lawyer record.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub lawyer_id: String,
    pub lawyer_name: String,
    pub lawyer_fee: f64,
    pub speciality: String,
    pub appointment_date: DateTime<Utc>,
    pub user_name: String,
    pub user_email: String,
    pub created_at: DateTime<Utc>,
}

/// Booking payload as submitted by the client. The server assigns the id
/// and creation timestamp.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub lawyer_id: String,
    pub lawyer_name: String,
    pub lawyer_fee: f64,
    pub speciality: String,
    pub appointment_date: DateTime<Utc>,
    pub user_name: String,
    pub user_email: String,
}

impl AppointmentRequest {
    /// Materialize a stored appointment with a fresh id and timestamp.
    pub fn into_appointment(self) -> Appointment {
        Appointment {
            id: uuid::Uuid::new_v4().to_string(),
            lawyer_id: self.lawyer_id,
            lawyer_name: self.lawyer_name,
            lawyer_fee: self.lawyer_fee,
            speciality: self.speciality,
            appointment_date: self.appointment_date,
            user_name: self.user_name,
            user_email: self.user_email,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_materializes_snapshot() {
        let req = AppointmentRequest {
            lawyer_id: "1".to_string(),
            lawyer_name: "Sarah Johnson".to_string(),
            lawyer_fee: 150.0,
            speciality: "Corporate Law".to_string(),
            appointment_date: Utc::now(),
            user_name: "Alex".to_string(),
            user_email: "alex@example.com".to_string(),
        };

        let appt = req.into_appointment();
        assert!(!appt.id.is_empty());
        assert_eq!(appt.lawyer_name, "Sarah Johnson");
        assert_eq!(appt.lawyer_fee, 150.0);
    }
}
