//! API endpoints for booking and cancellation.
//!
//! Booking takes the client's payload as-is: no conflict detection, no
//! check that the referenced lawyer or slot exists. Cancellation is a
//! hard delete and reports success even for unknown ids.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::models::{Appointment, AppointmentRequest};
use crate::web::error::ApiError;
use crate::web::AppState;

/// List all appointments.
pub async fn list_appointments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    let appointments = state.store.appointments().await?;
    Ok(Json(appointments))
}

/// Book an appointment. The server assigns id and creation timestamp and
/// returns the stored record.
pub async fn create_appointment(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AppointmentRequest>,
) -> Result<(StatusCode, Json<Appointment>), ApiError> {
    let appointment = payload.into_appointment();
    let stored = state.store.insert_appointment(appointment).await?;

    tracing::info!(
        "Booked appointment {} with {} for {}",
        stored.id,
        stored.lawyer_name,
        stored.user_email
    );

    Ok((StatusCode::CREATED, Json(stored)))
}

/// Cancel an appointment. Deleting an unknown id is a no-op that still
/// reports success.
pub async fn delete_appointment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.store.delete_appointment(&id).await?;

    Ok(Json(json!({ "message": "Appointment deleted" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chatbot::ChatResponder;
    use crate::store::MemStore;
    use chrono::Utc;

    fn test_state() -> Arc<AppState> {
        AppState::new(
            Arc::new(MemStore::with_sample_data()),
            Arc::new(ChatResponder::new(None)),
            None,
        )
    }

    fn booking() -> AppointmentRequest {
        AppointmentRequest {
            lawyer_id: "1".to_string(),
            lawyer_name: "Sarah Johnson".to_string(),
            lawyer_fee: 150.0,
            speciality: "Corporate Law".to_string(),
            appointment_date: Utc::now(),
            user_name: "Alex".to_string(),
            user_email: "alex@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_book_then_list_includes_snapshot() {
        let state = test_state();

        let (status, Json(stored)) = create_appointment(State(state.clone()), Json(booking()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        // Alter the lawyer collection after booking; the stored snapshot
        // must not change.
        let mut altered = state.store.lawyers().await.unwrap();
        altered[0].fee = 999.0;
        state.store.replace_lawyers(altered).await.unwrap();

        let Json(appointments) = list_appointments(State(state)).await.unwrap();
        assert_eq!(appointments.len(), 1);
        assert_eq!(appointments[0].id, stored.id);
        assert_eq!(appointments[0].lawyer_fee, 150.0);
    }

    #[tokio::test]
    async fn test_booking_unknown_lawyer_is_permitted() {
        // No referential integrity: the lawyer does not have to exist.
        let state = test_state();
        let mut payload = booking();
        payload.lawyer_id = "no-such-lawyer".to_string();

        let (status, _) = create_appointment(State(state), Json(payload))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_cancel_unknown_id_reports_success() {
        let state = test_state();
        create_appointment(State(state.clone()), Json(booking()))
            .await
            .unwrap();

        let Json(body) = delete_appointment(State(state.clone()), Path("missing".to_string()))
            .await
            .unwrap();
        assert_eq!(body["message"], "Appointment deleted");

        let Json(appointments) = list_appointments(State(state)).await.unwrap();
        assert_eq!(appointments.len(), 1);
    }
}
