//! API endpoints for the payment pass-through.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::payments::validate_amount;
use crate::web::error::ApiError;
use crate::web::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntentRequest {
    pub amount: f64,
    #[serde(default)]
    pub appointment_id: Option<String>,
    #[serde(default)]
    pub lawyer_name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntentResponse {
    pub client_secret: String,
    pub publishable_key: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPaymentRequest {
    pub payment_intent_id: String,
}

#[derive(Serialize)]
pub struct ConfirmPaymentResponse {
    pub success: bool,
    pub message: String,
}

/// Create a payment intent for an appointment.
pub async fn create_payment_intent(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateIntentRequest>,
) -> Result<Json<CreateIntentResponse>, ApiError> {
    if validate_amount(payload.amount).is_err() {
        return Err(ApiError::bad_request("Invalid amount"));
    }

    let payments = state
        .payments
        .as_ref()
        .ok_or_else(|| ApiError::internal("Payments not configured"))?;

    let intent = payments
        .create_intent(
            payload.amount,
            payload.appointment_id.as_deref().unwrap_or_default(),
            payload.lawyer_name.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(Json(CreateIntentResponse {
        client_secret: intent.client_secret,
        publishable_key: intent.publishable_key,
    }))
}

/// Check whether a payment intent settled.
pub async fn confirm_payment(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ConfirmPaymentRequest>,
) -> Result<Json<ConfirmPaymentResponse>, (StatusCode, Json<ConfirmPaymentResponse>)> {
    let payments = state.payments.as_ref().ok_or((
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ConfirmPaymentResponse {
            success: false,
            message: "Payments not configured".to_string(),
        }),
    ))?;

    let intent = payments
        .retrieve_intent(&payload.payment_intent_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ConfirmPaymentResponse {
                    success: false,
                    message: e.to_string(),
                }),
            )
        })?;

    tracing::debug!("Payment intent {} status: {}", intent.id, intent.status);

    if intent.status == "succeeded" {
        Ok(Json(ConfirmPaymentResponse {
            success: true,
            message: "Payment successful".to_string(),
        }))
    } else {
        Err((
            StatusCode::BAD_REQUEST,
            Json(ConfirmPaymentResponse {
                success: false,
                message: "Payment not completed".to_string(),
            }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chatbot::ChatResponder;
    use crate::store::MemStore;

    fn test_state() -> Arc<AppState> {
        AppState::new(
            Arc::new(MemStore::with_sample_data()),
            Arc::new(ChatResponder::new(None)),
            None,
        )
    }

    #[tokio::test]
    async fn test_rejects_non_positive_amount() {
        let payload = CreateIntentRequest {
            amount: 0.0,
            appointment_id: None,
            lawyer_name: None,
        };

        let err = create_payment_intent(State(test_state()), Json(payload))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Invalid amount");
    }

    #[tokio::test]
    async fn test_unconfigured_payments_is_internal_error() {
        let payload = CreateIntentRequest {
            amount: 150.0,
            appointment_id: Some("a-1".to_string()),
            lawyer_name: Some("Sarah Johnson".to_string()),
        };

        let err = create_payment_intent(State(test_state()), Json(payload))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
