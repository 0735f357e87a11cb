//! Stripe payment pass-through.
//!
//! Two calls only: create a payment intent for an amount plus descriptive
//! metadata, and retrieve one by id to check settlement status. No
//! webhooks, no reconciliation against stored appointments.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::error::{Error, Result};

const STRIPE_API_URL: &str = "https://api.stripe.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

pub struct StripeClient {
    client: Client,
    secret_key: String,
    publishable_key: String,
    base_url: String,
}

/// What the browser needs to finish the payment.
#[derive(Deserialize, Debug, Clone)]
pub struct CreatedIntent {
    pub client_secret: String,
    #[serde(skip)]
    pub publishable_key: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PaymentIntent {
    pub id: String,
    pub status: String,
}

impl StripeClient {
    pub fn new(secret_key: impl Into<String>, publishable_key: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            secret_key: secret_key.into(),
            publishable_key: publishable_key.into(),
            base_url: STRIPE_API_URL.to_string(),
        }
    }

    /// Create a payment intent. `amount` is in dollars; Stripe wants
    /// cents.
    pub async fn create_intent(
        &self,
        amount: f64,
        appointment_id: &str,
        lawyer_name: &str,
    ) -> Result<CreatedIntent> {
        let cents = (amount * 100.0).round() as i64;

        let params = [
            ("amount", cents.to_string()),
            ("currency", "usd".to_string()),
            ("metadata[appointmentId]", appointment_id.to_string()),
            ("metadata[lawyerName]", lawyer_name.to_string()),
        ];

        let response = self
            .client
            .post(format!("{}/payment_intents", self.base_url))
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&params)
            .send()
            .await
            .map_err(|e| Error::Payment(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(Error::Payment(format!("HTTP {}: {}", status, text)));
        }

        let mut intent: CreatedIntent = response
            .json()
            .await
            .map_err(|e| Error::Payment(e.to_string()))?;
        intent.publishable_key = self.publishable_key.clone();

        Ok(intent)
    }

    /// Retrieve a payment intent to inspect its status.
    pub async fn retrieve_intent(&self, id: &str) -> Result<PaymentIntent> {
        let response = self
            .client
            .get(format!("{}/payment_intents/{}", self.base_url, id))
            .basic_auth(&self.secret_key, None::<&str>)
            .send()
            .await
            .map_err(|e| Error::Payment(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(Error::Payment(format!("HTTP {}: {}", status, text)));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Payment(e.to_string()))
    }
}

/// Amounts must be positive. The only validation the payment path does.
pub fn validate_amount(amount: f64) -> Result<()> {
    if amount <= 0.0 || !amount.is_finite() {
        return Err(Error::Payment("Invalid amount".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(150.0).is_ok());
        assert!(validate_amount(0.5).is_ok());
        assert!(validate_amount(0.0).is_err());
        assert!(validate_amount(-10.0).is_err());
        assert!(validate_amount(f64::NAN).is_err());
    }
}
