//! Payment gateway seam.
//!
//! The payment step talks to a [`PaymentGateway`]. The shipped
//! [`SimulatedGateway`] waits a fixed delay and always approves; tests and
//! real integrations provide their own implementation.

use crate::validation::{normalize_card_number, PaymentField};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Card details entered on the payment step.
///
/// `Debug` masks the card number and omits the CVV.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    pub card_name: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

impl PaymentDetails {
    pub fn get(&self, field: PaymentField) -> &str {
        match field {
            PaymentField::CardName => &self.card_name,
            PaymentField::CardNumber => &self.card_number,
            PaymentField::ExpiryDate => &self.expiry_date,
            PaymentField::Cvv => &self.cvv,
        }
    }

    pub fn set(&mut self, field: PaymentField, value: impl Into<String>) {
        let slot = match field {
            PaymentField::CardName => &mut self.card_name,
            PaymentField::CardNumber => &mut self.card_number,
            PaymentField::ExpiryDate => &mut self.expiry_date,
            PaymentField::Cvv => &mut self.cvv,
        };
        *slot = value.into();
    }

    /// Last four digits of the normalized card number.
    pub fn last_four(&self) -> String {
        let digits = normalize_card_number(&self.card_number);
        let skip = digits.chars().count().saturating_sub(4);
        digits.chars().skip(skip).collect()
    }
}

impl fmt::Debug for PaymentDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentDetails")
            .field("card_name", &self.card_name)
            .field("card_number", &format_args!("**** {}", self.last_four()))
            .field("expiry_date", &self.expiry_date)
            .finish_non_exhaustive()
    }
}

/// Proof of a successful charge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub transaction_id: Uuid,
    pub amount: u32,
    pub card_last_four: String,
    pub paid_at: DateTime<Utc>,
}

/// Failure reported by a gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error("payment declined: {reason}")]
    Declined { reason: String },

    #[error("payment gateway unavailable: {0}")]
    Unavailable(String),
}

/// Charges a card for a registration.
///
/// Implementations may suspend; the payment step keeps exactly one charge
/// outstanding and waits for it to finish. There is no cancellation.
pub trait PaymentGateway: Send + Sync {
    fn charge(
        &self,
        details: &PaymentDetails,
        amount: u32,
    ) -> impl Future<Output = Result<PaymentReceipt, PaymentError>> + Send;
}

/// Gateway that approves every charge after a fixed delay.
#[derive(Clone, Debug)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl PaymentGateway for SimulatedGateway {
    async fn charge(
        &self,
        details: &PaymentDetails,
        amount: u32,
    ) -> Result<PaymentReceipt, PaymentError> {
        let card_last_four = details.last_four();
        tracing::debug!(amount, card = %card_last_four, delay_ms = self.delay.as_millis() as u64, "simulating charge");
        tokio::time::sleep(self.delay).await;
        Ok(PaymentReceipt {
            transaction_id: Uuid::new_v4(),
            amount,
            card_last_four,
            paid_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> PaymentDetails {
        PaymentDetails {
            card_name: "A B".into(),
            card_number: "4111 1111 1111 1234".into(),
            expiry_date: "12/29".into(),
            cvv: "123".into(),
        }
    }

    #[test]
    fn last_four_ignores_spacing() {
        assert_eq!(details().last_four(), "1234");
        assert_eq!(PaymentDetails::default().last_four(), "");
    }

    #[test]
    fn debug_output_hides_card_secrets() {
        let rendered = format!("{:?}", details());
        assert!(rendered.contains("**** 1234"));
        assert!(!rendered.contains("4111"));
        assert!(!rendered.contains("123\""));
    }

    #[test]
    fn field_accessors_address_the_right_slot() {
        let mut d = PaymentDetails::default();
        d.set(PaymentField::ExpiryDate, "01/30");
        assert_eq!(d.get(PaymentField::ExpiryDate), "01/30");
        assert_eq!(d.expiry_date, "01/30");
    }

    #[tokio::test]
    async fn simulated_gateway_always_approves() {
        let gateway = SimulatedGateway::new(Duration::ZERO);
        let receipt = gateway.charge(&details(), 5000).await.unwrap();

        assert_eq!(receipt.amount, 5000);
        assert_eq!(receipt.card_last_four, "1234");
    }
}
