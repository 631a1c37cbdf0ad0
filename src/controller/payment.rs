//! Payment step: order summary and the card form.

use crate::catalog::PlanDetails;
use crate::error::StepError;
use crate::payment::{PaymentDetails, PaymentGateway, PaymentReceipt};
use crate::record::RegistrationRecord;
use crate::validation::{validate_payment, PaymentField};
use serde::{Deserialize, Serialize};

/// What the payment step shows above the card form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub course_count: usize,
    pub courses: String,
    pub plan_name: String,
    pub total: u32,
}

impl OrderSummary {
    pub fn from_record(record: &RegistrationRecord) -> Self {
        let plan = PlanDetails::for_plan(record.pricing_plan);
        Self {
            course_count: record.selected_courses.len(),
            courses: record.selected_courses.join(", "),
            plan_name: plan.name,
            total: plan.price,
        }
    }
}

/// Payment step.
///
/// Submitting charges the gateway once; while that charge is outstanding
/// the form refuses another submit. Nothing is written to the registration
/// store by this step.
#[derive(Clone, Debug, Default)]
pub struct PaymentForm {
    details: PaymentDetails,
    submitting: bool,
}

impl PaymentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn details(&self) -> &PaymentDetails {
        &self.details
    }

    pub fn set_field(&mut self, field: PaymentField, value: impl Into<String>) {
        self.details.set(field, value);
    }

    /// True while a charge is in flight.
    ///
    /// The future returned by [`submit`](Self::submit) borrows the form
    /// mutably for the whole charge, so callers only ever see `false` here:
    /// the borrow is what keeps a second submit from starting. The flag is
    /// cleared when that future completes or is dropped.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate the card details, then charge the plan price.
    ///
    /// Validation failures never reach the gateway. Whatever the gateway
    /// answers, the form is re-enabled afterwards.
    pub async fn submit<G: PaymentGateway>(
        &mut self,
        record: &RegistrationRecord,
        gateway: &G,
    ) -> Result<PaymentReceipt, StepError> {
        if self.submitting {
            return Err(StepError::PaymentInFlight);
        }
        validate_payment(&self.details)?;

        let amount = PlanDetails::for_plan(record.pricing_plan).price;
        let in_flight = InFlight::start(&mut self.submitting);
        let outcome = gateway.charge(&self.details, amount).await;
        drop(in_flight);

        Ok(outcome?)
    }
}

/// Holds the in-flight flag up; clears it when the charge settles or the
/// submit future is dropped mid-charge.
struct InFlight<'a>(&'a mut bool);

impl<'a> InFlight<'a> {
    fn start(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PlanId;
    use crate::payment::{PaymentError, SimulatedGateway};
    use crate::validation::ValidationError;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::time::timeout;
    use uuid::Uuid;

    struct CountingGateway {
        calls: AtomicUsize,
        approve: bool,
    }

    impl CountingGateway {
        fn new(approve: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                approve,
            }
        }
    }

    impl PaymentGateway for CountingGateway {
        async fn charge(
            &self,
            details: &PaymentDetails,
            amount: u32,
        ) -> Result<PaymentReceipt, PaymentError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.approve {
                Ok(PaymentReceipt {
                    transaction_id: Uuid::new_v4(),
                    amount,
                    card_last_four: details.last_four(),
                    paid_at: Utc::now(),
                })
            } else {
                Err(PaymentError::Declined {
                    reason: "insufficient funds".into(),
                })
            }
        }
    }

    fn record() -> RegistrationRecord {
        RegistrationRecord {
            selected_courses: vec!["Machine Learning".into(), "Data Science".into()],
            pricing_plan: Some(PlanId::MentorLed),
            ..Default::default()
        }
    }

    fn filled() -> PaymentForm {
        let mut form = PaymentForm::new();
        form.set_field(PaymentField::CardName, "A B");
        form.set_field(PaymentField::CardNumber, "4111 1111 1111 1111");
        form.set_field(PaymentField::ExpiryDate, "12/29");
        form.set_field(PaymentField::Cvv, "123");
        form
    }

    #[test]
    fn order_summary_lists_courses_and_plan() {
        let summary = OrderSummary::from_record(&record());
        assert_eq!(summary.course_count, 2);
        assert_eq!(summary.courses, "Machine Learning, Data Science");
        assert_eq!(summary.plan_name, "Mentor Led");
        assert_eq!(summary.total, 5000);
    }

    #[tokio::test]
    async fn invalid_details_never_reach_gateway() {
        let gateway = CountingGateway::new(true);
        let mut form = filled();
        form.set_field(PaymentField::Cvv, "12");

        let result = form.submit(&record(), &gateway).await;

        assert_eq!(
            result,
            Err(StepError::Validation(ValidationError::InvalidCvv))
        );
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn approved_charge_bills_plan_price() {
        let gateway = CountingGateway::new(true);
        let mut form = filled();

        let receipt = form.submit(&record(), &gateway).await.unwrap();

        assert_eq!(receipt.amount, 5000);
        assert_eq!(receipt.card_last_four, "1111");
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn declined_charge_reenables_submit() {
        let gateway = CountingGateway::new(false);
        let mut form = filled();

        let result = form.submit(&record(), &gateway).await;

        assert!(matches!(result, Err(StepError::Payment(PaymentError::Declined { .. }))));
        assert!(!form.is_submitting());

        let _ = form.submit(&record(), &gateway).await;
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn abandoned_charge_reenables_submit() {
        let slow = SimulatedGateway::new(Duration::from_secs(10));
        let mut form = filled();

        let abandoned = timeout(Duration::from_millis(10), form.submit(&record(), &slow)).await;
        assert!(abandoned.is_err());
        assert!(!form.is_submitting());

        let gateway = CountingGateway::new(true);
        let receipt = form.submit(&record(), &gateway).await.unwrap();
        assert_eq!(receipt.amount, 5000);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }
}
