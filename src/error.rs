//! Errors surfaced by step submissions.

use crate::core::Step;
use crate::payment::PaymentError;
use crate::validation::ValidationError;
use thiserror::Error;

pub use crate::core::PrerequisiteMissing;

/// Why a submit did not move the flow forward.
///
/// None of these end the session: the user stays on the step, sees the
/// message and may try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("payment failed: {0}")]
    Payment(#[from] PaymentError),

    #[error("a payment is already being processed")]
    PaymentInFlight,

    #[error("cannot submit the {expected} step while on the {current} step")]
    WrongStep { expected: Step, current: Step },
}
