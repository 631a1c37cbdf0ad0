//! Step controllers.
//!
//! A controller owns the editable form data of one step. Edits never touch
//! the shared [`RegistrationStore`](crate::record::RegistrationStore); only
//! a successful `submit` merges the form into it, after validation, and
//! names the step to move to next.

mod courses;
mod payment;
mod personal;
mod pricing;

pub use courses::CourseSelectionForm;
pub use payment::{OrderSummary, PaymentForm};
pub use personal::PersonalInfoForm;
pub use pricing::PricingForm;
