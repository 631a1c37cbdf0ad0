//! Registration Wizard: a step-wise course registration state machine
//!
//! The wizard walks a user through a fixed, linear sequence of steps:
//! personal details, course selection, pricing plan, payment and a final
//! confirmation. The pure core decides where the user may go; the session
//! shell applies those decisions.
//!
//! # Core Concepts
//!
//! - **Step**: one screen of the flow, see [`core::Step`]
//! - **Record**: the data accumulated across steps, held by a [`record::RegistrationStore`]
//! - **Guard**: a prerequisite check run when a step is entered
//! - **Controller**: a step's editable form; validates before merging into the store
//! - **Gateway**: the pluggable payment backend, see [`payment::PaymentGateway`]
//!
//! # Example
//!
//! ```rust
//! use registration_wizard::core::{check_entry, GuardOutcome, Step};
//! use registration_wizard::record::RegistrationStore;
//!
//! let store = RegistrationStore::new();
//!
//! // Nothing collected yet: pricing bounces back to course selection.
//! match check_entry(Step::Pricing, store.record()) {
//!     GuardOutcome::Redirect(missing) => assert_eq!(missing.redirect_to, Step::CourseSelection),
//!     GuardOutcome::Proceed => unreachable!(),
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod confirmation;
pub mod controller;
pub mod core;
pub mod error;
pub mod navigation;
pub mod notify;
pub mod payment;
pub mod record;
pub mod validation;
pub mod wizard;

// Re-export commonly used types
pub use config::WizardConfig;
pub use crate::core::{GuardOutcome, Step};
pub use error::StepError;
pub use payment::{PaymentGateway, SimulatedGateway};
pub use record::{RegistrationRecord, RegistrationStore};
pub use wizard::RegistrationWizard;
