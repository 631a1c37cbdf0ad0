//! Step entry guards.
//!
//! Every step after the first requires data collected by earlier steps.
//! Guards are pure predicates over the [`RegistrationRecord`], evaluated
//! once when a step is entered. A failing guard names the earlier step the
//! user must be sent back to.

use super::step::Step;
use crate::record::RegistrationRecord;
use serde::{Deserialize, Serialize};

/// Pure predicate over the registration record.
///
/// # Example
///
/// ```rust
/// use registration_wizard::core::Guard;
/// use registration_wizard::record::RegistrationRecord;
///
/// let has_courses = Guard::new(|r: &RegistrationRecord| !r.selected_courses.is_empty());
///
/// let mut record = RegistrationRecord::default();
/// assert!(!has_courses.check(&record));
///
/// record.selected_courses.push("Dev Ops".to_string());
/// assert!(has_courses.check(&record));
/// ```
pub struct Guard {
    predicate: Box<dyn Fn(&RegistrationRecord) -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&RegistrationRecord) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the predicate against a record snapshot.
    pub fn check(&self, record: &RegistrationRecord) -> bool {
        (self.predicate)(record)
    }
}

/// A guard plus where to send the user when it fails.
pub struct Prerequisite {
    pub guard: Guard,
    pub redirect_to: Step,
    pub message: &'static str,
}

impl Prerequisite {
    fn new<F>(redirect_to: Step, message: &'static str, predicate: F) -> Self
    where
        F: Fn(&RegistrationRecord) -> bool + Send + Sync + 'static,
    {
        Self {
            guard: Guard::new(predicate),
            redirect_to,
            message,
        }
    }
}

/// A step was entered without the data it depends on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct PrerequisiteMissing {
    /// Step the user tried to enter.
    pub step: Step,
    /// Earliest step that supplies the missing data.
    pub redirect_to: Step,
    pub message: String,
}

/// Result of evaluating a step's entry guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Proceed,
    Redirect(PrerequisiteMissing),
}

impl GuardOutcome {
    pub fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed)
    }

    /// The step the user ends up on when entering `requested`.
    pub fn resolved_step(&self, requested: Step) -> Step {
        match self {
            Self::Proceed => requested,
            Self::Redirect(missing) => missing.redirect_to,
        }
    }
}

/// Prerequisites of `step`, ordered earliest gap first.
pub fn prerequisites(step: Step) -> Vec<Prerequisite> {
    match step {
        Step::PersonalInfo => Vec::new(),
        Step::CourseSelection => vec![Prerequisite::new(
            Step::PersonalInfo,
            "Please complete registration form first",
            RegistrationRecord::has_personal,
        )],
        Step::Pricing => vec![Prerequisite::new(
            Step::CourseSelection,
            "Please select courses first",
            RegistrationRecord::has_courses,
        )],
        Step::Payment => vec![Prerequisite::new(
            Step::Pricing,
            "Please select a pricing plan first",
            RegistrationRecord::has_plan,
        )],
        Step::Confirmation => {
            const INCOMPLETE: &str = "Registration information is incomplete";
            vec![
                Prerequisite::new(
                    Step::PersonalInfo,
                    INCOMPLETE,
                    RegistrationRecord::has_personal,
                ),
                Prerequisite::new(
                    Step::CourseSelection,
                    INCOMPLETE,
                    RegistrationRecord::has_courses,
                ),
                Prerequisite::new(Step::Pricing, INCOMPLETE, RegistrationRecord::has_plan),
            ]
        }
    }
}

/// Evaluate the entry guard of `step` once against `record`.
///
/// The first failing prerequisite wins, so a record missing several sections
/// redirects to the earliest step that fills one of them.
pub fn check_entry(step: Step, record: &RegistrationRecord) -> GuardOutcome {
    prerequisites(step)
        .into_iter()
        .find(|p| !p.guard.check(record))
        .map_or(GuardOutcome::Proceed, |p| {
            GuardOutcome::Redirect(PrerequisiteMissing {
                step,
                redirect_to: p.redirect_to,
                message: p.message.to_string(),
            })
        })
}
