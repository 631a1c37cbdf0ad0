//! The registration steps and their fixed linear order.
//!
//! Steps are plain values: they know their position in the flow, their
//! route and their title, and nothing about the data collected so far.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One screen of the registration flow.
///
/// The flow is strictly linear:
/// `PersonalInfo -> CourseSelection -> Pricing -> Payment -> Confirmation`.
///
/// # Example
///
/// ```rust
/// use registration_wizard::core::Step;
///
/// assert_eq!(Step::PersonalInfo.next(), Some(Step::CourseSelection));
/// assert_eq!(Step::Confirmation.next(), None);
/// assert!(Step::Confirmation.is_final());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    PersonalInfo,
    CourseSelection,
    Pricing,
    Payment,
    Confirmation,
}

impl Step {
    /// All steps in flow order.
    pub const ORDER: [Step; 5] = [
        Step::PersonalInfo,
        Step::CourseSelection,
        Step::Pricing,
        Step::Payment,
        Step::Confirmation,
    ];

    /// Stable identifier used in logs and serialized history.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "personal-info",
            Self::CourseSelection => "course-selection",
            Self::Pricing => "pricing",
            Self::Payment => "payment",
            Self::Confirmation => "confirmation",
        }
    }

    /// Route path the step is mounted at.
    pub fn route(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "/",
            Self::CourseSelection => "/select-courses",
            Self::Pricing => "/pricing",
            Self::Payment => "/payment",
            Self::Confirmation => "/confirmation",
        }
    }

    /// Heading shown on the step's screen.
    pub fn title(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Course Registration",
            Self::CourseSelection => "Select CSE Courses",
            Self::Pricing => "Choose Your Pricing Plan",
            Self::Payment => "Payment Details",
            Self::Confirmation => "Payment Successful!",
        }
    }

    /// Zero-based position in [`Step::ORDER`].
    pub fn index(&self) -> usize {
        match self {
            Self::PersonalInfo => 0,
            Self::CourseSelection => 1,
            Self::Pricing => 2,
            Self::Payment => 3,
            Self::Confirmation => 4,
        }
    }

    /// The step a valid submit advances to, `None` for the terminal step.
    pub fn next(&self) -> Option<Step> {
        Self::ORDER.get(self.index() + 1).copied()
    }

    /// The step before this one in flow order.
    pub fn previous(&self) -> Option<Step> {
        self.index().checked_sub(1).map(|i| Self::ORDER[i])
    }

    /// Confirmation is the only terminal step.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Confirmation)
    }

    /// Look a step up by its route path.
    pub fn from_route(route: &str) -> Option<Step> {
        Self::ORDER.into_iter().find(|s| s.route() == route)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
