//! Step navigation history.
//!
//! Every move between steps is recorded with its cause, so a session can
//! be audited afterwards (how often was the user bounced by a guard, how
//! long did the flow take).

use super::step::Step;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Why a navigation happened.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionKind {
    /// A valid submit moved the flow forward.
    Advance,
    /// An entry guard replaced the requested step with an earlier one.
    Redirect,
    /// The user went back in navigation history.
    Back,
    /// Direct navigation, e.g. "Back to Home" from confirmation.
    Jump,
}

/// Record of a single step change.
///
/// # Example
///
/// ```rust
/// use registration_wizard::core::{Step, StepTransition, TransitionKind};
/// use chrono::Utc;
///
/// let transition = StepTransition {
///     from: Step::PersonalInfo,
///     to: Step::CourseSelection,
///     kind: TransitionKind::Advance,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, Step::CourseSelection);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepTransition {
    pub from: Step,
    pub to: Step,
    pub kind: TransitionKind,
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of step changes.
///
/// `record` returns a new history and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use registration_wizard::core::{Step, StepHistory, StepTransition, TransitionKind};
/// use chrono::Utc;
///
/// let history = StepHistory::new().record(StepTransition {
///     from: Step::PersonalInfo,
///     to: Step::CourseSelection,
///     kind: TransitionKind::Advance,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path(), vec![Step::PersonalInfo, Step::CourseSelection]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StepHistory {
    transitions: Vec<StepTransition>,
}

impl StepHistory {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StepTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    pub fn push(&mut self, transition: StepTransition) {
        self.transitions.push(transition);
    }

    /// Steps visited in order: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<Step> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Time between the first and last recorded transition.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Number of transitions of the given kind.
    pub fn count(&self, kind: TransitionKind) -> usize {
        self.transitions.iter().filter(|t| t.kind == kind).count()
    }

    pub fn transitions(&self) -> &[StepTransition] {
        &self.transitions
    }
}
