//! In-memory navigation between steps.
//!
//! Behaves like browser history: `navigate_to` pushes, `replace` swaps the
//! current entry (used for guard redirects so "back" never lands on a step
//! the user was bounced from), and `navigate_back` pops.

use crate::core::{Step, StepHistory, StepTransition, TransitionKind};
use chrono::Utc;

#[derive(Clone, Debug)]
pub struct Navigator {
    stack: Vec<Step>,
    history: StepHistory,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Start at the first step.
    pub fn new() -> Self {
        Self {
            stack: vec![Step::PersonalInfo],
            history: StepHistory::new(),
        }
    }

    pub fn current(&self) -> Step {
        self.stack.last().copied().unwrap_or(Step::PersonalInfo)
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn history(&self) -> &StepHistory {
        &self.history
    }

    /// Push `to` onto the stack.
    pub fn navigate_to(&mut self, to: Step, kind: TransitionKind) {
        let from = self.current();
        self.stack.push(to);
        self.record(from, to, kind);
    }

    /// Replace the current entry with `to`.
    pub fn replace(&mut self, to: Step) {
        let from = self.current();
        match self.stack.last_mut() {
            Some(top) => *top = to,
            None => self.stack.push(to),
        }
        self.record(from, to, TransitionKind::Redirect);
    }

    /// Pop the current entry. Returns the step now current, or `None` when
    /// there is nothing to go back to.
    pub fn navigate_back(&mut self) -> Option<Step> {
        if !self.can_go_back() {
            return None;
        }
        let from = self.stack.pop()?;
        let to = self.current();
        self.record(from, to, TransitionKind::Back);
        Some(to)
    }

    fn record(&mut self, from: Step, to: Step, kind: TransitionKind) {
        self.history.push(StepTransition {
            from,
            to,
            kind,
            timestamp: Utc::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_personal_info_without_back() {
        let mut nav = Navigator::new();
        assert_eq!(nav.current(), Step::PersonalInfo);
        assert!(!nav.can_go_back());
        assert_eq!(nav.navigate_back(), None);
        assert!(nav.history().transitions().is_empty());
    }

    #[test]
    fn back_returns_to_previous_entry() {
        let mut nav = Navigator::new();
        nav.navigate_to(Step::CourseSelection, TransitionKind::Advance);
        nav.navigate_to(Step::Pricing, TransitionKind::Advance);

        assert_eq!(nav.navigate_back(), Some(Step::CourseSelection));
        assert_eq!(nav.current(), Step::CourseSelection);
        assert_eq!(nav.history().count(TransitionKind::Back), 1);
    }

    #[test]
    fn replace_does_not_grow_the_stack() {
        let mut nav = Navigator::new();
        nav.navigate_to(Step::Confirmation, TransitionKind::Jump);
        nav.replace(Step::PersonalInfo);

        assert_eq!(nav.current(), Step::PersonalInfo);
        assert_eq!(nav.navigate_back(), Some(Step::PersonalInfo));
        assert!(!nav.can_go_back());
        assert_eq!(nav.history().count(TransitionKind::Redirect), 1);
    }

    #[test]
    fn every_move_is_appended_to_history() {
        let mut nav = Navigator::new();
        for _ in 0..50 {
            nav.navigate_to(Step::CourseSelection, TransitionKind::Advance);
            nav.navigate_back();
        }

        assert_eq!(nav.history().transitions().len(), 100);
        assert_eq!(nav.history().count(TransitionKind::Back), 50);
        assert_eq!(nav.history().get_path().last(), Some(&Step::PersonalInfo));
    }
}
