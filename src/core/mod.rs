//! Core registration flow types and logic.
//!
//! This module contains the pure part of the wizard:
//! - The ordered set of steps via [`Step`]
//! - Entry guards that decide whether a step may be entered
//! - Immutable navigation history
//!
//! Nothing here performs I/O or touches the session store.

mod guard;
mod history;
mod step;

pub use guard::{
    check_entry, prerequisites, Guard, GuardOutcome, Prerequisite, PrerequisiteMissing,
};
pub use history::{StepHistory, StepTransition, TransitionKind};
pub use step::Step;
