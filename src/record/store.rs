//! Registration state store.

use super::{PersonalInfo, RegistrationRecord};
use crate::catalog::PlanId;

/// Holds the session's registration record.
///
/// The store performs no validation: callers validate before merging. Every
/// update replaces one section whole and is visible to the next reader.
/// There is exactly one store per session; it is created empty and handed
/// to step controllers explicitly.
#[derive(Clone, Debug, Default)]
pub struct RegistrationStore {
    record: RegistrationRecord,
}

impl RegistrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot of the record.
    pub fn record(&self) -> &RegistrationRecord {
        &self.record
    }

    pub fn update_personal(&mut self, personal: PersonalInfo) {
        self.record.personal = personal;
    }

    pub fn update_selected_courses(&mut self, courses: Vec<String>) {
        self.record.selected_courses = courses;
    }

    pub fn update_pricing_plan(&mut self, plan: PlanId) {
        self.record.pricing_plan = Some(plan);
    }

    /// Drop everything collected so far. Used on session teardown.
    pub fn reset(&mut self) {
        self.record = RegistrationRecord::default();
    }
}
