//! Course selection step form.

use crate::catalog::COURSE_CATALOG;
use crate::core::Step;
use crate::record::{RegistrationRecord, RegistrationStore};
use crate::validation::{validate_courses, ValidationError};

/// Course-selection step. Pre-filled from the stored selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseSelectionForm {
    courses: Vec<String>,
}

impl CourseSelectionForm {
    pub fn from_record(record: &RegistrationRecord) -> Self {
        Self {
            courses: record.selected_courses.clone(),
        }
    }

    /// Courses offered on this step.
    pub fn catalog(&self) -> &'static [&'static str] {
        &COURSE_CATALOG
    }

    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    pub fn is_selected(&self, course: &str) -> bool {
        self.courses.iter().any(|c| c == course)
    }

    /// Check or uncheck `course`. Newly checked courses go to the end.
    pub fn toggle(&mut self, course: &str) {
        match self.courses.iter().position(|c| c == course) {
            Some(i) => {
                self.courses.remove(i);
            }
            None => self.courses.push(course.to_string()),
        }
    }

    pub fn set_courses(&mut self, courses: Vec<String>) {
        self.courses = courses;
    }

    /// Validate and replace the stored course selection.
    pub fn submit(&self, store: &mut RegistrationStore) -> Result<Step, ValidationError> {
        validate_courses(&self.courses)?;
        store.update_selected_courses(self.courses.clone());
        Ok(Step::Pricing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_from_stored_selection() {
        let mut store = RegistrationStore::new();
        store.update_selected_courses(vec!["Dev Ops".into()]);

        let form = CourseSelectionForm::from_record(store.record());
        assert!(form.is_selected("Dev Ops"));
        assert_eq!(form.catalog().len(), 7);
    }

    #[test]
    fn toggle_checks_and_unchecks() {
        let mut form = CourseSelectionForm::default();
        form.toggle("Machine Learning");
        form.toggle("Data Science");
        form.toggle("Machine Learning");

        assert_eq!(form.courses(), ["Data Science".to_string()]);
    }

    #[test]
    fn empty_selection_is_rejected_without_mutation() {
        let mut store = RegistrationStore::new();
        store.update_selected_courses(vec!["Dev Ops".into()]);
        let mut form = CourseSelectionForm::from_record(store.record());
        form.toggle("Dev Ops");

        assert_eq!(form.submit(&mut store), Err(ValidationError::NoCourses));
        assert_eq!(store.record().selected_courses, vec!["Dev Ops".to_string()]);
    }

    #[test]
    fn valid_selection_is_stored_in_order() {
        let mut store = RegistrationStore::new();
        let mut form = CourseSelectionForm::default();
        form.toggle("Machine Learning");
        form.toggle("Data Science");

        assert_eq!(form.submit(&mut store), Ok(Step::Pricing));
        assert_eq!(
            store.record().selected_courses,
            vec!["Machine Learning".to_string(), "Data Science".to_string()]
        );
    }
}
