//! Personal-info step form.

use crate::catalog::YEAR_OPTIONS;
use crate::core::Step;
use crate::record::{PersonalField, PersonalInfo, RegistrationStore};
use crate::validation::{validate_personal, ValidationError};

/// Personal-info step. Starts empty every time the step is shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PersonalInfoForm {
    fields: PersonalInfo,
}

impl PersonalInfoForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &PersonalInfo {
        &self.fields
    }

    /// `(value, label)` pairs offered for the year field.
    pub fn year_options(&self) -> &'static [(&'static str, &'static str)] {
        &YEAR_OPTIONS
    }

    pub fn set_field(&mut self, field: PersonalField, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// Validate and replace the stored personal section.
    pub fn submit(&self, store: &mut RegistrationStore) -> Result<Step, ValidationError> {
        validate_personal(&self.fields)?;
        store.update_personal(self.fields.clone());
        Ok(Step::CourseSelection)
    }
}

impl From<PersonalInfo> for PersonalInfoForm {
    fn from(fields: PersonalInfo) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PersonalInfoForm {
        let mut form = PersonalInfoForm::new();
        for (field, value) in [
            (PersonalField::FirstName, "A"),
            (PersonalField::LastName, "B"),
            (PersonalField::Email, "a@b.co"),
            (PersonalField::Phone, "9876543210"),
            (PersonalField::CollegeName, "X"),
            (PersonalField::Department, "CS"),
            (PersonalField::Year, "2"),
        ] {
            form.set_field(field, value);
        }
        form
    }

    #[test]
    fn edits_do_not_touch_the_store() {
        let store = RegistrationStore::new();
        let _form = filled();
        assert!(store.record().personal.is_empty());
    }

    #[test]
    fn valid_submit_stores_exact_fields() {
        let mut store = RegistrationStore::new();
        let form = filled();

        assert_eq!(form.submit(&mut store), Ok(Step::CourseSelection));
        assert_eq!(&store.record().personal, form.fields());
    }

    #[test]
    fn year_is_offered_as_one_to_four() {
        let values: Vec<_> = PersonalInfoForm::new()
            .year_options()
            .iter()
            .map(|(value, _)| *value)
            .collect();
        assert_eq!(values, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn invalid_submit_leaves_store_unchanged() {
        let mut store = RegistrationStore::new();
        let mut form = filled();
        form.set_field(PersonalField::Phone, "123");

        assert_eq!(form.submit(&mut store), Err(ValidationError::InvalidPhone));
        assert!(store.record().personal.is_empty());
    }
}
