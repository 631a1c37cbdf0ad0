//! The registration record accumulated across steps.
//!
//! The record has three sections, each owned by one step:
//! - `personal`: written by the personal-info step
//! - `selected_courses`: written by the course-selection step
//! - `pricing_plan`: written by the pricing step
//!
//! Sections are only ever replaced whole, through [`RegistrationStore`].

mod store;

pub use store::RegistrationStore;

use crate::catalog::PlanId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Names of the personal-info fields, in validation order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalField {
    FirstName,
    LastName,
    Email,
    Phone,
    CollegeName,
    Department,
    Year,
}

impl PersonalField {
    pub const ALL: [PersonalField; 7] = [
        PersonalField::FirstName,
        PersonalField::LastName,
        PersonalField::Email,
        PersonalField::Phone,
        PersonalField::CollegeName,
        PersonalField::Department,
        PersonalField::Year,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::CollegeName => "collegeName",
            Self::Department => "department",
            Self::Year => "year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Phone => "Phone Number",
            Self::CollegeName => "College Name",
            Self::Department => "Department",
            Self::Year => "Year",
        }
    }
}

impl fmt::Display for PersonalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Personal details collected on the first step.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub college_name: String,
    pub department: String,
    pub year: String,
}

impl PersonalInfo {
    pub fn get(&self, field: PersonalField) -> &str {
        match field {
            PersonalField::FirstName => &self.first_name,
            PersonalField::LastName => &self.last_name,
            PersonalField::Email => &self.email,
            PersonalField::Phone => &self.phone,
            PersonalField::CollegeName => &self.college_name,
            PersonalField::Department => &self.department,
            PersonalField::Year => &self.year,
        }
    }

    pub fn set(&mut self, field: PersonalField, value: impl Into<String>) {
        let slot = match field {
            PersonalField::FirstName => &mut self.first_name,
            PersonalField::LastName => &mut self.last_name,
            PersonalField::Email => &mut self.email,
            PersonalField::Phone => &mut self.phone,
            PersonalField::CollegeName => &mut self.college_name,
            PersonalField::Department => &mut self.department,
            PersonalField::Year => &mut self.year,
        };
        *slot = value.into();
    }

    /// `"first last"`, as shown on the confirmation screen.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// True when every field is empty (the initial state).
    pub fn is_empty(&self) -> bool {
        PersonalField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// The single shared registration record of a session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub personal: PersonalInfo,
    pub selected_courses: Vec<String>,
    pub pricing_plan: Option<PlanId>,
}

impl RegistrationRecord {
    /// Personal-info step completed. `firstName` stands in for the whole section.
    pub fn has_personal(&self) -> bool {
        !self.personal.first_name.is_empty()
    }

    pub fn has_courses(&self) -> bool {
        !self.selected_courses.is_empty()
    }

    pub fn has_plan(&self) -> bool {
        self.pricing_plan.is_some()
    }

    /// All three sections are present.
    pub fn is_complete(&self) -> bool {
        self.has_personal() && self.has_courses() && self.has_plan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_empty() {
        let record = RegistrationRecord::default();
        assert!(record.personal.is_empty());
        assert!(!record.has_personal());
        assert!(!record.has_courses());
        assert!(!record.has_plan());
        assert!(!record.is_complete());
    }

    #[test]
    fn field_accessors_address_the_right_slot() {
        let mut info = PersonalInfo::default();
        for (i, field) in PersonalField::ALL.into_iter().enumerate() {
            info.set(field, format!("v{i}"));
        }
        for (i, field) in PersonalField::ALL.into_iter().enumerate() {
            assert_eq!(info.get(field), format!("v{i}"));
        }
        assert_eq!(info.first_name, "v0");
        assert_eq!(info.year, "v6");
        assert_eq!(info.full_name(), "v0 v1");
    }

    #[test]
    fn record_serializes_with_camel_case_sections() {
        let record = RegistrationRecord {
            personal: PersonalInfo {
                first_name: "A".into(),
                ..Default::default()
            },
            selected_courses: vec!["Dev Ops".into()],
            pricing_plan: Some(PlanId::Advanced),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["personal"]["firstName"], "A");
        assert_eq!(value["selectedCourses"][0], "Dev Ops");
        assert_eq!(value["pricingPlan"], "advanced");
    }
}
