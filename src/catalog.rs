//! Static course and pricing catalogs.
//!
//! Both catalogs are defined once and never change during a session. The
//! pricing, payment and confirmation steps all read plan details from here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selectable courses, in display order.
pub const COURSE_CATALOG: [&str; 7] = [
    "Artificial Intelligence",
    "Machine Learning",
    "Web Development",
    "Data Science",
    "Cyber Security",
    "Cloud Computing",
    "Dev Ops",
];

/// Options offered for the personal-info `year` field.
pub const YEAR_OPTIONS: [(&str, &str); 4] = [
    ("1", "1st Year"),
    ("2", "2nd Year"),
    ("3", "3rd Year"),
    ("4", "4th Year"),
];

/// Whether `course` is one of the catalog entries (exact match).
pub fn is_catalog_course(course: &str) -> bool {
    COURSE_CATALOG.contains(&course)
}

/// Pricing tier identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanId {
    SelfPaced,
    MentorLed,
    Advanced,
}

impl PlanId {
    pub const ALL: [PlanId; 3] = [PlanId::SelfPaced, PlanId::MentorLed, PlanId::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelfPaced => "self-paced",
            Self::MentorLed => "mentor-led",
            Self::Advanced => "advanced",
        }
    }

    /// Catalog entry for this plan.
    pub fn plan(&self) -> &'static PricingPlan {
        match self {
            Self::SelfPaced => &PRICING_PLANS[0],
            Self::MentorLed => &PRICING_PLANS[1],
            Self::Advanced => &PRICING_PLANS[2],
        }
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no catalog plan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pricing plan '{0}'")]
pub struct UnknownPlan(pub String);

impl FromStr for PlanId {
    type Err = UnknownPlan;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlanId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownPlan(s.to_string()))
    }
}

/// A pricing tier with its display data. Prices are whole rupees.
#[derive(Debug, PartialEq, Eq)]
pub struct PricingPlan {
    pub id: PlanId,
    pub name: &'static str,
    pub price: u32,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub static PRICING_PLANS: [PricingPlan; 3] = [
    PricingPlan {
        id: PlanId::SelfPaced,
        name: "Self-paced",
        price: 3500,
        description: "Learn at your own pace with access to all course materials",
        features: &[
            "24/7 access to course content",
            "Quizzes and assignments",
            "Discussion forum access",
        ],
    },
    PricingPlan {
        id: PlanId::MentorLed,
        name: "Mentor Led",
        price: 5000,
        description: "Get guidance from industry experts while learning",
        features: &[
            "All Self-paced features",
            "Weekly mentor sessions",
            "Assignment feedback",
            "Career guidance",
        ],
    },
    PricingPlan {
        id: PlanId::Advanced,
        name: "Advanced",
        price: 9000,
        description: "Complete learning experience with advanced features",
        features: &[
            "All Mentor Led features",
            "Capstone project",
            "Job placement assistance",
            "Certificate of completion",
            "Industry connections",
        ],
    },
];

/// Display name and price for a possibly-unselected plan.
///
/// An unselected plan summarises as `"Unknown"` at price `0`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDetails {
    pub name: String,
    pub price: u32,
}

impl PlanDetails {
    pub fn for_plan(plan: Option<PlanId>) -> Self {
        match plan {
            Some(id) => {
                let plan = id.plan();
                Self {
                    name: plan.name.to_string(),
                    price: plan.price,
                }
            }
            None => Self {
                name: "Unknown".to_string(),
                price: 0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_ids_parse_from_identifiers() {
        assert_eq!("self-paced".parse::<PlanId>(), Ok(PlanId::SelfPaced));
        assert_eq!("mentor-led".parse::<PlanId>(), Ok(PlanId::MentorLed));
        assert_eq!("advanced".parse::<PlanId>(), Ok(PlanId::Advanced));
        assert_eq!(
            "gold".parse::<PlanId>(),
            Err(UnknownPlan("gold".to_string()))
        );
        assert!("".parse::<PlanId>().is_err());
    }

    #[test]
    fn plan_lookup_matches_catalog_entry() {
        for id in PlanId::ALL {
            assert_eq!(id.plan().id, id);
        }
        assert_eq!(PlanId::MentorLed.plan().name, "Mentor Led");
        assert_eq!(PlanId::MentorLed.plan().price, 5000);
        assert_eq!(PlanId::SelfPaced.plan().price, 3500);
        assert_eq!(PlanId::Advanced.plan().price, 9000);
    }

    #[test]
    fn unselected_plan_summarises_as_unknown() {
        let details = PlanDetails::for_plan(None);
        assert_eq!(details.name, "Unknown");
        assert_eq!(details.price, 0);
    }

    #[test]
    fn catalog_courses_are_exact_matches() {
        assert!(is_catalog_course("Machine Learning"));
        assert!(!is_catalog_course("machine learning"));
        assert!(!is_catalog_course("Quantum Basket Weaving"));
    }

    #[test]
    fn plan_id_serializes_as_identifier() {
        let json = serde_json::to_string(&PlanId::MentorLed).unwrap();
        assert_eq!(json, "\"mentor-led\"");
    }
}
