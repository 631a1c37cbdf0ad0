//! Pricing plan step form.

use crate::catalog::{PlanId, PricingPlan, PRICING_PLANS};
use crate::core::Step;
use crate::record::{RegistrationRecord, RegistrationStore};
use crate::validation::{validate_plan, ValidationError};

/// Pricing step. Starts from the stored plan, or `self-paced` when none is stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricingForm {
    plan: String,
}

impl PricingForm {
    pub const DEFAULT_PLAN: PlanId = PlanId::SelfPaced;

    pub fn from_record(record: &RegistrationRecord) -> Self {
        let plan = record.pricing_plan.unwrap_or(Self::DEFAULT_PLAN);
        Self {
            plan: plan.as_str().to_string(),
        }
    }

    pub fn plans(&self) -> &'static [PricingPlan] {
        &PRICING_PLANS
    }

    /// Currently highlighted plan identifier (may be empty or unknown).
    pub fn plan(&self) -> &str {
        &self.plan
    }

    pub fn select(&mut self, plan: impl Into<String>) {
        self.plan = plan.into();
    }

    /// Validate and replace the stored plan.
    pub fn submit(&self, store: &mut RegistrationStore) -> Result<Step, ValidationError> {
        let plan = validate_plan(&self.plan)?;
        store.update_pricing_plan(plan);
        Ok(Step::Payment)
    }
}
