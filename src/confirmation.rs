//! Confirmation summary shown at the end of the flow.

use crate::catalog::PlanDetails;
use crate::payment::PaymentReceipt;
use crate::record::RegistrationRecord;
use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A placed order: its public id and, once paid, the gateway receipt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub placed_at: DateTime<Utc>,
    pub receipt: Option<PaymentReceipt>,
}

impl Order {
    pub fn new(receipt: Option<PaymentReceipt>) -> Self {
        let placed_at = receipt.as_ref().map_or_else(Utc::now, |r| r.paid_at);
        Self {
            order_id: generate_order_id(),
            placed_at,
            receipt,
        }
    }
}

/// `ORD-` followed by six random digits.
pub fn generate_order_id() -> String {
    let n: u32 = rand::thread_rng().gen_range(100_000..=999_999);
    format!("ORD-{n}")
}

/// Everything the confirmation step displays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationSummary {
    pub order_id: String,
    pub order_date: NaiveDate,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub college: String,
    pub department: String,
    pub year: String,
    pub courses: Vec<String>,
    pub plan_name: String,
    pub amount_paid: u32,
    pub status: String,
}

impl ConfirmationSummary {
    pub fn new(record: &RegistrationRecord, order: &Order) -> Self {
        let plan = PlanDetails::for_plan(record.pricing_plan);
        let personal = &record.personal;
        Self {
            order_id: order.order_id.clone(),
            order_date: order.placed_at.date_naive(),
            name: personal.full_name(),
            email: personal.email.clone(),
            phone: personal.phone.clone(),
            college: personal.college_name.clone(),
            department: personal.department.clone(),
            year: personal.year.clone(),
            courses: record.selected_courses.clone(),
            plan_name: plan.name,
            amount_paid: order.receipt.as_ref().map_or(plan.price, |r| r.amount),
            status: "Paid".to_string(),
        }
    }

    pub fn email_notice(&self) -> String {
        format!(
            "A confirmation email has been sent to {}. If you have any questions about your registration, please contact our support team.",
            self.email
        )
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ConfirmationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order Confirmation    Order ID: {}", self.order_id)?;
        writeln!(f)?;
        writeln!(f, "Personal Information")?;
        writeln!(f, "  Name:        {}", self.name)?;
        writeln!(f, "  Email:       {}", self.email)?;
        writeln!(f, "  Phone:       {}", self.phone)?;
        writeln!(f, "  College:     {}", self.college)?;
        writeln!(f, "  Department:  {}", self.department)?;
        writeln!(f, "  Year:        {}", self.year)?;
        writeln!(f)?;
        writeln!(f, "Course Details")?;
        for course in &self.courses {
            writeln!(f, "  Course:      {course}")?;
        }
        writeln!(f, "  Plan:        {}", self.plan_name)?;
        writeln!(f)?;
        writeln!(f, "Payment Information")?;
        writeln!(f, "  Amount Paid: ₹{}", self.amount_paid)?;
        writeln!(f, "  Date:        {}", self.order_date)?;
        writeln!(f, "  Status:      {}", self.status)?;
        writeln!(f)?;
        write!(f, "{}", self.email_notice())
    }
}
