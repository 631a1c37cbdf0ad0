//! Validation rules for step submissions.
//!
//! Each rule set is a pure function over a step's local form data. Rules run
//! in a fixed order and stop at the first violation; the returned error's
//! `Display` text is the message shown to the user.

use crate::catalog::{is_catalog_course, PlanId};
use crate::payment::PaymentDetails;
use crate::record::{PersonalField, PersonalInfo};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));
static CARD_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{16}$").expect("card pattern is valid"));
static EXPIRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])/[0-9]{2}$").expect("expiry pattern is valid"));
static CVV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,4}$").expect("cvv pattern is valid"));

/// Payment form fields, in validation order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PaymentField {
    CardName,
    CardNumber,
    ExpiryDate,
    Cvv,
}

impl PaymentField {
    pub const ALL: [PaymentField; 4] = [
        PaymentField::CardName,
        PaymentField::CardNumber,
        PaymentField::ExpiryDate,
        PaymentField::Cvv,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::CardName => "cardName",
            Self::CardNumber => "cardNumber",
            Self::ExpiryDate => "expiryDate",
            Self::Cvv => "cvv",
        }
    }
}

/// First rule a submission violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingField { field: PersonalField },

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a valid 10-digit phone number")]
    InvalidPhone,

    #[error("Please select at least one course")]
    NoCourses,

    #[error("'{0}' is not an available course")]
    UnknownCourse(String),

    #[error("Please select a pricing plan")]
    NoPlan,

    #[error("'{0}' is not an available pricing plan")]
    UnknownPlan(String),

    #[error("Please fill in all payment fields")]
    MissingPaymentField { field: PaymentField },

    #[error("Please enter a valid 16-digit card number")]
    InvalidCardNumber,

    #[error("Please enter a valid expiry date (MM/YY)")]
    InvalidExpiry,

    #[error("Please enter a valid CVV (3 or 4 digits)")]
    InvalidCvv,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE.is_match(phone)
}

/// Card number with all whitespace removed.
pub fn normalize_card_number(number: &str) -> String {
    number.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn is_valid_card_number(number: &str) -> bool {
    CARD_NUMBER.is_match(&normalize_card_number(number))
}

pub fn is_valid_expiry(expiry: &str) -> bool {
    EXPIRY.is_match(expiry)
}

pub fn is_valid_cvv(cvv: &str) -> bool {
    CVV.is_match(cvv)
}

/// Personal-info rules: all fields present, then email shape, then phone.
pub fn validate_personal(info: &PersonalInfo) -> Result<(), ValidationError> {
    if let Some(field) = PersonalField::ALL
        .into_iter()
        .find(|f| info.get(*f).trim().is_empty())
    {
        return Err(ValidationError::MissingField { field });
    }
    if !is_valid_email(&info.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !is_valid_phone(&info.phone) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(())
}

/// Course rules: at least one course, every course from the catalog.
pub fn validate_courses(courses: &[String]) -> Result<(), ValidationError> {
    if courses.is_empty() {
        return Err(ValidationError::NoCourses);
    }
    match courses.iter().find(|c| !is_catalog_course(c)) {
        Some(unknown) => Err(ValidationError::UnknownCourse(unknown.clone())),
        None => Ok(()),
    }
}

/// Pricing rules: a non-empty identifier naming a catalog plan.
pub fn validate_plan(plan: &str) -> Result<PlanId, ValidationError> {
    if plan.is_empty() {
        return Err(ValidationError::NoPlan);
    }
    plan.parse::<PlanId>()
        .map_err(|e| ValidationError::UnknownPlan(e.0))
}

/// Payment rules: all fields present, then card number, expiry, CVV.
///
/// Presence is checked on the raw value; a whitespace-only card name counts
/// as present.
pub fn validate_payment(details: &PaymentDetails) -> Result<(), ValidationError> {
    if let Some(field) = PaymentField::ALL
        .into_iter()
        .find(|f| details.get(*f).is_empty())
    {
        return Err(ValidationError::MissingPaymentField { field });
    }
    if !is_valid_card_number(&details.card_number) {
        return Err(ValidationError::InvalidCardNumber);
    }
    if !is_valid_expiry(&details.expiry_date) {
        return Err(ValidationError::InvalidExpiry);
    }
    if !is_valid_cvv(&details.cvv) {
        return Err(ValidationError::InvalidCvv);
    }
    Ok(())
}
