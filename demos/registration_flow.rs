//! Course Registration Walkthrough
//!
//! This example drives one registration session from start to finish.
//!
//! Key concepts:
//! - Entry guards bouncing a user who skips ahead
//! - Validation rejecting a malformed submit
//! - The simulated payment gateway
//! - The confirmation summary
//!
//! Run with: RUST_LOG=debug cargo run --example registration_flow

use registration_wizard::record::PersonalField;
use registration_wizard::validation::PaymentField;
use registration_wizard::{RegistrationWizard, Step, WizardConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Course Registration ===\n");

    let config = WizardConfig {
        payment_delay_ms: 500,
        ..WizardConfig::default()
    };
    let mut wizard = RegistrationWizard::simulated(config);

    // Skipping ahead is not allowed
    let landed = wizard.open(Step::Payment);
    println!("Tried to open payment, landed on: {landed}");

    // Step 1: a typo in the phone number first
    let mut personal = wizard.personal_form();
    for (field, value) in [
        (PersonalField::FirstName, "A"),
        (PersonalField::LastName, "B"),
        (PersonalField::Email, "a@b.co"),
        (PersonalField::Phone, "987654321"),
        (PersonalField::CollegeName, "X"),
        (PersonalField::Department, "CS"),
        (PersonalField::Year, "2"),
    ] {
        personal.set_field(field, value);
    }
    if let Err(err) = wizard.submit_personal(&personal) {
        println!("Rejected: {err}");
    }
    personal.set_field(PersonalField::Phone, "9876543210");
    let step = wizard.submit_personal(&personal).expect("personal info is valid");
    println!("Personal info saved, now on: {step}");

    // Step 2
    let mut courses = wizard.course_form();
    courses.toggle("Machine Learning");
    courses.toggle("Data Science");
    let step = wizard.submit_courses(&courses).expect("courses are valid");
    println!("Courses saved, now on: {step}");

    // Step 3
    let mut pricing = wizard.pricing_form();
    for plan in pricing.plans() {
        println!("  {:<12} ₹{:<6} {}", plan.name, plan.price, plan.description);
    }
    pricing.select("mentor-led");
    let step = wizard.submit_pricing(&pricing).expect("plan is valid");
    println!("Plan saved, now on: {step}");

    // Step 4
    let summary = wizard.order_summary();
    println!(
        "Order: {} course(s) [{}], {} plan, total ₹{}",
        summary.course_count, summary.courses, summary.plan_name, summary.total
    );
    let mut payment = wizard.payment_form();
    payment.set_field(PaymentField::CardName, "A B");
    payment.set_field(PaymentField::CardNumber, "4111 1111 1111 1111");
    payment.set_field(PaymentField::ExpiryDate, "12/29");
    payment.set_field(PaymentField::Cvv, "123");

    println!("Processing payment...");
    match wizard.submit_payment(&mut payment).await {
        Ok(step) => println!("Payment done, now on: {step}\n"),
        Err(err) => {
            println!("Payment failed: {err}");
            return;
        }
    }

    // Step 5
    if let Some(confirmation) = wizard.confirmation() {
        println!("{confirmation}");
    }

    println!(
        "\nPath: {:?}",
        wizard
            .history()
            .get_path()
            .iter()
            .map(Step::name)
            .collect::<Vec<_>>()
    );
}
