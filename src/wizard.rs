//! A registration session.
//!
//! [`RegistrationWizard`] is the imperative shell around the pure core: it
//! owns the session's store, navigation, notifier and payment gateway, and
//! turns step controller outcomes into navigation and notifications.
//!
//! Entering a step always runs that step's entry guard first. A failing
//! guard replaces the step with the earliest one that supplies the missing
//! data and notifies the user; this repeats until a guard passes.

use crate::config::WizardConfig;
use crate::confirmation::{ConfirmationSummary, Order};
use crate::controller::{
    CourseSelectionForm, OrderSummary, PaymentForm, PersonalInfoForm, PricingForm,
};
use crate::core::{check_entry, GuardOutcome, Step, StepHistory, TransitionKind};
use crate::error::StepError;
use crate::navigation::Navigator;
use crate::notify::{Notification, Notifier, TracingNotifier};
use crate::payment::{PaymentGateway, SimulatedGateway};
use crate::record::{RegistrationRecord, RegistrationStore};
use uuid::Uuid;

const PAYMENT_SUCCESS_TITLE: &str = "Payment Successful";
const PAYMENT_SUCCESS_MESSAGE: &str = "Your registration is complete!";
const PAYMENT_FAILED_TITLE: &str = "Payment Failed";
const PAYMENT_FAILED_MESSAGE: &str =
    "There was an error processing your payment. Please try again.";

pub struct RegistrationWizard<G: PaymentGateway, N: Notifier> {
    session_id: Uuid,
    config: WizardConfig,
    store: RegistrationStore,
    navigator: Navigator,
    notifier: N,
    gateway: G,
    order: Option<Order>,
}

impl RegistrationWizard<SimulatedGateway, TracingNotifier> {
    /// Session backed by the simulated gateway, logging notifications.
    pub fn simulated(config: WizardConfig) -> Self {
        let gateway = SimulatedGateway::new(config.payment_delay());
        Self::new(gateway, TracingNotifier, config)
    }
}

impl<G: PaymentGateway, N: Notifier> RegistrationWizard<G, N> {
    /// Start a session on the personal-info step with an empty record.
    pub fn new(gateway: G, notifier: N, config: WizardConfig) -> Self {
        let session_id = Uuid::new_v4();
        tracing::info!(session = %session_id, "registration session started");
        Self {
            session_id,
            config,
            store: RegistrationStore::new(),
            navigator: Navigator::new(),
            notifier,
            gateway,
            order: None,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn current_step(&self) -> Step {
        self.navigator.current()
    }

    pub fn record(&self) -> &RegistrationRecord {
        self.store.record()
    }

    pub fn history(&self) -> &StepHistory {
        self.navigator.history()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    /// Navigate directly to `step` (e.g. a typed URL). Returns the step
    /// actually shown after entry guards ran.
    pub fn open(&mut self, step: Step) -> Step {
        if step != self.current_step() {
            self.navigator.navigate_to(step, TransitionKind::Jump);
        }
        self.mount()
    }

    /// Go back one entry in navigation history, re-running the entry guard.
    pub fn back(&mut self) -> Step {
        if self.navigator.navigate_back().is_none() {
            tracing::debug!(session = %self.session_id, "nothing to go back to");
        }
        self.mount()
    }

    /// "Back to Home" from confirmation. Stored data is kept.
    pub fn back_to_home(&mut self) -> Step {
        self.navigator
            .navigate_to(Step::PersonalInfo, TransitionKind::Jump);
        self.mount()
    }

    /// Tear the session down: empty record, fresh navigation.
    pub fn reset(&mut self) {
        tracing::info!(session = %self.session_id, "registration session reset");
        self.store.reset();
        self.navigator = Navigator::new();
        self.order = None;
    }

    pub fn personal_form(&self) -> PersonalInfoForm {
        PersonalInfoForm::new()
    }

    pub fn course_form(&self) -> CourseSelectionForm {
        CourseSelectionForm::from_record(self.store.record())
    }

    pub fn pricing_form(&self) -> PricingForm {
        PricingForm::from_record(self.store.record())
    }

    pub fn payment_form(&self) -> PaymentForm {
        PaymentForm::new()
    }

    pub fn order_summary(&self) -> OrderSummary {
        OrderSummary::from_record(self.store.record())
    }

    /// Summary for the confirmation step; `None` anywhere else.
    pub fn confirmation(&self) -> Option<ConfirmationSummary> {
        if self.current_step() != Step::Confirmation {
            return None;
        }
        let order = self.order.as_ref()?;
        Some(ConfirmationSummary::new(self.store.record(), order))
    }

    pub fn submit_personal(&mut self, form: &PersonalInfoForm) -> Result<Step, StepError> {
        self.expect_step(Step::PersonalInfo)?;
        let outcome = form.submit(&mut self.store);
        self.finish_submit(Step::PersonalInfo, outcome.map_err(StepError::from))
    }

    pub fn submit_courses(&mut self, form: &CourseSelectionForm) -> Result<Step, StepError> {
        self.expect_step(Step::CourseSelection)?;
        let outcome = form.submit(&mut self.store);
        self.finish_submit(Step::CourseSelection, outcome.map_err(StepError::from))
    }

    pub fn submit_pricing(&mut self, form: &PricingForm) -> Result<Step, StepError> {
        self.expect_step(Step::Pricing)?;
        let outcome = form.submit(&mut self.store);
        self.finish_submit(Step::Pricing, outcome.map_err(StepError::from))
    }

    /// Charge the gateway and, once approved, move to confirmation.
    ///
    /// A declined charge leaves the user on the payment step with the
    /// record untouched.
    pub async fn submit_payment(&mut self, form: &mut PaymentForm) -> Result<Step, StepError> {
        self.expect_step(Step::Payment)?;
        let duration = self.config.notification_duration();

        let outcome = form.submit(self.store.record(), &self.gateway).await;
        match outcome {
            Ok(receipt) => {
                tracing::info!(
                    session = %self.session_id,
                    transaction = %receipt.transaction_id,
                    amount = receipt.amount,
                    "payment approved"
                );
                self.order = Some(Order::new(Some(receipt)));
                self.notifier.notify(Notification::success(
                    PAYMENT_SUCCESS_TITLE,
                    PAYMENT_SUCCESS_MESSAGE,
                    duration,
                ));
                self.advance(Step::Payment);
                Ok(self.current_step())
            }
            Err(StepError::Payment(err)) => {
                tracing::error!(session = %self.session_id, error = %err, "payment failed");
                self.notifier.notify(
                    Notification::error(PAYMENT_FAILED_MESSAGE, duration)
                        .with_title(PAYMENT_FAILED_TITLE),
                );
                Err(StepError::Payment(err))
            }
            Err(err) => {
                self.reject(Step::Payment, &err);
                Err(err)
            }
        }
    }

    fn expect_step(&self, expected: Step) -> Result<(), StepError> {
        let current = self.current_step();
        if current == expected {
            Ok(())
        } else {
            Err(StepError::WrongStep { expected, current })
        }
    }

    fn finish_submit(
        &mut self,
        step: Step,
        outcome: Result<Step, StepError>,
    ) -> Result<Step, StepError> {
        match outcome {
            Ok(_) => {
                // Any order was placed against the record as it was before this merge.
                if let Some(stale) = self.order.take() {
                    tracing::info!(
                        session = %self.session_id,
                        order = %stale.order_id,
                        "record changed, order discarded"
                    );
                }
                self.advance(step);
                Ok(self.current_step())
            }
            Err(err) => {
                self.reject(step, &err);
                Err(err)
            }
        }
    }

    fn reject(&mut self, step: Step, err: &StepError) {
        tracing::debug!(session = %self.session_id, step = %step, reason = %err, "submit rejected");
        let duration = self.config.notification_duration();
        self.notifier
            .notify(Notification::error(err.to_string(), duration));
    }

    /// The store merge has already happened when this runs.
    fn advance(&mut self, from: Step) {
        let Some(next) = from.next() else {
            return;
        };
        tracing::info!(session = %self.session_id, from = %from, to = %next, "step completed");
        self.navigator.navigate_to(next, TransitionKind::Advance);
        self.mount();
    }

    /// Run entry guards for the current step until one passes.
    fn mount(&mut self) -> Step {
        loop {
            let step = self.current_step();
            match check_entry(step, self.store.record()) {
                GuardOutcome::Proceed => break,
                GuardOutcome::Redirect(missing) => {
                    tracing::warn!(
                        session = %self.session_id,
                        step = %missing.step,
                        redirect_to = %missing.redirect_to,
                        "prerequisite missing"
                    );
                    self.navigator.replace(missing.redirect_to);
                    self.notifier.notify(Notification::error(
                        missing.message,
                        self.config.notification_duration(),
                    ));
                }
            }
        }

        let step = self.current_step();
        if step == Step::Confirmation && self.order.is_none() {
            self.order = Some(Order::new(None));
        }
        tracing::debug!(session = %self.session_id, step = %step, "step entered");
        step
    }
}
