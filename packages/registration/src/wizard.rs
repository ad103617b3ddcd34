//! # Step wizard — collects a [`UserRecord`] one field at a time
//!
//! The registration forms ask for name, phone and email on three consecutive
//! steps. [`Wizard`] holds the in-progress record and decides what happens when
//! the user presses "next" ([`Wizard::advance`]) or "back" ([`Wizard::retreat`]).
//!
//! ## States
//!
//! | State | Meaning |
//! |-------|---------|
//! | `Editing(step)` | The user is filling in `step`. |
//! | `ConfirmingTypeChange(existing)` | The person already signed up under the other category; waiting for [`confirm_type_change`](Wizard::confirm_type_change) or [`cancel_type_change`](Wizard::cancel_type_change). |
//! | `Finalized(mode)` | The record is committed to the [`Session`]; further input is ignored. |
//!
//! ## Completion
//!
//! Advancing past the email step validates the whole record, asks the
//! [`Registrar`] for duplicates, and then either blocks (same category), asks for
//! confirmation (other category) or finalizes. Finalizing stores the record in
//! the session and, for `interest` signups, submits it right away. `join`
//! signups are submitted later by [`crate::payment::confirm_payment`].
//!
//! A cleared duplicate check is remembered for the exact email/phone pair, so a
//! retry after a failed submission goes straight to submitting.
//!
//! ## Pending remote calls
//!
//! The UI works on a copy of the wizard while a remote call runs and calls
//! [`mark_pending`](Wizard::mark_pending) on the displayed copy; that copy then
//! answers [`Advance::Busy`] until the finished copy replaces it.

use crate::models::{Category, SubmissionRecord, UserRecord};
use crate::phone::format_phone;
use crate::registrar::{Registrar, SubmissionError};
use crate::schema::{validate_field, validate_present, validate_record, Field, ValidationError};
use crate::session::Session;

/// The three steps, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    Name,
    Phone,
    Email,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Name, Step::Phone, Step::Email];

    pub fn index(self) -> usize {
        match self {
            Step::Name => 0,
            Step::Phone => 1,
            Step::Email => 2,
        }
    }

    pub fn field(self) -> Field {
        match self {
            Step::Name => Field::Name,
            Step::Phone => Field::Phone,
            Step::Email => Field::Email,
        }
    }

    pub fn next(self) -> Option<Step> {
        match self {
            Step::Name => Some(Step::Phone),
            Step::Phone => Some(Step::Email),
            Step::Email => None,
        }
    }

    pub fn previous(self) -> Option<Step> {
        match self {
            Step::Name => None,
            Step::Phone => Some(Step::Name),
            Step::Email => Some(Step::Phone),
        }
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    fn of_field(field: Field) -> Step {
        match field {
            Field::Name => Step::Name,
            Field::Phone => Step::Phone,
            Field::Email => Step::Email,
        }
    }
}

/// When the finalized record reaches the remote store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionMode {
    /// Submitted as part of finalizing (`interest`).
    Immediate,
    /// Submitted by the payment screen once the transfer is confirmed (`join`).
    DeferredPendingPayment,
}

impl SubmissionMode {
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Interest => SubmissionMode::Immediate,
            Category::Join => SubmissionMode::DeferredPendingPayment,
        }
    }
}

/// A prior signup found under a different category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExistingSubmission {
    pub name: Option<String>,
    pub category: Option<Category>,
}

impl ExistingSubmission {
    /// Prompt shown in the confirmation dialog.
    pub fn prompt(&self, switching_to: Category) -> String {
        let who = self.name.as_deref().unwrap_or("This contact");
        match self.category {
            Some(existing) => format!(
                "{who} has already signed up for {}. Change it to {}?",
                existing.label(),
                switching_to.label()
            ),
            None => format!(
                "{who} has already signed up. Change it to {}?",
                switching_to.label()
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum WizardState {
    Editing(Step),
    ConfirmingTypeChange(ExistingSubmission),
    Finalized(SubmissionMode),
}

/// Result of a user action on the wizard.
#[derive(Clone, Debug, PartialEq)]
pub enum Advance {
    /// Moved to the given step.
    Moved(Step),
    /// The active field failed validation; the step did not change.
    Invalid(ValidationError),
    /// The person is already signed up under this form's category.
    AlreadyRegistered(Category),
    /// The person is signed up under the other category; confirmation needed.
    ConfirmTypeChange(ExistingSubmission),
    Finalized(SubmissionMode),
    /// Finalizing submitted the record and the store did not take it.
    SubmitFailed(SubmissionError),
    /// A remote call is pending.
    Busy,
    /// Nothing to do in the current state.
    Ignored,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Wizard {
    category: Category,
    record: UserRecord,
    state: WizardState,
    field_error: Option<ValidationError>,
    notice: Option<String>,
    /// Email/phone pair whose duplicate check has already cleared.
    cleared: Option<(String, String)>,
    in_flight: bool,
}

impl Wizard {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            record: UserRecord::default(),
            state: WizardState::Editing(Step::Name),
            field_error: None,
            notice: None,
            cleared: None,
            in_flight: false,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn mode(&self) -> SubmissionMode {
        SubmissionMode::for_category(self.category)
    }

    pub fn record(&self) -> &UserRecord {
        &self.record
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// The step shown on screen. The confirmation dialog sits on top of the last step.
    pub fn step(&self) -> Option<Step> {
        match self.state {
            WizardState::Editing(step) => Some(step),
            WizardState::ConfirmingTypeChange(_) => Some(Step::Email),
            WizardState::Finalized(_) => None,
        }
    }

    /// Validation error of the active field, set by the last `advance`.
    pub fn field_error(&self) -> Option<&ValidationError> {
        self.field_error.as_ref()
    }

    /// Blocking message for the user (already registered, submission failure).
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn is_finalized(&self) -> bool {
        matches!(self.state, WizardState::Finalized(_))
    }

    pub fn value(&self, field: Field) -> &str {
        field.get(&self.record)
    }

    /// Update a field from user input. Phone input is reformatted as typed.
    /// Ignored once finalized or while a remote call is pending.
    pub fn set_value(&mut self, field: Field, value: &str) {
        if self.is_finalized() || self.in_flight {
            return;
        }
        let value = match field {
            Field::Phone => format_phone(value),
            _ => value.to_string(),
        };
        if matches!(field, Field::Phone | Field::Email) && self.value(field) != value {
            self.cleared = None;
        }
        field.set(&mut self.record, value);
        if self.field_error.as_ref().is_some_and(|e| e.field == field) {
            self.field_error = None;
        }
        self.notice = None;
    }

    /// Whether the Enter shortcut may advance: editing, idle, active field valid.
    pub fn can_advance(&self) -> bool {
        match self.state {
            WizardState::Editing(step) if !self.in_flight => {
                validate_field(step.field(), self.value(step.field())).is_ok()
            }
            _ => false,
        }
    }

    /// Go back one step. Returns whether the step changed.
    pub fn retreat(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        let WizardState::Editing(step) = self.state else {
            return false;
        };
        match step.previous() {
            Some(previous) => {
                self.state = WizardState::Editing(previous);
                self.field_error = None;
                self.notice = None;
                true
            }
            None => false,
        }
    }

    /// Check the active field once the user leaves it. An empty field is not
    /// flagged until `advance` is attempted.
    pub fn blur(&mut self) {
        let WizardState::Editing(step) = self.state else {
            return;
        };
        let field = step.field();
        self.field_error = validate_present(&self.record).get(field).cloned();
    }

    /// Flag that a remote call for this wizard is running elsewhere.
    pub fn mark_pending(&mut self) {
        self.in_flight = true;
    }

    /// Validate the active step and move on; on the last step, run the
    /// completion sequence.
    pub async fn advance<R: Registrar>(&mut self, registrar: &R, session: &mut Session) -> Advance {
        if self.in_flight {
            return Advance::Busy;
        }
        let step = match &self.state {
            WizardState::Editing(step) => *step,
            WizardState::ConfirmingTypeChange(existing) => {
                return Advance::ConfirmTypeChange(existing.clone())
            }
            WizardState::Finalized(_) => return Advance::Ignored,
        };

        if let Err(e) = validate_field(step.field(), self.value(step.field())) {
            self.field_error = Some(e.clone());
            return Advance::Invalid(e);
        }
        self.field_error = None;

        match step.next() {
            Some(next) => {
                self.state = WizardState::Editing(next);
                self.notice = None;
                Advance::Moved(next)
            }
            None => self.complete(registrar, session).await,
        }
    }

    /// Accept switching an existing signup to this form's category.
    pub async fn confirm_type_change<R: Registrar>(
        &mut self,
        registrar: &R,
        session: &mut Session,
    ) -> Advance {
        if self.in_flight {
            return Advance::Busy;
        }
        if !matches!(self.state, WizardState::ConfirmingTypeChange(_)) {
            return Advance::Ignored;
        }
        self.state = WizardState::Editing(Step::Email);
        self.remember_cleared();
        self.finalize(registrar, session).await
    }

    /// Back out of the confirmation dialog; nothing else changes.
    pub fn cancel_type_change(&mut self) {
        if matches!(self.state, WizardState::ConfirmingTypeChange(_)) {
            self.state = WizardState::Editing(Step::Email);
        }
    }

    async fn complete<R: Registrar>(&mut self, registrar: &R, session: &mut Session) -> Advance {
        // Earlier steps may have been edited after they were passed.
        if !self.record.is_complete() {
            let errors = validate_record(&self.record).err().unwrap_or_default();
            if let Some(e) = Field::ALL.into_iter().find_map(|f| errors.get(f).cloned()) {
                self.state = WizardState::Editing(Step::of_field(e.field));
                self.field_error = Some(e.clone());
                return Advance::Invalid(e);
            }
        }

        if self.duplicate_cleared() {
            return self.finalize(registrar, session).await;
        }

        self.in_flight = true;
        let found = registrar
            .check_duplicate(&self.record.email, &self.record.phone)
            .await;
        self.in_flight = false;
        tracing::debug!(exists = found.exists, category = ?found.category, "duplicate check");

        if !found.exists {
            self.remember_cleared();
            return self.finalize(registrar, session).await;
        }

        if found.category == Some(self.category) {
            tracing::warn!(category = %self.category, "registration blocked: already signed up");
            self.notice = Some(format!(
                "You have already signed up for {}.",
                self.category.label()
            ));
            return Advance::AlreadyRegistered(self.category);
        }

        let existing = ExistingSubmission {
            name: found.name,
            category: found.category,
        };
        self.state = WizardState::ConfirmingTypeChange(existing.clone());
        Advance::ConfirmTypeChange(existing)
    }

    async fn finalize<R: Registrar>(&mut self, registrar: &R, session: &mut Session) -> Advance {
        let mode = self.mode();
        session.store(self.record.clone(), self.category);

        if mode == SubmissionMode::DeferredPendingPayment {
            tracing::info!(category = %self.category, "registration finalized, awaiting payment");
            self.state = WizardState::Finalized(mode);
            self.notice = None;
            return Advance::Finalized(mode);
        }

        let submission = SubmissionRecord::new(self.record.clone(), self.category, None);
        self.in_flight = true;
        let result = registrar.submit(&submission).await;
        self.in_flight = false;

        match result {
            Ok(outcome) => {
                tracing::info!(category = %self.category, ?outcome, "registration submitted");
                session.mark_submitted(outcome);
                self.state = WizardState::Finalized(mode);
                self.notice = None;
                Advance::Finalized(mode)
            }
            Err(e) => {
                tracing::error!(error = %e, "registration submission failed");
                self.state = WizardState::Editing(Step::Email);
                self.notice = Some(e.to_string());
                Advance::SubmitFailed(e)
            }
        }
    }

    fn remember_cleared(&mut self) {
        self.cleared = Some((self.record.email.clone(), self.record.phone.clone()));
    }

    fn duplicate_cleared(&self) -> bool {
        self.cleared
            .as_ref()
            .is_some_and(|(email, phone)| *email == self.record.email && *phone == self.record.phone)
    }
}
