//! Form sessions: drafts wired to autosave and submission.

use std::collections::BTreeMap;
use std::sync::Arc;

use formkit::{FormDraft, FormSession, StepCheck, StepStatus, ValidationResult};
use log::{debug, warn};

use crate::client::SubmitClient;
use crate::error::SubmitError;
use crate::forms::{contact, intake};
use crate::store::{DraftStore, INTAKE_DRAFT_KEY};

/// Outcome of the most recent autosave attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutosaveStatus {
    /// Nothing saved yet this session.
    #[default]
    Idle,
    /// The last save landed.
    Saved,
    /// The last save failed; the form keeps working without autosave.
    Failed,
}

/// How a submit attempt resolved, short of a transport-level error.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// The endpoint accepted the submission; draft cleared, form reset.
    Accepted,
    /// Validation blocked the submission. The session has rewound to the
    /// failing step.
    Rejected {
        /// Step the session rewound to.
        step: usize,
        /// What failed there.
        result: ValidationResult,
    },
}

impl SubmitOutcome {
    /// Whether the submission was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// One user's pass through the multi-step intake form.
///
/// Owns the step state machine, autosaves the draft to a [`DraftStore`]
/// on every mutation, and submits through a [`SubmitClient`]. Surfaced
/// field errors live in an explicit field → message map that renderers
/// consume; editing a field clears its surfaced error, the way inline
/// errors disappear once the user starts fixing them.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(FileStore::default_location()?);
/// let client = SubmitClient::builder().endpoint(intake::DEFAULT_ENDPOINT).build();
/// let mut session = IntakeSession::new(store, client);
/// session.restore();
///
/// session.set_text(intake::fields::FULL_NAME, "Ada Lovelace");
/// if session.advance().is_valid() {
///     // render step 2
/// }
/// ```
pub struct IntakeSession {
    inner: FormSession,
    store: Arc<dyn DraftStore>,
    client: SubmitClient,
    draft_key: String,
    autosave: AutosaveStatus,
    errors: BTreeMap<String, String>,
}

impl IntakeSession {
    /// Create a fresh session at step 1 with an empty draft.
    pub fn new(store: Arc<dyn DraftStore>, client: SubmitClient) -> Self {
        let steps: Vec<StepCheck> = (1..=intake::STEP_COUNT)
            .map(|step| {
                Box::new(move |draft: &FormDraft| intake::validate_step(draft, step))
                    as StepCheck
            })
            .collect();

        Self {
            inner: FormSession::new(steps),
            store,
            client,
            draft_key: INTAKE_DRAFT_KEY.to_string(),
            autosave: AutosaveStatus::default(),
            errors: BTreeMap::new(),
        }
    }

    /// Repopulate the draft from a stored autosave, if one exists.
    ///
    /// Missing or malformed stored data leaves the form empty; the
    /// session always starts at step 1 either way.
    pub fn restore(&mut self) {
        match self.store.load(&self.draft_key) {
            Ok(Some(draft)) => {
                debug!("restored intake draft with {} fields", draft.len());
                self.inner.restore(draft);
            }
            Ok(None) => {}
            Err(e) => {
                debug!("ignoring unreadable intake draft: {e}");
            }
        }
    }

    /// The draft being filled in.
    pub fn draft(&self) -> &FormDraft {
        self.inner.draft()
    }

    /// 1-based index of the current step.
    pub fn current_step(&self) -> usize {
        self.inner.current_step()
    }

    /// Title of the current step.
    pub fn current_step_title(&self) -> &'static str {
        intake::STEP_TITLES[self.inner.current_step() - 1]
    }

    /// Status of every step, for progress indicators.
    pub fn progress(&self) -> Vec<StepStatus> {
        self.inner.progress()
    }

    /// Outcome of the most recent autosave attempt.
    pub fn autosave_status(&self) -> AutosaveStatus {
        self.autosave
    }

    /// Surfaced field errors, keyed by field identifier.
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Surfaced error for one field, if any.
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Set a text field (inputs, textareas, selects, radio groups).
    pub fn set_text(&mut self, field: &str, value: impl Into<String>) {
        self.touch(field);
        self.inner.draft_mut().set_text(field, value);
        self.autosave();
    }

    /// Set a single checkbox.
    pub fn set_flag(&mut self, field: &str, value: bool) {
        self.touch(field);
        self.inner.draft_mut().set_bool(field, value);
        self.autosave();
    }

    /// Check or uncheck one member of a checkbox group.
    ///
    /// Unchecking the "Other" concern also discards its elaboration
    /// text, so a hidden field never lingers in the draft.
    pub fn toggle_choice(&mut self, field: &str, member: &str, on: bool) {
        self.touch(field);
        self.inner.draft_mut().toggle_member(field, member, on);

        if field == intake::fields::CONCERNS && member == intake::choices::CONCERN_OTHER && !on {
            self.inner.draft_mut().remove(intake::fields::CONCERN_OTHER_TEXT);
        }

        self.autosave();
    }

    /// Validate the current step and move forward on success. Failures
    /// surface per-field errors and keep the position; a passing pass
    /// clears any errors the step had previously surfaced.
    pub fn advance(&mut self) -> ValidationResult {
        let step = self.inner.current_step();
        let result = self.inner.advance();
        self.resurface(intake::step_fields(step), &result);
        result
    }

    /// Move backward one step. Never validates.
    pub fn retreat(&mut self) {
        self.inner.retreat();
    }

    /// Validate everything and, if the form holds up, submit it.
    ///
    /// Re-validates all four steps in order; the first failing step
    /// rewinds the session there and reports [`SubmitOutcome::Rejected`].
    /// Then the contact-method gate runs, rewinding to step 1 on
    /// violation. Only a fully valid form reaches the network, once.
    ///
    /// On acceptance the stored draft is removed and the session resets
    /// to an empty step 1. On [`SubmitError`] the draft is left intact
    /// for a retry.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        if let Err(failure) = self.inner.validate_all() {
            self.inner.go_to(failure.step);
            self.resurface(intake::step_fields(failure.step), &failure.result);
            return Ok(SubmitOutcome::Rejected {
                step: failure.step,
                result: failure.result,
            });
        }

        // The gate reports against step 1's contact fields.
        let gate = intake::validate_contact_methods(self.inner.draft());
        if gate.is_invalid() {
            self.inner.go_to(1);
            self.resurface(intake::step_fields(1), &gate);
            return Ok(SubmitOutcome::Rejected { step: 1, result: gate });
        }

        // Honeypot: pretend to accept, send nothing.
        if intake::is_spam(self.inner.draft()) {
            debug!("intake honeypot tripped; dropping submission");
            self.finish_accepted();
            return Ok(SubmitOutcome::Accepted);
        }

        let payload = intake::IntakePayload::from_draft(self.inner.draft());
        self.client.submit(&payload).await?;

        self.finish_accepted();
        Ok(SubmitOutcome::Accepted)
    }

    /// Drop the stored draft and reset the form to an empty step 1.
    pub fn clear_draft(&mut self) {
        if let Err(e) = self.store.clear(&self.draft_key) {
            warn!("failed to clear intake draft: {e}");
        }
        self.inner.reset();
        self.errors.clear();
        self.autosave = AutosaveStatus::Idle;
    }

    fn finish_accepted(&mut self) {
        if let Err(e) = self.store.clear(&self.draft_key) {
            warn!("failed to clear intake draft after submit: {e}");
        }
        self.inner.reset();
        self.errors.clear();
        self.autosave = AutosaveStatus::Idle;
    }

    /// Best-effort save of the whole draft. Never interrupts the user.
    fn autosave(&mut self) {
        match self.store.save(&self.draft_key, self.inner.draft()) {
            Ok(()) => self.autosave = AutosaveStatus::Saved,
            Err(e) => {
                warn!("intake autosave failed: {e}");
                self.autosave = AutosaveStatus::Failed;
            }
        }
    }

    /// Editing a field clears its surfaced error.
    fn touch(&mut self, field: &str) {
        self.errors.remove(field);
    }

    /// A validation pass replaces the surfaced errors for the fields it
    /// covers, so a message never outlives the condition that produced
    /// it.
    fn resurface(&mut self, fields: &[&str], result: &ValidationResult) {
        for field in fields {
            self.errors.remove(*field);
        }
        for error in result.errors() {
            self.errors.insert(error.field.clone(), error.message.clone());
        }
    }
}

/// The single-step contact form: validate, submit, reset.
///
/// No autosave here; contact messages are short-lived enough that the
/// original form never persisted them.
pub struct ContactSession {
    draft: FormDraft,
    client: SubmitClient,
    errors: BTreeMap<String, String>,
}

impl ContactSession {
    /// Create an empty contact form session.
    pub fn new(client: SubmitClient) -> Self {
        Self {
            draft: FormDraft::new(),
            client,
            errors: BTreeMap::new(),
        }
    }

    /// The draft being filled in.
    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    /// Surfaced error for one field, if any.
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Set a text field, clearing its surfaced error.
    pub fn set_text(&mut self, field: &str, value: impl Into<String>) {
        self.errors.remove(field);
        self.draft.set_text(field, value);
    }

    /// Set the consent checkbox, clearing its surfaced error.
    pub fn set_flag(&mut self, field: &str, value: bool) {
        self.errors.remove(field);
        self.draft.set_bool(field, value);
    }

    /// Apply the contact rule table, replacing all surfaced errors with
    /// the pass's failures.
    pub fn validate(&mut self) -> ValidationResult {
        let result = contact::validate(&self.draft);
        self.errors.clear();
        for error in result.errors() {
            self.errors.insert(error.field.clone(), error.message.clone());
        }
        result
    }

    /// Validate and, if clean, submit once. Acceptance resets the form;
    /// any failure leaves the draft intact.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        let result = self.validate();
        if result.is_invalid() {
            return Ok(SubmitOutcome::Rejected { step: 1, result });
        }

        let payload = contact::ContactPayload::from_draft(&self.draft);
        self.client.submit(&payload).await?;

        self.draft.clear();
        self.errors.clear();
        Ok(SubmitOutcome::Accepted)
    }
}
