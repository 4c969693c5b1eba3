//! Multi-step form session state machine.

use log::debug;

use crate::draft::FormDraft;
use crate::validation::ValidationResult;

/// Per-step validation function, registered at session construction.
pub type StepCheck = Box<dyn Fn(&FormDraft) -> ValidationResult + Send + Sync>;

/// Display status of a step in a progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Behind the current step.
    Done,
    /// The current step.
    Active,
    /// Ahead of the current step.
    Upcoming,
}

/// The first step that failed during a full-form validation pass.
#[derive(Debug, Clone)]
pub struct StepFailure {
    /// 1-based index of the failing step.
    pub step: usize,
    /// The failing step's validation result.
    pub result: ValidationResult,
}

/// A form instance: its draft plus its position in an ordered sequence
/// of validated steps.
///
/// Exactly one step is current at a time. Forward navigation is gated on
/// the current step's validation; backward navigation never validates.
/// Sessions always start at step 1 — restoring a draft restores field
/// values, not position.
///
/// # Example
///
/// ```
/// use formkit::{Check, FormDraft, FormSession, StepCheck};
///
/// let steps: Vec<StepCheck> = vec![
///     Box::new(|d| Check::on(d).field("name").required("Name is required").finish()),
///     Box::new(|_| formkit::ValidationResult::Valid),
/// ];
/// let mut session = FormSession::new(steps);
///
/// assert!(session.advance().is_invalid());
/// assert_eq!(session.current_step(), 1);
///
/// session.draft_mut().set_text("name", "Ada");
/// assert!(session.advance().is_valid());
/// assert_eq!(session.current_step(), 2);
/// ```
pub struct FormSession {
    draft: FormDraft,
    steps: Vec<StepCheck>,
    current: usize,
}

impl FormSession {
    /// Create a session over the given step checks, starting at step 1
    /// with an empty draft.
    ///
    /// # Panics
    ///
    /// Panics if `steps` is empty.
    pub fn new(steps: Vec<StepCheck>) -> Self {
        assert!(!steps.is_empty(), "a form session needs at least one step");
        Self {
            draft: FormDraft::new(),
            steps,
            current: 1,
        }
    }

    /// The draft being filled in.
    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    /// Mutable access to the draft.
    pub fn draft_mut(&mut self) -> &mut FormDraft {
        &mut self.draft
    }

    /// Replace the draft's field values, e.g. from a restored autosave.
    /// The current step is untouched.
    pub fn restore(&mut self, draft: FormDraft) {
        self.draft = draft;
    }

    /// 1-based index of the current step.
    pub fn current_step(&self) -> usize {
        self.current
    }

    /// Total number of steps.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Whether the current step is the last one.
    pub fn at_last_step(&self) -> bool {
        self.current == self.steps.len()
    }

    /// Validate the current step and, on success, move forward.
    ///
    /// A no-op move at the last step: the step is still validated and the
    /// result returned, but the position cannot go further. On failure
    /// the position is unchanged.
    pub fn advance(&mut self) -> ValidationResult {
        let result = self.validate_step(self.current);
        if result.is_valid() && !self.at_last_step() {
            self.current += 1;
            debug!("form session advanced to step {}", self.current);
        }
        result
    }

    /// Move backward one step without validating. No-op at step 1.
    pub fn retreat(&mut self) {
        if self.current > 1 {
            self.current -= 1;
            debug!("form session retreated to step {}", self.current);
        }
    }

    /// Jump to a step, clamped into range. Used when a full-form
    /// validation pass rewinds to the first failing step.
    pub fn go_to(&mut self, step: usize) {
        self.current = step.clamp(1, self.steps.len());
    }

    /// Run a single step's check against the current draft. Steps out of
    /// range validate as passing.
    pub fn validate_step(&self, step: usize) -> ValidationResult {
        step.checked_sub(1)
            .and_then(|idx| self.steps.get(idx))
            .map(|check| check(&self.draft))
            .unwrap_or_default()
    }

    /// Validate every step in order, stopping at the first failure.
    pub fn validate_all(&self) -> Result<(), StepFailure> {
        for step in 1..=self.steps.len() {
            let result = self.validate_step(step);
            if result.is_invalid() {
                return Err(StepFailure { step, result });
            }
        }
        Ok(())
    }

    /// Status of every step relative to the current one, in order.
    pub fn progress(&self) -> Vec<StepStatus> {
        (1..=self.steps.len())
            .map(|step| {
                if step < self.current {
                    StepStatus::Done
                } else if step == self.current {
                    StepStatus::Active
                } else {
                    StepStatus::Upcoming
                }
            })
            .collect()
    }

    /// Clear the draft and rewind to step 1.
    pub fn reset(&mut self) {
        self.draft.clear();
        self.current = 1;
    }
}

impl std::fmt::Debug for FormSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormSession")
            .field("current", &self.current)
            .field("steps", &self.steps.len())
            .field("draft", &self.draft)
            .finish()
    }
}
