//! Form engine: drafts, validation, and multi-step sessions.
//!
//! `formkit` holds the reusable, rendering-free core of a form: a
//! [`FormDraft`] of field values, pure validators and a fluent [`Check`]
//! rule builder producing [`ValidationResult`]s, and a [`FormSession`]
//! state machine gating progression through an ordered sequence of
//! validated steps.

pub mod draft;
pub mod session;
pub mod validation;
pub mod value;

pub use draft::FormDraft;
pub use session::{FormSession, StepCheck, StepFailure, StepStatus};
pub use validation::{
    Check, FieldCheck, FieldError, ValidationResult, format_phone, format_phone_partial,
    is_valid_email, is_valid_phone,
};
pub use value::FieldValue;
