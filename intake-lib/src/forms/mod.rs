//! The practice's two forms: contact and multi-step intake.

pub mod contact;
pub mod intake;

mod session;

pub use session::{AutosaveStatus, ContactSession, IntakeSession, SubmitOutcome};
