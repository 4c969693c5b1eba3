//! Counselling-practice intake and contact forms.
//!
//! Builds on [`formkit`] for drafts, validation, and step state, and
//! adds the domain pieces: per-form rule tables, draft autosave
//! backends, payload projection, and a single-attempt submission client
//! for the external form-processing endpoint.

pub mod client;
pub mod error;
pub mod forms;
pub mod store;

pub use client::{SubmitClient, SubmitClientBuilder};
pub use error::{StoreError, SubmitError};
pub use forms::{AutosaveStatus, ContactSession, IntakeSession, SubmitOutcome};
pub use store::{DraftStore, FileStore, INTAKE_DRAFT_KEY, MemoryStore};
