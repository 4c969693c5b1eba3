//! Draft persistence backends.
//!
//! A draft store is a single-key, whole-value key-value store: every
//! save overwrites the previous draft under its key. Reads and writes
//! are synchronous and atomic per call.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use formkit::FormDraft;

use crate::error::StoreError;

/// Storage key for the intake form draft.
pub const INTAKE_DRAFT_KEY: &str = "intakeDraft-v1";

/// Whole-value draft storage under string keys.
///
/// Backends serialize drafts as JSON. Callers on the autosave path treat
/// every error as best-effort and never surface it to the user.
pub trait DraftStore: Send + Sync {
    /// Load the draft stored under `key`, if any.
    ///
    /// Malformed stored data is an error here; the session discards it
    /// and proceeds with an empty form.
    fn load(&self, key: &str) -> Result<Option<FormDraft>, StoreError>;

    /// Store `draft` under `key`, overwriting any prior value.
    fn save(&self, key: &str, draft: &FormDraft) -> Result<(), StoreError>;

    /// Remove the draft stored under `key`. Removing a missing key is
    /// not an error.
    fn clear(&self, key: &str) -> Result<(), StoreError>;
}
