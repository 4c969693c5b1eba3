//! Draft store error types

/// Errors from a [`DraftStore`](crate::store::DraftStore) backend.
///
/// Autosave treats every one of these as non-fatal: the save is skipped,
/// a warning is logged, and the user keeps typing.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem failure while reading or writing a draft.
    #[error("Draft store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be serialized or deserialized.
    #[error("Draft serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// The backend has no usable location (e.g. no data directory).
    #[error("Draft store unavailable: {0}")]
    Unavailable(String),
}
