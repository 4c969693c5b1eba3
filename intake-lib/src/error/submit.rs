//! Submission error types

/// Errors that can occur while submitting a form to the processing
/// endpoint.
///
/// Submission is a single attempt per user action: no retry, no backoff.
/// The caller keeps the draft intact on any of these so the user can
/// resubmit.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The endpoint answered with a non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body, if any.
        body: String,
    },

    /// The request never completed (DNS, connect, TLS, timeout...).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A submission is already in flight; the duplicate attempt was not
    /// sent.
    #[error("A submission is already in progress")]
    InFlight,
}

impl SubmitError {
    /// The HTTP status code, if the endpoint answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure happened before any response arrived.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
