//! Form submission client

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::Serialize;

use crate::error::SubmitError;

/// Client for posting a form payload to its processing endpoint.
///
/// The endpoint is an opaque HTTP sink: one JSON POST per user-initiated
/// submit, a 2xx status means accepted, anything else is a failure and
/// the body goes unexamined beyond error reporting. The client is cheap
/// to clone (uses `Arc` internally).
///
/// While a submission is in flight, further [`submit`](Self::submit)
/// calls return [`SubmitError::InFlight`] without touching the network;
/// the gate reopens unconditionally when the call settles, whatever the
/// outcome. There is no cancellation.
///
/// # Example
///
/// ```ignore
/// let client = SubmitClient::builder()
///     .endpoint("https://formspree.io/f/mkgkngzy")
///     .timeout(Duration::from_secs(30))
///     .build();
///
/// client.submit(&payload).await?;
/// ```
#[derive(Clone)]
pub struct SubmitClient {
    inner: Arc<SubmitClientInner>,
}

struct SubmitClientInner {
    endpoint: String,
    http_client: Client,
    timeout: Option<Duration>,
    in_flight: AtomicBool,
}

impl SubmitClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> SubmitClientBuilder<Missing> {
        SubmitClientBuilder::new()
    }

    /// The endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// Whether a submission is currently unsettled.
    pub fn is_in_flight(&self) -> bool {
        self.inner.in_flight.load(Ordering::SeqCst)
    }

    /// Post `payload` as JSON, once.
    ///
    /// Success means the endpoint answered with a 2xx status. Non-success
    /// statuses and transport failures are returned as [`SubmitError`];
    /// the caller decides what to show and keeps its draft for a retry.
    pub async fn submit<T>(&self, payload: &T) -> Result<(), SubmitError>
    where
        T: Serialize + ?Sized,
    {
        let _guard = self.begin()?;

        debug!("submitting form payload to {}", self.inner.endpoint);

        let mut request = self.inner.http_client.post(&self.inner.endpoint).json(payload);
        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Err(SubmitError::Http { status, body })
        }
    }

    /// Claim the in-flight gate, or report a duplicate attempt.
    fn begin(&self) -> Result<FlightGuard<'_>, SubmitError> {
        if self
            .inner
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            Ok(FlightGuard {
                flag: &self.inner.in_flight,
            })
        } else {
            Err(SubmitError::InFlight)
        }
    }
}

/// Releases the in-flight gate when the submission settles, on every
/// path out of [`SubmitClient::submit`].
struct FlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`SubmitClient`].
///
/// Uses the typestate pattern so the required `endpoint` must be set
/// before `build()` is available.
pub struct SubmitClientBuilder<Endpoint> {
    endpoint: Endpoint,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl SubmitClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            endpoint: Missing,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the form-processing endpoint URL.
    pub fn endpoint(self, endpoint: impl Into<String>) -> SubmitClientBuilder<Set<String>> {
        SubmitClientBuilder {
            endpoint: Set(endpoint.into()),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl Default for SubmitClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> SubmitClientBuilder<E> {
    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout, applied when building the HTTP
    /// client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client. If not set, a default client is
    /// created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl SubmitClientBuilder<Set<String>> {
    /// Builds the [`SubmitClient`].
    pub fn build(self) -> SubmitClient {
        let http_client = self.http_client.unwrap_or_else(|| {
            let mut builder = Client::builder();
            if let Some(timeout) = self.connect_timeout {
                builder = builder.connect_timeout(timeout);
            }
            builder.build().expect("Failed to build HTTP client")
        });

        SubmitClient {
            inner: Arc::new(SubmitClientInner {
                endpoint: self.endpoint.0,
                http_client,
                timeout: self.timeout,
                in_flight: AtomicBool::new(false),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SubmitClient {
        SubmitClient::builder().endpoint("https://example.invalid/f/test").build()
    }

    #[test]
    fn test_second_begin_is_rejected_while_guard_held() {
        let client = client();
        let guard = client.begin().expect("first begin claims the gate");
        assert!(client.is_in_flight());
        assert!(matches!(client.begin(), Err(SubmitError::InFlight)));
        drop(guard);
    }

    #[test]
    fn test_gate_reopens_after_settlement() {
        let client = client();
        drop(client.begin().unwrap());
        assert!(!client.is_in_flight());
        assert!(client.begin().is_ok());
    }

    #[test]
    fn test_gate_is_shared_across_clones() {
        let client = client();
        let clone = client.clone();
        let _guard = client.begin().unwrap();
        assert!(matches!(clone.begin(), Err(SubmitError::InFlight)));
    }
}
