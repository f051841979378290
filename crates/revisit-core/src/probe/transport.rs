//! Transport trait used by the HEAD and POST probes.

use super::payload::ProbeRequest;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Root cause of a failed probe request.
///
/// Never surfaced in a report; the pipeline logs it and records the
/// stage's domain error instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// No response within the probe's timeout
    #[error("request to {url} timed out after {timeout_ms}ms")]
    Timeout { url: String, timeout_ms: u64 },

    /// Connection, DNS, TLS or malformed-URL failure
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },
}

/// Trait that all probe transports implement.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (the validator holds an `Arc<dyn ServiceTransport>`).
#[async_trait]
pub trait ServiceTransport: Send + Sync {
    /// Transport name for logging (e.g., "http").
    fn name(&self) -> &str;

    /// Issue a HEAD request without following redirects.
    ///
    /// Returns the response status code.
    async fn head(&self, url: &str, timeout: Duration) -> Result<u16, TransportError>;

    /// POST `request` as JSON and return the parsed response body.
    ///
    /// `Ok(None)` means the service answered but the body was empty or not
    /// JSON. The status code is intentionally not reported.
    async fn post(
        &self,
        url: &str,
        request: &ProbeRequest,
        timeout: Duration,
    ) -> Result<Option<Value>, TransportError>;
}
