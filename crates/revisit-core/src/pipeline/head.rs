//! HEAD probe at the service root.

use std::time::Duration;

use crate::error::ValidationError;
use crate::probe::ServiceTransport;

/// Probe `HEAD <url>`. Only an exact 200 passes.
pub async fn probe_head(
    transport: &dyn ServiceTransport,
    url: &str,
    timeout: Duration,
) -> Result<(), ValidationError> {
    match transport.head(url, timeout).await {
        Ok(200) => {
            tracing::debug!("HEAD {url} returned 200");
            Ok(())
        }
        Ok(status) => {
            tracing::debug!("HEAD {url} returned {status}, expected 200");
            Err(ValidationError::InvalidHeadRequest)
        }
        Err(e) => {
            tracing::warn!("HEAD probe via {} failed: {e}", transport.name());
            Err(ValidationError::InvalidHeadRequest)
        }
    }
}
