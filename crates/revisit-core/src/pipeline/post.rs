//! POST probe at `/service` and the structural check of its response.

use std::time::Duration;

use crate::error::ValidationError;
use crate::probe::{ProbePayload, ProbeRequest, ServiceResponse, ServiceTransport};

/// The endpoint the POST probe targets.
pub fn service_url(url: &str) -> String {
    format!("{url}/service")
}

/// Send the probe payload to `<url>/service`.
///
/// Transport failures are logged and reported as a missing body, which the
/// structural check turns into `InvalidServicePost`.
pub async fn probe_post(
    transport: &dyn ServiceTransport,
    url: &str,
    payload: &ProbePayload,
    timeout: Duration,
) -> Option<ServiceResponse> {
    let endpoint = service_url(url);
    let request = ProbeRequest::from(payload);

    match transport.post(&endpoint, &request, timeout).await {
        Ok(body) => {
            let response = ServiceResponse::from_body(body);
            if response.is_none() {
                tracing::debug!("POST {endpoint} did not return a JSON object");
            }
            response
        }
        Err(e) => {
            tracing::warn!("POST probe via {} failed: {e}", transport.name());
            None
        }
    }
}

/// Check the response shape in order: `content`, then `meta`, then
/// `meta.audio`. The first missing piece is the only error reported.
pub fn check_structure(
    response: Option<ServiceResponse>,
) -> Result<ServiceResponse, ValidationError> {
    let response = match response {
        Some(r) if r.has_content() => r,
        _ => return Err(ValidationError::InvalidServicePost),
    };

    if !response.has_meta() {
        return Err(ValidationError::InvalidServiceMeta);
    }

    if !response.has_audio() {
        return Err(ValidationError::InvalidServiceMetaEmpty);
    }

    Ok(response)
}
