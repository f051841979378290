//! URL syntax check. Pure, no I/O.

use crate::error::ValidationError;

/// Check the service root URL before any request is made.
///
/// The two checks are independent; callers stop the pipeline if any error
/// comes back.
pub fn check_url(url: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if url.is_empty() {
        errors.push(ValidationError::InvalidUrl);
    }

    if url.ends_with('/') {
        errors.push(ValidationError::InvalidTrailingSlash);
    }

    errors
}
