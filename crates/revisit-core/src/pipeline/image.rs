//! Embedded image decode, type and size check.

use crate::datauri::DataUri;
use crate::error::ValidationError;

/// Media types a service may return.
pub const ALLOWED_MEDIA_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/gif"];

/// Decode `content.data` and check it against the allow-list and size limit.
///
/// Checks run in order (decode, type, size) and only the first failure is
/// returned, so an oversized TIFF reports `InvalidFileType`.
pub fn check_image(data: Option<&str>, max_size: u64) -> Result<DataUri, ValidationError> {
    let Some(data) = data else {
        tracing::debug!("content.data is missing or not a string");
        return Err(ValidationError::InvalidDataUri);
    };

    let image = DataUri::decode(data).map_err(|e| {
        tracing::debug!("content.data is not a valid data URI: {e}");
        ValidationError::InvalidDataUri
    })?;

    if !ALLOWED_MEDIA_TYPES.contains(&image.media_type.as_str()) {
        tracing::debug!("Rejected media type {}", image.media_type);
        return Err(ValidationError::InvalidFileType);
    }

    if image.len() as u64 > max_size {
        tracing::debug!("Image is {} bytes, limit is {max_size}", image.len());
        return Err(ValidationError::file_too_large(max_size));
    }

    Ok(image)
}
