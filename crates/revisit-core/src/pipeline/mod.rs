//! Validation pipeline components.
//!
//! This module contains the stages of the validation pipeline:
//! - **url**: Syntax check on the service root, no I/O
//! - **head**: HEAD probe at the root
//! - **post**: POST probe at `/service` and the response structure check
//! - **image**: Decode, type and size check of the returned image
//! - **stage**: Pipeline states
//! - **validator**: Orchestrates the full pipeline

pub mod head;
pub mod image;
pub mod post;
pub mod stage;
pub mod url;
pub mod validator;

#[cfg(test)]
pub(crate) mod mock;

// Re-exports for convenient access
pub use image::ALLOWED_MEDIA_TYPES;
pub use stage::Stage;
pub use validator::Validator;
