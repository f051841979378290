//! Revisit Core - validation of third-party image services.
//!
//! A service qualifies when it answers `HEAD /` with 200 and answers
//! `POST /service` by handing back the `meta` it was sent together with an
//! embedded PNG, JPEG or GIF image within the configured size limit.
//!
//! # Architecture
//!
//! Validation is a strictly ordered pipeline; the first failing stage ends
//! the run:
//!
//! ```text
//! URL check → HEAD / → POST /service → response structure → image decode/type/size
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use revisit_core::{Config, ProbePayload, Validator};
//!
//! #[tokio::main]
//! async fn main() -> revisit_core::Result<()> {
//!     let config = Config::load()?;
//!     let validator = Validator::new(config.limits)?;
//!
//!     let report = validator
//!         .validate("https://example.com", &ProbePayload::default())
//!         .await;
//!     println!("Errors: {:?}", report.errors);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod datauri;
pub mod error;
pub mod pipeline;
pub mod probe;
pub mod types;

// Re-exports for convenient access
pub use config::{parse_max_size, Config, LimitsConfig};
pub use datauri::{DataUri, DataUriError};
pub use error::{ConfigError, ErrorKind, Result, RevisitError, ValidationError};
pub use pipeline::{Stage, Validator};
pub use probe::{HttpTransport, ProbePayload, ServiceTransport, TransportError};
pub use types::ValidationReport;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
