//! Network probes against the service under validation.
//!
//! Provides the transport abstraction the pipeline talks to, the reqwest
//! implementation used in production, and the request/response shapes of
//! the `/service` contract.

pub(crate) mod http;
pub(crate) mod payload;
pub(crate) mod transport;

pub use http::HttpTransport;
pub use payload::{is_truthy, ProbeContent, ProbeMeta, ProbePayload, ProbeRequest, ServiceResponse};
pub use transport::{ServiceTransport, TransportError};
