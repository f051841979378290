//! Outgoing probe payload and the untrusted service response shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Caller-supplied data sent in the POST probe.
///
/// `data` is passed through as `content.data` untouched; it is not derived
/// from anything the service returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbePayload {
    /// Embedded-resource string (usually a data URI), empty by default
    pub data: String,
}

impl ProbePayload {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

/// POST /service request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeRequest {
    pub content: ProbeContent,
    pub meta: ProbeMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeContent {
    pub data: String,
}

/// `audio` is always sent as an empty object; services must hand it back.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProbeMeta {
    pub audio: Map<String, Value>,
}

impl From<&ProbePayload> for ProbeRequest {
    fn from(payload: &ProbePayload) -> Self {
        Self {
            content: ProbeContent {
                data: payload.data.clone(),
            },
            meta: ProbeMeta::default(),
        }
    }
}

/// The fields of a POST /service response that the validator inspects.
///
/// Built from an arbitrary JSON value; every accessor tolerates missing or
/// mistyped fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceResponse {
    pub content: Option<Value>,
    pub meta: Option<Value>,
}

impl ServiceResponse {
    /// Extract the inspected fields from a response body.
    ///
    /// Returns `None` for a missing body or a body that is not a JSON object.
    pub fn from_body(body: Option<Value>) -> Option<Self> {
        match body? {
            Value::Object(mut map) => Some(Self {
                content: map.remove("content"),
                meta: map.remove("meta"),
            }),
            _ => None,
        }
    }

    pub fn has_content(&self) -> bool {
        self.content.as_ref().is_some_and(is_truthy)
    }

    pub fn has_meta(&self) -> bool {
        self.meta.as_ref().is_some_and(is_truthy)
    }

    /// True when `meta.audio` is present and truthy.
    pub fn has_audio(&self) -> bool {
        self.meta
            .as_ref()
            .and_then(|meta| meta.get("audio"))
            .is_some_and(is_truthy)
    }

    /// The `content.data` field, if it is a string.
    pub fn content_data(&self) -> Option<&str> {
        self.content
            .as_ref()
            .and_then(|content| content.get("data"))
            .and_then(Value::as_str)
    }
}

/// Loose presence test: `null`, `false`, `0` and `""` count as absent.
/// Objects and arrays are present even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
