//! Core data types for the Revisit validator.
//!
//! A `ValidationReport` is the complete output of one validation run.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::datauri::DataUri;
use crate::error::{ErrorKind, ValidationError};
use crate::pipeline::Stage;

/// The result of validating one service.
///
/// An empty `errors` map after the run reaches [`Stage::Done`] means the
/// service passed every check.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// The service root that was validated
    pub url: String,

    /// Error-kind name to human-readable message
    pub errors: BTreeMap<ErrorKind, String>,

    /// The `content` object returned by a fully valid POST probe
    #[serde(skip)]
    pub content: Option<Value>,

    /// The decoded embedded image, when it decoded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<DataUri>,

    /// Current pipeline state
    pub stage: Stage,

    /// Stage that recorded the errors, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_at: Option<Stage>,

    /// Wall-clock duration of the run
    pub elapsed_ms: u64,
}

impl ValidationReport {
    /// An empty report for `url`, in the idle state.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            errors: BTreeMap::new(),
            content: None,
            image: None,
            stage: Stage::Idle,
            failed_at: None,
            elapsed_ms: 0,
        }
    }

    /// Move to the next pipeline stage.
    pub(crate) fn advance(&mut self) -> Stage {
        self.stage = self.stage.next();
        self.stage
    }

    /// Record an error against the current stage.
    pub(crate) fn record(&mut self, error: ValidationError) {
        self.failed_at = Some(self.stage);
        self.errors.insert(error.kind(), error.to_string());
    }

    pub(crate) fn finish(&mut self, elapsed: Duration) {
        self.stage = Stage::Done;
        self.elapsed_ms = elapsed.as_millis() as u64;
    }

    /// True when the run completed with no errors.
    pub fn is_valid(&self) -> bool {
        self.stage.is_terminal() && self.errors.is_empty()
    }

    pub fn has(&self, kind: ErrorKind) -> bool {
        self.errors.contains_key(&kind)
    }

    pub fn message(&self, kind: ErrorKind) -> Option<&str> {
        self.errors.get(&kind).map(String::as_str)
    }

    /// Recorded error kinds, in taxonomy order.
    pub fn error_kinds(&self) -> impl Iterator<Item = ErrorKind> + '_ {
        self.errors.keys().copied()
    }
}
