//! Validator - orchestrates the full validation pipeline.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::LimitsConfig;
use crate::error::Result;
use crate::probe::{HttpTransport, ProbePayload, ServiceTransport};
use crate::types::ValidationReport;

use super::{head, image, post, url};

/// Validates that a service implements the HEAD / and POST /service contract.
///
/// Holds only configuration and the transport; every call to
/// [`Validator::validate`] returns its own report, so one instance can serve
/// concurrent validations.
#[derive(Clone)]
pub struct Validator {
    limits: LimitsConfig,
    transport: Arc<dyn ServiceTransport>,
}

impl Validator {
    /// Create a validator that probes over HTTP.
    pub fn new(limits: LimitsConfig) -> Result<Self> {
        let transport = HttpTransport::new()?;
        Ok(Self::with_transport(limits, Box::new(transport)))
    }

    /// Create a validator with a custom transport.
    pub fn with_transport(limits: LimitsConfig, transport: Box<dyn ServiceTransport>) -> Self {
        Self {
            limits,
            transport: Arc::from(transport),
        }
    }

    pub fn limits(&self) -> &LimitsConfig {
        &self.limits
    }

    /// Run the pipeline against `url`.
    ///
    /// Stages run in order and the first failing stage ends the run. Never
    /// fails: every problem is recorded in the returned report.
    pub async fn validate(&self, url: &str, payload: &ProbePayload) -> ValidationReport {
        let start = Instant::now();
        let mut report = ValidationReport::new(url);

        self.run(&mut report, payload).await;
        report.finish(start.elapsed());

        if report.is_valid() {
            tracing::info!(url, elapsed_ms = report.elapsed_ms, "Service passed validation");
        } else {
            tracing::info!(
                url,
                errors = report.errors.len(),
                failed_at = ?report.failed_at,
                elapsed_ms = report.elapsed_ms,
                "Service failed validation"
            );
        }

        report
    }

    async fn run(&self, report: &mut ValidationReport, payload: &ProbePayload) {
        let stage = report.advance();
        tracing::debug!(%stage, url = %report.url, "Checking URL");
        let url_errors = url::check_url(&report.url);
        if !url_errors.is_empty() {
            for error in url_errors {
                report.record(error);
            }
            return;
        }

        let target = report.url.clone();
        let transport = self.transport.as_ref();

        let stage = report.advance();
        tracing::debug!(%stage, "Probing HEAD {target}");
        let head_timeout = Duration::from_millis(self.limits.head_timeout_ms);
        if let Err(error) = head::probe_head(transport, &target, head_timeout).await {
            report.record(error);
            return;
        }

        let stage = report.advance();
        tracing::debug!(%stage, "Probing POST {}", post::service_url(&target));
        let post_timeout = Duration::from_millis(self.limits.post_timeout_ms);
        let response = post::probe_post(transport, &target, payload, post_timeout).await;
        let response = match post::check_structure(response) {
            Ok(response) => response,
            Err(error) => {
                report.record(error);
                return;
            }
        };

        let stage = report.advance();
        tracing::debug!(%stage, "Checking embedded image");
        let checked = image::check_image(response.content_data(), self.limits.max_size);
        report.content = response.content;
        match checked {
            Ok(decoded) => report.image = Some(decoded),
            Err(error) => report.record(error),
        }
    }
}
