//! reqwest-backed probe transport.

use super::payload::ProbeRequest;
use super::transport::{ServiceTransport, TransportError};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// HTTP transport with redirects disabled for every request.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(concat!("revisit/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

fn classify(url: &str, timeout: Duration, error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout {
            url: url.to_string(),
            timeout_ms: timeout.as_millis() as u64,
        }
    } else {
        TransportError::Request {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

#[async_trait]
impl ServiceTransport for HttpTransport {
    fn name(&self) -> &str {
        "http"
    }

    async fn head(&self, url: &str, timeout: Duration) -> Result<u16, TransportError> {
        let resp = self
            .client
            .head(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify(url, timeout, e))?;

        Ok(resp.status().as_u16())
    }

    async fn post(
        &self,
        url: &str,
        request: &ProbeRequest,
        timeout: Duration,
    ) -> Result<Option<Value>, TransportError> {
        let resp = self
            .client
            .post(url)
            .json(request)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify(url, timeout, e))?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| classify(url, timeout, e))?;
        if body.is_empty() {
            tracing::debug!("POST {url} returned HTTP {status} with an empty body");
            return Ok(None);
        }

        match serde_json::from_slice::<Value>(&body) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::debug!("POST {url} returned HTTP {status} with a non-JSON body: {e}");
                Ok(None)
            }
        }
    }
}
