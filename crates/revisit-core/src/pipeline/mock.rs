//! Scripted transport for pipeline tests.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::probe::{ProbeRequest, ServiceTransport, TransportError};

/// A request the mock transport received.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Head {
        url: String,
        timeout: Duration,
    },
    Post {
        url: String,
        request: ProbeRequest,
        timeout: Duration,
    },
}

/// Returns canned HEAD and POST results and records every call.
///
/// Defaults: HEAD answers 200, POST answers with no body.
pub(crate) struct MockTransport {
    head: Result<u16, TransportError>,
    post: Result<Option<Value>, TransportError>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self {
            head: Ok(200),
            post: Ok(None),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn head_status(mut self, status: u16) -> Self {
        self.head = Ok(status);
        self
    }

    pub(crate) fn head_error(mut self, error: TransportError) -> Self {
        self.head = Err(error);
        self
    }

    pub(crate) fn post_body(mut self, body: Value) -> Self {
        self.post = Ok(Some(body));
        self
    }

    pub(crate) fn post_error(mut self, error: TransportError) -> Self {
        self.post = Err(error);
        self
    }

    /// Shared handle to the call log (clone before moving the transport).
    pub(crate) fn calls_handle(&self) -> Arc<Mutex<Vec<Call>>> {
        self.calls.clone()
    }

    fn log(&self, call: Call) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

#[async_trait]
impl ServiceTransport for MockTransport {
    fn name(&self) -> &str {
        "mock"
    }

    async fn head(&self, url: &str, timeout: Duration) -> Result<u16, TransportError> {
        self.log(Call::Head {
            url: url.to_string(),
            timeout,
        });
        self.head.clone()
    }

    async fn post(
        &self,
        url: &str,
        request: &ProbeRequest,
        timeout: Duration,
    ) -> Result<Option<Value>, TransportError> {
        self.log(Call::Post {
            url: url.to_string(),
            request: request.clone(),
            timeout,
        });
        self.post.clone()
    }
}
