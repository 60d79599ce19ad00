// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Response logging hook for HTTP clients

use crate::response::{RequestInfo, ResponseEvent, ResponseInfo};
use evlog_core::{maybe_trigger, Clock, SystemClock, Triggerable};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;

/// Largest response body attached to an event (1 MiB)
pub const MAX_LOG_BYTES: usize = 1 << 20;

/// A fully read response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub info: ResponseInfo,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(info: ResponseInfo, body: impl Into<Vec<u8>>) -> Self {
        Self {
            info,
            body: body.into(),
        }
    }
}

/// Emits a [`ResponseEvent`] for every successful call
#[derive(Clone)]
pub struct ResponseHook {
    log: Option<Arc<dyn Triggerable>>,
    clock: Arc<dyn Clock>,
    capture_body: bool,
}

impl ResponseHook {
    /// Hook without body capture; `None` makes it a no-op
    pub fn new(log: Option<Arc<dyn Triggerable>>) -> Self {
        Self {
            log,
            clock: Arc::new(SystemClock),
            capture_body: false,
        }
    }

    /// Hook that also attaches up to [`MAX_LOG_BYTES`] of each body
    pub fn with_body(log: Option<Arc<dyn Triggerable>>) -> Self {
        Self::new(log).capture_body(true)
    }

    pub fn capture_body(mut self, capture: bool) -> Self {
        self.capture_body = capture;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Record a completed call
    ///
    /// A failed call is handed back untouched and nothing is logged.
    pub fn on_response<E>(
        &self,
        ctx: &CancellationToken,
        request: &RequestInfo,
        outcome: Result<&HttpResponse, E>,
        started: Instant,
    ) -> Result<(), E> {
        let response = outcome?;

        let mut event = ResponseEvent::new(
            request.clone(),
            response.info.clone(),
            self.clock.since(started),
        )
        .with_timestamp(self.clock.utc_now());

        if self.capture_body {
            let end = response.body.len().min(MAX_LOG_BYTES);
            if end < response.body.len() {
                tracing::debug!(
                    url = %request.url,
                    size = response.body.len(),
                    "response body truncated for logging"
                );
            }
            event = event.with_body(String::from_utf8_lossy(&response.body[..end]));
        }

        maybe_trigger(ctx, self.log.as_deref(), &event);
        Ok(())
    }

    /// Await `call`, timing it, and record the response it yields
    pub async fn observe<F, E>(
        &self,
        ctx: &CancellationToken,
        request: &RequestInfo,
        call: F,
    ) -> Result<HttpResponse, E>
    where
        F: Future<Output = Result<HttpResponse, E>>,
    {
        let started = self.clock.now();
        let response = call.await?;
        self.on_response(ctx, request, Ok::<_, E>(&response), started)?;
        Ok(response)
    }
}

#[cfg(test)]
#[path = "hook_tests.rs"]
mod tests;
