//! Test helpers
//!
//! Scripted transport shared by unit and integration tests. Built with
//! `cfg(test)` or the `test-utils` feature.

use std::sync::{Mutex, PoisonError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::abort::AbortSignal;
use crate::error::{TransportError, TransportResult};
use crate::traits::{ContactTransport, FormFields, TransportResponse};

// ===== Reply =====

/// One scripted answer of [`MockTransport`].
#[derive(Debug, Clone)]
pub struct Reply {
    delay: Duration,
    result: TransportResult<TransportResponse>,
    honours_abort: bool,
}

impl Reply {
    /// Immediate response.
    pub fn ok(status: u16, body: &str) -> Self {
        Self::after(Duration::ZERO, TransportResponse::new(status, body))
    }

    /// Response after `delay`.
    pub fn after(delay: Duration, response: TransportResponse) -> Self {
        Self {
            delay,
            result: Ok(response),
            honours_abort: true,
        }
    }

    /// Transport error after `delay`.
    pub fn error(delay: Duration, error: TransportError) -> Self {
        Self {
            delay,
            result: Err(error),
            honours_abort: true,
        }
    }

    /// Keep waiting out the delay after the abort signal fires.
    pub fn ignoring_abort(mut self) -> Self {
        self.honours_abort = false;
        self
    }
}

// ===== MockTransport =====

/// Answers every request with the same [`Reply`].
pub struct MockTransport {
    reply: Reply,
    calls: AtomicUsize,
    saw_abort: AtomicBool,
    last_fields: Mutex<Option<FormFields>>,
    last_endpoint: Mutex<Option<String>>,
}

impl MockTransport {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            saw_abort: AtomicBool::new(false),
            last_fields: Mutex::new(None),
            last_endpoint: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Whether a request was cut short by its abort signal.
    pub fn saw_abort(&self) -> bool {
        self.saw_abort.load(Ordering::SeqCst)
    }

    pub fn last_fields(&self) -> Option<FormFields> {
        self.last_fields
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last_endpoint(&self) -> Option<String> {
        self.last_endpoint
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ContactTransport for MockTransport {
    async fn post_json(
        &self,
        endpoint: &str,
        fields: &FormFields,
        signal: AbortSignal,
    ) -> TransportResult<TransportResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_fields.lock().unwrap_or_else(PoisonError::into_inner) = Some(fields.clone());
        *self.last_endpoint.lock().unwrap_or_else(PoisonError::into_inner) = Some(endpoint.to_string());
        let reply = self.reply.clone();

        if reply.honours_abort {
            tokio::select! {
                () = signal.aborted() => {
                    self.saw_abort.store(true, Ordering::SeqCst);
                    return Err(TransportError::Cancelled);
                }
                () = tokio::time::sleep(reply.delay) => {}
            }
        } else {
            tokio::time::sleep(reply.delay).await;
        }
        reply.result
    }
}
