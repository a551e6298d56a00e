//! Network abstraction trait definition

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::abort::AbortSignal;
use crate::error::TransportResult;

/// Captured form fields: name -> value. Order is irrelevant; on duplicate
/// names the last control wins.
pub type FormFields = BTreeMap<String, String>;

/// Raw response of the contact endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Contact endpoint transport
///
/// Implementations:
/// - `tiptop_transport::HttpTransport` (reqwest)
/// - scripted mocks in tests
#[async_trait]
pub trait ContactTransport: Send + Sync {
    /// POST `fields` as a JSON object to `endpoint`.
    ///
    /// Implementations should return [`TransportError::Cancelled`] promptly
    /// once `signal` fires. Any non-2xx status is still `Ok`; classification
    /// happens in the controller.
    ///
    /// [`TransportError::Cancelled`]: crate::error::TransportError::Cancelled
    async fn post_json(
        &self,
        endpoint: &str,
        fields: &FormFields,
        signal: AbortSignal,
    ) -> TransportResult<TransportResponse>;
}
