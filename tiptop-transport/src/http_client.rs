//! HTTP request execution
//!
//! Sending, logging and body reading shared by every request the transport
//! makes. Status codes are returned as-is; deciding what a non-2xx means is
//! the submission controller's job.

use std::borrow::Cow;

use reqwest::RequestBuilder;
use tiptop_core::{TransportError, TransportResponse};

/// Characters of a response body that make it into debug logs. Bodies may
/// echo the visitor's name, email and message back.
const LOGGED_BODY_CHARS: usize = 200;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `method_name` - request method, for logging
    /// * `url` - request URL, for logging
    ///
    /// # Returns
    /// * `Ok(TransportResponse)` - any status, including 4xx/5xx
    /// * `Err(TransportError::Timeout)` - the client's own timeout fired
    /// * `Err(TransportError::Network)` - connection-level failure
    /// * `Err(TransportError::Body)` - the body could not be read
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<TransportResponse, TransportError> {
        log::debug!("[transport] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout(e.to_string())
            } else {
                TransportError::Network(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("[transport] Response Status: {status}");

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        log::debug!("[transport] Response Body: {}", body_preview(&body));

        Ok(TransportResponse::new(status, body))
    }
}

/// First [`LOGGED_BODY_CHARS`] characters of `body`, with the full size
/// appended when anything was cut.
fn body_preview(body: &str) -> Cow<'_, str> {
    match body.char_indices().nth(LOGGED_BODY_CHARS) {
        None => Cow::Borrowed(body),
        Some((cut, _)) => Cow::Owned(format!("{}… ({} bytes)", &body[..cut], body.len())),
    }
}
