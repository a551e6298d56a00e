//! Response classification
//!
//! Turns the raw transport result into an [`Outcome`] carrying the message to
//! show. Unparseable bodies never fail an attempt by themselves; they only
//! cost the server-supplied message.

use serde::Deserialize;

use crate::error::SubmitError;
use crate::i18n::SubmitTexts;
use crate::traits::TransportResponse;

use super::Outcome;

/// Shape of the endpoint's JSON body. Both fields are optional.
#[derive(Debug, Default, Deserialize)]
struct ResponseBody {
    #[serde(default)]
    ok: Option<bool>,
    #[serde(default)]
    message: Option<String>,
}

fn parse_body(body: &str) -> Result<ResponseBody, SubmitError> {
    serde_json::from_str(body).map_err(|e| SubmitError::MalformedResponse(e.to_string()))
}

/// Server-supplied message, if the body parses and carries a non-empty one.
fn server_message(response: &TransportResponse) -> Option<String> {
    match parse_body(&response.body) {
        Ok(parsed) => {
            if parsed.ok == Some(false) && response.is_success() {
                log::debug!("[submit] 2xx response flagged ok=false, treating as success");
            }
            parsed.message.filter(|m| !m.trim().is_empty())
        }
        Err(e) => {
            log::debug!("[submit] {e}");
            None
        }
    }
}

/// Classify a finished dispatch.
pub fn classify(
    result: Result<TransportResponse, SubmitError>,
    texts: &SubmitTexts,
) -> Outcome {
    let response = match result {
        Ok(response) => response,
        Err(reason) => return failure(reason, texts),
    };

    let message = server_message(&response);
    if response.is_success() {
        Outcome::Succeeded {
            message: message.unwrap_or_else(|| texts.thank_you.to_string()),
        }
    } else {
        failure(
            SubmitError::ServerRejected {
                status: response.status,
                message,
            },
            texts,
        )
    }
}

fn failure(reason: SubmitError, texts: &SubmitTexts) -> Outcome {
    let message = match &reason {
        SubmitError::TransportTimeout => texts.timed_out.to_string(),
        SubmitError::ServerRejected { message, .. } => message
            .clone()
            .unwrap_or_else(|| texts.server_error.to_string()),
        SubmitError::TransportFailure(detail) | SubmitError::MalformedResponse(detail) => {
            if detail.trim().is_empty() {
                texts.generic_retry.to_string()
            } else {
                detail.clone()
            }
        }
    };
    Outcome::Failed { reason, message }
}
