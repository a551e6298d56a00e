//! Deadline-bounded dispatch
//!
//! The request races two timers started at dispatch:
//!
//! - at `timeout` the abort signal fires and a cooperative transport gives up
//!   with [`TransportError::Cancelled`](crate::error::TransportError::Cancelled);
//! - at `timeout + fallback_margin` the attempt fails with
//!   [`SubmitError::TransportTimeout`] whatever the transport is doing.
//!
//! The second timer is what guarantees progress when a transport ignores the
//! signal.

use std::time::Duration;

use tokio::time::{Instant, sleep};

use crate::abort::AbortController;
use crate::config::SubmitConfig;
use crate::error::SubmitError;
use crate::traits::{ContactTransport, FormFields, TransportResponse};

/// Timing of one attempt
///
/// Between `timeout` and [`hard_limit`](Self::hard_limit) the request is
/// still raced: a transport that ignores the abort signal and answers inside
/// that window has its response accepted as if it were on time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    /// When the abort signal fires
    pub timeout: Duration,
    /// Grace period after the signal before the attempt is forced to fail
    pub fallback_margin: Duration,
}

impl Deadline {
    pub fn new(timeout: Duration, fallback_margin: Duration) -> Self {
        Self {
            timeout,
            fallback_margin,
        }
    }

    /// Time after which the outcome is a timeout no matter what.
    pub fn hard_limit(&self) -> Duration {
        self.timeout.saturating_add(self.fallback_margin)
    }
}

impl From<&SubmitConfig> for Deadline {
    fn from(config: &SubmitConfig) -> Self {
        Self::new(config.timeout(), config.fallback_margin())
    }
}

/// Send `fields` to `endpoint` under `deadline`.
pub async fn dispatch_with_deadline(
    transport: &dyn ContactTransport,
    endpoint: &str,
    fields: &FormFields,
    deadline: Deadline,
) -> Result<TransportResponse, SubmitError> {
    let started = Instant::now();
    let controller = AbortController::new();

    let request = transport.post_json(endpoint, fields, controller.signal());
    tokio::pin!(request);
    let primary = sleep(deadline.timeout);
    tokio::pin!(primary);
    let fallback = sleep(deadline.hard_limit());
    tokio::pin!(fallback);

    loop {
        tokio::select! {
            biased;

            () = &mut fallback => {
                log::warn!(
                    "[submit] transport ignored cancellation, forcing timeout after {:?}",
                    deadline.hard_limit()
                );
                return Err(SubmitError::TransportTimeout);
            }

            result = &mut request => {
                log::debug!("[submit] transport settled after {:?}", started.elapsed());
                return result.map_err(SubmitError::from);
            }

            () = &mut primary, if !controller.is_aborted() => {
                log::debug!("[submit] deadline of {:?} reached, aborting request", deadline.timeout);
                controller.abort();
            }
        }
    }
}
