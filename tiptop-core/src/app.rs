//! Page interactions
//!
//! Entry point for hosts. Attach once after the markup is mirrored into the
//! [`Page`], then feed every event through [`Interactions::handle_event`].
//!
//! ```text
//! PageEvent ──▶ event::handle_event ──▶ AppMessage ──▶ update::update ──▶ EventOutcome
//!                                                                        │
//!                                        submission attempt (if any) ◀───┘
//!                                                 │
//!                                                 ▼
//!                                   Interactions::complete (async)
//! ```

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::event::PageEvent;
use crate::modal::ModalViewer;
use crate::page::Page;
use crate::submission::{Outcome, SubmissionAttempt, SubmissionController};
use crate::traits::ContactTransport;
use crate::update::{self, EventOutcome};

/// The contact form controller and the lightbox of one page. Either may be
/// absent when the page lacks the markup for it.
#[derive(Debug, Default)]
pub struct Interactions {
    modal: Option<ModalViewer>,
    submission: Option<Arc<SubmissionController>>,
}

impl Interactions {
    /// Bind both components to `page`.
    pub fn attach(page: &Page, config: &Config, transport: Arc<dyn ContactTransport>) -> Self {
        let modal = ModalViewer::attach(page, &config.page, config.language);
        let submission = SubmissionController::attach(
            page,
            &config.page,
            config.submit.clone(),
            config.language,
            transport,
        )
        .map(Arc::new);
        log::info!(
            "[interactions] attached (lightbox: {}, contact form: {})",
            modal.is_some(),
            submission.is_some()
        );
        Self { modal, submission }
    }

    pub fn modal(&self) -> Option<&ModalViewer> {
        self.modal.as_ref()
    }

    pub fn modal_mut(&mut self) -> Option<&mut ModalViewer> {
        self.modal.as_mut()
    }

    /// Shared handle to the submission controller, for hosts that finish
    /// attempts on a separate task.
    pub fn submission(&self) -> Option<&Arc<SubmissionController>> {
        self.submission.as_ref()
    }

    /// Process one event synchronously.
    pub fn handle_event(&mut self, page: &mut Page, event: &PageEvent) -> EventOutcome {
        let msg = crate::event::handle_event(event, page, self);
        log::trace!("[interactions] {event:?} -> {msg:?}");
        update::update(self, page, msg)
    }

    /// Dispatch and finish an attempt returned by [`handle_event`](Self::handle_event).
    /// See [`SubmissionController::complete`] for what dropping it does.
    pub fn complete<'a>(
        &'a self,
        page: &'a Mutex<Page>,
        attempt: SubmissionAttempt,
    ) -> impl Future<Output = Option<Outcome>> + Send + 'a {
        let pending = self
            .submission
            .as_ref()
            .map(|controller| controller.complete(page, attempt));
        async move {
            match pending {
                Some(pending) => Some(pending.await),
                None => None,
            }
        }
    }

    /// Run the full submission protocol for one intent. `None` when there is
    /// no contact form or the intent was dropped.
    pub async fn submit(&self, page: &Mutex<Page>) -> Option<Outcome> {
        self.submission.as_ref()?.submit(page).await
    }
}
