//! Contact form submission
//!
//! One attempt runs in three phases:
//!
//! 1. [`SubmissionController::begin`] (sync, page locked): guard against a
//!    submission already in flight, capture the fields, lock and relabel the
//!    submit control, announce "sending".
//! 2. [`SubmissionController::dispatch`] (async, page untouched): POST under
//!    a [`Deadline`] and classify the result.
//! 3. [`SubmissionController::finish`] (sync, page locked): restore the
//!    control, render the outcome, clear the form on success.
//!
//! `dispatch` cannot fail, so `finish` runs on every path that reaches it.
//! [`SubmissionController::submit`] and [`SubmissionController::complete`]
//! chain the phases over a shared page. If their future is dropped while the
//! request is in flight, the control is released anyway and a generic error
//! is shown; the lock must never outlive the attempt that set it.

mod classify;
pub mod form;
mod protocol;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::{PageConfig, SubmitConfig};
use crate::error::SubmitError;
use crate::i18n::{Language, SubmitTexts};
use crate::page::{ElementId, Page};
use crate::status::{StatusKind, StatusSink};
use crate::traits::{ContactTransport, FormFields};

pub use classify::classify;
pub use protocol::{Deadline, dispatch_with_deadline};

/// Result of an attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Dispatched, not settled yet
    Pending,
    /// 2xx response
    Succeeded { message: String },
    /// Anything else, with the message shown to the user
    Failed { reason: SubmitError, message: String },
}

impl Outcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    /// User-facing message of a settled outcome
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Pending => None,
            Self::Succeeded { message } | Self::Failed { message, .. } => Some(message),
        }
    }

    /// Status tag for a settled outcome
    pub fn status_kind(&self) -> StatusKind {
        match self {
            Self::Pending => StatusKind::Info,
            Self::Succeeded { .. } => StatusKind::Ok,
            Self::Failed { .. } => StatusKind::Error,
        }
    }
}

/// State of one in-flight submission. Created by `begin`, consumed by
/// `finish`.
#[derive(Debug)]
#[must_use = "the submit control stays locked until the attempt is finished"]
pub struct SubmissionAttempt {
    fields: FormFields,
    control: ElementId,
    previous_label: String,
    deadline: Deadline,
    status: StatusSink,
    outcome: Outcome,
}

impl SubmissionAttempt {
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// The locked submit control
    pub fn control(&self) -> ElementId {
        self.control
    }

    pub fn deadline(&self) -> Deadline {
        self.deadline
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

/// Owns the submission lifecycle of one form.
pub struct SubmissionController {
    form: ElementId,
    status_id: String,
    config: SubmitConfig,
    texts: &'static SubmitTexts,
    transport: Arc<dyn ContactTransport>,
}

impl std::fmt::Debug for SubmissionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionController")
            .field("form", &self.form)
            .field("status_id", &self.status_id)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SubmissionController {
    /// Bind to the contact form. Returns `None` when the page has no such
    /// form; a form without a submit control is still bound but every intent
    /// on it is dropped.
    pub fn attach(
        page: &Page,
        page_config: &PageConfig,
        config: SubmitConfig,
        language: Language,
        transport: Arc<dyn ContactTransport>,
    ) -> Option<Self> {
        let Some(form) = page.by_id(&page_config.form_id) else {
            log::debug!("[submit] no #{} on page, controller not attached", page_config.form_id);
            return None;
        };
        if form::submit_control(page, form).is_none() {
            log::warn!("[submit] #{} has no submit control", page_config.form_id);
        }
        Some(Self {
            form,
            status_id: page_config.status_id.clone(),
            config,
            texts: &language.texts().submit,
            transport,
        })
    }

    /// The bound form
    pub fn form(&self) -> ElementId {
        self.form
    }

    pub fn config(&self) -> &SubmitConfig {
        &self.config
    }

    /// Whether an attempt is in flight.
    pub fn is_locked(&self, page: &Page) -> bool {
        form::submit_control(page, self.form).is_some_and(|c| form::is_locked(page, c))
    }

    /// Start an attempt. Returns `None`, leaving the page untouched, when an
    /// attempt is already in flight or the form lost its submit control.
    pub fn begin(&self, page: &mut Page) -> Option<SubmissionAttempt> {
        let control = form::submit_control(page, self.form)?;
        if form::is_locked(page, control) {
            log::debug!("[submit] attempt already in flight, ignoring intent");
            return None;
        }

        let fields = form::capture_fields(page, self.form);
        let status = StatusSink::locate(page, self.form, &self.status_id);

        let el = page.get_mut(control)?;
        el.set_attr(form::LOCK_ATTRIBUTE, "1");
        let previous_label = el.text().to_string();
        el.set_disabled(true);
        el.set_text(self.texts.busy_label);

        status.render(page, self.texts.sending, StatusKind::Info);
        log::info!("[submit] dispatching {} field(s) to {}", fields.len(), self.config.endpoint);

        Some(SubmissionAttempt {
            fields,
            control,
            previous_label,
            deadline: Deadline::from(&self.config),
            status,
            outcome: Outcome::Pending,
        })
    }

    /// Send the attempt and record its outcome. Never touches the page.
    pub async fn dispatch(&self, attempt: &mut SubmissionAttempt) {
        let result = dispatch_with_deadline(
            self.transport.as_ref(),
            &self.config.endpoint,
            &attempt.fields,
            attempt.deadline,
        )
        .await;
        attempt.outcome = classify(result, self.texts);
    }

    /// Restore the submit control and render the outcome. Returns the
    /// rendered outcome.
    pub fn finish(&self, page: &mut Page, attempt: SubmissionAttempt) -> Outcome {
        let SubmissionAttempt {
            control,
            previous_label,
            status,
            outcome,
            ..
        } = attempt;

        let outcome = if outcome.is_pending() {
            log::error!("[submit] attempt finished without being dispatched");
            Outcome::Failed {
                reason: SubmitError::TransportFailure(String::new()),
                message: self.texts.generic_retry.to_string(),
            }
        } else {
            outcome
        };

        match &outcome {
            Outcome::Succeeded { message } => {
                log::info!("[submit] accepted: {message}");
                form::reset_fields(page, self.form);
            }
            Outcome::Failed { reason, .. } if reason.is_expected() => {
                log::warn!("[submit] failed: {reason}");
            }
            Outcome::Failed { reason, .. } => {
                log::error!("[submit] failed: {reason}");
            }
            Outcome::Pending => {}
        }

        self.release_control(page, control, &previous_label);
        if let Some(message) = outcome.message() {
            status.render(page, message, outcome.status_kind());
        }
        outcome
    }

    /// Re-enable, relabel, unlock and focus the submit control.
    fn release_control(&self, page: &mut Page, control: ElementId, previous_label: &str) {
        if let Some(el) = page.get_mut(control) {
            el.set_disabled(false);
            let label = if previous_label.is_empty() {
                self.texts.default_label
            } else {
                previous_label
            };
            el.set_text(label);
            el.set_attr(form::LOCK_ATTRIBUTE, "0");
        }
        page.focus(control);
    }

    /// Dispatch an attempt started with [`begin`](Self::begin) and finish it
    /// on `page`. The page lock is not held while the request is in flight.
    ///
    /// Dropping the returned future before it resolves releases the control
    /// and renders the generic error message.
    pub fn complete<'a>(
        &'a self,
        page: &'a Mutex<Page>,
        mut attempt: SubmissionAttempt,
    ) -> impl Future<Output = Outcome> + Send + 'a {
        // Armed before the first poll so a future that is never awaited
        // still releases.
        let mut guard = ReleaseOnDrop::new(self, page, &attempt);
        async move {
            self.dispatch(&mut attempt).await;
            let mut page = page.lock().await;
            guard.disarm();
            self.finish(&mut page, attempt)
        }
    }

    /// Whole protocol for one intent. `None` when the intent was dropped.
    pub async fn submit(&self, page: &Mutex<Page>) -> Option<Outcome> {
        let attempt = {
            let mut page = page.lock().await;
            self.begin(&mut page)?
        };
        Some(self.complete(page, attempt).await)
    }
}

/// Releases the submit control of an attempt that never reached `finish`.
struct ReleaseOnDrop<'a> {
    controller: &'a SubmissionController,
    page: &'a Mutex<Page>,
    control: ElementId,
    previous_label: String,
    status: StatusSink,
    armed: bool,
}

impl<'a> ReleaseOnDrop<'a> {
    fn new(
        controller: &'a SubmissionController,
        page: &'a Mutex<Page>,
        attempt: &SubmissionAttempt,
    ) -> Self {
        Self {
            controller,
            page,
            control: attempt.control,
            previous_label: attempt.previous_label.clone(),
            status: attempt.status,
            armed: true,
        }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for ReleaseOnDrop<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        // Drop cannot await; a page held elsewhere right now keeps the lock.
        let Ok(mut page) = self.page.try_lock() else {
            log::error!("[submit] attempt dropped while the page was busy, control left locked");
            return;
        };
        log::warn!("[submit] attempt dropped before it settled, releasing control");
        let texts = self.controller.texts;
        self.controller
            .release_control(&mut page, self.control, &self.previous_label);
        self.status
            .render(&mut page, texts.generic_retry, StatusKind::Error);
    }
}
