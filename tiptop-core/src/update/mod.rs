//! Update layer
//!
//! Consumes messages. The only place where the page and the lightbox state
//! are mutated in response to events.

mod modal;
mod submit;

use crate::app::Interactions;
use crate::message::AppMessage;
use crate::page::Page;
use crate::submission::SubmissionAttempt;

/// Result of handling one event
#[derive(Debug, Default)]
pub struct EventOutcome {
    /// Whether the host must suppress the event's default action
    pub default_prevented: bool,
    /// Attempt started by a submit intent, ready to be dispatched
    pub submission: Option<SubmissionAttempt>,
}

impl EventOutcome {
    pub(crate) fn prevented(prevented: bool) -> Self {
        Self {
            default_prevented: prevented,
            submission: None,
        }
    }
}

/// Main update function
pub fn update(app: &mut Interactions, page: &mut Page, msg: AppMessage) -> EventOutcome {
    match msg {
        AppMessage::Modal(modal_msg) => match app.modal_mut() {
            Some(viewer) => modal::update(viewer, page, modal_msg),
            None => EventOutcome::default(),
        },
        AppMessage::Submit(submit_msg) => match app.submission() {
            Some(controller) => submit::update(controller, page, submit_msg),
            None => EventOutcome::default(),
        },
        AppMessage::Noop => EventOutcome::default(),
    }
}
