//! Contact form updates

use super::EventOutcome;
use crate::message::SubmitMessage;
use crate::page::Page;
use crate::submission::SubmissionController;

pub fn update(
    controller: &SubmissionController,
    page: &mut Page,
    msg: SubmitMessage,
) -> EventOutcome {
    match msg {
        // Native submission is always suppressed, even when the intent is
        // dropped because an attempt is in flight.
        SubmitMessage::Requested => EventOutcome {
            default_prevented: true,
            submission: controller.begin(page),
        },
    }
}
