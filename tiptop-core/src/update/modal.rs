//! Lightbox updates

use super::EventOutcome;
use crate::message::{CloseSource, ModalMessage};
use crate::modal::ModalViewer;
use crate::page::Page;

pub fn update(viewer: &mut ModalViewer, page: &mut Page, msg: ModalMessage) -> EventOutcome {
    match msg {
        ModalMessage::Open { trigger } => {
            viewer.open_from_trigger(page, trigger);
            EventOutcome::prevented(true)
        }
        ModalMessage::Close { source } => {
            viewer.close(page);
            // Backdrop clicks and Escape keep their default action
            EventOutcome::prevented(source == CloseSource::Button)
        }
        ModalMessage::FocusNext => EventOutcome::prevented(viewer.trap_focus(page, false)),
        ModalMessage::FocusPrevious => EventOutcome::prevented(viewer.trap_focus(page, true)),
    }
}
