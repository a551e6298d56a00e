//! Event dispatch

use crate::app::Interactions;
use crate::event::PageEvent;
use crate::event::keymap::{DefaultKeymap, Key};
use crate::message::{AppMessage, CloseSource, ModalMessage, SubmitMessage};
use crate::modal::ModalViewer;
use crate::page::{ElementId, Page};

/// Translate a page event into a message.
pub fn handle_event(event: &PageEvent, page: &Page, app: &Interactions) -> AppMessage {
    match *event {
        PageEvent::Click { target } => app
            .modal()
            .map_or(AppMessage::Noop, |viewer| handle_click(target, page, viewer)),
        PageEvent::KeyDown { key, shift } => app
            .modal()
            .map_or(AppMessage::Noop, |viewer| handle_key(key, shift, page, viewer)),
        PageEvent::Submit { form } => match app.submission() {
            Some(controller) if controller.form() == form => {
                AppMessage::Submit(SubmitMessage::Requested)
            }
            _ => AppMessage::Noop,
        },
    }
}

fn handle_click(target: ElementId, page: &Page, viewer: &ModalViewer) -> AppMessage {
    if let Some(trigger) = viewer.trigger_for(page, target) {
        return AppMessage::Modal(ModalMessage::Open { trigger });
    }
    if viewer.is_close_target(page, target) {
        return AppMessage::Modal(ModalMessage::Close {
            source: CloseSource::Button,
        });
    }
    if viewer.is_open() && viewer.is_backdrop(target) {
        return AppMessage::Modal(ModalMessage::Close {
            source: CloseSource::Backdrop,
        });
    }
    AppMessage::Noop
}

fn handle_key(key: Key, shift: bool, page: &Page, viewer: &ModalViewer) -> AppMessage {
    // Lightbox keys only apply while it is open
    if viewer.is_open() {
        if DefaultKeymap::CLOSE.matches(key, shift) {
            return AppMessage::Modal(ModalMessage::Close {
                source: CloseSource::Escape,
            });
        }
        if DefaultKeymap::FOCUS_NEXT.matches(key, shift) {
            return AppMessage::Modal(ModalMessage::FocusNext);
        }
        if DefaultKeymap::FOCUS_PREVIOUS.matches(key, shift) {
            return AppMessage::Modal(ModalMessage::FocusPrevious);
        }
    }

    if DefaultKeymap::ACTIVATE.matches(key, shift) || DefaultKeymap::ACTIVATE_ALT.matches(key, shift)
    {
        let trigger = page
            .focused()
            .and_then(|focused| viewer.trigger_for(page, focused));
        if let Some(trigger) = trigger {
            return AppMessage::Modal(ModalMessage::Open { trigger });
        }
    }

    AppMessage::Noop
}
