//! Lightbox messages

use crate::page::ElementId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    /// Open (or swap to) the media described by a trigger
    Open { trigger: ElementId },

    /// Close the lightbox
    Close { source: CloseSource },

    /// Tab inside the open lightbox
    FocusNext,

    /// Shift+Tab inside the open lightbox
    FocusPrevious,
}

/// What asked the lightbox to close
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseSource {
    /// The close control
    Button,
    /// A click on the overlay outside its content
    Backdrop,
    /// Escape key
    Escape,
}
