//! Message layer
//!
//! Bridge between events and updates. Every state change the layer performs is
//! expressed as one of these messages.

mod modal;
mod submit;

pub use modal::{CloseSource, ModalMessage};
pub use submit::SubmitMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// Lightbox message
    Modal(ModalMessage),
    /// Contact form message
    Submit(SubmitMessage),
    /// Nothing to do
    Noop,
}
