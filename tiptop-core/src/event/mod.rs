//! Event layer
//!
//! Translates raw page events into [`AppMessage`](crate::message::AppMessage)s.
//! Reads the page, never mutates it.

mod handler;
mod keymap;

use crate::page::ElementId;

pub use handler::handle_event;
pub use keymap::{DefaultKeymap, Key, KeyBinding};

/// Input reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// Pointer activation on `target`
    Click { target: ElementId },
    /// Key press on the document; the target is the focused element
    KeyDown { key: Key, shift: bool },
    /// Submit intent on `form`
    Submit { form: ElementId },
}
