//! English (en-US)

use super::keys::{ModalTexts, SubmitTexts, Translations};

pub const TRANSLATIONS: Translations = Translations {
    submit: SubmitTexts {
        busy_label: "Sending…",
        default_label: "Send request",
        sending: "Sending message…",
        thank_you: "Thank you! We will get back to you soon.",
        server_error: "Could not send (server error).",
        timed_out: "The request timed out. Please try again.",
        generic_retry: "Something went wrong. Please try again.",
    },
    modal: ModalTexts {
        default_alt: "Preview",
    },
};
