//! Translation keys
//!
//! Every user-facing string lives in one of these structs so missing
//! translations are caught at compile time.

/// Root of all translated text
#[derive(Debug)]
pub struct Translations {
    /// Contact form texts
    pub submit: SubmitTexts,
    /// Lightbox texts
    pub modal: ModalTexts,
}

/// Contact form texts
#[derive(Debug)]
pub struct SubmitTexts {
    /// Submit control label while a request is in flight
    pub busy_label: &'static str,
    /// Submit control label used when the original label was empty
    pub default_label: &'static str,
    /// Status shown when the request is dispatched
    pub sending: &'static str,
    /// Success status when the server supplied no message
    pub thank_you: &'static str,
    /// Failure status for non-success responses without a message
    pub server_error: &'static str,
    /// Failure status when the deadline passed
    pub timed_out: &'static str,
    /// Failure status when nothing better is known
    pub generic_retry: &'static str,
}

/// Lightbox texts
#[derive(Debug)]
pub struct ModalTexts {
    /// Image alt text when the trigger carries no title
    pub default_alt: &'static str,
}
