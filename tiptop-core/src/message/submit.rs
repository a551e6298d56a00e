//! Contact form messages

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMessage {
    /// The user asked to send the contact form
    Requested,
}
