//! TipTop page interactions
//!
//! Client-side behaviour of the TipTop site: the contact form submission
//! protocol with its bounded deadline, and the lightbox media viewer with
//! focus containment. Both operate on an in-memory [`Page`] mirrored by the
//! host.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tiptop_core::{Config, Interactions, Page, PageEvent};
//! use tokio::sync::Mutex;
//!
//! let config = Config::from_json(r#"{ "language": "pl" }"#)?;
//! let mut interactions = Interactions::attach(&page, &config, Arc::new(transport));
//!
//! let outcome = interactions.handle_event(&mut page, &PageEvent::Submit { form });
//! if let Some(attempt) = outcome.submission {
//!     let page = Mutex::new(page);
//!     interactions.complete(&page, attempt).await;
//! }
//! ```

pub mod abort;
mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod i18n;
pub mod message;
pub mod modal;
pub mod page;
pub mod status;
pub mod submission;
pub mod traits;
pub mod update;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use abort::{AbortController, AbortSignal};
pub use app::Interactions;
pub use config::{Config, PageConfig, SubmitConfig};
pub use error::{ConfigError, ConfigResult, SubmitError, TransportError, TransportResult};
pub use event::{Key, PageEvent};
pub use i18n::Language;
pub use modal::{MediaKind, MediaPayload, ModalState, ModalViewer};
pub use page::{Element, ElementId, Page};
pub use status::{StatusKind, StatusSink};
pub use submission::{Outcome, SubmissionAttempt, SubmissionController};
pub use traits::{ContactTransport, FormFields, TransportResponse};
pub use update::EventOutcome;
