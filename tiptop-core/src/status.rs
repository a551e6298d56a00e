//! Status sink
//!
//! Renders submission feedback into the status region, tagged with a
//! [`StatusKind`] in `data-type` so stylesheets can hook on it. Falls back to
//! a blocking alert when the page has no status region. Rendering never fails.

use serde::{Deserialize, Serialize};

use crate::page::{ElementId, Page};

/// Attribute carrying the classification tag
pub const STATUS_TAG_ATTRIBUTE: &str = "data-type";

/// Classification tag of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Info,
    Ok,
    Error,
}

impl StatusKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Ok => "ok",
            Self::Error => "error",
        }
    }
}

/// Where status messages go for one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusSink {
    region: Option<ElementId>,
}

impl StatusSink {
    /// Find the status region: inside the form first, then anywhere in the
    /// document.
    pub fn locate(page: &Page, form: ElementId, status_id: &str) -> Self {
        let region = page
            .find_within(form, status_id)
            .or_else(|| page.by_id(status_id));
        Self { region }
    }

    pub fn region(&self) -> Option<ElementId> {
        self.region
    }

    /// Show `message` tagged with `kind`.
    pub fn render(&self, page: &mut Page, message: &str, kind: StatusKind) {
        let region = self.region.filter(|id| page.is_connected(*id));
        match region.and_then(|id| page.get_mut(id)) {
            Some(el) => {
                el.set_text(message);
                el.set_attr(STATUS_TAG_ATTRIBUTE, kind.as_str());
            }
            None => {
                log::debug!("[status] no status region, raising alert");
                page.alert(message);
            }
        }
    }
}
