//! Media payload of the lightbox

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::page::Element;

/// Extensions played in the video slot, optionally followed by a query string.
static VIDEO_EXTENSION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\.(mp4|webm|ogg)(\?.*)?$").ok());

/// Attribute forcing the media kind on a trigger
pub const KIND_ATTRIBUTE: &str = "data-type";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// What the lightbox shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaPayload {
    /// Locator handed to the media slot, possibly empty
    pub source: String,
    pub kind: MediaKind,
    /// Caption, possibly empty
    pub title: String,
}

impl MediaPayload {
    pub fn new(source: impl Into<String>, kind: MediaKind, title: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind,
            title: title.into(),
        }
    }

    /// Read the payload off a trigger element.
    ///
    /// Source is `href`, then `data-src`; title is `data-title`, then
    /// `title`. Empty attributes fall through to the next candidate.
    pub fn from_trigger(trigger: &Element) -> Self {
        let source = trigger
            .non_empty_attr("href")
            .or_else(|| trigger.non_empty_attr("data-src"))
            .unwrap_or_default();
        let title = trigger
            .non_empty_attr("data-title")
            .or_else(|| trigger.non_empty_attr("title"))
            .unwrap_or_default();
        let kind = infer_kind(trigger.attr(KIND_ATTRIBUTE), source);
        Self::new(source, kind, title)
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

/// Decide the media kind. An explicit `video`/`image` (any case) wins; any
/// other value is ignored and the source extension decides.
pub fn infer_kind(explicit: Option<&str>, source: &str) -> MediaKind {
    match explicit.map(str::trim) {
        Some(t) if t.eq_ignore_ascii_case("video") => MediaKind::Video,
        Some(t) if t.eq_ignore_ascii_case("image") => MediaKind::Image,
        _ if has_video_extension(source) => MediaKind::Video,
        _ => MediaKind::Image,
    }
}

fn has_video_extension(source: &str) -> bool {
    VIDEO_EXTENSION
        .as_ref()
        .is_some_and(|re| re.is_match(source))
}
