//! Lightbox viewer
//!
//! One overlay, two media slots, any number of triggers. The viewer is a
//! two-state machine:
//!
//! ```text
//!            open / open (swap payload)
//!   Closed ─────────────────────────────▶ Open { payload, return_focus }
//!     ▲                                        │
//!     └────── close control / backdrop / Esc ──┘
//! ```
//!
//! When open exactly one slot is live; the other has no source and no
//! playback.

mod focus;
mod media;

use crate::config::PageConfig;
use crate::i18n::{Language, ModalTexts};
use crate::page::{ElementId, Page};

pub use focus::{focusables, is_focusable};
pub use media::{KIND_ATTRIBUTE, MediaKind, MediaPayload, infer_kind};

/// Class hiding an element
const HIDDEN: &str = "hidden";
/// Class laying out the visible overlay
const FLEX: &str = "flex";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        payload: MediaPayload,
        /// Element focused before the first open, restored on close
        return_focus: Option<ElementId>,
    },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}

/// Lightbox bound to the page's overlay
#[derive(Debug)]
pub struct ModalViewer {
    overlay: ElementId,
    image: Option<ElementId>,
    video: Option<ElementId>,
    close: Option<ElementId>,
    trigger_attribute: String,
    texts: &'static ModalTexts,
    state: ModalState,
}

impl ModalViewer {
    /// Bind to the overlay. `None` when the page has none; the slots and close
    /// control are optional.
    pub fn attach(page: &Page, config: &PageConfig, language: Language) -> Option<Self> {
        let Some(overlay) = page.by_id(&config.overlay_id) else {
            log::debug!("[lightbox] no #{} on page, viewer not attached", config.overlay_id);
            return None;
        };
        let find = |id: &str| page.find_within(overlay, id).or_else(|| page.by_id(id));
        Some(Self {
            overlay,
            image: find(&config.image_id),
            video: find(&config.video_id),
            close: find(&config.close_id),
            trigger_attribute: config.trigger_attribute.clone(),
            texts: &language.texts().modal,
            state: ModalState::Closed,
        })
    }

    pub fn overlay(&self) -> ElementId {
        self.overlay
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn payload(&self) -> Option<&MediaPayload> {
        match &self.state {
            ModalState::Open { payload, .. } => Some(payload),
            ModalState::Closed => None,
        }
    }

    // ===== Hit testing =====

    /// Trigger containing `target`, if any.
    pub fn trigger_for(&self, page: &Page, target: ElementId) -> Option<ElementId> {
        page.closest_with_attr(target, &self.trigger_attribute)
    }

    /// Whether `target` is the close control or inside it.
    pub fn is_close_target(&self, page: &Page, target: ElementId) -> bool {
        self.close
            .is_some_and(|close| page.is_inclusive_ancestor(close, target))
    }

    /// Whether `target` is the overlay itself rather than its content.
    pub fn is_backdrop(&self, target: ElementId) -> bool {
        target == self.overlay
    }

    // ===== Transitions =====

    /// Open with the payload described by `trigger`.
    pub fn open_from_trigger(&mut self, page: &mut Page, trigger: ElementId) {
        let Some(payload) = page.get(trigger).map(MediaPayload::from_trigger) else {
            return;
        };
        self.open(page, payload);
    }

    /// Show `payload`. Opening while open swaps the media in place.
    pub fn open(&mut self, page: &mut Page, payload: MediaPayload) {
        let return_focus = match &self.state {
            ModalState::Closed => page.focused(),
            ModalState::Open { return_focus, .. } => match page.focused() {
                Some(f) if !page.is_inclusive_ancestor(self.overlay, f) => Some(f),
                _ => *return_focus,
            },
        };
        log::debug!("[lightbox] open {:?} {}", payload.kind, payload.source);

        self.show_media(page, &payload);
        if let Some(el) = page.get_mut(self.overlay) {
            el.remove_class(HIDDEN);
            el.add_class(FLEX);
            el.set_attr("aria-modal", "true");
            el.set_attr("role", "dialog");
        }
        page.set_scroll_locked(true);
        let focused = self.close.is_some_and(|close| page.focus(close));
        if !focused {
            page.focus(self.overlay);
        }

        self.state = ModalState::Open {
            payload,
            return_focus,
        };
    }

    /// Hide the overlay and give focus back. Returns `false` if it was not
    /// open.
    pub fn close(&mut self, page: &mut Page) -> bool {
        let ModalState::Open { return_focus, .. } = std::mem::take(&mut self.state) else {
            return false;
        };
        log::debug!("[lightbox] close");

        if let Some(el) = page.get_mut(self.overlay) {
            el.add_class(HIDDEN);
            el.remove_class(FLEX);
        }
        page.set_scroll_locked(false);
        if let Some(el) = self.video.and_then(|id| page.get_mut(id)) {
            el.pause();
            el.remove_attr("src");
        }
        if let Some(target) = return_focus
            && !page.focus(target)
        {
            log::debug!("[lightbox] return focus target {target} is gone");
        }
        true
    }

    /// Keep Tab inside the overlay while open. Returns whether focus was
    /// wrapped.
    pub fn trap_focus(&self, page: &mut Page, backwards: bool) -> bool {
        self.is_open() && focus::trap(page, self.overlay, backwards)
    }

    fn show_media(&self, page: &mut Page, payload: &MediaPayload) {
        match payload.kind {
            MediaKind::Video => {
                if let Some(img) = self.image.and_then(|id| page.get_mut(id)) {
                    img.add_class(HIDDEN);
                    img.remove_attr("src");
                    img.remove_attr("alt");
                }
                if let Some(video) = self.video.and_then(|id| page.get_mut(id)) {
                    video.remove_class(HIDDEN);
                    video.set_attr("src", &payload.source);
                    video.set_attr("controls", "controls");
                    video.play();
                }
            }
            MediaKind::Image => {
                if let Some(video) = self.video.and_then(|id| page.get_mut(id)) {
                    video.pause();
                    video.remove_attr("src");
                    video.add_class(HIDDEN);
                }
                if let Some(img) = self.image.and_then(|id| page.get_mut(id)) {
                    let alt = if payload.title.is_empty() {
                        self.texts.default_alt
                    } else {
                        payload.title.as_str()
                    };
                    img.set_attr("src", &payload.source);
                    img.set_attr("alt", alt);
                    img.remove_class(HIDDEN);
                }
            }
        }
    }
}
