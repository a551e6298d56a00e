//! Page model
//!
//! An arena of [`Element`]s standing in for the surrounding document. The host
//! mirrors the real markup into it and reads the side effects back out; the
//! interaction layer never touches anything else.
//!
//! Elements are never freed. [`Page::remove`] only detaches a subtree, so an
//! [`ElementId`] held across events (the modal's return-focus target, for
//! instance) stays valid and can be checked with [`Page::is_connected`].

mod element;

use std::fmt;

pub use element::Element;

/// Handle to an element of a [`Page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// In-memory document
#[derive(Debug, Clone)]
pub struct Page {
    elements: Vec<Element>,
    focused: Option<ElementId>,
    scroll_locked: bool,
    alerts: Vec<String>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    /// Empty page holding only the `html` root.
    pub fn new() -> Self {
        Self {
            elements: vec![Element::new("html")],
            focused: None,
            scroll_locked: false,
            alerts: Vec::new(),
        }
    }

    /// The document element
    pub fn root(&self) -> ElementId {
        ElementId(0)
    }

    // ===== Tree =====

    /// Append `element` as the last child of `parent`.
    pub fn append(&mut self, parent: ElementId, mut element: Element) -> ElementId {
        let id = ElementId(self.elements.len());
        element.parent = Some(parent);
        element.children.clear();
        self.elements.push(element);
        if let Some(p) = self.elements.get_mut(parent.0) {
            p.children.push(id);
        }
        id
    }

    /// Detach `id` and its subtree from the document. The root cannot be
    /// removed.
    pub fn remove(&mut self, id: ElementId) {
        if id == self.root() {
            return;
        }
        let Some(parent) = self.get(id).and_then(Element::parent) else {
            return;
        };
        if let Some(p) = self.elements.get_mut(parent.0) {
            p.children.retain(|c| *c != id);
        }
        if let Some(el) = self.elements.get_mut(id.0) {
            el.parent = None;
        }
        if self.focused.is_some_and(|f| self.is_inclusive_ancestor(id, f)) {
            self.focused = None;
        }
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0)
    }

    /// Whether `id` is attached to the document.
    pub fn is_connected(&self, id: ElementId) -> bool {
        self.is_inclusive_ancestor(self.root(), id)
    }

    /// Whether `ancestor` is `id` or one of its ancestors.
    pub fn is_inclusive_ancestor(&self, ancestor: ElementId, id: ElementId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.get(current).and_then(Element::parent);
        }
        false
    }

    /// Descendants of `scope` in document order, `scope` excluded.
    pub fn descendants(&self, scope: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack: Vec<ElementId> = self
            .get(scope)
            .map(|el| el.children().iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(el) = self.get(id) {
                stack.extend(el.children().iter().rev().copied());
            }
        }
        out
    }

    /// First connected element whose `id` attribute equals `dom_id`.
    pub fn by_id(&self, dom_id: &str) -> Option<ElementId> {
        self.find_within(self.root(), dom_id)
    }

    /// First descendant of `scope` whose `id` attribute equals `dom_id`.
    pub fn find_within(&self, scope: ElementId, dom_id: &str) -> Option<ElementId> {
        self.descendants(scope)
            .into_iter()
            .find(|id| self.get(*id).and_then(Element::dom_id) == Some(dom_id))
    }

    /// First descendant of `scope` matching `predicate`.
    pub fn query(
        &self,
        scope: ElementId,
        predicate: impl Fn(&Element) -> bool,
    ) -> Option<ElementId> {
        self.descendants(scope)
            .into_iter()
            .find(|id| self.get(*id).is_some_and(&predicate))
    }

    /// All descendants of `scope` matching `predicate`, in document order.
    pub fn query_all(
        &self,
        scope: ElementId,
        predicate: impl Fn(&Element) -> bool,
    ) -> Vec<ElementId> {
        self.descendants(scope)
            .into_iter()
            .filter(|id| self.get(*id).is_some_and(&predicate))
            .collect()
    }

    /// Nearest inclusive ancestor of `id` carrying `attribute`.
    pub fn closest_with_attr(&self, id: ElementId, attribute: &str) -> Option<ElementId> {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let el = self.get(current)?;
            if el.has_attr(attribute) {
                return Some(current);
            }
            cursor = el.parent();
        }
        None
    }

    // ===== Focus =====

    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    /// Whether `id` can currently receive focus.
    pub fn can_focus(&self, id: ElementId) -> bool {
        self.is_connected(id) && self.get(id).is_some_and(|el| !el.is_disabled())
    }

    /// Move focus to `id`. Returns `false` (and leaves focus alone) when the
    /// element cannot receive focus.
    pub fn focus(&mut self, id: ElementId) -> bool {
        if !self.can_focus(id) {
            return false;
        }
        self.focused = Some(id);
        true
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    // ===== Document-wide state =====

    /// Whether background scrolling is locked (`overflow: hidden` on the
    /// document element).
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    /// Raise a blocking alert.
    pub fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    /// Alerts raised so far, oldest first.
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}
