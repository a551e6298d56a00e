//! Element node

use std::collections::{BTreeMap, BTreeSet};

use super::ElementId;

/// A node of the page model.
///
/// Only what the interaction layer observes is modelled: attributes, classes,
/// text, the current value of form controls, the disabled flag and media
/// playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    text: String,
    value: String,
    disabled: bool,
    playing: bool,
    pub(super) parent: Option<ElementId>,
    pub(super) children: Vec<ElementId>,
}

impl Element {
    /// New detached element with the given tag name (lowercased).
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            attributes: BTreeMap::new(),
            classes: BTreeSet::new(),
            text: String::new(),
            value: String::new(),
            disabled: false,
            playing: false,
            parent: None,
            children: Vec::new(),
        }
    }

    // ===== Builders =====

    /// Set the `id` attribute.
    #[must_use]
    pub fn with_id(self, id: &str) -> Self {
        self.with_attr("id", id)
    }

    /// Set an attribute. `class` is split into the class set, `value` also
    /// seeds the current value of form controls.
    #[must_use]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        if name == "value" {
            self.value = value.to_string();
        }
        self
    }

    /// Add one or more whitespace separated classes.
    #[must_use]
    pub fn with_class(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            self.add_class(class);
        }
        self
    }

    /// Set the text content.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// Mark the element disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    // ===== Attributes =====

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        if name == "class" {
            return None;
        }
        self.attributes.get(name).map(String::as_str)
    }

    /// Attribute value, treating an empty string as absent.
    pub fn non_empty_attr(&self, name: &str) -> Option<&str> {
        self.attr(name).filter(|v| !v.is_empty())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        if name == "class" {
            return !self.classes.is_empty();
        }
        self.attributes.contains_key(name)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        if name == "class" {
            self.classes = value.split_whitespace().map(str::to_string).collect();
        } else {
            self.attributes.insert(name.to_string(), value.to_string());
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        if name == "class" {
            self.classes.clear();
        } else {
            self.attributes.remove(name);
        }
    }

    /// The `id` attribute
    pub fn dom_id(&self) -> Option<&str> {
        self.attr("id")
    }

    // ===== Classes =====

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    // ===== Content & state =====

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Current value of a form control
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    /// Restore the value declared in markup (empty when none was declared).
    pub fn reset_value(&mut self) {
        self.value = self.attributes.get("value").cloned().unwrap_or_default();
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Whether a media element is currently playing
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Start playback. Only media elements with a source can play; anything
    /// else is ignored, mirroring a rejected `play()` promise.
    pub fn play(&mut self) {
        if matches!(self.tag.as_str(), "video" | "audio") && self.has_attr("src") {
            self.playing = true;
        }
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }
}
