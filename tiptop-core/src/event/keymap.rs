//! Key bindings

/// Keys the layer reacts to. Everything else maps to [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Tab,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct KeyBinding {
    pub key: Key,
    /// `None` matches with or without Shift
    pub shift: Option<bool>,
}

impl KeyBinding {
    pub const fn new(key: Key, shift: Option<bool>) -> Self {
        Self { key, shift }
    }

    /// Key with any Shift state
    pub const fn key(key: Key) -> Self {
        Self::new(key, None)
    }

    pub const fn plain(key: Key) -> Self {
        Self::new(key, Some(false))
    }

    pub const fn shift(key: Key) -> Self {
        Self::new(key, Some(true))
    }

    /// Check whether a key press matches this binding
    pub fn matches(&self, key: Key, shift: bool) -> bool {
        self.key == key && self.shift.is_none_or(|s| s == shift)
    }
}

pub struct DefaultKeymap;

impl DefaultKeymap {
    // Lightbox
    pub const CLOSE: KeyBinding = KeyBinding::key(Key::Escape);
    pub const FOCUS_NEXT: KeyBinding = KeyBinding::plain(Key::Tab);
    pub const FOCUS_PREVIOUS: KeyBinding = KeyBinding::shift(Key::Tab);

    // Triggers
    pub const ACTIVATE: KeyBinding = KeyBinding::key(Key::Enter);
    pub const ACTIVATE_ALT: KeyBinding = KeyBinding::key(Key::Space);
}
