//! Internationalisation
//!
//! Plain Rust structs, checked at compile time, no runtime lookup cost.
//! The language is chosen per controller through configuration rather than
//! a process-wide switch, so two pages with different locales can coexist.

use serde::{Deserialize, Serialize};

mod en_us;
pub mod keys;
mod pl_pl;

pub use keys::*;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    /// English (United States)
    #[default]
    #[serde(rename = "en-US", alias = "en")]
    EnUs,
    /// Polish (Poland)
    #[serde(rename = "pl-PL", alias = "pl")]
    PlPl,
}

impl Language {
    /// All supported languages
    pub fn all() -> &'static [Language] {
        &[Language::EnUs, Language::PlPl]
    }

    /// BCP 47 code
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::PlPl => "pl-PL",
        }
    }

    /// Parse a language code
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "pl-PL" | "pl" => Some(Language::PlPl),
            _ => None,
        }
    }

    /// Translation table for this language
    pub fn texts(self) -> &'static Translations {
        match self {
            Language::EnUs => &en_us::TRANSLATIONS,
            Language::PlPl => &pl_pl::TRANSLATIONS,
        }
    }
}
