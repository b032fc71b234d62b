//! Languages and the localized interface strings
//!
//! The same [`Language`] enum selects both the interface language (menus,
//! labels) and the content language (quiz questions, collected letters);
//! the two are chosen independently in the settings screen.

pub mod localization;

pub use localization::Localization;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A supported interface/content language
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
pub enum Language {
    #[default]
    #[serde(rename = "ru")]
    #[value(name = "ru")]
    Russian,
    #[serde(rename = "en")]
    #[value(name = "en")]
    English,
    #[serde(rename = "ko")]
    #[value(name = "ko")]
    Korean,
}

impl Language {
    /// All languages in settings-menu order
    pub const ALL: [Language; 3] = [Language::Russian, Language::English, Language::Korean];

    /// Two-letter language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Russian => "ru",
            Language::English => "en",
            Language::Korean => "ko",
        }
    }

    /// The language's name written in that language
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Russian => "Русский",
            Language::English => "English",
            Language::Korean => "한국어",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::Russian.code(), "ru");
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Korean.code(), "ko");
    }

    #[test]
    fn test_language_serde_uses_codes() {
        let json = serde_json::to_string(&Language::Korean).unwrap();
        assert_eq!(json, "\"ko\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::English);
    }
}
