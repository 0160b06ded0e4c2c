//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Supported languages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "te")]
    Telugu,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Telugu => "te",
        }
    }

    /// Language name used in the generation prompt's respond-in directive
    pub fn prompt_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Telugu => "Telugu",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Telugu.code(), "te");
    }

    #[test]
    fn test_language_wire_format() {
        assert_eq!(serde_json::to_string(&Language::Telugu).unwrap(), "\"te\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::English);
    }

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(Language::default(), Language::English);
    }
}
