use std::fmt;

use serde::{Deserialize, Serialize};

/// Output languages offered by the planner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Urdu,
    Arabic,
    French,
    Spanish,
}

impl Language {
    /// Every supported language, in the order a shell should list them.
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Urdu,
        Language::Arabic,
        Language::French,
        Language::Spanish,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Urdu => "Urdu",
            Language::Arabic => "Arabic",
            Language::French => "French",
            Language::Spanish => "Spanish",
        }
    }

    pub fn parse(value: &str) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trips_through_parse() {
        for lang in Language::ALL {
            assert_eq!(Language::parse(lang.as_str()), Some(lang));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        assert_eq!(Language::parse(" urdu "), Some(Language::Urdu));
        assert_eq!(Language::parse("SPANISH"), Some(Language::Spanish));
    }

    #[test]
    fn test_parse_rejects_unknown_language() {
        assert_eq!(Language::parse("Klingon"), None);
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::English);
    }
}
