use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Languages the bot can talk in.
///
/// Adding a variant here (and a row in [`SUPPORTED_LANGUAGES`]) offers the
/// language everywhere: command menus, the language keyboard and every text
/// catalog, which must then provide translations for all of its keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ar,
}

/// Supported languages in the order they are shown in language menus.
pub const SUPPORTED_LANGUAGES: &[(Language, &str)] = &[
    (Language::En, "🇬🇧 English"),
    (Language::Ar, "🇸🇾 العربية"),
];

impl Language {
    pub const DEFAULT: Self = Self::En;

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Strict lookup: `None` if the code is not a supported language.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        SUPPORTED_LANGUAGES
            .iter()
            .map(|(language, _)| *language)
            .find(|language| language.code() == code)
    }

    /// Lookup with fallback: unsupported codes resolve to [`Language::DEFAULT`].
    #[must_use]
    pub fn resolve(code: &str) -> Self {
        Self::from_code(code).unwrap_or(Self::DEFAULT)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        SUPPORTED_LANGUAGES
            .iter()
            .find(|(language, _)| *language == self)
            .map_or(self.code(), |(_, label)| *label)
    }

    #[must_use]
    pub fn all() -> impl Iterator<Item = Self> {
        SUPPORTED_LANGUAGES.iter().map(|(language, _)| *language)
    }

    /// Language code to attach to per-language bot api calls.
    ///
    /// The default language goes without a code so telegram uses it for every
    /// client language that has no dedicated menu.
    #[must_use]
    pub fn api_language_code(self) -> Option<&'static str> {
        (self != Self::DEFAULT).then_some(self.code())
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_supported_code() {
        assert_eq!(Language::resolve("ar"), Language::Ar);
        assert_eq!(Language::resolve("en"), Language::En);
    }

    #[test]
    fn resolve_falls_back_to_default() {
        assert_eq!(Language::resolve("fr"), Language::resolve("en"));
        assert_eq!(Language::resolve(""), Language::DEFAULT);
        assert_eq!(Language::resolve("EN"), Language::DEFAULT);
    }

    #[test]
    fn from_code_is_strict() {
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code("ar"), Some(Language::Ar));
    }

    #[test]
    fn labels_follow_table_order() {
        let labels: Vec<_> = Language::all().map(Language::label).collect();
        assert_eq!(labels, vec!["🇬🇧 English", "🇸🇾 العربية"]);
    }

    #[test]
    fn default_language_has_no_api_code() {
        assert_eq!(Language::En.api_language_code(), None);
        assert_eq!(Language::Ar.api_language_code(), Some("ar"));
    }
}
