use std::collections::HashMap;

use thiserror::Error;

use super::Language;

pub type CatalogData = HashMap<Language, HashMap<&'static str, &'static str>>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("text {key:?} is missing for language {language}")]
    MissingKey { language: Language, key: String },
}

/// Localized lookup over a static `language -> key -> template` table.
///
/// Implementors only provide their table and the language they were created
/// with; `get` stays the same for every provider.
pub trait TextCatalog {
    fn language(&self) -> Language;

    fn data(&self) -> &'static CatalogData;

    /// Template for `key` in the catalog's language. There is no fallback to
    /// another language: a missing key is a missing translation.
    fn get(&self, key: &str) -> Result<&'static str, TextError> {
        let language = self.language();
        self.data()
            .get(&language)
            .and_then(|texts| texts.get(key))
            .copied()
            .ok_or_else(|| TextError::MissingKey {
                language,
                key: key.to_string(),
            })
    }
}

pub(super) fn build_catalog(
    tables: &[(Language, &[(&'static str, &'static str)])],
) -> CatalogData {
    tables
        .iter()
        .map(|(language, entries)| (*language, entries.iter().copied().collect()))
        .collect()
}
