//! In-memory translation catalogue.

use std::collections::HashMap;

use crate::reader::Reader;
use crate::types::Translation;

/// A [`Reader`] backed by maps built in code.
///
/// Useful as a test double and for translations that ship compiled into the
/// binary. Lookups with `language = None` resolve against the configured
/// default language; without one they return `None`.
#[derive(Debug, Clone, Default)]
pub struct MemoryReader {
    /// Language → (key → translation).
    catalogue: HashMap<String, HashMap<String, Translation>>,
    default_language: Option<String>,
}

impl MemoryReader {
    /// Creates an empty catalogue with no default language.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the language used when `get` is called without one.
    #[must_use]
    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = Some(language.into());
        self
    }

    /// Stores a translation for `key` under `language`.
    ///
    /// Accepts anything convertible into a [`Translation`]; a later insert
    /// for the same key replaces the earlier one.
    pub fn insert(
        &mut self,
        language: impl Into<String>,
        key: impl Into<String>,
        translation: impl Into<Translation>,
    ) {
        self.catalogue
            .entry(language.into())
            .or_default()
            .insert(key.into(), translation.into());
    }

    /// Stores a multi-form translation for `key` under `language`.
    pub fn insert_variants<I, L, V>(
        &mut self,
        language: impl Into<String>,
        key: impl Into<String>,
        variants: I,
    ) where
        I: IntoIterator<Item = (L, V)>,
        L: Into<String>,
        V: Into<String>,
    {
        let translation: Translation =
            variants.into_iter().map(|(label, text)| (label.into(), text.into())).collect();
        self.insert(language, key, translation);
    }

    /// Returns the languages this catalogue holds translations for.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.catalogue.keys().map(String::as_str)
    }
}

impl Reader for MemoryReader {
    fn get(&self, key: &str, language: Option<&str>) -> Option<Translation> {
        let language = language.or(self.default_language.as_deref())?;
        self.catalogue.get(language)?.get(key).cloned()
    }
}
