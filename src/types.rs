//! Core types used throughout the crate.

use std::collections::HashMap;

/// The variant label that denotes the default translation form.
pub const OTHER: &str = "other";

/// The translation(s) resolved for a key.
///
/// Absence of a translation is `Option::None` at the lookup site, never an
/// error: a reader that cannot find a key returns `None` and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// Exactly one translation form applies.
    Single(String),
    /// Multiple forms apply, keyed by variant label (e.g. `"one"`, `"other"`).
    ///
    /// The [`OTHER`] label marks the default form a caller should fall back
    /// to when it has no more specific label to match.
    Variants(HashMap<String, String>),
}

impl Translation {
    /// Returns the text if this is a single-form translation.
    #[must_use]
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(text) => Some(text),
            Self::Variants(_) => None,
        }
    }

    /// Returns the variant mapping if this is a multi-form translation.
    #[must_use]
    pub const fn as_variants(&self) -> Option<&HashMap<String, String>> {
        match self {
            Self::Single(_) => None,
            Self::Variants(variants) => Some(variants),
        }
    }

    /// Returns the form for `label`, falling back to the [`OTHER`] variant.
    ///
    /// A single-form translation matches every label.
    #[must_use]
    pub fn variant(&self, label: &str) -> Option<&str> {
        match self {
            Self::Single(text) => Some(text),
            Self::Variants(variants) => {
                variants.get(label).or_else(|| variants.get(OTHER)).map(String::as_str)
            }
        }
    }

    /// Returns the default text: the single form, or the [`OTHER`] variant.
    #[must_use]
    pub fn default_text(&self) -> Option<&str> {
        match self {
            Self::Single(text) => Some(text),
            Self::Variants(variants) => variants.get(OTHER).map(String::as_str),
        }
    }
}

impl From<&str> for Translation {
    fn from(text: &str) -> Self {
        Self::Single(text.to_string())
    }
}

impl From<String> for Translation {
    fn from(text: String) -> Self {
        Self::Single(text)
    }
}

impl FromIterator<(String, String)> for Translation {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::Variants(iter.into_iter().collect())
    }
}
