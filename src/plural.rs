//! Plural suffix handling for suffixed translation keys.
//!
//! i18next-style catalogues spell plural forms as sibling keys carrying a
//! suffix (`items_one`, `items_other`). These helpers recognise the suffixes
//! so a reader can fold such siblings into one variant mapping at the base
//! key.

use std::collections::HashMap;

/// Longer suffixes must come first to avoid `_one` matching `place_ordinal_one`.
pub const PLURAL_SUFFIXES: &[&str] = &[
    "_ordinal_zero",
    "_ordinal_one",
    "_ordinal_two",
    "_ordinal_few",
    "_ordinal_many",
    "_ordinal_other",
    "_zero",
    "_one",
    "_two",
    "_few",
    "_many",
    "_other",
];

/// Returns the base key and variant label for a suffixed plural key.
///
/// `items_one` → `("items", "one")`, `place_ordinal_few` →
/// `("place", "ordinal_few")`. `None` if the key carries no recognised
/// suffix or nothing would remain of the base.
#[must_use]
pub fn plural_base_key(key: &str) -> Option<(&str, &str)> {
    for suffix in PLURAL_SUFFIXES {
        if let Some(base) = key.strip_suffix(suffix)
            && !base.is_empty()
            && let Some(label) = suffix.strip_prefix('_')
        {
            return Some((base, label));
        }
    }
    None
}

/// Returns all suffixed plural forms of the base key as (label, value) pairs.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn find_plural_variants<'a>(
    base_key: &str,
    keys: &'a HashMap<String, String>,
) -> Vec<(&'static str, &'a str)> {
    PLURAL_SUFFIXES
        .iter()
        .filter_map(|suffix| {
            let variant_key = format!("{base_key}{suffix}");
            let label = suffix.strip_prefix('_')?;
            keys.get(&variant_key).map(|value| (label, value.as_str()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_base_key() {
        // Cardinal suffixes
        assert_eq!(plural_base_key("items_zero"), Some(("items", "zero")));
        assert_eq!(plural_base_key("items_one"), Some(("items", "one")));
        assert_eq!(plural_base_key("items_few"), Some(("items", "few")));
        assert_eq!(plural_base_key("items_many"), Some(("items", "many")));
        assert_eq!(plural_base_key("items_other"), Some(("items", "other")));

        // Ordinal suffixes
        assert_eq!(plural_base_key("place_ordinal_one"), Some(("place", "ordinal_one")));
        assert_eq!(plural_base_key("place_ordinal_other"), Some(("place", "ordinal_other")));

        // No suffix or unknown suffix
        assert_eq!(plural_base_key("items"), None);
        assert_eq!(plural_base_key("items_unknown"), None);
        assert_eq!(plural_base_key("_one"), None); // empty base key
    }

    #[test]
    fn test_find_plural_variants() {
        let mut keys = HashMap::new();
        keys.insert("items_one".to_string(), "{{count}} item".to_string());
        keys.insert("items_other".to_string(), "{{count}} items".to_string());
        keys.insert("single".to_string(), "Single value".to_string());

        let variants = find_plural_variants("items", &keys);
        assert_eq!(variants.len(), 2);
        assert!(variants.contains(&("one", "{{count}} item")));
        assert!(variants.contains(&("other", "{{count}} items")));

        // No variants
        let no_variants = find_plural_variants("single", &keys);
        assert!(no_variants.is_empty());
    }

    #[test]
    fn test_ordinal_does_not_collapse_to_cardinal() {
        let mut keys = HashMap::new();
        keys.insert("place_ordinal_one".to_string(), "{{count}}st".to_string());

        let variants = find_plural_variants("place", &keys);
        assert_eq!(variants, vec![("ordinal_one", "{{count}}st")]);
    }
}
