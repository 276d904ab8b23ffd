//! JSON-file-backed translation catalogue.

use std::collections::{
    HashMap,
    HashSet,
};
use std::path::Path;

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};
use ignore::WalkBuilder;
use serde_json::Value;

use crate::config::{
    self,
    I18nSettings,
};
use crate::plural;
use crate::reader::{
    Reader,
    ReaderError,
};
use crate::types::Translation;

/// A [`Reader`] backed by JSON files under a directory.
///
/// The whole catalogue is loaded eagerly when the reader is opened, so
/// faults (missing root, malformed JSON, invalid file pattern) surface from
/// the constructor and lookups stay infallible.
///
/// Recognised layouts, relative to the root:
/// - `en.json` — the file stem is the language.
/// - `en/common.json` — the directory is the language, the stem is a
///   namespace prefixed to every key (`common.hello`).
/// - `common/en.json` — the stem is the language, the directory the
///   namespace.
///
/// Nested objects flatten to dot-separated keys. An object whose values are
/// all strings is additionally stored as a variant mapping at its own key,
/// and i18next-style suffixed keys (`items_one`, `items_other`) are grouped
/// into a variant mapping at their base key.
///
/// Lookups with `language = None` resolve against the settings'
/// `default_language`; without one they return `None`.
pub struct FileReader {
    /// Language → (key → translation).
    catalogue: HashMap<String, HashMap<String, Translation>>,
    default_language: Option<String>,
}

impl std::fmt::Debug for FileReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileReader")
            .field("languages", &self.catalogue.keys().collect::<Vec<_>>())
            .field("default_language", &self.default_language)
            .finish()
    }
}

impl FileReader {
    /// Opens a catalogue rooted at `root`.
    ///
    /// Reads an optional `.i18n.json` settings file from the root first;
    /// without one, default settings apply (`**/*.json`, `.` separator).
    ///
    /// # Errors
    /// - The root or settings file cannot be read
    /// - The settings file or a translation file contains malformed JSON
    /// - The translation file pattern is not a valid glob
    pub fn open(root: impl AsRef<Path>) -> Result<Self, ReaderError> {
        let root = root.as_ref();
        let settings = config::load_from_dir(root)?.unwrap_or_default();
        Self::open_with_settings(root, &settings)
    }

    /// Opens a catalogue rooted at `root` with explicit settings.
    ///
    /// # Errors
    /// Same conditions as [`FileReader::open`], minus the settings file.
    pub fn open_with_settings(
        root: impl AsRef<Path>,
        settings: &I18nSettings,
    ) -> Result<Self, ReaderError> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(ReaderError::Io {
                path: root.display().to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "translation root is not a directory",
                ),
            });
        }

        let pattern = build_file_pattern(&settings.translation_files.file_pattern)?;
        let mut catalogue: HashMap<String, HashMap<String, Translation>> = HashMap::new();

        for result in WalkBuilder::new(root)
            .hidden(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .follow_links(false)
            .build()
        {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(?err, "Failed to read directory entry");
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.path();
            let Ok(relative_path) = path.strip_prefix(root) else {
                continue;
            };
            if !pattern.is_match(relative_path) {
                continue;
            }
            if relative_path == Path::new(config::SETTINGS_FILE) {
                continue;
            }

            let Some((language, namespace)) = language_and_namespace(relative_path) else {
                tracing::warn!(path = %path.display(), "No language code in path, skipping");
                continue;
            };

            let content = match std::fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to read translation file");
                    continue;
                }
            };
            let json: Value = serde_json::from_str(&content).map_err(|source| {
                ReaderError::Parse { path: path.display().to_string(), source }
            })?;

            let entries =
                load_entries(&json, namespace.as_deref(), &settings.key_separator);
            tracing::debug!(
                path = %path.display(),
                %language,
                entries = entries.len(),
                "Loaded translation file"
            );
            catalogue.entry(language).or_default().extend(entries);
        }

        Ok(Self { catalogue, default_language: settings.default_language.clone() })
    }

    /// Returns the languages this catalogue holds translations for.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.catalogue.keys().map(String::as_str)
    }
}

impl Reader for FileReader {
    fn get(&self, key: &str, language: Option<&str>) -> Option<Translation> {
        let language = language.or(self.default_language.as_deref())?;
        self.catalogue.get(language)?.get(key).cloned()
    }
}

fn build_file_pattern(pattern: &str) -> Result<GlobSet, ReaderError> {
    let mut builder = GlobSetBuilder::new();
    builder.add(Glob::new(pattern)?);
    Ok(builder.build()?)
}

/// Derive language and namespace from a path relative to the catalogue root.
///
/// Searches the file stem first, then directory names backwards, for the
/// first segment shaped like a language code. The stem (or the nearest
/// non-language directory) becomes the namespace.
fn language_and_namespace(relative_path: &Path) -> Option<(String, Option<String>)> {
    let stem = relative_path.file_stem()?.to_string_lossy().to_string();
    if is_language_code(&stem) {
        let namespace = relative_path
            .parent()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().to_string())
            .filter(|name| !is_language_code(name) && !is_common_parent(name));
        return Some((stem, namespace));
    }

    // Stem is a namespace; the language must come from a directory.
    let language = relative_path
        .parent()?
        .components()
        .rev()
        .map(|component| component.as_os_str().to_string_lossy().to_string())
        .find(|segment| is_language_code(segment))?;
    Some((language, Some(stem)))
}

/// Returns true if the segment is shaped like an RFC 5646 language tag:
/// a 2-3 letter primary subtag plus optional short alphanumeric subtags.
fn is_language_code(segment: &str) -> bool {
    let mut subtags = segment.split(['-', '_']);
    let Some(primary) = subtags.next() else {
        return false;
    };
    if !(2..=3).contains(&primary.len()) || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    subtags.all(|subtag| {
        (2..=8).contains(&subtag.len()) && subtag.chars().all(|c| c.is_ascii_alphanumeric())
    })
}

/// Directory names that hold catalogues but never act as namespaces.
fn is_common_parent(name: &str) -> bool {
    let common_parents = ["locales", "messages", "translations", "i18n", "lang", "langs"];
    common_parents.contains(&name.to_lowercase().as_str())
}

/// Build catalogue entries from one parsed translation file.
///
/// String leaves become `Single` entries at their flattened key. Objects
/// whose values are all strings additionally become `Variants` entries at
/// their own key. Suffixed plural siblings are folded into a synthesized
/// `Variants` entry at the base key unless that key is defined explicitly.
fn load_entries(
    json: &Value,
    namespace: Option<&str>,
    separator: &str,
) -> HashMap<String, Translation> {
    let mut flat = HashMap::new();
    let mut variant_objects = Vec::new();
    flatten_value(json, separator, namespace, &mut flat, &mut variant_objects);

    let mut entries: HashMap<String, Translation> = flat
        .iter()
        .map(|(key, text)| (key.clone(), Translation::Single(text.clone())))
        .collect();

    for (key, variants) in variant_objects {
        entries.insert(key, Translation::Variants(variants));
    }

    let base_keys: HashSet<String> = flat
        .keys()
        .filter_map(|key| plural::plural_base_key(key).map(|(base, _)| base.to_string()))
        .collect();
    for base in base_keys {
        if entries.contains_key(&base) {
            continue;
        }
        let variants = plural::find_plural_variants(&base, &flat);
        if !variants.is_empty() {
            entries.insert(
                base,
                variants.into_iter().map(|(label, text)| (label.to_string(), text.to_string())).collect(),
            );
        }
    }

    entries
}

fn flatten_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    flat: &mut HashMap<String, String>,
    variant_objects: &mut Vec<(String, HashMap<String, String>)>,
) {
    match json {
        Value::Object(map) => {
            if let Some(key) = prefix
                && !map.is_empty()
                && map.values().all(Value::is_string)
            {
                let variants = map
                    .iter()
                    .filter_map(|(label, value)| {
                        value.as_str().map(|text| (label.clone(), text.to_string()))
                    })
                    .collect();
                variant_objects.push((key.to_string(), variants));
            }
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_value(value, separator, Some(&full_key), flat, variant_objects);
            }
        }
        Value::Array(arr) => {
            for (index, value) in arr.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_value(value, separator, Some(&full_key), flat, variant_objects);
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                flat.insert(key.to_string(), s.clone());
            }
        }
        _ => {
            if let Some(key) = prefix {
                flat.insert(key.to_string(), json.to_string());
            }
        }
    }
}
