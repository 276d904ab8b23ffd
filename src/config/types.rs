use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// A single problem found while validating settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "translationFiles.filePattern")
    pub field_path: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error for `field_path`.
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

/// Faults raised while loading or validating settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or more settings fields were invalid.
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    /// The settings file could not be read.
    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// The settings file contained malformed JSON.
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Settings for a file-backed translation catalogue.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nSettings {
    /// Language substituted when a lookup omits one.
    ///
    /// - `None`: lookups without a language miss (default)
    /// - `Some(lang)`: lookups without a language resolve against `lang`
    pub default_language: Option<String>,

    /// Separator joining nested object keys (e.g. "common.hello").
    pub key_separator: String,

    /// Which files under the root hold translations.
    pub translation_files: TranslationFilesConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationFilesConfig {
    /// Glob pattern, relative to the catalogue root.
    pub file_pattern: String,
}

impl I18nSettings {
    /// # Errors
    /// - Empty separator
    /// - Empty default language
    /// - Empty or invalid file pattern
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if let Some(language) = &self.default_language
            && language.is_empty()
        {
            errors.push(ValidationError::new(
                "defaultLanguage",
                "The language cannot be empty. Please specify a language (e.g., \"en\"), or remove this field",
            ));
        }

        if self.translation_files.file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "translationFiles.filePattern",
                "The pattern cannot be empty. Example: \"**/*.json\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.translation_files.file_pattern) {
            errors.push(ValidationError::new(
                "translationFiles.filePattern",
                format!("Invalid glob pattern '{}': {e}", self.translation_files.file_pattern),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            default_language: None,
            key_separator: ".".to_string(),
            translation_files: TranslationFilesConfig::default(),
        }
    }
}

impl Default for TranslationFilesConfig {
    fn default() -> Self {
        Self { file_pattern: "**/*.json".to_string() }
    }
}
