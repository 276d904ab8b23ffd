//! Settings for file-backed catalogues.

mod loader;
mod types;

pub use loader::load_from_dir;
pub use types::{
    ConfigError,
    I18nSettings,
    TranslationFilesConfig,
    ValidationError,
};

/// Name of the optional settings file at a catalogue root.
pub const SETTINGS_FILE: &str = ".i18n.json";
