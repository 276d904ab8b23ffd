//! Settings file loading.

use std::path::Path;

use super::{
    ConfigError,
    I18nSettings,
    SETTINGS_FILE,
};

/// Loads settings from a catalogue root.
///
/// Looks for a [`SETTINGS_FILE`] (`.i18n.json`) in `root`.
///
/// # Returns
/// - `Ok(Some(settings))`: the file exists and holds valid settings
/// - `Ok(None)`: no settings file
/// - `Err(ConfigError)`: read, parse or validation failure
///
/// # Errors
/// - File read error
/// - JSON parse error
/// - Validation error
pub fn load_from_dir(root: &Path) -> Result<Option<I18nSettings>, ConfigError> {
    let config_path = root.join(SETTINGS_FILE);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: I18nSettings = serde_json::from_str(&content)?;
    settings.validate().map_err(ConfigError::ValidationErrors)?;

    Ok(Some(settings))
}
