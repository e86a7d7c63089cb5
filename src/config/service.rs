//! Loading picker options from disk.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::types::PickerOptions;
use super::validation::validate_options;

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("emoji-selector"))
}

/// Path of the default config file.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    config_dir()
        .map(|dir| dir.join("config.toml"))
        .ok_or(ConfigError::NoDirFound)
}

/// Read and parse an options file.
pub fn load_options_from(path: &Path) -> Result<PickerOptions, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFailed)?;
    toml::from_str(&content).map_err(ConfigError::ParseFailed)
}

/// Load options from `~/.config/emoji-selector/config.toml`.
///
/// Returns `None` if the config file doesn't exist.
/// Logs warning and returns `None` if reading or parsing fails.
pub fn load_options() -> Option<PickerOptions> {
    let path = config_path().ok()?;

    if !path.exists() {
        tracing::debug!("Config file not found at {:?}, using defaults", path);
        return None;
    }

    match load_options_from(&path) {
        Ok(options) => {
            tracing::info!("Loaded picker options from {:?}", path);
            Some(options)
        }
        Err(e) => {
            tracing::warn!("{} ({:?}), using defaults", e, path);
            None
        }
    }
}

/// Load options (from `path` if given) and log validation warnings.
///
/// An explicitly given path that fails to load is an error; the default
/// location falls back to defaults.
pub fn init_options(path: Option<&Path>) -> Result<PickerOptions, ConfigError> {
    let options = match path {
        Some(path) => load_options_from(path)?,
        None => load_options().unwrap_or_default(),
    };

    for warning in validate_options(&options) {
        tracing::warn!("Config validation: {} - {}", warning.field, warning.message);
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emoji::Category;

    #[test]
    fn test_load_options_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "category = \"flags\"\ncolumns = 4\n").unwrap();

        let options = load_options_from(&path).unwrap();
        assert_eq!(options.category, Category::Flags);
        assert_eq!(options.columns, 4);
    }

    #[test]
    fn test_load_options_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "columns = \"many\"").unwrap();

        assert!(matches!(
            load_options_from(&path),
            Err(ConfigError::ParseFailed(_))
        ));
    }

    #[test]
    fn test_init_options_explicit_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = init_options(Some(&dir.path().join("missing.toml")));
        assert!(matches!(result, Err(ConfigError::ReadFailed(_))));
    }
}
