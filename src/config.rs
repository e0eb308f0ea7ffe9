//! Application configuration.
//!
//! Loaded from (highest precedence first):
//! 1. Environment variables prefixed with `FIRSTWORDS_`
//! 2. `firstwords.toml` in the working directory, if present
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE_NAME: &str = "firstwords.toml";

/// Default backing file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "data.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the JSON document holding every user's vocabulary.
    pub data_file: PathBuf,
    /// Default tracing level for this crate; `RUST_LOG` overrides it.
    pub log_level: String,
    /// Start in the dark theme.
    pub dark_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: "info".to_string(),
            dark_mode: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    /// Load with an explicit config file path. A missing file means defaults.
    pub fn load_from(config_file: &Path) -> Result<Self, ConfigError> {
        let config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed("FIRSTWORDS_"))
            .extract()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.data_file, PathBuf::from("data.json"));
        assert_eq!(config.log_level, "info");
        assert!(!config.dark_mode);
    }

    #[test]
    fn test_load_nonexistent_config() {
        let config = Config::load_from(Path::new("/nonexistent/firstwords.toml")).unwrap();
        assert_eq!(config.data_file, PathBuf::from("data.json"));
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("firstwords.toml");
        fs::write(&path, "data_file = \"words.json\"\ndark_mode = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.data_file, PathBuf::from("words.json"));
        assert!(config.dark_mode);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("firstwords.toml");
        fs::write(&path, "dark_mode = \"sometimes\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().starts_with("failed to load configuration"));
    }
}
