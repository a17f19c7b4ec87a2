use crate::configuration::types::Locale;
use crate::error_handling::types::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Console runtime configuration.
///
/// # Fields Overview
///
/// - `locale`: display locale for dates and month headings
/// - `seed_file`: optional JSON file replacing the embedded seed dataset
/// - `page_size`: number of missions shown per page in list views
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub locale: Locale,
    pub seed_file: Option<PathBuf>,
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            seed_file: None,
            page_size: 10,
        }
    }
}

/// Raw shape of the TOML file; every key is optional.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    locale: Option<String>,
    seed_file: Option<PathBuf>,
    page_size: Option<usize>,
}

impl Config {
    /// Reads a configuration file and merges it over the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let parsed: ConfigFile =
            toml::from_str(&raw).map_err(|e| ConfigError::TomlError(e.to_string()))?;

        let mut config = Config::default();
        if let Some(locale) = parsed.locale {
            config.locale =
                Locale::parse(&locale).ok_or(ConfigError::UnknownLocale(locale))?;
        }
        if let Some(page_size) = parsed.page_size {
            if page_size == 0 {
                return Err(ConfigError::BadPageSize(
                    "page_size must be at least 1".to_string(),
                ));
            }
            config.page_size = page_size;
        }
        config.seed_file = parsed.seed_file;
        Ok(config)
    }
}
