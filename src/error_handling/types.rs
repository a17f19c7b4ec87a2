use std::fmt;
use uuid::Uuid;

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    TomlError(String),
    UnknownLocale(String),
    BadPageSize(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::TomlError(e) => write!(f, "TOML parsing error: {}", e),
            ConfigError::UnknownLocale(e) => write!(f, "Unknown locale: {}", e),
            ConfigError::BadPageSize(e) => write!(f, "Page size error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    MissionNotFound(Uuid),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::MissionNotFound(id) => write!(f, "Mission not found: {}", id),
        }
    }
}

impl std::error::Error for StoreError {}

#[derive(Debug)]
pub enum SeedError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::IoError(e) => write!(f, "Seed IO error: {}", e),
            SeedError::JsonError(e) => write!(f, "Seed JSON error: {}", e),
        }
    }
}

impl std::error::Error for SeedError {}

impl From<std::io::Error> for SeedError {
    fn from(err: std::io::Error) -> Self {
        SeedError::IoError(err)
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(err: serde_json::Error) -> Self {
        SeedError::JsonError(err)
    }
}

#[derive(Debug)]
pub enum ConsoleError {
    IoError(std::io::Error),
    ConfigError(ConfigError),
    SeedError(SeedError),
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::IoError(e) => write!(f, "IO error: {}", e),
            ConsoleError::ConfigError(e) => write!(f, "Configuration error: {}", e),
            ConsoleError::SeedError(e) => write!(f, "Seed error: {}", e),
        }
    }
}

impl std::error::Error for ConsoleError {}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        ConsoleError::IoError(err)
    }
}

impl From<ConfigError> for ConsoleError {
    fn from(err: ConfigError) -> Self {
        ConsoleError::ConfigError(err)
    }
}

impl From<SeedError> for ConsoleError {
    fn from(err: SeedError) -> Self {
        ConsoleError::SeedError(err)
    }
}
