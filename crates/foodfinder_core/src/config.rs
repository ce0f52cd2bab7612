//! Guide runtime configuration.
//!
//! # Responsibility
//! - Carry the backing file location into the store explicitly.
//!
//! # Invariants
//! - The data path is never empty.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Data file used when no path is supplied.
pub const DEFAULT_DATA_FILE: &str = "restaurants.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyDataPath,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDataPath => write!(f, "data file path cannot be empty"),
        }
    }
}

impl Error for ConfigError {}

/// Startup configuration for one guide session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideConfig {
    data_path: PathBuf,
}

impl GuideConfig {
    /// Builds a config for `data_path`.
    ///
    /// # Errors
    /// - Returns `ConfigError::EmptyDataPath` for blank paths.
    pub fn new(data_path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let data_path = data_path.into();
        if data_path.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(ConfigError::EmptyDataPath);
        }
        Ok(Self { data_path })
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, GuideConfig, DEFAULT_DATA_FILE};
    use std::path::Path;

    #[test]
    fn new_rejects_blank_path() {
        assert_eq!(GuideConfig::new("  ").unwrap_err(), ConfigError::EmptyDataPath);
    }

    #[test]
    fn default_uses_restaurants_file() {
        assert_eq!(
            GuideConfig::default().data_path(),
            Path::new(DEFAULT_DATA_FILE)
        );
    }
}
