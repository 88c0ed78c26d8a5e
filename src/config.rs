//! Configuration for the passguard tool.

use crate::{Error, Result};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the vault file path.
pub const ENV_VAULT_PATH: &str = "PASSGUARD_VAULT_PATH";
/// Environment variable overriding the default generated length.
pub const ENV_DEFAULT_LENGTH: &str = "PASSGUARD_DEFAULT_LENGTH";

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Vault storage settings
    pub storage: StorageConfig,
    /// Generator settings
    pub generator: GeneratorConfig,
}

/// Vault storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the vault file
    pub path: PathBuf,
}

/// Generator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Password length used when the caller does not pass one
    pub default_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                path: PathBuf::from("passwords.jsonl"),
            },
            generator: GeneratorConfig { default_length: 16 },
        }
    }
}

impl Config {
    /// Build a configuration from defaults plus environment overrides.
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(path) = std::env::var(ENV_VAULT_PATH) {
            config.storage.path = PathBuf::from(path);
        }

        if let Ok(length) = std::env::var(ENV_DEFAULT_LENGTH) {
            config.generator.default_length = length.parse().map_err(|_| {
                Error::config_key(
                    format!("invalid default length: {}", length),
                    ENV_DEFAULT_LENGTH,
                )
            })?;
        }

        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.storage.path.as_os_str().is_empty() {
            return Err(Error::config_key("vault path cannot be empty", "storage.path"));
        }

        if self.generator.default_length == 0 {
            return Err(Error::config_key(
                "default length must be at least 1",
                "generator.default_length",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.storage.path, PathBuf::from("passwords.jsonl"));
        assert_eq!(config.generator.default_length, 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_length() {
        let mut config = Config::default();
        config.generator.default_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_path() {
        let mut config = Config::default();
        config.storage.path = PathBuf::new();
        assert!(config.validate().is_err());
    }
}
