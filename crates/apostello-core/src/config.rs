//! Validation policy configuration.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding `password.min_length`.
pub const ENV_PASSWORD_MIN_LENGTH: &str = "APOSTELLO_PASSWORD_MIN_LENGTH";

/// Environment variable overriding `birth_date.max_age_years`.
pub const ENV_MAX_AGE_YEARS: &str = "APOSTELLO_MAX_AGE_YEARS";

/// Validation configuration.
///
/// This is loaded from `~/.config/apostello/validation.toml` (or platform
/// equivalent). If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Password strength rules
    pub password: PasswordConfig,
    /// Birth date plausibility bounds
    pub birth_date: BirthDateConfig,
}

impl ValidationConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML or hold invalid values
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            });
        }

        tracing::debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `APOSTELLO_PASSWORD_MIN_LENGTH`: Override the minimum password length
    /// - `APOSTELLO_MAX_AGE_YEARS`: Override the maximum accepted age
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup. Values that fail to parse are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(ENV_PASSWORD_MIN_LENGTH) {
            if let Ok(min_length) = val.parse() {
                self.password.min_length = min_length;
                tracing::debug!("Override password.min_length from env: {}", min_length);
            }
        }

        if let Some(val) = lookup(ENV_MAX_AGE_YEARS) {
            if let Ok(years) = val.parse() {
                self.birth_date.max_age_years = years;
                tracing::debug!("Override birth_date.max_age_years from env: {}", years);
            }
        }
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.password.min_length == 0 {
            return Err(ConfigError::InvalidValue {
                field: "password.min_length".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.birth_date.max_age_years == 0 {
            return Err(ConfigError::InvalidValue {
                field: "birth_date.max_age_years".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit file.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        let config_dir = path.parent().ok_or_else(|| ConfigError::InvalidValue {
            field: "config_path".to_string(),
            reason: "no parent directory".to_string(),
        })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/apostello/validation.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs =
            ProjectDirs::from("br", "apostello", "apostello").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("validation.toml"))
    }
}

/// Password strength rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct PasswordConfig {
    /// Minimum number of characters
    pub min_length: usize,
    /// Require at least one uppercase ASCII letter
    pub require_uppercase: bool,
    /// Require at least one lowercase ASCII letter
    pub require_lowercase: bool,
    /// Require at least one ASCII digit
    pub require_digit: bool,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
        }
    }
}

/// Birth date plausibility bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirthDateConfig {
    /// Oldest accepted age, in calendar years
    pub max_age_years: u32,
}

impl Default for BirthDateConfig {
    fn default() -> Self {
        Self { max_age_years: 150 }
    }
}
