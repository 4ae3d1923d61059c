//! Apostello Core - Foundation crate for the Apostello validation stack.
//!
//! This crate provides the shared error types and the validation policy
//! configuration that the other Apostello crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based validation configuration with XDG paths
//!
//! # Example
//!
//! ```rust
//! use apostello_core::ValidationConfig;
//!
//! let config = ValidationConfig::default();
//! assert_eq!(config.password.min_length, 8);
//! assert_eq!(config.birth_date.max_age_years, 150);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{
    BirthDateConfig, PasswordConfig, ValidationConfig, ENV_MAX_AGE_YEARS, ENV_PASSWORD_MIN_LENGTH,
};
pub use error::{ConfigError, ConfigResult, CoreError, Result};
