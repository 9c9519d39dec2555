// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Perceptron Lab Configuration
//!
//! Type-safe configuration for both generators with support for:
//! - Built-in defaults (a run needs no configuration file at all)
//! - An optional TOML file, read only when a path is given explicitly
//! - CLI argument overrides
//!
//! ## Usage
//!
//! ```rust
//! use perceptron_config::{load_config, validate_config};
//!
//! let config = load_config(None, None).expect("defaults always load");
//! validate_config(&config).expect("defaults are valid");
//!
//! assert_eq!(config.training.iterations, 20);
//! assert_eq!(config.output.workbook_path().to_str(), Some("results/Perceptron_AND_Gate_Learning.xlsx"));
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{apply_cli_overrides, load_config, parse_weights};
pub use types::*;
pub use validation::{validate_config, ConfigValidationError};

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax: {0}")]
    ParseError(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_types_compile() {
        let _config = PerceptronConfig::default();
    }
}
