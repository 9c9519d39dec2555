// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! Checks that values are within ranges the generators can render and
//! reports every problem at once.

use crate::{ConfigError, ConfigResult, PerceptronConfig};

/// Largest iteration count the chart generator accepts
pub const MAX_ITERATIONS: usize = 10_000;

/// Largest accepted magnitude for an initial weight
///
/// Keeps every weighted sum of a training run finite.
pub const MAX_WEIGHT_MAGNITUDE: f64 = 1e15;

/// Accepted chart resolution range (pixels per inch)
pub const DPI_RANGE: std::ops::RangeInclusive<u32> = 36..=600;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validation errors that can occur during config validation
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    MissingRequired { field: String },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequired { field } => {
                write!(f, "Missing required configuration: {}", field)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every failed check
pub fn validate_config(config: &PerceptronConfig) -> ConfigResult<()> {
    let errors = collect_errors(config);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

fn collect_errors(config: &PerceptronConfig) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();
    validate_training(config, &mut errors);
    validate_output(config, &mut errors);
    validate_charts(config, &mut errors);
    validate_logging(config, &mut errors);
    errors
}

fn validate_training(config: &PerceptronConfig, errors: &mut Vec<ConfigValidationError>) {
    for (k, weight) in config.training.initial_weights.iter().enumerate() {
        if !weight.is_finite() {
            errors.push(ConfigValidationError::InvalidValue {
                field: format!("training.initial_weights[{}]", k),
                reason: format!("must be a finite number, got {}", weight),
            });
        } else if weight.abs() > MAX_WEIGHT_MAGNITUDE {
            errors.push(ConfigValidationError::InvalidValue {
                field: format!("training.initial_weights[{}]", k),
                reason: format!(
                    "magnitude must be at most {:e}, got {}",
                    MAX_WEIGHT_MAGNITUDE, weight
                ),
            });
        }
    }

    if config.training.iterations > MAX_ITERATIONS {
        errors.push(ConfigValidationError::InvalidValue {
            field: "training.iterations".to_string(),
            reason: format!("must be at most {}", MAX_ITERATIONS),
        });
    }
}

fn validate_output(config: &PerceptronConfig, errors: &mut Vec<ConfigValidationError>) {
    if config.output.results_dir.as_os_str().is_empty() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "output.results_dir".to_string(),
        });
    }
    if config.output.workbook_file.trim().is_empty() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "output.workbook_file".to_string(),
        });
    }
    if config.output.graphs_dir.trim().is_empty() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "output.graphs_dir".to_string(),
        });
    }
}

fn validate_charts(config: &PerceptronConfig, errors: &mut Vec<ConfigValidationError>) {
    if !DPI_RANGE.contains(&config.charts.dpi) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "charts.dpi".to_string(),
            reason: format!(
                "must be between {} and {}",
                DPI_RANGE.start(),
                DPI_RANGE.end()
            ),
        });
    }
}

fn validate_logging(config: &PerceptronConfig, errors: &mut Vec<ConfigValidationError>) {
    if !LOG_LEVELS.contains(&config.logging.level.as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.level".to_string(),
            reason: format!("must be one of {}", LOG_LEVELS.join(", ")),
        });
    }
}
