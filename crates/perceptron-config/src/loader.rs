// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration loading with override support
//!
//! Two tiers, applied in order:
//! 1. TOML file (only when a path is given) on top of the built-in defaults
//! 2. CLI arguments (explicit user overrides)
//!
//! There is no implicit file discovery and no environment lookup: a run with
//! no arguments always produces the documented default artifacts.

use crate::{ConfigError, ConfigResult, PerceptronConfig};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Load configuration
///
/// # Arguments
///
/// * `config_path` - Optional TOML file. If `None`, built-in defaults are used.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or an
/// override value cannot be parsed.
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<PerceptronConfig> {
    let mut config = match config_path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => PerceptronConfig::default(),
    };

    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli)?;
    }

    Ok(config)
}

/// Apply CLI argument overrides to configuration
///
/// Recognised keys:
/// - `initial_weights` -> `training.initial_weights` (`"w0,w1,w2"`)
/// - `iterations` -> `training.iterations`
/// - `results_dir` -> `output.results_dir`
/// - `dpi` -> `charts.dpi`
/// - `font_path` -> `charts.font_path`
/// - `log_level` -> `logging.level`
pub fn apply_cli_overrides(
    config: &mut PerceptronConfig,
    cli_args: &HashMap<String, String>,
) -> ConfigResult<()> {
    // Training
    if let Some(value) = cli_args.get("initial_weights") {
        config.training.initial_weights = parse_weights(value)?;
    }
    if let Some(value) = cli_args.get("iterations") {
        config.training.iterations = value.trim().parse::<usize>().map_err(|_| {
            ConfigError::InvalidValue(format!("iterations must be a non-negative integer, got '{}'", value))
        })?;
    }

    // Output
    if let Some(value) = cli_args.get("results_dir") {
        config.output.results_dir = PathBuf::from(value);
    }

    // Charts
    if let Some(value) = cli_args.get("dpi") {
        config.charts.dpi = value.trim().parse::<u32>().map_err(|_| {
            ConfigError::InvalidValue(format!("dpi must be a positive integer, got '{}'", value))
        })?;
    }
    if let Some(value) = cli_args.get("font_path") {
        config.charts.font_path = Some(PathBuf::from(value));
    }

    // Logging
    if let Some(value) = cli_args.get("log_level") {
        config.logging.level = value.to_lowercase();
    }

    Ok(())
}

/// Parse `"w0,w1,w2"` into a weight triple
pub fn parse_weights(value: &str) -> ConfigResult<[f64; 3]> {
    let parts = value
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| {
            ConfigError::InvalidValue(format!("weights must be numbers, got '{}'", value))
        })?;

    match parts.as_slice() {
        [w0, w1, w2] => Ok([*w0, *w1, *w2]),
        _ => Err(ConfigError::InvalidValue(format!(
            "expected three comma-separated weights (w0,w1,w2), got {}",
            parts.len()
        ))),
    }
}
