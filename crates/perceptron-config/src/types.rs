// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! Each struct maps to one section of the optional TOML file. Every field has
//! a default, so a partial file (or no file) is always valid input.

use perceptron_learning::DEFAULT_INITIAL_WEIGHTS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PerceptronConfig {
    pub training: TrainingConfig,
    pub output: OutputConfig,
    pub charts: ChartsConfig,
    pub logging: LoggingConfig,
}

/// Learning engine inputs
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// `[w0, w1, w2]`; also the editable cells of the workbook
    pub initial_weights: [f64; 3],
    /// Iterations used by the chart generator (the workbook grid is fixed)
    pub iterations: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            initial_weights: DEFAULT_INITIAL_WEIGHTS,
            iterations: 20,
        }
    }
}

/// Artifact locations
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub results_dir: PathBuf,
    pub workbook_file: String,
    /// Chart directory, relative to `results_dir`
    pub graphs_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from("results"),
            workbook_file: "Perceptron_AND_Gate_Learning.xlsx".to_string(),
            graphs_dir: "graphs".to_string(),
        }
    }
}

impl OutputConfig {
    pub fn workbook_path(&self) -> PathBuf {
        self.results_dir.join(&self.workbook_file)
    }

    pub fn graphs_path(&self) -> PathBuf {
        self.results_dir.join(&self.graphs_dir)
    }
}

/// Chart rendering settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChartsConfig {
    /// Pixels per figure inch
    pub dpi: u32,
    /// TrueType font for labels; system locations are searched when unset
    pub font_path: Option<PathBuf>,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            dpi: 150,
            font_path: None,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn or error
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
