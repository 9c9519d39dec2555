// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Perceptron Charts
//!
//! Four static PNG figures that explain perceptron training on the AND gate:
//!
//! | File | Content |
//! |------|---------|
//! | `perceptron_diagram.png` | inputs, weights, sum, step function, output |
//! | `decision_boundary.png` | the four AND inputs and a separating line |
//! | `weight_evolution.png` | each weight per iteration |
//! | `learning_progress.png` | errors per epoch of four samples |
//!
//! Drawing goes through `plotters` into an RGB buffer; `image` encodes PNG.
//! A TrueType font must be registered with [`fonts::register_fonts`] before
//! rendering.

use std::path::{Path, PathBuf};

use perceptron_learning::TrainingHistory;

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod architecture;
pub mod boundary;
pub mod canvas;
pub mod error;
pub mod evolution;
pub mod fonts;
pub mod progress;
pub mod series;

pub use architecture::render_architecture;
pub use boundary::render_decision_boundary;
pub use canvas::{RenderSettings, DEFAULT_DPI};
pub use error::{ChartError, ChartResult};
pub use evolution::render_weight_evolution;
pub use fonts::{find_font, register_fonts};
pub use progress::render_learning_progress;
pub use series::{errors_per_epoch, truth_table_points, weight_series, DecisionBoundary};

pub const ARCHITECTURE_FILE: &str = "perceptron_diagram.png";
pub const DECISION_BOUNDARY_FILE: &str = "decision_boundary.png";
pub const WEIGHT_EVOLUTION_FILE: &str = "weight_evolution.png";
pub const LEARNING_PROGRESS_FILE: &str = "learning_progress.png";

/// Render all four charts into `dir`, in a fixed order
///
/// Returns the written paths in that order.
pub fn render_all(
    history: &TrainingHistory,
    dir: &Path,
    settings: &RenderSettings,
) -> ChartResult<Vec<PathBuf>> {
    let architecture = dir.join(ARCHITECTURE_FILE);
    render_architecture(&architecture, settings)?;

    let boundary = dir.join(DECISION_BOUNDARY_FILE);
    render_decision_boundary(&boundary, settings)?;

    let evolution = dir.join(WEIGHT_EVOLUTION_FILE);
    render_weight_evolution(history, &evolution, settings)?;

    let progress = dir.join(LEARNING_PROGRESS_FILE);
    render_learning_progress(history, &progress, settings)?;

    Ok(vec![architecture, boundary, evolution, progress])
}
