// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Perceptron Lab
//!
//! Teaching material that shows a single-layer perceptron learning the
//! logical AND gate, twice over:
//! - a spreadsheet in which every step of training is a live formula
//! - four PNG charts of the architecture, the decision boundary, the weights
//!   and the errors per epoch
//!
//! Both are driven by the same learning engine, and the spreadsheet is
//! checked against it before it is written.
//!
//! ## Feature Flags
//! - **`workbook`** (default): spreadsheet generator
//! - **`charts`** (default): chart renderer
//!
//! ## Usage
//!
//! ```rust
//! use perceptron_lab::prelude::*;
//!
//! let history = train(WeightVector::default(), 20);
//! assert_eq!(history.correct_count(), 13);
//! assert_eq!(history.wrong_count(), 7);
//! ```
//!
//! The generators are also available as binaries: `perceptron-workbook`
//! writes `results/Perceptron_AND_Gate_Learning.xlsx` and `perceptron-charts`
//! writes `results/graphs/*.png`.

// Re-export foundation
pub use perceptron_config as config;
pub use perceptron_learning as learning;

// Re-export renderers
#[cfg(feature = "workbook")]
pub use perceptron_workbook as workbook;

#[cfg(feature = "charts")]
pub use perceptron_charts as charts;

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::config::{load_config, PerceptronConfig};
    pub use crate::learning::{
        step, train, IterationRecord, PerceptronTrainer, TrainingHistory, TruthTableRow,
        WeightVector, AND_TRUTH_TABLE,
    };

    #[cfg(feature = "workbook")]
    pub use crate::workbook::{build_sheet, generate_workbook, write_workbook, Sheet};

    #[cfg(feature = "charts")]
    pub use crate::charts::{register_fonts, render_all, RenderSettings};
}
