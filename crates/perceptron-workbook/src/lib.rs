// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # Perceptron Workbook
//!
//! Builds a spreadsheet that replays perceptron training on the AND gate as
//! live formulas. Each grid row computes the weighted sum, the step-function
//! prediction, the error and the updated weights from the row above, so a
//! student can change the starting weights and watch the run recompute.
//!
//! ## Architecture
//! - [`formula`]: typed formula tree rendered to spreadsheet syntax
//! - [`sheet`]: in-memory cells, merges and column widths
//! - [`layout`]: where everything goes on the sheet
//! - [`eval`]: in-process evaluation of the sheet's formulas
//! - [`writer`]: `.xlsx` output with cached formula results
//!
//! Before anything is written the evaluated grid is checked against the
//! learning engine; a mismatch aborts generation.
//!
//! ```rust
//! use perceptron_learning::WeightVector;
//! use perceptron_workbook::{build_sheet, evaluate_summary};
//!
//! let sheet = build_sheet(WeightVector::default());
//! let summary = evaluate_summary(&sheet).unwrap();
//! assert_eq!((summary.correct, summary.wrong), (13, 7));
//! ```

use std::path::Path;

use perceptron_learning::{train, WeightVector};
use tracing::info;

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod eval;
pub mod formula;
pub mod layout;
pub mod sheet;
pub mod style;
pub mod writer;

pub use error::{WorkbookError, WorkbookResult};
pub use eval::{EvalError, Evaluator, Value};
pub use formula::{CellRange, CellRef, Expr};
pub use layout::{
    build_sheet, evaluate_grid, evaluate_summary, verify_against_engine, GridRowValues,
    SummaryValues, GRID_ITERATIONS, SHEET_NAME,
};
pub use sheet::{Cell, CellContent, Sheet};
pub use style::{CellStyle, Palette};
pub use writer::write_workbook;

/// Build, verify and write the workbook for `initial` weights
///
/// Returns the evaluated summary block.
pub fn generate_workbook(initial: WeightVector, path: &Path) -> WorkbookResult<SummaryValues> {
    let sheet = build_sheet(initial);
    let history = train(initial, GRID_ITERATIONS);
    verify_against_engine(&sheet, &history)?;

    let summary = evaluate_summary(&sheet)?;
    write_workbook(&sheet, path)?;

    info!(
        "Workbook summary: {} correct, {} wrong, final weights {}",
        summary.correct, summary.wrong, summary.final_weights
    );
    Ok(summary)
}
