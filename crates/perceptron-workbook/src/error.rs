// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for workbook generation

use std::path::PathBuf;

use thiserror::Error;

use crate::eval::EvalError;
use crate::formula::{CellRef, RowNum};

/// Workbook generation errors
#[derive(Debug, Error)]
pub enum WorkbookError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("formula evaluation failed: {0}")]
    Eval(#[from] EvalError),

    /// Evaluated sheet disagrees with the learning engine
    #[error("row {row}: {field} is {workbook} in the workbook but {engine} in the engine")]
    Divergence {
        row: RowNum,
        field: &'static str,
        workbook: String,
        engine: String,
    },

    /// Formula result a spreadsheet cannot store (NaN or infinity)
    #[error("cell {cell} evaluates to {value}, which is not a valid cell value")]
    NonFiniteValue { cell: CellRef, value: f64 },
}

pub type WorkbookResult<T> = Result<T, WorkbookError>;
