// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! The AND gate truth table.
//!
//! Every row carries the constant bias input `x0 = 1` so that the bias weight
//! is learned by the same rule as the input weights.

use serde::Serialize;

/// Number of samples in the truth table (and in one epoch)
pub const SAMPLE_COUNT: usize = 4;

/// One training sample: `(x0, x1, x2) -> target`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TruthTableRow {
    /// Bias input, always 1
    pub bias: u8,
    pub x1: u8,
    pub x2: u8,
    /// Expected AND output
    pub target: u8,
    /// Plain-English caption shown next to the row in the workbook
    pub description: &'static str,
}

impl TruthTableRow {
    const fn new(x1: u8, x2: u8, target: u8, description: &'static str) -> Self {
        Self {
            bias: 1,
            x1,
            x2,
            target,
            description,
        }
    }

    /// Inputs as the vector `(x0, x1, x2)` the weights are applied to
    pub fn inputs(&self) -> [f64; 3] {
        [f64::from(self.bias), f64::from(self.x1), f64::from(self.x2)]
    }
}

/// AND truth table in workbook order: (0,0), (0,1), (1,0), (1,1)
pub const AND_TRUTH_TABLE: [TruthTableRow; SAMPLE_COUNT] = [
    TruthTableRow::new(0, 0, 0, "OFF + OFF = OFF"),
    TruthTableRow::new(0, 1, 0, "OFF + ON = OFF"),
    TruthTableRow::new(1, 0, 0, "ON + OFF = OFF"),
    TruthTableRow::new(1, 1, 1, "ON + ON = ON!"),
];
