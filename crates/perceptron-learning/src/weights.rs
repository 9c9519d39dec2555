// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Weight vector `(w0, w1, w2)` and the delta-rule update.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Starting weights used when nothing else is configured
pub const DEFAULT_INITIAL_WEIGHTS: [f64; 3] = [3.0, 3.0, 3.0];

/// Bias weight followed by the two input weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightVector([f64; 3]);

impl WeightVector {
    pub const fn new(w0: f64, w1: f64, w2: f64) -> Self {
        Self([w0, w1, w2])
    }

    pub fn w0(&self) -> f64 {
        self.0[0]
    }

    pub fn w1(&self) -> f64 {
        self.0[1]
    }

    pub fn w2(&self) -> f64 {
        self.0[2]
    }

    pub fn as_array(&self) -> [f64; 3] {
        self.0
    }

    /// Weighted sum `w0*x0 + w1*x1 + w2*x2`
    ///
    /// Summed strictly left to right. The workbook formula
    /// `G*C+H*D+I*E` associates the same way, which keeps both encodings
    /// bit-identical for fractional weights.
    pub fn dot(&self, inputs: [f64; 3]) -> f64 {
        self.0[0] * inputs[0] + self.0[1] * inputs[1] + self.0[2] * inputs[2]
    }

    /// Delta rule: `w_k + error * x_k` for every component
    pub fn updated(&self, error: i8, inputs: [f64; 3]) -> Self {
        let e = f64::from(error);
        Self([
            self.0[0] + e * inputs[0],
            self.0[1] + e * inputs[1],
            self.0[2] + e * inputs[2],
        ])
    }
}

impl Default for WeightVector {
    fn default() -> Self {
        Self(DEFAULT_INITIAL_WEIGHTS)
    }
}

impl From<[f64; 3]> for WeightVector {
    fn from(weights: [f64; 3]) -> Self {
        Self(weights)
    }
}

impl fmt::Display for WeightVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}
