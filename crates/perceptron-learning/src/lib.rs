// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # Perceptron Learning Engine
//!
//! The classic single-layer perceptron trained on the 2-input AND gate:
//! - **Truth table**: the four AND samples with a constant bias input
//! - **Weights**: `(w0, w1, w2)` and the delta-rule update
//! - **Training**: fixed-length, cyclic sample order, full history
//!
//! Training is pure arithmetic: no randomness, no I/O, no convergence check.
//! The spreadsheet generator re-expresses the same recurrence as cell
//! formulas, so the evaluation order here (`w0*x0 + w1*x1 + w2*x2`, left to
//! right) is part of the contract.
//!
//! ```rust
//! use perceptron_learning::{train, WeightVector};
//!
//! let history = train(WeightVector::new(3.0, 3.0, 3.0), 20);
//! assert_eq!(history.weights().len(), 21);
//! assert_eq!(history.final_weights(), WeightVector::new(-2.0, 2.0, 1.0));
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod history;
pub mod trainer;
pub mod truth_table;
pub mod weights;

pub use history::{IterationRecord, TrainingHistory};
pub use trainer::{
    predict, sample_index, sample_number, step, train, PerceptronTrainer, StepOutcome,
};
pub use truth_table::{TruthTableRow, AND_TRUTH_TABLE, SAMPLE_COUNT};
pub use weights::{WeightVector, DEFAULT_INITIAL_WEIGHTS};
