// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! Perceptron training loop
//!
//! Iteration `i` (0-based) presents truth-table row `i mod 4`, computes the
//! weighted sum, applies the step activation (`z > 0` fires, ties do not),
//! and moves every weight by `error * x_k`. The learning rate is 1 and
//! training always runs the requested number of iterations, even after the
//! gate is already classified perfectly.

use tracing::{debug, info};

use crate::history::{IterationRecord, TrainingHistory};
use crate::truth_table::{TruthTableRow, AND_TRUTH_TABLE, SAMPLE_COUNT};
use crate::weights::WeightVector;

/// Result of applying the rule to one sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub z: f64,
    pub prediction: u8,
    pub error: i8,
    pub updated: WeightVector,
}

/// Step activation: 1 when `z > 0`, otherwise 0
pub fn predict(z: f64) -> u8 {
    if z > 0.0 {
        1
    } else {
        0
    }
}

/// Truth-table index (0-based) presented at 0-based iteration `iteration`
pub fn sample_index(iteration: usize) -> usize {
    iteration % SAMPLE_COUNT
}

/// Truth-table row number (1-based) used by 1-based iteration `iteration`
///
/// Workbook convention: `(iteration - 1) mod 4 + 1`, cycling 1,2,3,4,1,...
pub fn sample_number(iteration: usize) -> usize {
    sample_index(iteration.saturating_sub(1)) + 1
}

/// Apply the perceptron rule once
pub fn step(weights: WeightVector, row: &TruthTableRow) -> StepOutcome {
    let inputs = row.inputs();
    let z = weights.dot(inputs);
    let prediction = predict(z);
    // target and prediction are both 0/1, so the difference fits in -1..=1
    let error = row.target as i8 - prediction as i8;

    StepOutcome {
        z,
        prediction,
        error,
        updated: weights.updated(error, inputs),
    }
}

/// Stateful trainer that accumulates a [`TrainingHistory`]
#[derive(Debug, Clone)]
pub struct PerceptronTrainer {
    weights: WeightVector,
    history: TrainingHistory,
}

impl PerceptronTrainer {
    pub fn new(initial: WeightVector) -> Self {
        Self {
            weights: initial,
            history: TrainingHistory::new(initial),
        }
    }

    /// Current weights
    pub fn weights(&self) -> WeightVector {
        self.weights
    }

    /// Number of iterations performed so far
    pub fn iterations(&self) -> usize {
        self.history.iterations()
    }

    /// Run the next iteration and return its record
    pub fn step_once(&mut self) -> &IterationRecord {
        let iteration = self.history.iterations();
        let sample = sample_index(iteration);
        let row = &AND_TRUTH_TABLE[sample];
        let outcome = step(self.weights, row);

        debug!(
            iteration = iteration + 1,
            sample = sample + 1,
            z = outcome.z,
            prediction = outcome.prediction,
            error = outcome.error,
            "weights {} -> {}",
            self.weights,
            outcome.updated
        );

        let record = IterationRecord {
            index: iteration + 1,
            sample: sample + 1,
            inputs: row.inputs(),
            target: row.target,
            weights_before: self.weights,
            z: outcome.z,
            prediction: outcome.prediction,
            error: outcome.error,
            weights_after: outcome.updated,
            correct: outcome.error == 0,
        };

        self.weights = outcome.updated;
        self.history.push(record);
        &self.history.records()[iteration]
    }

    /// Run `iterations` more iterations
    pub fn run(&mut self, iterations: usize) {
        for _ in 0..iterations {
            self.step_once();
        }
    }

    pub fn into_history(self) -> TrainingHistory {
        self.history
    }
}

/// Train from `initial` for exactly `iterations` iterations
pub fn train(initial: WeightVector, iterations: usize) -> TrainingHistory {
    let mut trainer = PerceptronTrainer::new(initial);
    trainer.run(iterations);
    let history = trainer.into_history();

    info!(
        "Trained {} iterations from {}: {} correct, {} wrong, final weights {}",
        history.iterations(),
        history.initial_weights(),
        history.correct_count(),
        history.wrong_count(),
        history.final_weights()
    );

    history
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_ties_go_to_zero() {
        assert_eq!(predict(0.0), 0);
        assert_eq!(predict(-0.0), 0);
        assert_eq!(predict(1e-12), 1);
        assert_eq!(predict(-3.0), 0);
    }

    #[test]
    fn test_sample_cycle() {
        let indices: Vec<usize> = (0..9).map(sample_index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 0, 1, 2, 3, 0]);

        let numbers: Vec<usize> = (1..=8).map(sample_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 1, 2, 3, 4]);
    }

    #[test]
    fn test_first_step_from_default_weights() {
        let outcome = step(WeightVector::default(), &AND_TRUTH_TABLE[0]);
        assert_eq!(outcome.z, 3.0);
        assert_eq!(outcome.prediction, 1);
        assert_eq!(outcome.error, -1);
        assert_eq!(outcome.updated, WeightVector::new(2.0, 3.0, 3.0));
    }

    #[test]
    fn test_step_once_records_before_and_after() {
        let mut trainer = PerceptronTrainer::new(WeightVector::default());
        let record = trainer.step_once().clone();
        assert_eq!(record.index, 1);
        assert_eq!(record.sample, 1);
        assert_eq!(record.weights_before, WeightVector::default());
        assert_eq!(record.weights_after, trainer.weights());
        assert!(!record.correct);
        assert_eq!(trainer.iterations(), 1);
    }

    #[test]
    fn test_zero_iterations() {
        let initial = WeightVector::new(0.25, -1.0, 7.0);
        let history = train(initial, 0);
        assert!(history.records().is_empty());
        assert_eq!(history.weights(), &[initial]);
    }

    #[test]
    fn test_runs_past_convergence() {
        // (-2, 2, 1) already classifies AND perfectly
        let history = train(WeightVector::new(-2.0, 2.0, 1.0), 12);
        assert_eq!(history.iterations(), 12);
        assert_eq!(history.wrong_count(), 0);
        assert!(history
            .weights()
            .iter()
            .all(|w| *w == WeightVector::new(-2.0, 2.0, 1.0)));
    }
}
