// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Training history: one record per iteration plus every weight snapshot.

use ndarray::Array2;
use serde::Serialize;

use crate::weights::WeightVector;

/// Everything computed during a single iteration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IterationRecord {
    /// 1-based iteration number
    pub index: usize,
    /// 1-based truth-table row used by this iteration
    pub sample: usize,
    /// `(x0, x1, x2)`
    pub inputs: [f64; 3],
    pub target: u8,
    pub weights_before: WeightVector,
    /// Weighted sum
    pub z: f64,
    pub prediction: u8,
    /// `target - prediction`
    pub error: i8,
    pub weights_after: WeightVector,
    pub correct: bool,
}

/// Ordered result of a training run
///
/// Holds `N` records and `N + 1` weight snapshots; snapshot `0` is the
/// initial weight vector and snapshot `i` is the state after iteration `i`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingHistory {
    records: Vec<IterationRecord>,
    weights: Vec<WeightVector>,
}

impl TrainingHistory {
    pub(crate) fn new(initial: WeightVector) -> Self {
        Self {
            records: Vec::new(),
            weights: vec![initial],
        }
    }

    pub(crate) fn push(&mut self, record: IterationRecord) {
        self.weights.push(record.weights_after);
        self.records.push(record);
    }

    pub fn records(&self) -> &[IterationRecord] {
        &self.records
    }

    /// All weight snapshots, initial weights first
    pub fn weights(&self) -> &[WeightVector] {
        &self.weights
    }

    pub fn iterations(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn initial_weights(&self) -> WeightVector {
        self.weights[0]
    }

    pub fn final_weights(&self) -> WeightVector {
        // Never empty: `new` seeds the initial snapshot
        self.weights[self.weights.len() - 1]
    }

    pub fn errors(&self) -> Vec<i8> {
        self.records.iter().map(|r| r.error).collect()
    }

    pub fn correct(&self) -> Vec<bool> {
        self.records.iter().map(|r| r.correct).collect()
    }

    pub fn correct_count(&self) -> usize {
        self.records.iter().filter(|r| r.correct).count()
    }

    pub fn wrong_count(&self) -> usize {
        self.iterations() - self.correct_count()
    }

    /// Snapshots as an `(N + 1) x 3` matrix, one column per weight
    pub fn weight_matrix(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.weights.len(), 3), |(i, k)| {
            self.weights[i].as_array()[k]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trainer::train;

    #[test]
    fn test_empty_history() {
        let history = TrainingHistory::new(WeightVector::default());
        assert!(history.is_empty());
        assert_eq!(history.weights().len(), 1);
        assert_eq!(history.final_weights(), history.initial_weights());
        assert_eq!(history.wrong_count(), 0);
    }

    #[test]
    fn test_weight_matrix_columns() {
        let history = train(WeightVector::default(), 4);
        let matrix = history.weight_matrix();
        assert_eq!(matrix.dim(), (5, 3));
        assert_eq!(matrix[[0, 0]], 3.0);
        assert_eq!(matrix[[1, 0]], 2.0);
        assert_eq!(matrix.column(2).to_vec(), vec![3.0, 3.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_history_serializes() {
        let history = train(WeightVector::default(), 1);
        let json = serde_json::to_value(&history).unwrap();
        assert_eq!(json["records"][0]["error"], -1);
        assert_eq!(json["weights"].as_array().unwrap().len(), 2);
    }
}
