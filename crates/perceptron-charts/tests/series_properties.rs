// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for chart data
//!
//! Epoch aggregation and weight series hold for any error sequence and any
//! training run, not only the default one.

use perceptron_charts::{errors_per_epoch, weight_series};
use perceptron_learning::{train, WeightVector};
use proptest::prelude::*;

fn error_strategy(max_len: usize) -> impl Strategy<Value = Vec<i8>> {
    prop::collection::vec(prop_oneof![Just(-1i8), Just(0i8), Just(1i8)], 0..=max_len)
}

fn weight_strategy() -> impl Strategy<Value = WeightVector> {
    (-50.0f64..50.0, -50.0f64..50.0, -50.0f64..50.0)
        .prop_map(|(w0, w1, w2)| WeightVector::new(w0, w1, w2))
}

proptest! {
    #[test]
    fn test_epoch_counts_match_slices(errors in error_strategy(64)) {
        let counts = errors_per_epoch(&errors);
        prop_assert_eq!(counts.len(), errors.len() / 4);
        for (epoch, count) in counts.iter().enumerate() {
            let slice = &errors[epoch * 4..epoch * 4 + 4];
            prop_assert_eq!(*count, slice.iter().filter(|&&e| e != 0).count());
            prop_assert!(*count <= 4);
        }
    }

    #[test]
    fn test_trailing_partial_epoch_ignored(errors in error_strategy(60), tail in error_strategy(3)) {
        let full = &errors[..errors.len() / 4 * 4];
        let mut padded = full.to_vec();
        padded.extend_from_slice(&tail);
        prop_assert_eq!(errors_per_epoch(&padded), errors_per_epoch(full));
    }

    #[test]
    fn test_epoch_counts_sum_to_wrong_iterations(start in weight_strategy(), epochs in 0usize..=16) {
        let history = train(start, epochs * 4);
        let counts = errors_per_epoch(&history.errors());
        prop_assert_eq!(counts.len(), epochs);
        prop_assert_eq!(counts.iter().sum::<usize>(), history.wrong_count());
    }

    #[test]
    fn test_weight_series_follows_snapshots(start in weight_strategy(), n in 0usize..=64) {
        let history = train(start, n);
        let series = weight_series(&history);
        for (k, points) in series.iter().enumerate() {
            prop_assert_eq!(points.len(), n + 1);
            for (i, (x, y)) in points.iter().enumerate() {
                prop_assert_eq!(*x, i as f64);
                prop_assert_eq!(*y, history.weights()[i].as_array()[k]);
            }
        }
    }
}
