// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Training history tests.

These tests validate:
- The exact trace from the default weights (3, 3, 3) over 20 iterations
- History shape for any starting weights and iteration count
- The delta-rule recurrence between consecutive snapshots
- Bit-for-bit determinism, and prefixes of longer runs
*/

use perceptron_learning::{train, WeightVector, AND_TRUTH_TABLE};
use proptest::prelude::*;

/// Bounded finite weights, mixing whole numbers and arbitrary fractions
fn weight_strategy() -> impl Strategy<Value = WeightVector> {
    let component = prop_oneof![(-10i32..=10).prop_map(f64::from), -1.0e6f64..1.0e6];
    (component.clone(), component.clone(), component)
        .prop_map(|(w0, w1, w2)| WeightVector::new(w0, w1, w2))
}

#[test]
fn test_default_weights_trace() {
    let history = train(WeightVector::new(3.0, 3.0, 3.0), 20);

    let expected_errors: Vec<i8> = vec![
        -1, -1, -1, 0, //
        0, -1, -1, 1, //
        0, -1, 0, 0, //
        0, 0, 0, 0, //
        0, 0, 0, 0,
    ];
    assert_eq!(history.errors(), expected_errors);

    let expected_weights = [
        (3.0, 3.0, 3.0),
        (2.0, 3.0, 3.0),
        (1.0, 3.0, 2.0),
        (0.0, 2.0, 2.0),
        (0.0, 2.0, 2.0),
        (0.0, 2.0, 2.0),
        (-1.0, 2.0, 1.0),
        (-2.0, 1.0, 1.0),
        (-1.0, 2.0, 2.0),
        (-1.0, 2.0, 2.0),
        (-2.0, 2.0, 1.0),
    ];
    for (i, (w0, w1, w2)) in expected_weights.iter().enumerate() {
        assert_eq!(
            history.weights()[i],
            WeightVector::new(*w0, *w1, *w2),
            "snapshot {}",
            i
        );
    }

    let expected_z = [3.0, 5.0, 4.0, 4.0, 0.0, 2.0, 1.0, 0.0];
    for (record, z) in history.records().iter().zip(expected_z) {
        assert_eq!(record.z, z, "z at iteration {}", record.index);
    }

    assert_eq!(history.final_weights(), WeightVector::new(-2.0, 2.0, 1.0));
    assert_eq!(history.correct_count(), 13);
    assert_eq!(history.wrong_count(), 7);
}

#[test]
fn test_first_iteration_matches_worked_example() {
    let history = train(WeightVector::new(3.0, 3.0, 3.0), 20);
    let first = &history.records()[0];

    assert_eq!(first.sample, 1);
    assert_eq!(first.inputs, [1.0, 0.0, 0.0]);
    assert_eq!(first.target, 0);
    assert_eq!(first.z, 3.0);
    assert_eq!(first.prediction, 1);
    assert_eq!(first.error, -1);
    assert_eq!(first.weights_after, WeightVector::new(2.0, 3.0, 3.0));
}

proptest! {
    #[test]
    fn test_history_lengths(start in weight_strategy(), n in 0usize..=64) {
        let history = train(start, n);
        prop_assert_eq!(history.records().len(), n);
        prop_assert_eq!(history.errors().len(), n);
        prop_assert_eq!(history.correct().len(), n);
        prop_assert_eq!(history.weights().len(), n + 1);
        prop_assert_eq!(history.initial_weights(), start);
        prop_assert_eq!(history.correct_count() + history.wrong_count(), n);
    }

    #[test]
    fn test_delta_rule_recurrence(start in weight_strategy(), n in 0usize..=64) {
        let history = train(start, n);
        let weights = history.weights();

        for (i, record) in history.records().iter().enumerate() {
            let row = &AND_TRUTH_TABLE[i % 4];
            prop_assert_eq!(record.index, i + 1);
            prop_assert_eq!(record.sample, i % 4 + 1);
            prop_assert_eq!(record.inputs, row.inputs());
            prop_assert_eq!(record.weights_before, weights[i]);
            prop_assert_eq!(record.z, weights[i].dot(record.inputs));
            prop_assert_eq!(record.prediction, u8::from(record.z > 0.0));
            prop_assert_eq!(record.error, row.target as i8 - record.prediction as i8);
            prop_assert_eq!(record.correct, record.error == 0);

            let before = weights[i].as_array();
            let after = weights[i + 1].as_array();
            for k in 0..3 {
                prop_assert_eq!(after[k], before[k] + f64::from(record.error) * record.inputs[k]);
            }
            // bias input is constant 1
            prop_assert_eq!(after[0], before[0] + f64::from(record.error));
        }
        prop_assert_eq!(history.final_weights(), weights[n]);
    }

    #[test]
    fn test_deterministic(start in weight_strategy(), n in 0usize..=64) {
        let a = train(start, n);
        let b = train(start, n);
        prop_assert_eq!(&a, &b);
        for (x, y) in a.weights().iter().zip(b.weights()) {
            for k in 0..3 {
                prop_assert_eq!(x.as_array()[k].to_bits(), y.as_array()[k].to_bits());
            }
        }
    }

    #[test]
    fn test_longer_run_extends_shorter(start in weight_strategy(), n in 0usize..=32, extra in 0usize..=32) {
        let short = train(start, n);
        let long = train(start, n + extra);
        prop_assert_eq!(short.records(), &long.records()[..n]);
    }
}
