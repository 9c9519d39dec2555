// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Cross-crate tests: learning engine vs. spreadsheet formulas vs. chart data

These tests validate:
- The evaluated workbook grid equals the engine run row by row
- Any integer or fractional starting weights give bit-identical results
- The summary block agrees with the engine's counts and final weights
- Chart series are derived from the same history the workbook replays
*/

#![cfg(all(feature = "workbook", feature = "charts"))]

use perceptron_lab::charts::{errors_per_epoch, weight_series};
use perceptron_lab::learning::{train, WeightVector};
use perceptron_lab::workbook::{build_sheet, evaluate_grid, evaluate_summary, GRID_ITERATIONS};
use proptest::prelude::*;

fn assert_grid_matches_engine(initial: WeightVector) {
    let sheet = build_sheet(initial);
    let history = train(initial, GRID_ITERATIONS);
    let rows = evaluate_grid(&sheet).unwrap();
    assert_eq!(rows.len(), history.iterations());

    for (row, record) in rows.iter().zip(history.records()) {
        let ctx = format!("initial {} iteration {}", initial, record.index);
        assert_eq!(row.iteration, record.index, "{}", ctx);
        assert_eq!(row.sample, record.sample, "{}", ctx);
        assert_eq!(row.inputs, record.inputs, "{}", ctx);
        assert_eq!(row.target, f64::from(record.target), "{}", ctx);
        assert_eq!(row.z.to_bits(), record.z.to_bits(), "{}", ctx);
        assert_eq!(row.prediction, f64::from(record.prediction), "{}", ctx);
        assert_eq!(row.error, f64::from(record.error), "{}", ctx);
        assert_eq!(row.status == "CORRECT", record.correct, "{}", ctx);
        for k in 0..3 {
            assert_eq!(
                row.weights[k].to_bits(),
                record.weights_before.as_array()[k].to_bits(),
                "{} w{} before",
                ctx,
                k
            );
            assert_eq!(
                row.new_weights[k].to_bits(),
                record.weights_after.as_array()[k].to_bits(),
                "{} w{} after",
                ctx,
                k
            );
        }
    }

    let summary = evaluate_summary(&sheet).unwrap();
    assert_eq!(summary.total_iterations, GRID_ITERATIONS);
    assert_eq!(summary.correct, history.correct_count());
    assert_eq!(summary.wrong, history.wrong_count());
    assert_eq!(summary.final_weights, history.final_weights());
}

#[test]
fn test_default_weights_match() {
    assert_grid_matches_engine(WeightVector::default());
}

/// Whole-number and fractional weights within the validated range
fn weight_strategy() -> impl Strategy<Value = WeightVector> {
    let component = prop_oneof![(-5i32..=5).prop_map(f64::from), -1.0e3f64..1.0e3];
    (component.clone(), component.clone(), component)
        .prop_map(|(w0, w1, w2)| WeightVector::new(w0, w1, w2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_any_weights_match(initial in weight_strategy()) {
        assert_grid_matches_engine(initial);
    }
}

#[test]
fn test_fractional_weights_match() {
    assert_grid_matches_engine(WeightVector::new(0.1, 0.2, 0.3));
    assert_grid_matches_engine(WeightVector::new(-0.7, 1e-9, 3.3));
}

#[test]
fn test_default_run_known_values() {
    let sheet = build_sheet(WeightVector::default());
    let rows = evaluate_grid(&sheet).unwrap();

    let z: Vec<f64> = rows.iter().take(8).map(|r| r.z).collect();
    assert_eq!(z, vec![3.0, 5.0, 4.0, 4.0, 0.0, 2.0, 1.0, 0.0]);

    let errors: Vec<f64> = rows.iter().map(|r| r.error).collect();
    assert_eq!(
        errors,
        vec![
            -1.0, -1.0, -1.0, 0.0, 0.0, -1.0, -1.0, 1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 0.0
        ]
    );
}

#[test]
fn test_chart_data_follows_engine() {
    let history = train(WeightVector::default(), GRID_ITERATIONS);
    assert_eq!(errors_per_epoch(&history.errors()), vec![3, 3, 1, 0, 0]);

    let series = weight_series(&history);
    let rows = evaluate_grid(&build_sheet(WeightVector::default())).unwrap();
    for (k, points) in series.iter().enumerate() {
        assert_eq!(points.len(), GRID_ITERATIONS + 1);
        // point i+1 is the weight after grid row i
        for (row, point) in rows.iter().zip(points.iter().skip(1)) {
            assert_eq!(row.new_weights[k], point.1);
        }
    }
}
