// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Workbook generation tests

These tests validate:
- The generated file is a zip container (`.xlsx`) at the requested path
- Editing the weight cells replays a different run, exactly as the engine would
- Fractional weights survive the formula path bit for bit
*/

use perceptron_learning::{train, WeightVector};
use perceptron_workbook::layout::initial_weight_cell;
use perceptron_workbook::{
    build_sheet, evaluate_grid, evaluate_summary, generate_workbook, verify_against_engine,
    CellStyle, GRID_ITERATIONS,
};

#[test]
fn test_generate_writes_xlsx() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results").join("Perceptron_AND_Gate_Learning.xlsx");

    let summary = generate_workbook(WeightVector::default(), &path).unwrap();
    assert_eq!(summary.total_iterations, 20);
    assert_eq!(summary.correct + summary.wrong, 20);

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.len() > 1000);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_generate_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.xlsx");
    std::fs::write(&path, b"stale").unwrap();

    generate_workbook(WeightVector::new(0.0, 0.0, 0.0), &path).unwrap();
    assert_eq!(&std::fs::read(&path).unwrap()[..2], b"PK");
}

#[test]
fn test_editing_weight_cells_replays_engine() {
    let mut sheet = build_sheet(WeightVector::default());
    let edited = [1.0, -1.0, 0.5];
    for (k, value) in edited.iter().enumerate() {
        sheet.set_number(initial_weight_cell(k), *value, CellStyle::EditableWeight);
    }

    let history = train(WeightVector::from(edited), GRID_ITERATIONS);
    verify_against_engine(&sheet, &history).unwrap();

    let summary = evaluate_summary(&sheet).unwrap();
    assert_eq!(summary.final_weights, history.final_weights());
    assert_eq!(summary.correct, history.correct_count());
}

#[test]
fn test_fractional_weights_bit_identical() {
    let initial = WeightVector::new(0.1, 0.2, -0.3);
    let sheet = build_sheet(initial);
    let history = train(initial, GRID_ITERATIONS);

    let rows = evaluate_grid(&sheet).unwrap();
    for (row, record) in rows.iter().zip(history.records()) {
        assert_eq!(row.z.to_bits(), record.z.to_bits(), "iteration {}", row.iteration);
        for k in 0..3 {
            assert_eq!(
                row.new_weights[k].to_bits(),
                record.weights_after.as_array()[k].to_bits()
            );
        }
    }
}

#[test]
fn test_status_and_mark_agree() {
    let rows = evaluate_grid(&build_sheet(WeightVector::default())).unwrap();
    for row in rows {
        let correct = row.error == 0.0;
        assert_eq!(row.status == "CORRECT", correct);
        assert_eq!(row.mark == "V", correct);
    }
}
