// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Worksheet layout
//!
//! ```text
//! row  1      title                               (A1:Q1)
//! row  2      subtitle                            (A2:Q2)
//! row  4-9    AND truth table, static values
//! row 11-15   editable initial weights in C13:C15
//! row 17-19   grid heading, group headers, column headers
//! row 20-39   one formula row per iteration
//! row 41-45   summary
//! ```
//!
//! Every grid value is a formula over the truth table and the weight cells,
//! so editing C13:C15 replays the whole learning run inside the spreadsheet.

use perceptron_learning::{sample_number, TrainingHistory, WeightVector, AND_TRUTH_TABLE};
use tracing::debug;

use crate::error::{WorkbookError, WorkbookResult};
use crate::eval::{EvalError, Evaluator};
use crate::formula::{CellRange, CellRef, ColNum, Expr, RowNum};
use crate::sheet::Sheet;
use crate::style::{CellStyle, Palette};

pub const SHEET_NAME: &str = "Perceptron Learning";

/// Number of formula rows in the learning grid
pub const GRID_ITERATIONS: usize = 20;

// 0-based row indices
pub const TITLE_ROW: RowNum = 0;
pub const SUBTITLE_ROW: RowNum = 1;
pub const TRUTH_HEADING_ROW: RowNum = 3;
pub const TRUTH_HEADER_ROW: RowNum = 4;
pub const TRUTH_FIRST_ROW: RowNum = 5;
pub const TRUTH_LAST_ROW: RowNum = TRUTH_FIRST_ROW + AND_TRUTH_TABLE.len() as RowNum - 1;
pub const WEIGHTS_HEADING_ROW: RowNum = 10;
pub const WEIGHTS_HINT_ROW: RowNum = 11;
pub const WEIGHTS_FIRST_ROW: RowNum = 12;
pub const GRID_HEADING_ROW: RowNum = 16;
pub const GROUP_HEADER_ROW: RowNum = 17;
pub const COLUMN_HEADER_ROW: RowNum = 18;
pub const GRID_FIRST_ROW: RowNum = 19;
pub const GRID_LAST_ROW: RowNum = GRID_FIRST_ROW + GRID_ITERATIONS as RowNum - 1;
pub const SUMMARY_HEADING_ROW: RowNum = 40;
pub const SUMMARY_FIRST_ROW: RowNum = 41;

/// Column indices, `A` = 0
pub mod col {
    use crate::formula::ColNum;

    pub const A: ColNum = 0;
    pub const B: ColNum = 1;
    pub const C: ColNum = 2;
    pub const D: ColNum = 3;
    pub const E: ColNum = 4;
    pub const F: ColNum = 5;
    pub const G: ColNum = 6;
    pub const H: ColNum = 7;
    pub const I: ColNum = 8;
    pub const J: ColNum = 9;
    pub const K: ColNum = 10;
    pub const L: ColNum = 11;
    pub const M: ColNum = 12;
    pub const N: ColNum = 13;
    pub const O: ColNum = 14;
    pub const P: ColNum = 15;
    pub const Q: ColNum = 16;
}

/// Rightmost column used by the sheet
pub const LAST_COL: ColNum = col::Q;

const COLUMN_WIDTHS: [f64; 17] = [
    8.0, 8.0, 6.0, 6.0, 6.0, 8.0, 8.0, 8.0, 8.0, 12.0, 10.0, 8.0, 12.0, 10.0, 10.0, 10.0, 10.0,
];

const TITLE: &str = "PERCEPTRON LEARNING - Watch AI Learn Step by Step!";
const SUBTITLE: &str = "This Excel shows how a simple 'brain' learns the AND gate. \
                        Change the YELLOW cells to experiment!";
const TRUTH_HEADING: &str = "THE AND GATE TRUTH TABLE";
const TRUTH_HEADERS: [&str; 5] = ["x0 (bias)", "x1", "x2", "Output", "Plain English"];
const WEIGHTS_HEADING: &str = "INITIAL WEIGHTS (The Brain's Starting Guesses)";
const WEIGHTS_HINT: &str = "CHANGE THESE YELLOW CELLS TO EXPERIMENT!";
const WEIGHT_LABELS: [(&str, &str); 3] = [
    ("W0 (Bias Weight):", "Controls the 'default' guess"),
    ("W1 (x1 Weight):", "How important is x1?"),
    ("W2 (x2 Weight):", "How important is x2?"),
];
const GRID_HEADING: &str = "WATCH THE PERCEPTRON LEARN - Every Calculation Visible!";
const COLUMN_HEADERS: [&str; 17] = [
    "#", "Samp", "x0", "x1", "x2", "Actual", "W0", "W1", "W2", "Z=W*X", "Pred", "Err", "Status",
    "W0'", "W1'", "W2'", "",
];
const SUMMARY_HEADING: &str = "LEARNING SUMMARY - How Did Our Robot Do?";

pub const STATUS_CORRECT: &str = "CORRECT";
pub const STATUS_WRONG: &str = "WRONG";
pub const MARK_CORRECT: &str = "V";
pub const MARK_WRONG: &str = "X";

/// Editable initial weight cell for component `k` (`$C$13`, `$C$14`, `$C$15`)
pub fn initial_weight_cell(k: usize) -> CellRef {
    CellRef::new(WEIGHTS_FIRST_ROW + k as RowNum, col::C).absolute()
}

/// Sheet row of 1-based grid iteration `iteration`
pub fn grid_row(iteration: usize) -> RowNum {
    GRID_FIRST_ROW + iteration as RowNum - 1
}

/// Build the complete worksheet for the given starting weights
pub fn build_sheet(initial: WeightVector) -> Sheet {
    let mut sheet = Sheet::new(SHEET_NAME);

    for (c, width) in COLUMN_WIDTHS.iter().enumerate() {
        sheet.set_column_width(c as ColNum, *width);
    }

    write_banner(&mut sheet);
    write_truth_table(&mut sheet);
    write_initial_weights(&mut sheet, initial);
    write_grid_headers(&mut sheet);
    for iteration in 1..=GRID_ITERATIONS {
        write_grid_row(&mut sheet, iteration);
    }
    write_summary(&mut sheet);

    debug!(
        "Built sheet '{}' with {} cells and {} merged ranges",
        SHEET_NAME,
        sheet.len(),
        sheet.merges().len()
    );
    sheet
}

fn at(row: RowNum, c: ColNum) -> CellRef {
    CellRef::new(row, c)
}

fn merge_row(sheet: &mut Sheet, row: RowNum, first: ColNum, last: ColNum) {
    sheet.merge(CellRange::new(at(row, first), at(row, last)));
}

fn write_banner(sheet: &mut Sheet) {
    merge_row(sheet, TITLE_ROW, col::A, LAST_COL);
    sheet.set_text(at(TITLE_ROW, col::A), TITLE, CellStyle::Title);

    merge_row(sheet, SUBTITLE_ROW, col::A, LAST_COL);
    sheet.set_text(at(SUBTITLE_ROW, col::A), SUBTITLE, CellStyle::Subtitle);
}

fn write_truth_table(sheet: &mut Sheet) {
    merge_row(sheet, TRUTH_HEADING_ROW, col::A, col::F);
    sheet.set_text(
        at(TRUTH_HEADING_ROW, col::A),
        TRUTH_HEADING,
        CellStyle::SectionHeading,
    );

    for (c, header) in TRUTH_HEADERS.iter().enumerate() {
        sheet.set_text(at(TRUTH_HEADER_ROW, c as ColNum), *header, CellStyle::TableHeader);
    }

    let inputs = CellStyle::Filled(Palette::PurpleInputs);
    for (i, row) in AND_TRUTH_TABLE.iter().enumerate() {
        let r = TRUTH_FIRST_ROW + i as RowNum;
        sheet.set_number(at(r, col::A), f64::from(row.bias), inputs);
        sheet.set_number(at(r, col::B), f64::from(row.x1), inputs);
        sheet.set_number(at(r, col::C), f64::from(row.x2), inputs);
        sheet.set_number(at(r, col::D), f64::from(row.target), CellStyle::Bordered);
        sheet.set_text(at(r, col::E), row.description, CellStyle::Bordered);
    }
}

fn write_initial_weights(sheet: &mut Sheet, initial: WeightVector) {
    merge_row(sheet, WEIGHTS_HEADING_ROW, col::A, col::E);
    sheet.set_text(
        at(WEIGHTS_HEADING_ROW, col::A),
        WEIGHTS_HEADING,
        CellStyle::SectionHeading,
    );

    merge_row(sheet, WEIGHTS_HINT_ROW, col::A, col::E);
    sheet.set_text(at(WEIGHTS_HINT_ROW, col::A), WEIGHTS_HINT, CellStyle::Warning);

    for (k, ((label, note), value)) in WEIGHT_LABELS
        .iter()
        .zip(initial.as_array())
        .enumerate()
    {
        let r = WEIGHTS_FIRST_ROW + k as RowNum;
        sheet.set_text(at(r, col::A), *label, CellStyle::Plain);
        sheet.set_number(at(r, col::C), value, CellStyle::EditableWeight);
        sheet.set_text(at(r, col::D), *note, CellStyle::Note);
    }
}

fn write_grid_headers(sheet: &mut Sheet) {
    merge_row(sheet, GRID_HEADING_ROW, col::A, LAST_COL);
    sheet.set_text(
        at(GRID_HEADING_ROW, col::A),
        GRID_HEADING,
        CellStyle::SectionHeading,
    );

    let groups: [(ColNum, ColNum, &str, Palette); 11] = [
        (col::A, col::A, "#", Palette::White),
        (col::B, col::B, "Sample", Palette::White),
        (col::C, col::E, "INPUTS", Palette::PurpleInputs),
        (col::F, col::F, "Target", Palette::White),
        (col::G, col::I, "CURRENT WEIGHTS", Palette::YellowWeights),
        (col::J, col::J, "Z (Dot)", Palette::OrangeCalc),
        (col::K, col::K, "Pred", Palette::White),
        (col::L, col::L, "Error", Palette::White),
        (col::M, col::M, "Status", Palette::White),
        (col::N, col::P, "NEW WEIGHTS", Palette::YellowWeights),
        (col::Q, col::Q, "Result", Palette::White),
    ];
    for (first, last, text, fill) in groups {
        if first != last {
            merge_row(sheet, GROUP_HEADER_ROW, first, last);
        }
        sheet.set_text(at(GROUP_HEADER_ROW, first), text, CellStyle::GroupHeader(fill));
    }

    for (c, header) in COLUMN_HEADERS.iter().enumerate() {
        sheet.set_text(at(COLUMN_HEADER_ROW, c as ColNum), *header, CellStyle::ColumnHeader);
    }
}

fn write_grid_row(sheet: &mut Sheet, iteration: usize) {
    let r = grid_row(iteration);
    let cell = |c: ColNum| Expr::cell(at(r, c));
    let truth_column = |c: ColNum| CellRange::column(c, TRUTH_FIRST_ROW, TRUTH_LAST_ROW).absolute();

    let border = CellStyle::Bordered;
    let inputs = CellStyle::Filled(Palette::PurpleInputs);
    let weights = CellStyle::Filled(Palette::YellowWeights);

    sheet.set_number(at(r, col::A), iteration as f64, border);
    sheet.set_number(at(r, col::B), sample_number(iteration) as f64, border);

    // x0..x2 and the target are looked up from the truth table by sample number
    for (dst, src) in [(col::C, col::A), (col::D, col::B), (col::E, col::C)] {
        sheet.set_formula(at(r, dst), Expr::index(truth_column(src), cell(col::B)), inputs);
    }
    sheet.set_formula(
        at(r, col::F),
        Expr::index(truth_column(col::D), cell(col::B)),
        border,
    );

    for (k, dst) in [col::G, col::H, col::I].into_iter().enumerate() {
        let source = if iteration == 1 {
            initial_weight_cell(k)
        } else {
            at(r - 1, col::N + k as ColNum)
        };
        sheet.set_formula(at(r, dst), Expr::cell(source), weights);
    }

    let z = cell(col::G) * cell(col::C) + cell(col::H) * cell(col::D) + cell(col::I) * cell(col::E);
    sheet.set_formula(at(r, col::J), z, CellStyle::Filled(Palette::OrangeCalc));

    sheet.set_formula(
        at(r, col::K),
        Expr::if_then(
            cell(col::J).greater(Expr::number(0.0)),
            Expr::number(1.0),
            Expr::number(0.0),
        ),
        border,
    );
    sheet.set_formula(at(r, col::L), cell(col::F) - cell(col::K), border);
    sheet.set_formula(
        at(r, col::M),
        Expr::if_then(
            cell(col::L).equals(Expr::number(0.0)),
            Expr::text(STATUS_CORRECT),
            Expr::text(STATUS_WRONG),
        ),
        border,
    );

    for (k, dst) in [col::N, col::O, col::P].into_iter().enumerate() {
        let k = k as ColNum;
        let updated = cell(col::G + k) + cell(col::L) * cell(col::C + k);
        sheet.set_formula(at(r, dst), updated, weights);
    }

    sheet.set_formula(
        at(r, col::Q),
        Expr::if_then(
            cell(col::L).equals(Expr::number(0.0)),
            Expr::text(MARK_CORRECT),
            Expr::text(MARK_WRONG),
        ),
        border,
    );
}

fn status_range() -> CellRange {
    CellRange::column(col::M, GRID_FIRST_ROW, GRID_LAST_ROW)
}

/// Summary value cells: total, correct, wrong, final w0, w1, w2
pub fn summary_cells() -> [CellRef; 6] {
    let last = SUMMARY_FIRST_ROW + 3;
    [
        at(SUMMARY_FIRST_ROW, col::B),
        at(SUMMARY_FIRST_ROW + 1, col::B),
        at(SUMMARY_FIRST_ROW + 2, col::B),
        at(last, col::B),
        at(last, col::D),
        at(last, col::F),
    ]
}

fn write_summary(sheet: &mut Sheet) {
    merge_row(sheet, SUMMARY_HEADING_ROW, col::A, col::F);
    sheet.set_text(
        at(SUMMARY_HEADING_ROW, col::A),
        SUMMARY_HEADING,
        CellStyle::SectionHeading,
    );

    let [total, correct, wrong, w0, w1, w2] = summary_cells();
    let final_row = at(GRID_LAST_ROW, col::N);
    let entries = [
        ("Total Iterations:", total, Expr::number(GRID_ITERATIONS as f64), CellStyle::Bordered),
        (
            "Correct:",
            correct,
            Expr::count_if(status_range(), STATUS_CORRECT),
            CellStyle::Filled(Palette::GreenCorrect),
        ),
        (
            "Wrong:",
            wrong,
            Expr::count_if(status_range(), STATUS_WRONG),
            CellStyle::Filled(Palette::RedIncorrect),
        ),
        ("Final W0:", w0, Expr::cell(final_row), CellStyle::Bordered),
        ("Final W1:", w1, Expr::cell(at(GRID_LAST_ROW, col::O)), CellStyle::Bordered),
        ("Final W2:", w2, Expr::cell(at(GRID_LAST_ROW, col::P)), CellStyle::Bordered),
    ];

    for (label, value_cell, expr, style) in entries {
        // labels sit immediately left of their value
        let label_cell = at(value_cell.row, value_cell.col - 1);
        sheet.set_text(label_cell, label, CellStyle::Label);
        sheet.set_formula(value_cell, expr, style);
    }
}

/// Evaluated values of one grid row
#[derive(Debug, Clone, PartialEq)]
pub struct GridRowValues {
    pub iteration: usize,
    pub sample: usize,
    pub inputs: [f64; 3],
    pub target: f64,
    pub weights: [f64; 3],
    pub z: f64,
    pub prediction: f64,
    pub error: f64,
    pub status: String,
    pub new_weights: [f64; 3],
    pub mark: String,
}

fn text_at(eval: &mut Evaluator<'_>, cell: CellRef) -> Result<String, EvalError> {
    let value = eval.cell_value(cell)?;
    match value.as_text() {
        Some(text) => Ok(text.to_string()),
        None => Err(EvalError::TypeMismatch {
            context: cell.to_string(),
            expected: "text",
            found: value,
        }),
    }
}

fn triple(eval: &mut Evaluator<'_>, row: RowNum, first: ColNum) -> Result<[f64; 3], EvalError> {
    Ok([
        eval.cell_number(at(row, first))?,
        eval.cell_number(at(row, first + 1))?,
        eval.cell_number(at(row, first + 2))?,
    ])
}

/// Evaluate every grid row of `sheet`
pub fn evaluate_grid(sheet: &Sheet) -> Result<Vec<GridRowValues>, EvalError> {
    let mut eval = Evaluator::new(sheet);
    (1..=GRID_ITERATIONS)
        .map(|iteration| {
            let r = grid_row(iteration);
            Ok(GridRowValues {
                iteration: eval.cell_number(at(r, col::A))? as usize,
                sample: eval.cell_number(at(r, col::B))? as usize,
                inputs: triple(&mut eval, r, col::C)?,
                target: eval.cell_number(at(r, col::F))?,
                weights: triple(&mut eval, r, col::G)?,
                z: eval.cell_number(at(r, col::J))?,
                prediction: eval.cell_number(at(r, col::K))?,
                error: eval.cell_number(at(r, col::L))?,
                status: text_at(&mut eval, at(r, col::M))?,
                new_weights: triple(&mut eval, r, col::N)?,
                mark: text_at(&mut eval, at(r, col::Q))?,
            })
        })
        .collect()
}

/// Evaluated summary block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryValues {
    pub total_iterations: usize,
    pub correct: usize,
    pub wrong: usize,
    pub final_weights: WeightVector,
}

pub fn evaluate_summary(sheet: &Sheet) -> Result<SummaryValues, EvalError> {
    let mut eval = Evaluator::new(sheet);
    let [total, correct, wrong, w0, w1, w2] = summary_cells();
    Ok(SummaryValues {
        total_iterations: eval.cell_number(total)? as usize,
        correct: eval.cell_number(correct)? as usize,
        wrong: eval.cell_number(wrong)? as usize,
        final_weights: WeightVector::new(
            eval.cell_number(w0)?,
            eval.cell_number(w1)?,
            eval.cell_number(w2)?,
        ),
    })
}

/// Check the evaluated grid against an engine run of the same length
///
/// Values must match exactly; both sides perform the same floating-point
/// operations in the same order.
pub fn verify_against_engine(sheet: &Sheet, history: &TrainingHistory) -> WorkbookResult<()> {
    let rows = evaluate_grid(sheet)?;
    if history.iterations() != rows.len() {
        return Err(WorkbookError::Divergence {
            row: 0,
            field: "iterations",
            workbook: rows.len().to_string(),
            engine: history.iterations().to_string(),
        });
    }

    for (values, record) in rows.iter().zip(history.records()) {
        let row = grid_row(values.iteration) + 1;
        let checks: [(&'static str, String, String); 7] = [
            ("sample", values.sample.to_string(), record.sample.to_string()),
            ("inputs", format!("{:?}", values.inputs), format!("{:?}", record.inputs)),
            (
                "weights",
                format!("{:?}", values.weights),
                format!("{:?}", record.weights_before.as_array()),
            ),
            ("z", format!("{:?}", values.z), format!("{:?}", record.z)),
            ("prediction", values.prediction.to_string(), record.prediction.to_string()),
            ("error", values.error.to_string(), record.error.to_string()),
            (
                "new weights",
                format!("{:?}", values.new_weights),
                format!("{:?}", record.weights_after.as_array()),
            ),
        ];
        for (field, workbook, engine) in checks {
            if workbook != engine {
                return Err(WorkbookError::Divergence {
                    row,
                    field,
                    workbook,
                    engine,
                });
            }
        }
    }

    debug!("Workbook grid matches engine for {} iterations", rows.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::CellContent;

    fn text(sheet: &Sheet, cell: &str) -> String {
        match &sheet.get(cell.parse().unwrap()).unwrap().content {
            CellContent::Text(t) => t.clone(),
            other => panic!("{} is not text: {:?}", cell, other),
        }
    }

    fn formula(sheet: &Sheet, cell: &str) -> String {
        match &sheet.get(cell.parse().unwrap()).unwrap().content {
            CellContent::Formula(expr) => expr.formula(),
            other => panic!("{} is not a formula: {:?}", cell, other),
        }
    }

    #[test]
    fn test_row_constants() {
        assert_eq!(TRUTH_LAST_ROW, 8);
        assert_eq!(GRID_LAST_ROW, 38);
        assert_eq!(grid_row(1), 19);
        assert_eq!(initial_weight_cell(2).to_string(), "$C$15");
    }

    #[test]
    fn test_static_sections() {
        let sheet = build_sheet(WeightVector::default());
        assert_eq!(sheet.name(), "Perceptron Learning");
        assert_eq!(text(&sheet, "A1"), TITLE);
        assert_eq!(text(&sheet, "A5"), "x0 (bias)");
        assert_eq!(text(&sheet, "E9"), "ON + ON = ON!");
        assert_eq!(text(&sheet, "A12"), WEIGHTS_HINT);
        assert_eq!(text(&sheet, "G18"), "CURRENT WEIGHTS");
        assert_eq!(text(&sheet, "J19"), "Z=W*X");
        assert_eq!(text(&sheet, "E45"), "Final W2:");

        let c13 = sheet.get("C13".parse().unwrap()).unwrap();
        assert_eq!(c13.content, CellContent::Number(3.0));
        assert_eq!(c13.style, CellStyle::EditableWeight);
    }

    #[test]
    fn test_merged_ranges() {
        let sheet = build_sheet(WeightVector::default());
        let merges: Vec<String> = sheet.merges().iter().map(|m| m.to_string()).collect();
        for expected in [
            "A1:Q1", "A2:Q2", "A4:F4", "A11:E11", "A12:E12", "A17:Q17", "C18:E18", "G18:I18",
            "N18:P18", "A41:F41",
        ] {
            assert!(merges.contains(&expected.to_string()), "missing merge {}", expected);
        }
        assert_eq!(merges.len(), 10);
    }

    #[test]
    fn test_grid_formulas() {
        let sheet = build_sheet(WeightVector::default());
        assert_eq!(formula(&sheet, "C20"), "=INDEX($A$6:$A$9,B20)");
        assert_eq!(formula(&sheet, "F20"), "=INDEX($D$6:$D$9,B20)");
        assert_eq!(formula(&sheet, "G20"), "=$C$13");
        assert_eq!(formula(&sheet, "I20"), "=$C$15");
        assert_eq!(formula(&sheet, "G21"), "=N20");
        assert_eq!(formula(&sheet, "P25"), "=I25+L25*E25");
        assert_eq!(formula(&sheet, "J39"), "=G39*C39+H39*D39+I39*E39");
        assert_eq!(formula(&sheet, "K20"), "=IF(J20>0,1,0)");
        assert_eq!(formula(&sheet, "L20"), "=F20-K20");
        assert_eq!(formula(&sheet, "M20"), "=IF(L20=0,\"CORRECT\",\"WRONG\")");
        assert_eq!(formula(&sheet, "Q20"), "=IF(L20=0,\"V\",\"X\")");
    }

    #[test]
    fn test_summary_formulas() {
        let sheet = build_sheet(WeightVector::default());
        assert_eq!(formula(&sheet, "B42"), "=20");
        assert_eq!(formula(&sheet, "B43"), "=COUNTIF(M20:M39,\"CORRECT\")");
        assert_eq!(formula(&sheet, "B44"), "=COUNTIF(M20:M39,\"WRONG\")");
        assert_eq!(formula(&sheet, "B45"), "=N39");
        assert_eq!(formula(&sheet, "D45"), "=O39");
        assert_eq!(formula(&sheet, "F45"), "=P39");
    }

    #[test]
    fn test_sample_numbers_cycle() {
        let sheet = build_sheet(WeightVector::default());
        let samples: Vec<f64> = (1..=8)
            .map(|i| match sheet.get(at(grid_row(i), col::B)).unwrap().content {
                CellContent::Number(n) => n,
                _ => panic!("sample is not a number"),
            })
            .collect();
        assert_eq!(samples, vec![1.0, 2.0, 3.0, 4.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_evaluated_default_run() {
        let sheet = build_sheet(WeightVector::default());
        let summary = evaluate_summary(&sheet).unwrap();
        assert_eq!(summary.total_iterations, 20);
        assert_eq!(summary.correct, 13);
        assert_eq!(summary.wrong, 7);
        assert_eq!(summary.final_weights, WeightVector::new(-2.0, 2.0, 1.0));

        let rows = evaluate_grid(&sheet).unwrap();
        assert_eq!(rows[0].z, 3.0);
        assert_eq!(rows[0].status, "WRONG");
        assert_eq!(rows[3].mark, "V");
    }

    #[test]
    fn test_verify_detects_divergence() {
        let sheet = build_sheet(WeightVector::default());
        let other = perceptron_learning::train(WeightVector::new(1.0, 1.0, 1.0), GRID_ITERATIONS);
        assert!(matches!(
            verify_against_engine(&sheet, &other),
            Err(WorkbookError::Divergence { .. })
        ));

        let short = perceptron_learning::train(WeightVector::default(), 4);
        assert!(matches!(
            verify_against_engine(&sheet, &short),
            Err(WorkbookError::Divergence { field: "iterations", .. })
        ));
    }
}
