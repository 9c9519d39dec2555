// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! In-process formula evaluation
//!
//! Evaluates a [`Sheet`] with spreadsheet semantics for the operations the
//! workbook uses:
//! - empty cells read as 0 in arithmetic
//! - comparisons produce booleans; `TRUE`/`FALSE` count as 1/0 in arithmetic
//! - text comparison and `COUNTIF` matching are case-insensitive
//! - `INDEX` rows are 1-based and fractional indices are truncated
//!
//! Values are memoised per cell, so a 20-row dependency chain is evaluated
//! once no matter how many formulas read it.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::formula::{BinaryOp, CellRange, CellRef, ColNum, Expr, RowNum};
use crate::sheet::{CellContent, Sheet};

/// Evaluated cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Bool(bool),
    Empty,
}

impl Value {
    /// Arithmetic view of the value
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Empty => Some(0.0),
            Value::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    fn truthy(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => Some(*n != 0.0),
            Value::Empty => Some(false),
            Value::Text(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", crate::formula::format_number(*n)),
            Value::Text(s) => write!(f, "{}", s),
            Value::Bool(true) => write!(f, "TRUE"),
            Value::Bool(false) => write!(f, "FALSE"),
            Value::Empty => Ok(()),
        }
    }
}

/// Evaluation failures
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("circular reference through {0}")]
    CircularReference(String),

    #[error("{context}: expected {expected}, found {found:?}")]
    TypeMismatch {
        context: String,
        expected: &'static str,
        found: Value,
    },

    #[error("INDEX row {index} outside {range} ({len} rows)")]
    IndexOutOfRange {
        index: i64,
        range: String,
        len: u32,
    },

    #[error("INDEX needs a single-column range, got {0}")]
    UnsupportedRange(String),
}

/// Memoising evaluator over one sheet
pub struct Evaluator<'a> {
    sheet: &'a Sheet,
    cache: HashMap<(RowNum, ColNum), Value>,
    in_progress: HashSet<(RowNum, ColNum)>,
}

impl<'a> Evaluator<'a> {
    pub fn new(sheet: &'a Sheet) -> Self {
        Self {
            sheet,
            cache: HashMap::new(),
            in_progress: HashSet::new(),
        }
    }

    /// Value of a cell, evaluating its formula (and dependencies) if needed
    pub fn cell_value(&mut self, cell: CellRef) -> Result<Value, EvalError> {
        let key = cell.key();
        if let Some(value) = self.cache.get(&key) {
            return Ok(value.clone());
        }

        let value = match self.sheet.get(cell).map(|c| &c.content) {
            None => Value::Empty,
            Some(CellContent::Number(n)) => Value::Number(*n),
            Some(CellContent::Text(s)) => Value::Text(s.clone()),
            Some(CellContent::Formula(expr)) => {
                if !self.in_progress.insert(key) {
                    return Err(EvalError::CircularReference(
                        CellRef::new(cell.row, cell.col).to_string(),
                    ));
                }
                let result = self.eval(expr);
                self.in_progress.remove(&key);
                result?
            }
        };

        self.cache.insert(key, value.clone());
        Ok(value)
    }

    /// Numeric value of a cell
    pub fn cell_number(&mut self, cell: CellRef) -> Result<f64, EvalError> {
        let value = self.cell_value(cell)?;
        value.as_number().ok_or_else(|| EvalError::TypeMismatch {
            context: CellRef::new(cell.row, cell.col).to_string(),
            expected: "number",
            found: value,
        })
    }

    /// Evaluate a free-standing expression against the sheet
    pub fn eval(&mut self, expr: &Expr) -> Result<Value, EvalError> {
        match expr {
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::Text(s) => Ok(Value::Text(s.clone())),
            Expr::Ref(cell) => self.cell_value(*cell),
            Expr::Index { range, row } => self.eval_index(range, row),
            Expr::Binary { op, lhs, rhs } => {
                let lhs = self.eval(lhs)?;
                let rhs = self.eval(rhs)?;
                eval_binary(*op, lhs, rhs)
            }
            Expr::If {
                condition,
                then,
                otherwise,
            } => {
                let condition = self.eval(condition)?;
                let branch = condition.truthy().ok_or_else(|| EvalError::TypeMismatch {
                    context: "IF condition".to_string(),
                    expected: "boolean",
                    found: condition.clone(),
                })?;
                if branch {
                    self.eval(then)
                } else {
                    self.eval(otherwise)
                }
            }
            Expr::CountIf { range, criterion } => {
                let mut count = 0usize;
                for cell in range.cells() {
                    if let Value::Text(text) = self.cell_value(cell)? {
                        if text.eq_ignore_ascii_case(criterion) {
                            count += 1;
                        }
                    }
                }
                Ok(Value::Number(count as f64))
            }
        }
    }

    fn eval_index(&mut self, range: &CellRange, row: &Expr) -> Result<Value, EvalError> {
        if range.cols() != 1 {
            return Err(EvalError::UnsupportedRange(range.to_string()));
        }
        let row_value = self.eval(row)?;
        let index = row_value
            .as_number()
            .ok_or_else(|| EvalError::TypeMismatch {
                context: format!("INDEX({})", range),
                expected: "number",
                found: row_value.clone(),
            })?
            .trunc() as i64;

        if index < 1 || index > i64::from(range.rows()) {
            return Err(EvalError::IndexOutOfRange {
                index,
                range: range.to_string(),
                len: range.rows(),
            });
        }

        let target = CellRef::new(range.start.row + (index - 1) as u32, range.start.col);
        self.cell_value(target)
    }
}

fn eval_binary(op: BinaryOp, lhs: Value, rhs: Value) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Greater => {
            let a = number_operand(&lhs, op)?;
            let b = number_operand(&rhs, op)?;
            Ok(match op {
                BinaryOp::Add => Value::Number(a + b),
                BinaryOp::Sub => Value::Number(a - b),
                BinaryOp::Mul => Value::Number(a * b),
                _ => Value::Bool(a > b),
            })
        }
        BinaryOp::Equal => Ok(Value::Bool(values_equal(&lhs, &rhs))),
    }
}

fn number_operand(value: &Value, op: BinaryOp) -> Result<f64, EvalError> {
    value.as_number().ok_or_else(|| EvalError::TypeMismatch {
        context: format!("operator {:?}", op),
        expected: "number",
        found: value.clone(),
    })
}

fn values_equal(lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::Text(a), Value::Text(b)) => a.eq_ignore_ascii_case(b),
        (Value::Text(_), _) | (_, Value::Text(_)) => false,
        (a, b) => a.as_number() == b.as_number(),
    }
}
