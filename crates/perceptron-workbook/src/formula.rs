// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Typed spreadsheet formulas
//!
//! Formulas are built as an expression tree instead of strings so that the
//! same tree can be rendered into the workbook and evaluated in-process (see
//! [`crate::eval`]). Rendering keeps the tree's association order: a right
//! operand of equal or lower precedence is always parenthesised, so the
//! spreadsheet application evaluates operations in exactly the order the tree
//! describes.

use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

/// Sheet row index (0-based)
pub type RowNum = u32;
/// Sheet column index (0-based)
pub type ColNum = u16;

/// Column letters for a 0-based column index: 0 -> `A`, 25 -> `Z`, 26 -> `AA`
pub fn column_name(col: ColNum) -> String {
    let mut n = u32::from(col) + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Reference to a single cell, each axis optionally absolute (`$`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub row: RowNum,
    pub col: ColNum,
    pub abs_row: bool,
    pub abs_col: bool,
}

impl CellRef {
    /// Relative reference
    pub const fn new(row: RowNum, col: ColNum) -> Self {
        Self {
            row,
            col,
            abs_row: false,
            abs_col: false,
        }
    }

    /// Same cell with both axes pinned (`$C$13`)
    pub const fn absolute(self) -> Self {
        Self {
            abs_row: true,
            abs_col: true,
            ..self
        }
    }

    /// Position key ignoring the `$` markers
    pub fn key(&self) -> (RowNum, ColNum) {
        (self.row, self.col)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            if self.abs_col { "$" } else { "" },
            column_name(self.col),
            if self.abs_row { "$" } else { "" },
            self.row + 1
        )
    }
}

/// Error parsing an A1-style reference
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid cell reference '{0}'")]
pub struct ParseCellRefError(pub String);

impl FromStr for CellRef {
    type Err = ParseCellRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCellRefError(s.to_string());
        let mut rest = s.trim();

        let abs_col = rest.starts_with('$');
        if abs_col {
            rest = &rest[1..];
        }
        let letters = rest.chars().take_while(|c| c.is_ascii_alphabetic()).count();
        if letters == 0 || letters > 3 {
            return Err(err());
        }
        let mut col: u32 = 0;
        for c in rest[..letters].chars() {
            col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
        }
        rest = &rest[letters..];

        let abs_row = rest.starts_with('$');
        if abs_row {
            rest = &rest[1..];
        }
        let row: u32 = rest.parse().map_err(|_| err())?;
        if row == 0 || col == 0 || col > u32::from(ColNum::MAX) {
            return Err(err());
        }

        Ok(Self {
            row: row - 1,
            col: (col - 1) as ColNum,
            abs_row,
            abs_col,
        })
    }
}

/// Rectangular range `start:end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    pub start: CellRef,
    pub end: CellRef,
}

impl CellRange {
    pub const fn new(start: CellRef, end: CellRef) -> Self {
        Self { start, end }
    }

    /// Single column from `first_row` to `last_row`
    pub const fn column(col: ColNum, first_row: RowNum, last_row: RowNum) -> Self {
        Self::new(CellRef::new(first_row, col), CellRef::new(last_row, col))
    }

    pub const fn absolute(self) -> Self {
        Self::new(self.start.absolute(), self.end.absolute())
    }

    pub fn rows(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    pub fn cols(&self) -> u32 {
        u32::from(self.end.col - self.start.col) + 1
    }

    /// All cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = CellRef> + '_ {
        (self.start.row..=self.end.row).flat_map(move |row| {
            (self.start.col..=self.end.col).map(move |col| CellRef::new(row, col))
        })
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

/// Binary operators used by the workbook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Greater,
    Equal,
}

impl BinaryOp {
    fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Greater => ">",
            BinaryOp::Equal => "=",
        }
    }

    fn precedence(self) -> u8 {
        match self {
            BinaryOp::Greater | BinaryOp::Equal => 1,
            BinaryOp::Add | BinaryOp::Sub => 2,
            BinaryOp::Mul => 3,
        }
    }
}

/// Formula expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Text(String),
    Ref(CellRef),
    /// `INDEX(range, row)`, 1-based row into a single-column range
    Index { range: CellRange, row: Box<Expr> },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    If {
        condition: Box<Expr>,
        then: Box<Expr>,
        otherwise: Box<Expr>,
    },
    /// `COUNTIF(range, "text")`
    CountIf { range: CellRange, criterion: String },
}

impl Expr {
    pub fn number(value: f64) -> Self {
        Expr::Number(value)
    }

    pub fn text(value: impl Into<String>) -> Self {
        Expr::Text(value.into())
    }

    pub fn cell(cell: CellRef) -> Self {
        Expr::Ref(cell)
    }

    pub fn index(range: CellRange, row: Expr) -> Self {
        Expr::Index {
            range,
            row: Box::new(row),
        }
    }

    pub fn if_then(condition: Expr, then: Expr, otherwise: Expr) -> Self {
        Expr::If {
            condition: Box::new(condition),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        }
    }

    pub fn count_if(range: CellRange, criterion: impl Into<String>) -> Self {
        Expr::CountIf {
            range,
            criterion: criterion.into(),
        }
    }

    fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// `self > rhs`
    pub fn greater(self, rhs: Expr) -> Self {
        Self::binary(BinaryOp::Greater, self, rhs)
    }

    /// `self = rhs`
    pub fn equals(self, rhs: Expr) -> Self {
        Self::binary(BinaryOp::Equal, self, rhs)
    }

    /// Spreadsheet syntax without the leading `=`
    pub fn to_excel(&self) -> String {
        let mut out = String::new();
        self.render(&mut out);
        out
    }

    /// Spreadsheet syntax with the leading `=`
    pub fn formula(&self) -> String {
        format!("={}", self.to_excel())
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::Binary { op, .. } => op.precedence(),
            _ => u8::MAX,
        }
    }

    fn render(&self, out: &mut String) {
        match self {
            Expr::Number(value) => out.push_str(&format_number(*value)),
            Expr::Text(text) => {
                out.push('"');
                out.push_str(&text.replace('"', "\"\""));
                out.push('"');
            }
            Expr::Ref(cell) => out.push_str(&cell.to_string()),
            Expr::Index { range, row } => {
                out.push_str(&format!("INDEX({},", range));
                row.render(out);
                out.push(')');
            }
            Expr::Binary { op, lhs, rhs } => {
                let prec = op.precedence();
                render_operand(lhs, lhs.precedence() < prec, out);
                out.push_str(op.symbol());
                render_operand(rhs, rhs.precedence() <= prec, out);
            }
            Expr::If {
                condition,
                then,
                otherwise,
            } => {
                out.push_str("IF(");
                condition.render(out);
                out.push(',');
                then.render(out);
                out.push(',');
                otherwise.render(out);
                out.push(')');
            }
            Expr::CountIf { range, criterion } => {
                out.push_str(&format!(
                    "COUNTIF({},\"{}\")",
                    range,
                    criterion.replace('"', "\"\"")
                ));
            }
        }
    }
}

fn render_operand(expr: &Expr, parenthesise: bool, out: &mut String) {
    if parenthesise {
        out.push('(');
        expr.render(out);
        out.push(')');
    } else {
        expr.render(out);
    }
}

/// Shortest round-tripping decimal form, integers without a fraction
pub fn format_number(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::binary(BinaryOp::Add, self, rhs)
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::binary(BinaryOp::Sub, self, rhs)
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::binary(BinaryOp::Mul, self, rhs)
    }
}
