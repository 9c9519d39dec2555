// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! In-memory worksheet: cell contents, styles, merged ranges, column widths.

use std::collections::BTreeMap;

use crate::formula::{CellRange, CellRef, ColNum, Expr, RowNum};
use crate::style::CellStyle;

/// What a cell holds
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Number(f64),
    Text(String),
    Formula(Expr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub content: CellContent,
    pub style: CellStyle,
}

/// Single worksheet; cells are kept in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    name: String,
    cells: BTreeMap<(RowNum, ColNum), Cell>,
    merges: Vec<CellRange>,
    column_widths: BTreeMap<ColNum, f64>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
            merges: Vec::new(),
            column_widths: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Place `content` at `cell`, replacing anything already there
    pub fn set(&mut self, cell: CellRef, content: CellContent, style: CellStyle) {
        self.cells.insert(cell.key(), Cell { content, style });
    }

    pub fn set_number(&mut self, cell: CellRef, value: f64, style: CellStyle) {
        self.set(cell, CellContent::Number(value), style);
    }

    pub fn set_text(&mut self, cell: CellRef, text: impl Into<String>, style: CellStyle) {
        self.set(cell, CellContent::Text(text.into()), style);
    }

    pub fn set_formula(&mut self, cell: CellRef, expr: Expr, style: CellStyle) {
        self.set(cell, CellContent::Formula(expr), style);
    }

    /// Merge `range`; the content of its top-left cell spans the range
    pub fn merge(&mut self, range: CellRange) {
        self.merges.push(range);
    }

    pub fn set_column_width(&mut self, col: ColNum, width: f64) {
        self.column_widths.insert(col, width);
    }

    pub fn get(&self, cell: CellRef) -> Option<&Cell> {
        self.cells.get(&cell.key())
    }

    pub fn cells(&self) -> impl Iterator<Item = (CellRef, &Cell)> {
        self.cells
            .iter()
            .map(|(&(row, col), cell)| (CellRef::new(row, col), cell))
    }

    pub fn merges(&self) -> &[CellRange] {
        &self.merges
    }

    pub fn column_widths(&self) -> impl Iterator<Item = (ColNum, f64)> + '_ {
        self.column_widths.iter().map(|(&col, &width)| (col, width))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_ignore_absolute_markers() {
        let mut sheet = Sheet::new("Test");
        let cell: CellRef = "C13".parse().unwrap();
        sheet.set_number(cell, 3.0, CellStyle::EditableWeight);

        let pinned: CellRef = "$C$13".parse().unwrap();
        let stored = sheet.get(pinned).unwrap();
        assert_eq!(stored.content, CellContent::Number(3.0));
        assert_eq!(stored.style, CellStyle::EditableWeight);
    }

    #[test]
    fn test_cells_in_row_major_order() {
        let mut sheet = Sheet::new("Test");
        assert!(sheet.is_empty());
        sheet.set_text("B2".parse().unwrap(), "b2", CellStyle::Plain);
        sheet.set_text("A2".parse().unwrap(), "a2", CellStyle::Plain);
        sheet.set_text("C1".parse().unwrap(), "c1", CellStyle::Plain);

        let order: Vec<String> = sheet.cells().map(|(cell, _)| cell.to_string()).collect();
        assert_eq!(order, vec!["C1", "A2", "B2"]);
        assert_eq!(sheet.len(), 3);
        assert!(!sheet.is_empty());
    }
}
