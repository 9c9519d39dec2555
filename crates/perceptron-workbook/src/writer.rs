// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! `.xlsx` output via `rust_xlsxwriter`
//!
//! Formula cells are written together with their evaluated value so that
//! viewers which never recalculate still show the learning run.

use std::collections::HashMap;
use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Formula, Workbook, Worksheet};
use tracing::{debug, info, warn};

use crate::error::{WorkbookError, WorkbookResult};
use crate::eval::{Evaluator, Value};
use crate::sheet::{CellContent, Sheet};
use crate::style::{CellStyle, Palette, NOTE_FONT, WARNING_FONT};

/// Concrete writer format for a semantic style
pub fn format_for(style: CellStyle) -> Format {
    let fill = |p: Palette| Color::RGB(p.rgb());
    match style {
        CellStyle::Plain => Format::new(),
        CellStyle::Title => Format::new()
            .set_bold()
            .set_font_size(18)
            .set_font_color(Color::White)
            .set_background_color(fill(Palette::BlueHeader))
            .set_align(FormatAlign::Center),
        CellStyle::Subtitle => Format::new()
            .set_italic()
            .set_font_size(11)
            .set_background_color(fill(Palette::LightBlueDocs))
            .set_align(FormatAlign::Center),
        CellStyle::SectionHeading => Format::new().set_bold().set_font_size(14),
        CellStyle::Warning => Format::new()
            .set_bold()
            .set_font_color(Color::RGB(WARNING_FONT)),
        CellStyle::TableHeader => Format::new()
            .set_bold()
            .set_font_color(Color::White)
            .set_background_color(fill(Palette::BlueHeader))
            .set_border(FormatBorder::Thin),
        CellStyle::GroupHeader(p) => Format::new()
            .set_bold()
            .set_background_color(fill(p))
            .set_align(FormatAlign::Center)
            .set_border(FormatBorder::Thin),
        CellStyle::ColumnHeader => Format::new()
            .set_bold()
            .set_font_size(9)
            .set_align(FormatAlign::Center)
            .set_border(FormatBorder::Thin),
        CellStyle::Bordered => Format::new().set_border(FormatBorder::Thin),
        CellStyle::Filled(p) => Format::new()
            .set_background_color(fill(p))
            .set_border(FormatBorder::Thin),
        CellStyle::EditableWeight => Format::new()
            .set_bold()
            .set_font_size(12)
            .set_background_color(fill(Palette::YellowWeights))
            .set_border(FormatBorder::Thin),
        CellStyle::Note => Format::new()
            .set_italic()
            .set_font_color(Color::RGB(NOTE_FONT)),
        CellStyle::Label => Format::new().set_bold(),
    }
}

struct FormatCache(HashMap<CellStyle, Format>);

impl FormatCache {
    fn get(&mut self, style: CellStyle) -> &Format {
        self.0.entry(style).or_insert_with(|| format_for(style))
    }
}

/// Write `sheet` to `path` as a single-sheet workbook
///
/// Parent directories are created; an existing file is overwritten.
/// Fails with `NonFiniteValue` when a formula evaluates to NaN or infinity.
pub fn write_workbook(sheet: &Sheet, path: &Path) -> WorkbookResult<()> {
    if sheet.is_empty() {
        warn!("Writing empty worksheet '{}' to {}", sheet.name(), path.display());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| WorkbookError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    fill_worksheet(sheet, worksheet)?;

    workbook.save(path)?;
    info!("Wrote workbook {}", path.display());
    Ok(())
}

fn fill_worksheet(sheet: &Sheet, worksheet: &mut Worksheet) -> WorkbookResult<()> {
    worksheet.set_name(sheet.name())?;

    for (col, width) in sheet.column_widths() {
        worksheet.set_column_width(col, width)?;
    }

    let mut formats = FormatCache(HashMap::new());

    // merged ranges carry the top-left cell's format; the content is written below
    for range in sheet.merges() {
        let style = sheet.get(range.start).map(|c| c.style).unwrap_or_default();
        worksheet.merge_range(
            range.start.row,
            range.start.col,
            range.end.row,
            range.end.col,
            "",
            formats.get(style),
        )?;
    }

    let mut eval = Evaluator::new(sheet);
    let mut formula_count = 0usize;
    for (cell, content) in sheet.cells() {
        let format = formats.get(content.style);
        match &content.content {
            CellContent::Number(n) => {
                worksheet.write_number_with_format(cell.row, cell.col, *n, format)?;
            }
            CellContent::Text(text) => {
                worksheet.write_string_with_format(cell.row, cell.col, text, format)?;
            }
            CellContent::Formula(expr) => {
                let cached = eval.cell_value(cell)?;
                if let Value::Number(value) = cached {
                    if !value.is_finite() {
                        return Err(WorkbookError::NonFiniteValue { cell, value });
                    }
                }
                let formula = Formula::new(expr.formula()).set_result(cached.to_string());
                worksheet.write_formula_with_format(cell.row, cell.col, formula, format)?;
                formula_count += 1;
            }
        }
    }

    debug!(
        "Filled worksheet '{}': {} cells, {} formulas",
        sheet.name(),
        sheet.len(),
        formula_count
    );
    Ok(())
}
