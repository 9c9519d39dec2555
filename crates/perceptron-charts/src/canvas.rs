// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Shared drawing plumbing: figure sizing, colours, text styles, PNG output.

use std::path::Path;

use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::fonts::FONT_FAMILY;

/// Root drawing area backed by an in-memory RGB buffer
pub(crate) type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

pub const DEFAULT_DPI: u32 = 150;

/// Figure sizes in inches
pub const ARCHITECTURE_FIGURE: (f64, f64) = (12.0, 8.0);
pub const DECISION_BOUNDARY_FIGURE: (f64, f64) = (10.0, 8.0);
pub const WEIGHT_EVOLUTION_FIGURE: (f64, f64) = (12.0, 7.0);
pub const LEARNING_PROGRESS_FIGURE: (f64, f64) = (10.0, 6.0);

pub const BLUE_HEADER: RGBColor = RGBColor(0x44, 0x72, 0xC4);
pub const YELLOW_WEIGHTS: RGBColor = RGBColor(0xFF, 0xF2, 0xCC);
pub const PURPLE_INPUTS: RGBColor = RGBColor(0xE2, 0xD0, 0xF8);
pub const GREEN_CORRECT: RGBColor = RGBColor(0xC6, 0xEF, 0xCE);
pub const ORANGE_CALC: RGBColor = RGBColor(0xFC, 0xE4, 0xD6);
pub const LIGHT_YELLOW: RGBColor = RGBColor(0xFF, 0xFF, 0xE0);
pub const PLOT_GREEN: RGBColor = RGBColor(0x00, 0x80, 0x00);
pub const GRAY: RGBColor = RGBColor(0x80, 0x80, 0x80);

/// Raster settings shared by all charts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    pub dpi: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self { dpi: DEFAULT_DPI }
    }
}

impl RenderSettings {
    pub fn new(dpi: u32) -> Self {
        Self { dpi }
    }

    /// Pixel size of a figure given in inches
    pub fn pixels(&self, inches: (f64, f64)) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        (
            (inches.0 * dpi).round() as u32,
            (inches.1 * dpi).round() as u32,
        )
    }

    /// Pixel length of a typographic size in points
    pub fn pt(&self, points: f64) -> f64 {
        points * f64::from(self.dpi) / 72.0
    }

    /// Same as [`pt`](Self::pt), rounded for pixel-sized arguments
    pub fn px(&self, points: f64) -> i32 {
        self.pt(points).round() as i32
    }

    pub(crate) fn font(&self, points: f64) -> TextStyle<'static> {
        FontDesc::new(FontFamily::Name(FONT_FAMILY), self.pt(points), FontStyle::Normal).into()
    }

    pub(crate) fn bold(&self, points: f64) -> TextStyle<'static> {
        FontDesc::new(FontFamily::Name(FONT_FAMILY), self.pt(points), FontStyle::Bold).into()
    }
}

pub(crate) fn centered(style: TextStyle<'static>) -> TextStyle<'static> {
    style.pos(Pos::new(HPos::Center, VPos::Center))
}

/// Draw into a white canvas of `inches` and encode it as PNG at `path`
pub(crate) fn render_png<F>(
    path: &Path,
    inches: (f64, f64),
    settings: &RenderSettings,
    draw: F,
) -> ChartResult<()>
where
    F: FnOnce(&Area<'_>) -> ChartResult<()>,
{
    let (width, height) = settings.pixels(inches);
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;
        draw(&root)?;
        root.present()?;
    }

    let image = RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| ChartError::Draw(format!("pixel buffer does not fit {}x{}", width, height)))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ChartError::io(parent, e))?;
    }
    image.save_with_format(path, ImageFormat::Png)?;

    debug!("Encoded {}x{} PNG {}", width, height, path.display());
    Ok(())
}

/// Centred bold title lines at the top of `area`; returns the area below them
pub(crate) fn draw_title<'a>(
    area: &Area<'a>,
    lines: &[&str],
    points: f64,
    settings: &RenderSettings,
) -> ChartResult<Area<'a>> {
    let (width, _) = area.dim_in_pixel();
    let line_height = settings.pt(points * 1.3).round() as i32;
    let top = settings.px(8.0);
    let style = settings
        .bold(points)
        .pos(Pos::new(HPos::Center, VPos::Top));

    for (i, line) in lines.iter().enumerate() {
        area.draw_text(line, &style, (width as i32 / 2, top + i as i32 * line_height))?;
    }

    let used = top * 2 + line_height * lines.len() as i32;
    let (_, body) = area.split_vertically(used);
    Ok(body)
}

/// Arrow head triangle at `tip`, sized in pixels
///
/// `px_per_unit` converts data units to pixels on each axis, so the head
/// keeps its shape on charts with unequal axis scales.
pub(crate) fn arrow_head(
    tail: (f64, f64),
    tip: (f64, f64),
    px_per_unit: (f64, f64),
    length_px: f64,
) -> Vec<(f64, f64)> {
    let (sx, sy) = px_per_unit;
    let dx = (tip.0 - tail.0) * sx;
    let dy = (tip.1 - tail.1) * sy;
    let norm = (dx * dx + dy * dy).sqrt();
    if norm == 0.0 {
        return vec![tip, tip, tip];
    }
    let (ux, uy) = (dx / norm, dy / norm);
    let half = length_px * 0.45;
    let base = (-ux * length_px, -uy * length_px);

    vec![
        tip,
        (
            tip.0 + (base.0 - uy * half) / sx,
            tip.1 + (base.1 + ux * half) / sy,
        ),
        (
            tip.0 + (base.0 + uy * half) / sx,
            tip.1 + (base.1 - ux * half) / sy,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_sizes() {
        let settings = RenderSettings::default();
        assert_eq!(settings.pixels(ARCHITECTURE_FIGURE), (1800, 1200));
        assert_eq!(settings.pixels(DECISION_BOUNDARY_FIGURE), (1500, 1200));
        assert_eq!(settings.pixels(WEIGHT_EVOLUTION_FIGURE), (1800, 1050));
        assert_eq!(settings.pixels(LEARNING_PROGRESS_FIGURE), (1500, 900));
        assert_eq!(RenderSettings::new(72).pixels((10.0, 6.0)), (720, 432));
    }

    #[test]
    fn test_point_to_pixel() {
        assert_eq!(RenderSettings::new(72).pt(12.0), 12.0);
        assert_eq!(RenderSettings::new(144).px(10.0), 20);
    }

    #[test]
    fn test_arrow_head_points_back_along_shaft() {
        let head = arrow_head((0.0, 0.0), (10.0, 0.0), (1.0, 1.0), 4.0);
        assert_eq!(head[0], (10.0, 0.0));
        assert!((head[1].0 - 6.0).abs() < 1e-9);
        assert!((head[2].0 - 6.0).abs() < 1e-9);
        assert!((head[1].1 + head[2].1).abs() < 1e-9);
    }
}
