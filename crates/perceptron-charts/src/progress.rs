// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Errors-per-epoch bar chart.

use std::path::Path;

use perceptron_learning::TrainingHistory;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::info;

use crate::canvas::{draw_title, render_png, RenderSettings, LEARNING_PROGRESS_FIGURE, PLOT_GREEN};
use crate::error::ChartResult;
use crate::series::errors_per_epoch;

const TITLE: [&str; 2] = [
    "Learning Progress: Errors Decrease Over Time!",
    "Green = No errors in that epoch",
];
/// Fixed y axis: an epoch has at most four errors
const Y_MAX: f64 = 5.0;
const BAR_WIDTH: f64 = 0.8;

/// Bar colour for an epoch with `errors` mistakes
pub fn bar_color(errors: usize) -> RGBColor {
    if errors > 0 {
        RED
    } else {
        PLOT_GREEN
    }
}

/// Render the learning progress chart for `history` to `path`
///
/// A run shorter than one epoch still produces the axes.
pub fn render_learning_progress(
    history: &TrainingHistory,
    path: &Path,
    settings: &RenderSettings,
) -> ChartResult<()> {
    let epochs = errors_per_epoch(&history.errors());
    let count = epochs.len();

    render_png(path, LEARNING_PROGRESS_FIGURE, settings, |root| {
        let body = draw_title(root, &TITLE, 16.0, settings)?;

        let mut chart = ChartBuilder::on(&body)
            .margin(settings.px(10.0))
            .x_label_area_size(settings.px(36.0))
            .y_label_area_size(settings.px(36.0))
            .build_cartesian_2d(0.5..count.max(1) as f64 + 0.5, 0.0..Y_MAX)?;

        let epoch_label = |x: &f64| {
            let rounded = x.round();
            if (x - rounded).abs() < 1e-6 && rounded >= 1.0 && rounded <= count as f64 {
                format!("{}", rounded as i64)
            } else {
                String::new()
            }
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(count.max(1) + 1)
            .x_label_formatter(&epoch_label)
            .y_labels(6)
            .x_desc("Epoch (1 epoch = 4 samples)")
            .y_desc("Number of Errors")
            .axis_desc_style(settings.font(14.0))
            .label_style(settings.font(11.0))
            .light_line_style(BLACK.mix(0.05))
            .bold_line_style(BLACK.mix(0.15))
            .draw()?;

        let edge = BLACK.stroke_width(settings.px(1.5).max(1) as u32);
        let value_style = settings
            .bold(11.0)
            .pos(Pos::new(HPos::Center, VPos::Bottom));

        for (i, &errors) in epochs.iter().enumerate() {
            let center = (i + 1) as f64;
            let value = errors as f64;
            let bar = [
                (center - BAR_WIDTH / 2.0, 0.0),
                (center + BAR_WIDTH / 2.0, value),
            ];
            chart.draw_series([
                Rectangle::new(bar, bar_color(errors).filled()),
                Rectangle::new(bar, edge),
            ])?;
            chart.draw_series(std::iter::once(Text::new(
                errors.to_string(),
                (center, value + 0.1),
                value_style.clone(),
            )))?;
        }

        Ok(())
    })?;

    info!(
        "Rendered learning progress for {} epochs {}",
        count,
        path.display()
    );
    Ok(())
}
