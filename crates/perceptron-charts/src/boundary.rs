// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! AND-gate points on the input plane with the illustrative decision line.

use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use tracing::info;

use crate::canvas::{
    draw_title, render_png, RenderSettings, DECISION_BOUNDARY_FIGURE, PLOT_GREEN,
};
use crate::error::ChartResult;
use crate::series::{truth_table_points, DecisionBoundary};

const TITLE: [&str; 2] = [
    "AND Gate: Decision Boundary",
    "Only (1,1) is in the \"YES\" region!",
];
const LINE_SAMPLES: usize = 100;

/// Render the decision-boundary chart to `path`
pub fn render_decision_boundary(path: &Path, settings: &RenderSettings) -> ChartResult<()> {
    let boundary = DecisionBoundary::illustrative();
    let (zeros, ones) = truth_table_points();
    let (lo, hi) = boundary.window;

    render_png(path, DECISION_BOUNDARY_FIGURE, settings, |root| {
        let body = draw_title(root, &TITLE, 16.0, settings)?;

        let mut chart = ChartBuilder::on(&body)
            .margin(settings.px(10.0))
            .x_label_area_size(settings.px(36.0))
            .y_label_area_size(settings.px(40.0))
            .build_cartesian_2d(lo..hi, lo..hi)?;

        chart
            .configure_mesh()
            .x_desc("x1 (Input 1)")
            .y_desc("x2 (Input 2)")
            .axis_desc_style(settings.font(14.0))
            .label_style(settings.font(11.0))
            .light_line_style(BLACK.mix(0.05))
            .bold_line_style(BLACK.mix(0.15))
            .draw()?;

        let line_width = settings.px(2.0).max(1) as u32;

        chart
            .draw_series(std::iter::once(Polygon::new(
                boundary.positive_region(LINE_SAMPLES),
                PLOT_GREEN.mix(0.2).filled(),
            )))?
            .label("Output = 1 region")
            .legend(|(x, y)| Rectangle::new([(x, y - 6), (x + 24, y + 6)], PLOT_GREEN.mix(0.2).filled()));

        chart
            .draw_series(std::iter::once(Polygon::new(
                boundary.negative_region(LINE_SAMPLES),
                RED.mix(0.2).filled(),
            )))?
            .label("Output = 0 region")
            .legend(|(x, y)| Rectangle::new([(x, y - 6), (x + 24, y + 6)], RED.mix(0.2).filled()));

        let dash = settings.pt(6.0).round() as u32;
        chart
            .draw_series(DashedLineSeries::new(
                boundary.visible_line(LINE_SAMPLES),
                dash,
                dash / 2,
                BLUE.stroke_width(line_width),
            ))?
            .label("Decision Boundary")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], BLUE.stroke_width(line_width)));

        let marker = settings.px(9.0);
        let outline = BLACK.stroke_width(line_width);
        let label_offset = (settings.px(8.0), -settings.px(20.0));

        for &(x1, x2) in &zeros {
            chart.draw_series(std::iter::once(
                EmptyElement::at((x1, x2))
                    + Circle::new((0, 0), marker, RED.filled())
                    + Circle::new((0, 0), marker, outline)
                    + Text::new(
                        format!("({},{})=0", x1, x2),
                        label_offset,
                        settings.font(12.0),
                    ),
            ))?;
        }
        for &(x1, x2) in &ones {
            chart.draw_series(std::iter::once(
                EmptyElement::at((x1, x2))
                    + Rectangle::new([(-marker, -marker), (marker, marker)], PLOT_GREEN.filled())
                    + Rectangle::new([(-marker, -marker), (marker, marker)], outline)
                    + Text::new(
                        format!("({},{})=1", x1, x2),
                        label_offset,
                        settings.bold(12.0),
                    ),
            ))?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font(settings.font(11.0))
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK)
            .draw()?;

        Ok(())
    })?;

    info!("Rendered decision boundary {}", path.display());
    Ok(())
}
