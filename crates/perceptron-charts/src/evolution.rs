// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Weight evolution line chart.

use std::path::Path;

use perceptron_learning::TrainingHistory;
use plotters::prelude::*;
use tracing::info;

use crate::canvas::{
    arrow_head, draw_title, render_png, RenderSettings, GRAY, PLOT_GREEN, WEIGHT_EVOLUTION_FIGURE,
};
use crate::error::ChartResult;
use crate::series::weight_series;

const TITLE: [&str; 2] = [
    "Weight Evolution: Watch the Brain Learn!",
    "Weights adjust with each mistake",
];
const SERIES_LABELS: [&str; 3] = ["W0 (Bias Weight)", "W1 (x1 Weight)", "W2 (x2 Weight)"];

/// y range covering every weight value with one unit of headroom
pub(crate) fn value_range(series: &[Vec<(f64, f64)>]) -> (f64, f64) {
    let values = series.iter().flatten().map(|&(_, w)| w);
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), w| {
        (lo.min(w), hi.max(w))
    });
    if min > max {
        return (-1.0, 1.0);
    }
    (min - 1.0, max + 1.0)
}

/// Render the weight evolution chart for `history` to `path`
pub fn render_weight_evolution(
    history: &TrainingHistory,
    path: &Path,
    settings: &RenderSettings,
) -> ChartResult<()> {
    let series = weight_series(history);
    let last = history.iterations() as f64;
    let (y_lo, y_hi) = value_range(&series);
    let x_range = (-0.5, last + 0.5);

    render_png(path, WEIGHT_EVOLUTION_FIGURE, settings, |root| {
        let body = draw_title(root, &TITLE, 16.0, settings)?;

        let mut chart = ChartBuilder::on(&body)
            .margin(settings.px(10.0))
            .x_label_area_size(settings.px(36.0))
            .y_label_area_size(settings.px(40.0))
            .build_cartesian_2d(x_range.0..x_range.1, y_lo..y_hi)?;

        chart
            .configure_mesh()
            .x_desc("Iteration")
            .y_desc("Weight Value")
            .axis_desc_style(settings.font(14.0))
            .label_style(settings.font(11.0))
            .x_label_formatter(&|x| format!("{:.0}", x))
            .light_line_style(BLACK.mix(0.05))
            .bold_line_style(BLACK.mix(0.15))
            .draw()?;

        let width = settings.px(2.0).max(1) as u32;
        let marker = settings.px(3.0).max(2);
        let colors = [BLUE, PLOT_GREEN, RED];

        for (k, points) in series.iter().enumerate() {
            let color = colors[k];
            chart
                .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(width)))?
                .label(SERIES_LABELS[k])
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], color.stroke_width(width)));

            let style = color.filled();
            match k {
                0 => {
                    chart.draw_series(points.iter().map(|&p| Circle::new(p, marker, style)))?;
                }
                1 => {
                    chart.draw_series(points.iter().map(|&p| {
                        EmptyElement::at(p) + Rectangle::new([(-marker, -marker), (marker, marker)], style)
                    }))?;
                }
                _ => {
                    chart.draw_series(
                        points
                            .iter()
                            .map(|&p| TriangleMarker::new(p, marker + 1, style)),
                    )?;
                }
            }
        }

        // start and end annotations follow the bias weight
        let (w, h) = chart.plotting_area().dim_in_pixel();
        let scale = (
            f64::from(w) / (x_range.1 - x_range.0),
            f64::from(h) / (y_hi - y_lo),
        );
        let bias = &series[0];
        let notes = [
            (bias[0], (bias[0].0 + 1.0, bias[0].1 + 0.5), ["Starting", "weights"]),
            (
                bias[bias.len() - 1],
                (bias[bias.len() - 1].0 - 2.0, bias[bias.len() - 1].1 + 0.5),
                ["Final", "weights"],
            ),
        ];
        let line_gap = settings.px(12.0);
        for (target, text_at, lines) in notes {
            chart.draw_series(std::iter::once(PathElement::new(
                vec![text_at, target],
                GRAY.stroke_width(1),
            )))?;
            chart.draw_series(std::iter::once(Polygon::new(
                arrow_head(text_at, target, scale, settings.pt(7.0)),
                GRAY.filled(),
            )))?;
            for (i, line) in lines.iter().enumerate() {
                chart.draw_series(std::iter::once(
                    EmptyElement::at(text_at)
                        + Text::new(
                            line.to_string(),
                            (0, -line_gap * (lines.len() - i) as i32),
                            settings.font(10.0),
                        ),
                ))?;
            }
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font(settings.font(12.0))
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK)
            .draw()?;

        Ok(())
    })?;

    info!(
        "Rendered weight evolution over {} iterations {}",
        history.iterations(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use perceptron_learning::{train, WeightVector};

    #[test]
    fn test_value_range_pads_extremes() {
        let series = weight_series(&train(WeightVector::default(), 20));
        // bias runs from 3 down to -2
        assert_eq!(value_range(&series), (-3.0, 4.0));
    }

    #[test]
    fn test_value_range_empty() {
        assert_eq!(value_range(&[]), (-1.0, 1.0));
    }
}
