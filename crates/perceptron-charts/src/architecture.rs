// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Perceptron architecture diagram: inputs, weights, sum, step, output.

use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::canvas::{
    arrow_head, centered, draw_title, render_png, Area, RenderSettings, ARCHITECTURE_FIGURE,
    BLUE_HEADER, GREEN_CORRECT, LIGHT_YELLOW, ORANGE_CALC, PURPLE_INPUTS, YELLOW_WEIGHTS,
};
use crate::error::ChartResult;

const TITLE: &str = "The Perceptron - A Simple \"Brain\"";
const X_RANGE: (f64, f64) = (0.0, 10.0);
const Y_RANGE: (f64, f64) = (0.0, 8.0);

const INPUTS: [(&[&str], f64); 3] = [(&["x0=1", "(Bias)"], 6.0), (&["x1"], 4.0), (&["x2"], 2.0)];
const WEIGHT_LABELS: [&str; 3] = ["W0", "W1", "W2"];
const SUM_CENTER: (f64, f64) = (4.5, 4.0);
const OUTPUT_CENTER: (f64, f64) = (9.3, 4.0);
const STEP_BOX: [(f64, f64); 2] = [(6.5, 3.3), (8.0, 4.7)];

const EXPLANATION: [&str; 5] = [
    "How it works:",
    "1. Multiply each input by its weight",
    "2. Add them all up (Z = W0*x0 + W1*x1 + W2*x2)",
    "3. If Z > 0, output 1 (YES!)",
    "   If Z <= 0, output 0 (NO!)",
];

/// Render the architecture diagram to `path`
pub fn render_architecture(path: &Path, settings: &RenderSettings) -> ChartResult<()> {
    render_png(path, ARCHITECTURE_FIGURE, settings, |root| {
        let body = draw_title(root, &[TITLE], 18.0, settings)?;
        draw_diagram(&body, settings)
    })?;
    info!("Rendered architecture diagram {}", path.display());
    Ok(())
}

fn draw_diagram(area: &Area<'_>, settings: &RenderSettings) -> ChartResult<()> {
    let chart = ChartBuilder::on(area)
        .margin(settings.px(12.0))
        .build_cartesian_2d(X_RANGE.0..X_RANGE.1, Y_RANGE.0..Y_RANGE.1)?;
    let plot = chart.plotting_area();

    let (w, h) = plot.dim_in_pixel();
    let scale = (
        f64::from(w) / (X_RANGE.1 - X_RANGE.0),
        f64::from(h) / (Y_RANGE.1 - Y_RANGE.0),
    );
    // node radii are given in x units so circles stay round
    let radius = |units: f64| (units * scale.0).round() as i32;
    let outline = BLACK.stroke_width(settings.px(1.5).max(1) as u32);
    let line_gap = settings.pt(13.0).round() as i32;

    let node = |center: (f64, f64), r: f64, fill: RGBColor| -> ChartResult<()> {
        plot.draw(&Circle::new(center, radius(r), fill.filled()))?;
        plot.draw(&Circle::new(center, radius(r), outline))?;
        Ok(())
    };
    let label = |center: (f64, f64), lines: &[&str], style: TextStyle<'static>| -> ChartResult<()> {
        let first = -(lines.len() as i32 - 1) * line_gap / 2;
        for (i, line) in lines.iter().enumerate() {
            plot.draw(
                &(EmptyElement::at(center)
                    + Text::new(line.to_string(), (0, first + i as i32 * line_gap), centered(style.clone()))),
            )?;
        }
        Ok(())
    };
    let arrow = |tail: (f64, f64), tip: (f64, f64), color: RGBColor| -> ChartResult<()> {
        let width = settings.px(2.0).max(1) as u32;
        plot.draw(&PathElement::new(vec![tail, tip], color.stroke_width(width)))?;
        plot.draw(&Polygon::new(
            arrow_head(tail, tip, scale, settings.pt(10.0)),
            color.filled(),
        ))?;
        Ok(())
    };

    // inputs and weighted connections
    for (i, ((lines, y), weight)) in INPUTS.iter().zip(WEIGHT_LABELS).enumerate() {
        node((1.5, *y), 0.5, PURPLE_INPUTS)?;
        label((1.5, *y), lines, settings.bold(11.0))?;

        arrow((2.0, *y), (4.0, SUM_CENTER.1), BLUE_HEADER)?;

        let tag = (3.0, y + 0.3 + (i as f64 - 1.0) * 0.2);
        let half = (0.25, 0.2);
        plot.draw(&Rectangle::new(
            [(tag.0 - half.0, tag.1 - half.1), (tag.0 + half.0, tag.1 + half.1)],
            YELLOW_WEIGHTS.filled(),
        ))?;
        label(tag, &[weight], settings.bold(12.0).color(&BLUE_HEADER))?;
    }

    // sum, step function, output
    node(SUM_CENTER, 0.6, ORANGE_CALC)?;
    label(SUM_CENTER, &["Sum"], settings.bold(12.0))?;

    arrow((5.1, 4.0), (STEP_BOX[0].0, 4.0), BLACK)?;
    label((5.8, 4.4), &["Z = W*X"], settings.font(10.0))?;

    plot.draw(&Rectangle::new(STEP_BOX, BLUE_HEADER.filled()))?;
    plot.draw(&Rectangle::new(STEP_BOX, outline))?;
    label(
        (7.25, 4.0),
        &["Step", "Function"],
        settings.bold(10.0).color(&WHITE),
    )?;

    arrow((STEP_BOX[1].0, 4.0), (OUTPUT_CENTER.0 - 0.3, 4.0), BLACK)?;
    node(OUTPUT_CENTER, 0.5, GREEN_CORRECT)?;
    label(OUTPUT_CENTER, &["Out"], settings.bold(11.0))?;

    // explanation box below the network
    let box_height = (EXPLANATION.len() as i32 + 1) as f64 * f64::from(line_gap) / scale.1;
    let top = 1.4;
    let explanation_box = [(2.0, top), (8.0, top - box_height)];
    plot.draw(&Rectangle::new(explanation_box, LIGHT_YELLOW.mix(0.9).filled()))?;
    plot.draw(&Rectangle::new(explanation_box, BLACK.stroke_width(1)))?;
    label((5.0, top - box_height / 2.0), &EXPLANATION, settings.font(11.0))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_top_to_bottom() {
        let ys: Vec<f64> = INPUTS.iter().map(|(_, y)| *y).collect();
        assert_eq!(ys, vec![6.0, 4.0, 2.0]);
        assert_eq!(INPUTS[0].0, &["x0=1", "(Bias)"]);
    }

    #[test]
    fn test_explanation_mentions_rule() {
        assert!(EXPLANATION.iter().any(|l| l.contains("Z = W0*x0 + W1*x1 + W2*x2")));
        assert!(EXPLANATION.iter().any(|l| l.contains("Z > 0")));
    }
}
