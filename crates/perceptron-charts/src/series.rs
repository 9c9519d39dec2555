// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Chart data derived from a training run
//!
//! Everything here is pure; the renderers only turn these values into
//! pixels.

use perceptron_learning::{TrainingHistory, WeightVector, AND_TRUTH_TABLE, SAMPLE_COUNT};

/// `(iteration, value)` for each weight component, `N + 1` points each
pub fn weight_series(history: &TrainingHistory) -> [Vec<(f64, f64)>; 3] {
    let matrix = history.weight_matrix();
    let column = |k: usize| -> Vec<(f64, f64)> {
        matrix
            .column(k)
            .iter()
            .enumerate()
            .map(|(i, &w)| (i as f64, w))
            .collect()
    };
    [column(0), column(1), column(2)]
}

/// Number of non-zero errors in each full epoch of four samples
///
/// A trailing partial epoch is dropped.
pub fn errors_per_epoch(errors: &[i8]) -> Vec<usize> {
    errors
        .chunks_exact(SAMPLE_COUNT)
        .map(|epoch| epoch.iter().filter(|&&e| e != 0).count())
        .collect()
}

/// Truth-table inputs `(x1, x2)` split by target: `(zeros, ones)`
pub fn truth_table_points() -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
    let mut zeros = Vec::new();
    let mut ones = Vec::new();
    for row in &AND_TRUTH_TABLE {
        let point = (f64::from(row.x1), f64::from(row.x2));
        if row.target == 1 {
            ones.push(point);
        } else {
            zeros.push(point);
        }
    }
    (zeros, ones)
}

/// Line `w0 + w1*x1 + w2*x2 = 0` drawn on the decision-boundary chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionBoundary {
    pub weights: WeightVector,
    /// x1 span of the drawn line and shaded regions
    pub x1_span: (f64, f64),
    /// Square plot window, applied to both axes
    pub window: (f64, f64),
}

impl DecisionBoundary {
    /// The textbook boundary `x2 = 1 - x1`, from weights `(-1, 1, 1)`
    ///
    /// This is a fixed teaching aid; it does not depend on any training run.
    pub fn illustrative() -> Self {
        Self {
            weights: WeightVector::new(-1.0, 1.0, 1.0),
            x1_span: (-0.2, 1.5),
            window: (-0.3, 1.5),
        }
    }

    /// x2 on the line for a given x1
    pub fn x2_at(&self, x1: f64) -> f64 {
        -(self.weights.w0() + self.weights.w1() * x1) / self.weights.w2()
    }

    /// True if `(x1, x2)` is on the output-1 side
    pub fn is_positive(&self, x1: f64, x2: f64) -> bool {
        self.weights.dot([1.0, x1, x2]) > 0.0
    }

    /// `samples` evenly spaced points of the line over `x1_span`
    pub fn line(&self, samples: usize) -> Vec<(f64, f64)> {
        let (start, end) = self.x1_span;
        let steps = samples.max(2) - 1;
        (0..=steps)
            .map(|i| {
                let x1 = start + (end - start) * i as f64 / steps as f64;
                (x1, self.x2_at(x1))
            })
            .collect()
    }

    /// Line points inside the plot window
    pub fn visible_line(&self, samples: usize) -> Vec<(f64, f64)> {
        let (lo, hi) = self.window;
        self.line(samples)
            .into_iter()
            .filter(|&(_, x2)| (lo..=hi).contains(&x2))
            .collect()
    }

    /// Polygon between the line and the top of the window
    pub fn positive_region(&self, samples: usize) -> Vec<(f64, f64)> {
        self.region(samples, self.window.1)
    }

    /// Polygon between the line and the bottom of the window
    pub fn negative_region(&self, samples: usize) -> Vec<(f64, f64)> {
        self.region(samples, self.window.0)
    }

    fn region(&self, samples: usize, edge: f64) -> Vec<(f64, f64)> {
        let (lo, hi) = self.window;
        let mut polygon: Vec<(f64, f64)> = self
            .line(samples)
            .into_iter()
            .map(|(x1, x2)| (x1, x2.clamp(lo, hi)))
            .collect();
        polygon.push((self.x1_span.1, edge));
        polygon.push((self.x1_span.0, edge));
        polygon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perceptron_learning::train;

    #[test]
    fn test_errors_per_epoch_default_run() {
        let history = train(WeightVector::default(), 20);
        assert_eq!(errors_per_epoch(&history.errors()), vec![3, 3, 1, 0, 0]);
    }

    #[test]
    fn test_partial_epoch_dropped() {
        assert_eq!(errors_per_epoch(&[1, 0, -1, 0, 1, 1]), vec![2]);
        assert_eq!(errors_per_epoch(&[1, 1, 1]), Vec::<usize>::new());
        assert!(errors_per_epoch(&[]).is_empty());
    }

    #[test]
    fn test_weight_series_shape() {
        let history = train(WeightVector::default(), 20);
        let [w0, w1, w2] = weight_series(&history);
        assert_eq!(w0.len(), 21);
        assert_eq!(w0[0], (0.0, 3.0));
        assert_eq!(w0[20], (20.0, -2.0));
        assert_eq!(w1[20].1, 2.0);
        assert_eq!(w2[20].1, 1.0);
        assert_eq!(w2[2], (2.0, 2.0));
    }

    #[test]
    fn test_weight_series_empty_run() {
        let [w0, _, _] = weight_series(&train(WeightVector::new(1.0, 2.0, 3.0), 0));
        assert_eq!(w0, vec![(0.0, 1.0)]);
    }

    #[test]
    fn test_truth_points() {
        let (zeros, ones) = truth_table_points();
        assert_eq!(zeros, vec![(0.0, 0.0), (0.0, 1.0), (1.0, 0.0)]);
        assert_eq!(ones, vec![(1.0, 1.0)]);
    }

    #[test]
    fn test_illustrative_boundary_separates_and() {
        let boundary = DecisionBoundary::illustrative();
        assert_eq!(boundary.x2_at(0.0), 1.0);
        assert_eq!(boundary.x2_at(1.0), 0.0);

        let (zeros, ones) = truth_table_points();
        assert!(zeros.iter().all(|&(a, b)| !boundary.is_positive(a, b)));
        assert!(ones.iter().all(|&(a, b)| boundary.is_positive(a, b)));
    }

    #[test]
    fn test_line_sampling() {
        let line = DecisionBoundary::illustrative().line(100);
        assert_eq!(line.len(), 100);
        assert_eq!(line[0].0, -0.2);
        assert!((line[99].0 - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_regions_stay_inside_window() {
        let boundary = DecisionBoundary::illustrative();
        for region in [boundary.positive_region(50), boundary.negative_region(50)] {
            assert_eq!(region.len(), 52);
            assert!(region
                .iter()
                .all(|&(_, x2)| (-0.3..=1.5).contains(&x2)));
        }
        assert!(boundary
            .visible_line(100)
            .iter()
            .all(|&(_, x2)| x2 >= -0.3));
    }
}
