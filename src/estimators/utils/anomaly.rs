// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::ArrayView1;

/// Low-entropy points of a finished entropy series.
///
/// A point is anomalous when its value lies below `mean − std` (population
/// standard deviation). This is an analysis step on top of the estimator
/// output, not part of the estimator itself.
#[derive(Debug, Clone, PartialEq)]
pub struct AnomalyReport {
    pub mean: f64,
    pub std_dev: f64,
    pub threshold: f64,
    /// Indices below the threshold, ascending.
    pub indices: Vec<usize>,
}

impl AnomalyReport {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Flag every index whose value is below `mean − std`.
///
/// Returns `None` for an empty series.
pub fn find_anomalous_points(series: ArrayView1<'_, f64>) -> Option<AnomalyReport> {
    let mean = series.mean()?;
    let std_dev = series.std(0.0);
    let threshold = mean - std_dev;
    let indices = series
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v < threshold)
        .map(|(i, _)| i)
        .collect();
    Some(AnomalyReport {
        mean,
        std_dev,
        threshold,
        indices,
    })
}
