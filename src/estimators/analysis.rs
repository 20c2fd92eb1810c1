// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1};
use tracing::info_span;

use crate::config::RveConfig;
use crate::error::Result;
use crate::estimators::approaches::ordinal::ordinal::RollingOrdinalEntropy;
use crate::estimators::utils::anomaly::{AnomalyReport, find_anomalous_points};
use crate::estimators::utils::smoothing::{differentiate, smooth};
use crate::estimators::utils::time_axis::align_time_axis;
use crate::signal::Signal;

/// A series paired with the matching prefix of the signal's time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedSeries {
    pub time: Array1<f64>,
    pub values: Array1<f64>,
}

impl TimedSeries {
    fn aligned(time: ArrayView1<'_, f64>, values: Array1<f64>) -> Result<Self> {
        let time = align_time_axis(time, values.len())?.to_owned();
        Ok(Self { time, values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Output of the full single-scale pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct RveAnalysis {
    /// Raw rolling ordinal entropy.
    pub entropy: TimedSeries,
    /// Moving average of `entropy`.
    pub smoothed: TimedSeries,
    /// Smoothed absolute finite difference of `smoothed`.
    pub change: TimedSeries,
}

impl RveAnalysis {
    /// Low-entropy regions of the smoothed curve.
    pub fn anomalies(&self) -> Option<AnomalyReport> {
        find_anomalous_points(self.smoothed.values.view())
    }
}

/// Estimate, smooth and differentiate in one go.
///
/// Uses `config.window_average_size` for both moving averages and
/// `config.differentiation_order` for the difference.
pub fn analyze(signal: &Signal, config: &RveConfig) -> Result<RveAnalysis> {
    config.validate()?;
    let _span = info_span!("analyze", n_samples = signal.len()).entered();

    let time = signal.time_axis();
    let entropy =
        RollingOrdinalEntropy::new(signal.samples(), signal.sampling_frequency(), config)?
            .into_series();
    let smoothed = smooth(entropy.view(), config.window_average_size)?;
    let change = differentiate(
        smoothed.view(),
        config.differentiation_order,
        config.window_average_size,
    )?;

    Ok(RveAnalysis {
        entropy: TimedSeries::aligned(time, entropy)?,
        smoothed: TimedSeries::aligned(time, smoothed)?,
        change: TimedSeries::aligned(time, change)?,
    })
}
