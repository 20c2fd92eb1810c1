// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeMap;

use ndarray::{Array1, ArrayView1, s};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::config::{MultiScaleConfig, RveConfig, validate_sampling_frequency};
use crate::error::Result;
use crate::estimators::approaches::ordinal::ordinal::RollingOrdinalEntropy;
use crate::estimators::traits::{GlobalValue, LocalValues};

/// Rolling ordinal entropy averaged over a band of critical frequencies.
///
/// Each critical frequency `f_k` gives an embedding delay
/// `ε_k = ceil(f / (2 f_k))`. The full estimator runs once per delay with its
/// own histogram; the resulting series are truncated to the shortest one,
/// summed and divided by the number of critical frequencies.
///
/// Scales are independent, so distinct delays run in parallel. Delays shared
/// by several critical frequencies are computed once and weighted by their
/// multiplicity.
#[derive(Debug, Clone)]
pub struct MultiScaleOrdinalEntropy {
    series: Array1<f64>,
    critical_frequencies: Vec<f64>,
    embedding_delays: Vec<usize>,
}

impl MultiScaleOrdinalEntropy {
    pub fn new(
        signal: ArrayView1<'_, f64>,
        sampling_frequency: f64,
        config: &MultiScaleConfig,
    ) -> Result<Self> {
        validate_sampling_frequency(sampling_frequency)?;
        config.validate()?;

        let critical_frequencies = config.critical_frequencies();
        let embedding_delays = config.embedding_delays(sampling_frequency);

        let mut multiplicity: BTreeMap<usize, usize> = BTreeMap::new();
        for &delay in &embedding_delays {
            *multiplicity.entry(delay).or_insert(0) += 1;
        }
        let scales: Vec<(usize, usize)> = multiplicity.into_iter().collect();

        debug!(
            n_critical_frequencies = critical_frequencies.len(),
            n_distinct_delays = scales.len(),
            "multi-scale ordinal entropy started"
        );

        let per_scale: Vec<(usize, Array1<f64>)> = scales
            .into_par_iter()
            .map(|(delay, count)| {
                trace!(delay, count, "running scale");
                let scale_config = RveConfig::new(
                    config.embedding_dimension,
                    delay,
                    config.decay_time_constant,
                );
                RollingOrdinalEntropy::new(signal, sampling_frequency, &scale_config)
                    .map(|run| (count, run.into_series()))
            })
            .collect::<Result<Vec<_>>>()?;

        // Non-empty: a valid band has at least one frequency and every run has a window.
        let shortest = per_scale.iter().map(|(_, s)| s.len()).min().unwrap_or(0);
        let mut series = Array1::<f64>::zeros(shortest);
        for (count, scale_series) in &per_scale {
            series.scaled_add(*count as f64, &scale_series.slice(s![..shortest]));
        }
        series /= embedding_delays.len() as f64;

        debug!(n_windows = shortest, "multi-scale ordinal entropy finished");

        Ok(Self {
            series,
            critical_frequencies,
            embedding_delays,
        })
    }

    /// Averaged entropy, one value per window of the coarsest scale.
    pub fn series(&self) -> &Array1<f64> {
        &self.series
    }

    pub fn into_series(self) -> Array1<f64> {
        self.series
    }

    pub fn window_count(&self) -> usize {
        self.series.len()
    }

    pub fn critical_frequencies(&self) -> &[f64] {
        &self.critical_frequencies
    }

    /// Delay per critical frequency, duplicates included.
    pub fn embedding_delays(&self) -> &[usize] {
        &self.embedding_delays
    }
}

impl GlobalValue for MultiScaleOrdinalEntropy {
    fn global_value(&self) -> f64 {
        self.global_from_local()
    }
}

impl LocalValues for MultiScaleOrdinalEntropy {
    fn local_values(&self) -> Array1<f64> {
        self.series.clone()
    }
}
