// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1};
use tracing::debug;

use crate::config::{RveConfig, validate_sampling_frequency};
use crate::error::{Result, RveError};
use crate::estimators::approaches::ordinal::classifier::LehmerClassifier;
use crate::estimators::approaches::ordinal::embedding::WindowEmbedder;
use crate::estimators::approaches::ordinal::histogram::{DecayedHistogram, decay_factor};
use crate::estimators::approaches::ordinal::shannon::normalized_shannon_entropy;
use crate::estimators::traits::{GlobalValue, LocalValues, OrdinalClassifier};

/// Time-resolved ordinal (permutation) entropy of a single signal.
///
/// Windows are embedded with order `m` and delay `ε`, classified into one of
/// `m!` rank patterns and fed, in time order, into a [`DecayedHistogram`]
/// with forgetting factor `α = exp(−1 / (f·τ))`. After each update the
/// histogram is normalized and its Shannon entropy, divided by `ln m!`, is
/// emitted. The result holds one value in `[0, 1]` per window.
///
/// Entry `i` of the series lines up with sample `i` of the signal (the first
/// sample of window `i`); callers truncate their time axis to
/// [`window_count`](Self::window_count).
#[derive(Debug, Clone)]
pub struct RollingOrdinalEntropy {
    series: Array1<f64>,
    pub embedding_dimension: usize,
    pub embedding_delay: usize,
    pub decay_factor: f64,
}

impl RollingOrdinalEntropy {
    /// Run the estimator with the default (Lehmer code) classifier.
    pub fn new(
        signal: ArrayView1<'_, f64>,
        sampling_frequency: f64,
        config: &RveConfig,
    ) -> Result<Self> {
        // Validate before sizing the classifier's factorial tables.
        config.validate_embedding()?;
        Self::with_classifier(
            signal,
            sampling_frequency,
            config,
            LehmerClassifier::new(config.embedding_dimension),
        )
    }

    /// Run the estimator with a caller-supplied classification strategy.
    pub fn with_classifier<C: OrdinalClassifier>(
        signal: ArrayView1<'_, f64>,
        sampling_frequency: f64,
        config: &RveConfig,
        mut classifier: C,
    ) -> Result<Self> {
        validate_sampling_frequency(sampling_frequency)?;
        config.validate_embedding()?;
        let m = config.embedding_dimension;
        if classifier.embedding_dimension() != m {
            return Err(RveError::invalid(
                "classifier",
                format!(
                    "built for embedding dimension {}, config requires {m}",
                    classifier.embedding_dimension()
                ),
            ));
        }

        let alpha = decay_factor(sampling_frequency, config.decay_time_constant);
        if !(alpha.is_normal() && alpha <= 1.0) {
            return Err(RveError::invalid(
                "decay_time_constant",
                format!(
                    "f·τ = {} is too small; forgetting factor underflows",
                    sampling_frequency * config.decay_time_constant
                ),
            ));
        }

        let embedder = WindowEmbedder::new(signal, m, config.embedding_delay)?;
        let n_classes = classifier.n_classes();
        let mut histogram = DecayedHistogram::new(n_classes, alpha);
        let mut series = Vec::with_capacity(embedder.n_windows());

        debug!(
            embedding_dimension = m,
            embedding_delay = config.embedding_delay,
            alpha,
            n_windows = embedder.n_windows(),
            "rolling ordinal entropy started"
        );

        for (window_index, window) in embedder.windows().enumerate() {
            let class = classifier
                .classify(window)
                .filter(|class| class.index() < n_classes)
                .ok_or_else(|| RveError::ClassificationError {
                    window_index,
                    pattern: classifier.rank_pattern().to_vec(),
                })?;
            histogram.update(class);
            series.push(normalized_shannon_entropy(histogram.relative_weights()));
        }

        debug!(n_windows = series.len(), "rolling ordinal entropy finished");

        Ok(Self {
            series: Array1::from(series),
            embedding_dimension: m,
            embedding_delay: config.embedding_delay,
            decay_factor: alpha,
        })
    }

    /// Entropy per window, in window order.
    pub fn series(&self) -> &Array1<f64> {
        &self.series
    }

    pub fn into_series(self) -> Array1<f64> {
        self.series
    }

    /// Number of processed windows, `N − L + 1`.
    pub fn window_count(&self) -> usize {
        self.series.len()
    }
}

impl GlobalValue for RollingOrdinalEntropy {
    /// Mean entropy over all windows.
    fn global_value(&self) -> f64 {
        self.global_from_local()
    }
}

impl LocalValues for RollingOrdinalEntropy {
    fn local_values(&self) -> Array1<f64> {
        self.series.clone()
    }
}
