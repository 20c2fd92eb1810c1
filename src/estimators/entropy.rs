// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::ArrayView1;

use crate::config::{MultiScaleConfig, RveConfig};
use crate::error::Result;
use crate::estimators::approaches::ordinal::multiscale::MultiScaleOrdinalEntropy;
use crate::estimators::approaches::ordinal::ordinal::RollingOrdinalEntropy;
use crate::estimators::traits::OrdinalClassifier;
pub use crate::estimators::traits::{GlobalValue, LocalValues};

/// Entry points for the ordinal entropy estimators.
///
/// This struct provides static methods so callers can build estimators
/// without reaching into `approaches`.
pub struct Entropy;

impl Entropy {
    /// Creates a rolling ordinal entropy estimate for one signal
    ///
    /// # Arguments
    ///
    /// * `signal` - Samples, borrowed for the duration of the run
    /// * `sampling_frequency` - Sampling rate in Hz, used for the decay factor
    /// * `config` - Embedding dimension, delay and decay time constant
    ///
    /// # Errors
    ///
    /// `InvalidConfig` for bad parameters, `InsufficientData` if the signal is
    /// shorter than one window.
    pub fn new_rolling_ordinal(
        signal: ArrayView1<'_, f64>,
        sampling_frequency: f64,
        config: &RveConfig,
    ) -> Result<RollingOrdinalEntropy> {
        RollingOrdinalEntropy::new(signal, sampling_frequency, config)
    }

    /// Same as [`Entropy::new_rolling_ordinal`] with an explicit classifier.
    pub fn new_rolling_ordinal_with_classifier<C: OrdinalClassifier>(
        signal: ArrayView1<'_, f64>,
        sampling_frequency: f64,
        config: &RveConfig,
        classifier: C,
    ) -> Result<RollingOrdinalEntropy> {
        RollingOrdinalEntropy::with_classifier(signal, sampling_frequency, config, classifier)
    }

    /// Creates a multi-scale estimate averaged over a critical-frequency band
    ///
    /// # Arguments
    ///
    /// * `signal` - Samples, borrowed for the duration of the run
    /// * `sampling_frequency` - Sampling rate in Hz
    /// * `config` - Critical-frequency band, decay time constant and order
    pub fn new_multiscale_ordinal(
        signal: ArrayView1<'_, f64>,
        sampling_frequency: f64,
        config: &MultiScaleConfig,
    ) -> Result<MultiScaleOrdinalEntropy> {
        MultiScaleOrdinalEntropy::new(signal, sampling_frequency, config)
    }
}
