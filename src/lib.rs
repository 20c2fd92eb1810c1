// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # ordinal-rve
//!
//! Time-resolved ordinal (permutation) entropy for long 1-D signals, built on
//! an exponentially forgetting pattern histogram, plus the post-processing
//! used to locate changes in signal complexity.
//!
//! ## Quick Start
//!
//! ```rust
//! use ndarray::Array1;
//! use ordinal_rve::{RveConfig, estimate, smooth};
//!
//! let signal: Array1<f64> = (0..2_000).map(|i| (i as f64 * 0.05).sin()).collect();
//! let config = RveConfig::new(4, 2, 0.5);
//!
//! let (entropy, window_count) = estimate(signal.view(), 250.0, &config).unwrap();
//! assert_eq!(entropy.len(), window_count);
//! assert!(entropy.iter().all(|h| (0.0..=1.0).contains(h)));
//!
//! let smoothed = smooth(entropy.view(), 100).unwrap();
//! assert_eq!(smoothed.len(), window_count - 100 + 1);
//! ```
//!
//! ## Pipeline
//!
//! | Stage | Type / function |
//! |-------|-----------------|
//! | Window embedding | [`WindowEmbedder`] |
//! | Rank classification | [`LehmerClassifier`], [`PermutationTableClassifier`] |
//! | Forgetting histogram | [`DecayedHistogram`] |
//! | Normalized Shannon entropy | [`normalized_shannon_entropy`] |
//! | Post-processing | [`smooth`], [`differentiate`], [`multi_scale_estimate`] |
//!
//! Every stage returns a series that lines up with the *leading* entries of
//! its input. Truncating the caller's time axis (see [`align_time_axis`]) is
//! the caller's job.
//!
//! ## Logging
//!
//! Runs emit `tracing` events. Call [`logging::init_tracing`] to print them.

pub mod config;
pub mod error;
pub mod estimators;
pub mod logging;
pub mod signal;

use ndarray::{Array1, ArrayView1};

pub use config::{MAX_EMBEDDING_DIMENSION, MultiScaleConfig, RveConfig};
pub use error::{Result, RveError};
pub use estimators::analysis::{RveAnalysis, TimedSeries, analyze};
pub use estimators::approaches::ordinal::shannon::normalized_shannon_entropy;
pub use estimators::approaches::{
    DecayedHistogram, LehmerClassifier, MultiScaleOrdinalEntropy, PermutationTableClassifier,
    RollingOrdinalEntropy, WindowEmbedder,
};
pub use estimators::traits::{GlobalValue, LocalValues, OrdinalClassifier, PermutationClass};
pub use estimators::utils::{
    AnomalyReport, align_time_axis, differentiate, find_anomalous_points, smooth,
};
pub use signal::Signal;

/// Rolling ordinal entropy of `signal`.
///
/// Returns the entropy series and its window count `N − L + 1`, where
/// `L = (m − 1)·ε + 1`.
pub fn estimate(
    signal: ArrayView1<'_, f64>,
    sampling_frequency: f64,
    config: &RveConfig,
) -> Result<(Array1<f64>, usize)> {
    let run = RollingOrdinalEntropy::new(signal, sampling_frequency, config)?;
    let window_count = run.window_count();
    Ok((run.into_series(), window_count))
}

/// Rolling ordinal entropy averaged over critical frequencies
/// `f_min, f_min + f_step, …` below `f_max`.
pub fn multi_scale_estimate(
    signal: ArrayView1<'_, f64>,
    sampling_frequency: f64,
    f_min: f64,
    f_max: f64,
    f_step: f64,
    decay_time_constant: f64,
    embedding_dimension: usize,
) -> Result<Array1<f64>> {
    let config = MultiScaleConfig::new(f_min, f_max, f_step)
        .with_decay_time_constant(decay_time_constant)
        .with_embedding_dimension(embedding_dimension);
    MultiScaleOrdinalEntropy::new(signal, sampling_frequency, &config)
        .map(MultiScaleOrdinalEntropy::into_series)
}
