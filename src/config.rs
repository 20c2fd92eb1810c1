// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tuning parameters for single-scale and multi-scale runs.
//!
//! Configs are plain values owned by the caller. They are validated once at
//! the start of a run and never mutated by the estimators.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RveError};

/// Largest supported embedding dimension.
///
/// The decayed histogram holds `m!` bins, so `m = 10` already means
/// 3 628 800 weights per run.
pub const MAX_EMBEDDING_DIMENSION: usize = 10;

/// Largest number of critical frequencies in one multi-scale band.
pub const MAX_CRITICAL_FREQUENCIES: usize = 4096;

/// Parameters for a single-scale estimator run and its post-processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RveConfig {
    /// Number of points per window that are ranked against each other (m).
    pub embedding_dimension: usize,
    /// Stride between ranked points inside a window (ε).
    pub embedding_delay: usize,
    /// Decay time constant τ in seconds. `f64::INFINITY` disables forgetting.
    pub decay_time_constant: f64,
    /// Moving-average window used by the smoother and the differentiator.
    pub window_average_size: usize,
    /// Finite-difference order used by the differentiator.
    pub differentiation_order: usize,
}

impl Default for RveConfig {
    fn default() -> Self {
        Self {
            embedding_dimension: 5,
            embedding_delay: 4,
            decay_time_constant: 1.0,
            window_average_size: 400,
            differentiation_order: 1,
        }
    }
}

impl RveConfig {
    pub fn new(
        embedding_dimension: usize,
        embedding_delay: usize,
        decay_time_constant: f64,
    ) -> Self {
        Self {
            embedding_dimension,
            embedding_delay,
            decay_time_constant,
            ..Self::default()
        }
    }

    pub fn with_window_average_size(mut self, window_average_size: usize) -> Self {
        self.window_average_size = window_average_size;
        self
    }

    pub fn with_differentiation_order(mut self, differentiation_order: usize) -> Self {
        self.differentiation_order = differentiation_order;
        self
    }

    /// Window length in raw samples: `m*ε − (ε−1)`.
    ///
    /// `None` when the length does not fit in `usize`.
    pub fn window_length(&self) -> Option<usize> {
        window_length(self.embedding_dimension, self.embedding_delay)
    }

    /// Check the embedding parameters only (what [`estimate`](crate::estimate) needs).
    pub fn validate_embedding(&self) -> Result<()> {
        validate_embedding_dimension(self.embedding_dimension)?;
        validate_embedding_delay(self.embedding_delay)?;
        validate_decay_time_constant(self.decay_time_constant)
    }

    /// Check every parameter, including the post-processing ones.
    pub fn validate(&self) -> Result<()> {
        self.validate_embedding()?;
        if self.window_average_size == 0 {
            return Err(RveError::invalid("window_average_size", "must be at least 1"));
        }
        if self.differentiation_order == 0 {
            return Err(RveError::invalid("differentiation_order", "must be at least 1"));
        }
        Ok(())
    }
}

/// Parameters for averaging entropy over a band of critical frequencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiScaleConfig {
    /// Lowest critical frequency in Hz (inclusive).
    pub f_min: f64,
    /// Upper bound of the band in Hz (exclusive).
    pub f_max: f64,
    /// Spacing between critical frequencies in Hz.
    pub f_step: f64,
    /// Decay time constant τ shared by every scale.
    pub decay_time_constant: f64,
    /// Embedding dimension m shared by every scale.
    pub embedding_dimension: usize,
}

impl Default for MultiScaleConfig {
    fn default() -> Self {
        Self {
            f_min: 3.0,
            f_max: 20.0,
            f_step: 1.0,
            decay_time_constant: 0.75,
            embedding_dimension: 5,
        }
    }
}

impl MultiScaleConfig {
    pub fn new(f_min: f64, f_max: f64, f_step: f64) -> Self {
        Self {
            f_min,
            f_max,
            f_step,
            ..Self::default()
        }
    }

    pub fn with_decay_time_constant(mut self, decay_time_constant: f64) -> Self {
        self.decay_time_constant = decay_time_constant;
        self
    }

    pub fn with_embedding_dimension(mut self, embedding_dimension: usize) -> Self {
        self.embedding_dimension = embedding_dimension;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.f_min.is_finite() && self.f_min > 0.0) {
            return Err(RveError::invalid(
                "f_min",
                format!("must be finite and > 0, got {}", self.f_min),
            ));
        }
        if !(self.f_max.is_finite() && self.f_max > self.f_min) {
            return Err(RveError::invalid(
                "f_max",
                format!("must be finite and > f_min ({}), got {}", self.f_min, self.f_max),
            ));
        }
        if !(self.f_step.is_finite() && self.f_step > 0.0) {
            return Err(RveError::invalid(
                "f_step",
                format!("must be finite and > 0, got {}", self.f_step),
            ));
        }
        let count = self.critical_frequency_count();
        if !(count.is_finite() && count <= MAX_CRITICAL_FREQUENCIES as f64) {
            return Err(RveError::invalid(
                "f_step",
                format!(
                    "band [{}, {}) with step {} has {count} critical frequencies, \
                     at most {MAX_CRITICAL_FREQUENCIES} are supported",
                    self.f_min, self.f_max, self.f_step
                ),
            ));
        }
        validate_decay_time_constant(self.decay_time_constant)?;
        validate_embedding_dimension(self.embedding_dimension)
    }

    /// Critical frequencies `f_min, f_min + f_step, …` strictly below `f_max`.
    ///
    /// The count is `ceil((f_max − f_min) / f_step)`, so the band is never empty
    /// for a valid config. It is capped at [`MAX_CRITICAL_FREQUENCIES`].
    pub fn critical_frequencies(&self) -> Vec<f64> {
        let count = self
            .critical_frequency_count()
            .min(MAX_CRITICAL_FREQUENCIES as f64) as usize;
        (0..count)
            .map(|k| self.f_min + k as f64 * self.f_step)
            .collect()
    }

    /// One embedding delay per critical frequency: `ceil(f / (2 f_k))`, at least 1.
    pub fn embedding_delays(&self, sampling_frequency: f64) -> Vec<usize> {
        self.critical_frequencies()
            .into_iter()
            .map(|f_k| delay_for_critical_frequency(sampling_frequency, f_k))
            .collect()
    }

    fn critical_frequency_count(&self) -> f64 {
        ((self.f_max - self.f_min) / self.f_step).ceil()
    }
}

/// Embedding delay that places the ranked points half a period of `f_crit` apart.
pub fn delay_for_critical_frequency(sampling_frequency: f64, f_crit: f64) -> usize {
    ((sampling_frequency / (2.0 * f_crit)).ceil() as usize).max(1)
}

pub(crate) fn window_length(embedding_dimension: usize, embedding_delay: usize) -> Option<usize> {
    // m*ε − (ε−1) == (m−1)*ε + 1
    embedding_dimension
        .saturating_sub(1)
        .checked_mul(embedding_delay)?
        .checked_add(1)
}

pub(crate) fn validate_embedding_dimension(m: usize) -> Result<()> {
    if m < 2 {
        return Err(RveError::invalid(
            "embedding_dimension",
            format!("must be at least 2, got {m}"),
        ));
    }
    if m > MAX_EMBEDDING_DIMENSION {
        return Err(RveError::invalid(
            "embedding_dimension",
            format!("must be at most {MAX_EMBEDDING_DIMENSION}, got {m}"),
        ));
    }
    Ok(())
}

pub(crate) fn validate_embedding_delay(delay: usize) -> Result<()> {
    if delay < 1 {
        return Err(RveError::invalid("embedding_delay", "must be at least 1"));
    }
    Ok(())
}

pub(crate) fn validate_decay_time_constant(tau: f64) -> Result<()> {
    // NaN fails the comparison; +inf is accepted and disables decay.
    if !(tau > 0.0) {
        return Err(RveError::invalid(
            "decay_time_constant",
            format!("must be > 0, got {tau}"),
        ));
    }
    Ok(())
}

pub(crate) fn validate_sampling_frequency(f: f64) -> Result<()> {
    if !(f.is_finite() && f > 0.0) {
        return Err(RveError::invalid(
            "sampling_frequency",
            format!("must be finite and > 0, got {f}"),
        ));
    }
    Ok(())
}
