// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1, s};

use crate::config::validate_sampling_frequency;
use crate::error::{Result, RveError};
use crate::estimators::utils::time_axis::linspace_time_axis;

/// A uniformly sampled 1-D signal with its time axis.
///
/// Immutable once built; estimators borrow its samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    samples: Array1<f64>,
    time: Array1<f64>,
    sampling_frequency: f64,
}

impl Signal {
    /// Wrap samples taken at `sampling_frequency` Hz.
    ///
    /// The time axis spans `[0, len / f]` with both ends included.
    pub fn new(samples: Array1<f64>, sampling_frequency: f64) -> Result<Self> {
        validate_sampling_frequency(sampling_frequency)?;
        let duration = samples.len() as f64 / sampling_frequency;
        let time = linspace_time_axis(duration, samples.len());
        Ok(Self {
            samples,
            time,
            sampling_frequency,
        })
    }

    /// Wrap samples with a caller-provided time axis of the same length.
    pub fn with_time_axis(
        samples: Array1<f64>,
        time: Array1<f64>,
        sampling_frequency: f64,
    ) -> Result<Self> {
        validate_sampling_frequency(sampling_frequency)?;
        if time.len() != samples.len() {
            return Err(RveError::invalid(
                "time",
                format!("axis has {} entries for {} samples", time.len(), samples.len()),
            ));
        }
        Ok(Self {
            samples,
            time,
            sampling_frequency,
        })
    }

    pub fn samples(&self) -> ArrayView1<'_, f64> {
        self.samples.view()
    }

    pub fn time_axis(&self) -> ArrayView1<'_, f64> {
        self.time.view()
    }

    pub fn sampling_frequency(&self) -> f64 {
        self.sampling_frequency
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Length in seconds, `len / f`.
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sampling_frequency
    }

    /// Samples `start..end` together with their slice of the time axis.
    pub fn section(&self, start: usize, end: usize) -> Result<Self> {
        if start >= end {
            return Err(RveError::invalid(
                "section",
                format!("start {start} must be before end {end}"),
            ));
        }
        if end > self.len() {
            return Err(RveError::invalid(
                "section",
                format!("end {end} exceeds signal length {}", self.len()),
            ));
        }
        Ok(Self {
            samples: self.samples.slice(s![start..end]).to_owned(),
            time: self.time.slice(s![start..end]).to_owned(),
            sampling_frequency: self.sampling_frequency,
        })
    }
}
