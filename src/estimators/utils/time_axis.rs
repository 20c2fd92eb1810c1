// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1, s};

use crate::error::{Result, RveError};

/// `n` evenly spaced instants over `[0, duration]`, both ends included.
pub fn linspace_time_axis(duration: f64, n: usize) -> Array1<f64> {
    Array1::linspace(0.0, duration, n)
}

/// Leading `len` entries of a time axis, matching a series of that length.
///
/// Every estimator and post-processing stage returns a series aligned with
/// the start of its input, so truncation is the whole alignment.
pub fn align_time_axis<'a>(time: ArrayView1<'a, f64>, len: usize) -> Result<ArrayView1<'a, f64>> {
    if len > time.len() {
        return Err(RveError::insufficient("time axis alignment", len, time.len()));
    }
    Ok(time.slice_move(s![..len]))
}
