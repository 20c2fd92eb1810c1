// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-processing for entropy series: moving-average smoothing and a
//! smoothed rate-of-change curve.
//!
//! Each stage returns a shorter series that lines up with the leading
//! entries of its input; see [`align_time_axis`](super::time_axis::align_time_axis).

use ndarray::{Array1, ArrayView1, s};

use crate::error::{Result, RveError};

/// Simple (unweighted) moving average over `window_size` consecutive values.
///
/// Output length is `len − window_size + 1`.
pub fn smooth(series: ArrayView1<'_, f64>, window_size: usize) -> Result<Array1<f64>> {
    if window_size == 0 {
        return Err(RveError::invalid("window_size", "must be at least 1"));
    }
    if window_size > series.len() {
        return Err(RveError::insufficient("moving-average window", window_size, series.len()));
    }
    let w = window_size as f64;
    Ok(series.windows(window_size).into_iter().map(|win| win.sum() / w).collect())
}

/// `order`-th forward difference, like `numpy.diff(series, order)`.
///
/// Output length is `len − order`.
pub fn finite_difference(series: ArrayView1<'_, f64>, order: usize) -> Result<Array1<f64>> {
    if order == 0 {
        return Err(RveError::invalid("order", "differentiation order must be at least 1"));
    }
    if order >= series.len() {
        return Err(RveError::insufficient("finite difference", order + 1, series.len()));
    }
    let mut diff = series.to_owned();
    for _ in 0..order {
        let next = &diff.slice(s![1..]) - &diff.slice(s![..-1]);
        diff = next;
    }
    Ok(diff)
}

/// Smoothed magnitude of the `order`-th difference.
///
/// Highlights transition points in an (ideally already smoothed) entropy
/// series. Output length is `len − order − smoothing_window + 1`.
pub fn differentiate(
    series: ArrayView1<'_, f64>,
    order: usize,
    smoothing_window: usize,
) -> Result<Array1<f64>> {
    let mut diff = finite_difference(series, order)?;
    diff.mapv_inplace(f64::abs);
    smooth(diff.view(), smoothing_window)
}
