// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{ArrayView1, s};

use crate::config::{validate_embedding_delay, validate_embedding_dimension, window_length};
use crate::error::{Result, RveError};

/// Sliding-window view over a signal with an embedding delay.
///
/// Window `t` spans samples `t .. t + L` with `L = (m − 1)·ε + 1` and is
/// decimated to the `m` points `t, t + ε, …, t + (m − 1)·ε`. Windows are
/// strided views into the signal; nothing is copied.
#[derive(Debug, Clone)]
pub struct WindowEmbedder<'a> {
    signal: ArrayView1<'a, f64>,
    embedding_dimension: usize,
    embedding_delay: usize,
    window_length: usize,
}

impl<'a> WindowEmbedder<'a> {
    pub fn new(
        signal: ArrayView1<'a, f64>,
        embedding_dimension: usize,
        embedding_delay: usize,
    ) -> Result<Self> {
        validate_embedding_dimension(embedding_dimension)?;
        validate_embedding_delay(embedding_delay)?;
        // A length past usize::MAX cannot fit any signal.
        let window_length =
            window_length(embedding_dimension, embedding_delay).ok_or_else(|| {
                RveError::insufficient("one embedding window", usize::MAX, signal.len())
            })?;
        if window_length > signal.len() {
            return Err(RveError::insufficient(
                "one embedding window",
                window_length,
                signal.len(),
            ));
        }
        Ok(Self {
            signal,
            embedding_dimension,
            embedding_delay,
            window_length,
        })
    }

    pub fn embedding_dimension(&self) -> usize {
        self.embedding_dimension
    }

    pub fn embedding_delay(&self) -> usize {
        self.embedding_delay
    }

    /// Span of one window in raw samples.
    pub fn window_length(&self) -> usize {
        self.window_length
    }

    /// Number of windows, `N − L + 1`. Always at least 1.
    pub fn n_windows(&self) -> usize {
        self.signal.len() - self.window_length + 1
    }

    /// Decimated window starting at sample `start`, or `None` past the end.
    pub fn window(&self, start: usize) -> Option<ArrayView1<'a, f64>> {
        if start >= self.n_windows() {
            return None;
        }
        let end = start + self.window_length;
        Some(self.signal.clone().slice_move(s![start..end; self.embedding_delay]))
    }

    /// All windows in increasing start order.
    pub fn windows(&self) -> impl ExactSizeIterator<Item = ArrayView1<'a, f64>> + '_ {
        let (delay, length) = (self.embedding_delay, self.window_length);
        (0..self.n_windows()).map(move |start| {
            self.signal.clone().slice_move(s![start..start + length; delay])
        })
    }
}
