// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for ordinal entropy estimation.
//!
//! Every public operation reports failures through [`RveError`]; nothing is
//! retried and no partial results are returned.

use thiserror::Error;

/// Main error type for estimator and post-processing operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RveError {
    /// A tuning parameter is out of range. Caller-fixable.
    #[error("Invalid configuration for `{parameter}`: {reason}")]
    InvalidConfig {
        parameter: &'static str,
        reason: String,
    },

    /// The input is too short for the requested window.
    #[error("Insufficient data for {context}: need {required} samples, got {available}")]
    InsufficientData {
        context: &'static str,
        required: usize,
        available: usize,
    },

    /// A rank pattern did not resolve to a permutation class.
    ///
    /// Indicates a bug in the embedder or classifier, never bad input.
    #[error("Window {window_index} produced unclassifiable rank pattern {pattern:?}")]
    ClassificationError {
        window_index: usize,
        pattern: Vec<usize>,
    },
}

impl RveError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter,
            reason: reason.into(),
        }
    }

    pub(crate) fn insufficient(context: &'static str, required: usize, available: usize) -> Self {
        Self::InsufficientData {
            context,
            required,
            available,
        }
    }
}

/// Result type alias for estimator operations.
pub type Result<T> = std::result::Result<T, RveError>;
