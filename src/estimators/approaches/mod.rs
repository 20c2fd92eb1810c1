// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod ordinal;

// Unified re-exports so tests and users can import
// ordinal_rve::estimators::approaches::* ergonomically.
pub use ordinal::classifier::{LehmerClassifier, PermutationTableClassifier};
pub use ordinal::embedding::WindowEmbedder;
pub use ordinal::histogram::DecayedHistogram;
pub use ordinal::multiscale::MultiScaleOrdinalEntropy;
pub use ordinal::ordinal::RollingOrdinalEntropy;
