// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Ordinal (permutation) estimators module
// Window embedding, rank classification, the decayed histogram and the
// rolling / multi-scale entropy estimators built on them.

pub mod classifier;
pub mod embedding;
pub mod histogram;
pub mod multiscale;
pub mod ordinal;
pub mod ordinal_utils;
pub mod shannon;
