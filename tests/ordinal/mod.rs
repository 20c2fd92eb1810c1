// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Module containing tests for the ordinal entropy pipeline.
mod embedding_tests;
mod ordinal_argsort;
mod ordinal_lehmer;
mod shannon_tests;
