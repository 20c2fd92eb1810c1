// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod anomaly;
pub mod smoothing;
pub mod time_axis;

pub use anomaly::{AnomalyReport, find_anomalous_points};
pub use smoothing::{differentiate, finite_difference, smooth};
pub use time_axis::{align_time_axis, linspace_time_axis};
