// ABOUTME: Intensity tables mapping rep targets and effort ratings to percent of 1RM
// ABOUTME: Includes percent clamps, preference adjustments and the rep-max ladder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

/// Rep count to fraction of one-rep-max, ascending by reps
pub const REPS_TO_PERCENT: [(u32, f64); 8] = [
    (1, 1.0),
    (3, 0.93),
    (5, 0.87),
    (6, 0.85),
    (8, 0.80),
    (10, 0.75),
    (12, 0.70),
    (15, 0.65),
];

/// Base percent when no rep target is usable
pub const DEFAULT_BASE_PERCENT: f64 = 0.70;

/// Percent removed per point of effort below RPE 10
pub const RPE_DROP_STEP: f64 = 0.025;

/// Effort rating meaning no reps in reserve
pub const MAX_RPE: f64 = 10.0;

/// Lowest working percent produced by the effort table
pub const MIN_WORKING_PERCENT: f64 = 0.50;

/// Highest working percent produced by the effort table
pub const MAX_WORKING_PERCENT: f64 = 0.99;

/// Upper clamp after preference adjustments
pub const MAX_RESOLVED_PERCENT: f64 = 0.97;

/// Relative intensity at or above which rest escalates to the heavy variant
pub const HEAVY_REST_PERCENT: f64 = 0.85;

/// Rep targets at or below which rest escalates to the heavy variant
pub const HEAVY_REST_REPS: u32 = 4;

/// Rep-max ladder as (reps, fraction of one-rep-max)
pub const REP_MAX_LADDER: [(u32, f64); 5] = [(1, 1.0), (3, 0.91), (5, 0.86), (8, 0.80), (10, 0.75)];
