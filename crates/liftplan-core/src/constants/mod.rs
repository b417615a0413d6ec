// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure numeric policy for rounding, intensity, volume, deloads and program length
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

//! Constants module
//!
//! Numeric policy shared by every scheme generator lives here so that the
//! generators only carry their own day templates.

/// Achievable equipment weights and rounding steps
pub mod equipment;
/// Rep-to-percent tables, effort adjustments and percent clamps
pub mod intensity;

/// Junk-volume cap and rep-progression switch thresholds
pub mod volume {
    /// Set counts above this are treated as junk volume
    pub const JUNK_VOLUME_SET_THRESHOLD: u32 = 6;
    /// Fraction of sets kept when junk volume is capped
    pub const JUNK_VOLUME_SET_FACTOR: f64 = 0.7;
    /// Minimum sets after a junk-volume cap
    pub const CAPPED_MIN_SETS: u32 = 3;
    /// Maximum sets after a junk-volume cap
    pub const CAPPED_MAX_SETS: u32 = 5;
    /// Reps never drop below this when junk volume is capped
    pub const CAPPED_MIN_REPS: u32 = 2;
    /// Intensity nudge applied when junk volume is capped
    pub const CAPPED_INTENSITY_NUDGE: f64 = 0.02;
    /// Relative jump above which isolation lifts add reps instead of weight
    pub const ISOLATION_JUMP_CAP: f64 = 0.15;
    /// Relative jump above which compound lifts add reps instead of weight
    pub const COMPOUND_JUMP_CAP: f64 = 0.20;
    /// Extra reps allowed past the range ceiling while avoiding a large jump
    pub const REP_EXTENSION_LIMIT: u32 = 3;
}

/// Deload week structure
pub mod deload {
    /// A deload lands on every Nth week
    pub const DEFAULT_CADENCE_WEEKS: u32 = 4;
    /// Shortest cadence accepted after recovery adjustments
    pub const MIN_CADENCE_WEEKS: u32 = 2;
    /// Longest configurable cadence
    pub const MAX_CADENCE_WEEKS: u32 = 52;
    /// Deload load as a fraction of the preceding working weight
    pub const DEFAULT_LOAD_FRACTION: f64 = 0.6;
    /// Reps per deload set
    pub const DELOAD_REPS: u32 = 5;
    /// Backoff sets after the deload top set
    pub const DELOAD_BACKOFF_SETS: u32 = 1;
    /// Lower bound of the deload effort range
    pub const DELOAD_RPE_LOW: f64 = 6.0;
    /// Upper bound of the deload effort range
    pub const DELOAD_RPE_HIGH: f64 = 7.0;
}

/// Program duration bounds
pub mod duration {
    /// Shortest generated program
    pub const MIN_WEEKS: u32 = 4;
    /// Longest generated program
    pub const MAX_WEEKS: u32 = 12;
    /// Fallback when a scheme has no base duration
    pub const DEFAULT_WEEKS: u32 = 6;
}

/// Fallback values for missing or degenerate input
pub mod defaults {
    /// Nominal capacity used when no usable one-rep-max is known
    pub const DEFAULT_ONE_RM: f64 = 100.0;
    /// Fewest sessions per week
    pub const MIN_SESSIONS_PER_WEEK: u8 = 2;
    /// Most sessions per week
    pub const MAX_SESSIONS_PER_WEEK: u8 = 4;
    /// Sessions per week when the value is missing
    pub const DEFAULT_SESSIONS_PER_WEEK: u8 = 3;
    /// Base weekly progress as a fraction of the one-rep-max
    pub const WEEKLY_STEP_BASE: f64 = 0.02;
}

/// Environment variable names read by configuration loaders
pub mod env_vars {
    /// Deload cadence override
    pub const DELOAD_CADENCE: &str = "LIFTPLAN_DELOAD_CADENCE";
    /// Deload load fraction override
    pub const DELOAD_FRACTION: &str = "LIFTPLAN_DELOAD_FRACTION";
    /// Weekly progress step override
    pub const WEEKLY_STEP: &str = "LIFTPLAN_WEEKLY_STEP";
    /// One-rep-max formula override
    pub const FORMULA: &str = "LIFTPLAN_FORMULA";
    /// Primary lift rounding step override
    pub const WEIGHT_STEP: &str = "LIFTPLAN_WEIGHT_STEP";
    /// Program store location
    pub const STORE_PATH: &str = "LIFTPLAN_STORE";
}
