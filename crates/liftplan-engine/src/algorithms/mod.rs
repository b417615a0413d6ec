// ABOUTME: Shared numeric algorithms used by every scheme generator
// ABOUTME: Rounding, one-rep-max estimation and the percent/RPE/volume core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

//! Pluggable helper algorithms for the periodization engine.
//!
//! - `rounding`: equipment ladder and numeric plate steps
//! - `one_rep_max`: capacity estimation and rep-max tables
//! - `progression`: rep/effort to percent mapping and volume caps

/// One-rep-max estimation and rep-max tables
pub mod one_rep_max;
/// Percent/RPE mapping, junk-volume cap, progression switch
pub mod progression;
/// Load rounding
pub mod rounding;

pub use one_rep_max::{
    build_rep_max_table, estimate_all_formula_variants, estimate_one_rep_max, OneRepMaxFormula,
};
pub use progression::{
    apply_volume_cap, rep_count_to_base_percent, should_switch_to_rep_progression,
    working_percent, working_weight, VolumePrescription,
};
pub use rounding::{
    lower_equipment_step, next_equipment_step, round_to_equipment_step, round_to_numeric_step,
    LoadIncrement,
};
