// ABOUTME: One-rep-max estimation helpers re-exported from liftplan-core
// ABOUTME: Adds all-formula comparison and the percentage-based rep-max table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

#![allow(clippy::cast_possible_truncation)] // Safe: ladder percents are 0-100
#![allow(clippy::cast_sign_loss)] // Safe: ladder fractions are positive

use std::collections::BTreeMap;

use liftplan_core::constants::intensity::REP_MAX_LADDER;
use liftplan_core::models::RepMaxEntry;
use liftplan_core::sanitize;

pub use liftplan_core::intelligence::algorithms::one_rep_max::*;

/// Estimate a one-rep-max with the given formula
#[must_use]
pub fn estimate_one_rep_max(weight: f64, reps: u32, formula: OneRepMaxFormula) -> f64 {
    formula.estimate(weight, reps)
}

/// Estimates from every formula keyed by formula name; empty for unusable input
#[must_use]
pub fn estimate_all_formula_variants(weight: f64, reps: u32) -> BTreeMap<String, f64> {
    if sanitize::non_negative(weight) == 0.0 || reps == 0 {
        return BTreeMap::new();
    }
    OneRepMaxFormula::ALL
        .iter()
        .map(|formula| (formula.name().to_owned(), formula.estimate(weight, reps)))
        .collect()
}

/// Rep-max ladder for a capacity, heaviest first; empty without capacity
#[must_use]
pub fn build_rep_max_table(one_rep_max: f64) -> Vec<RepMaxEntry> {
    let one_rep_max = sanitize::non_negative(one_rep_max);
    if one_rep_max == 0.0 {
        return Vec::new();
    }
    REP_MAX_LADDER
        .iter()
        .map(|&(reps, fraction)| RepMaxEntry {
            reps,
            percent: (fraction * 100.0).round() as u32,
            weight: (one_rep_max * fraction).round(),
        })
        .collect()
}
