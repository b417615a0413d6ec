// ABOUTME: Percent/RPE mapping core translating rep and effort targets into loads
// ABOUTME: Junk-volume cap and the weight-versus-reps progression switch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

//! # Percent / RPE / Volume Core
//!
//! `working_percent(reps, rpe) = base(reps) − (10 − rpe) × 0.025`, clamped
//! to `[0.50, 0.99]`. The base comes from a nearest-neighbour lookup in
//! [`REPS_TO_PERCENT`]; equidistant rep counts resolve to the smaller key.

use liftplan_core::constants::intensity::{
    DEFAULT_BASE_PERCENT, MAX_RPE, MAX_WORKING_PERCENT, MIN_WORKING_PERCENT, REPS_TO_PERCENT,
    RPE_DROP_STEP,
};
use liftplan_core::constants::volume::{
    CAPPED_INTENSITY_NUDGE, CAPPED_MAX_SETS, CAPPED_MIN_REPS, CAPPED_MIN_SETS,
    COMPOUND_JUMP_CAP, ISOLATION_JUMP_CAP, JUNK_VOLUME_SET_FACTOR, JUNK_VOLUME_SET_THRESHOLD,
};
use liftplan_core::models::MovementType;
use liftplan_core::sanitize;

use super::rounding::round_to_numeric_step;

/// Base fraction of one-rep-max for a rep target
///
/// Zero reps has no table context and yields the 70% default.
#[must_use]
pub fn rep_count_to_base_percent(reps: u32) -> f64 {
    if reps == 0 {
        return DEFAULT_BASE_PERCENT;
    }

    let mut previous = REPS_TO_PERCENT[0];
    for &(key, percent) in &REPS_TO_PERCENT {
        if key == reps {
            return percent;
        }
        if key > reps {
            let previous_diff = reps.abs_diff(previous.0);
            let current_diff = key.abs_diff(reps);
            return if previous_diff <= current_diff {
                previous.1
            } else {
                percent
            };
        }
        previous = (key, percent);
    }
    previous.1
}

/// Working fraction of one-rep-max for a rep target at an effort rating
///
/// Non-finite effort counts as RPE 10. The result is always within `[0.50, 0.99]`.
#[must_use]
pub fn working_percent(target_reps: u32, target_rpe: f64) -> f64 {
    let rpe = if target_rpe.is_finite() {
        target_rpe
    } else {
        MAX_RPE
    };
    let percent = (MAX_RPE - rpe).mul_add(-RPE_DROP_STEP, rep_count_to_base_percent(target_reps));
    sanitize::clamp_finite(percent, MIN_WORKING_PERCENT, MAX_WORKING_PERCENT)
}

/// Rounded working weight for a rep target at an effort rating; zero without capacity
#[must_use]
pub fn working_weight(one_rm: f64, target_reps: u32, target_rpe: f64, step: f64) -> f64 {
    let one_rm = sanitize::non_negative(one_rm);
    if one_rm == 0.0 {
        return 0.0;
    }
    round_to_numeric_step(one_rm * working_percent(target_reps, target_rpe), step)
}

/// Set/rep/intensity prescription after the junk-volume cap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumePrescription {
    /// Working sets
    pub sets: u32,
    /// Reps per set
    pub reps: u32,
    /// Intensity as a fraction of one-rep-max, when known
    pub intensity_percent: Option<f64>,
}

/// Trade excessive set counts for intensity
///
/// Up to six sets pass through rounded (at least one set of one rep). Above
/// six, sets become `clamp(round(sets × 0.7), 3, 5)`, reps drop by one (never
/// below two) and a known intensity rises by two points, capped at 99%.
#[must_use]
pub fn apply_volume_cap(sets: f64, reps: f64, intensity_percent: Option<f64>) -> VolumePrescription {
    let sets = sanitize::non_negative(sets);
    let reps = sanitize::non_negative(reps);
    let intensity_percent = intensity_percent.filter(|percent| percent.is_finite());

    if sets <= f64::from(JUNK_VOLUME_SET_THRESHOLD) {
        return VolumePrescription {
            sets: sanitize::whole_count(sets).max(1),
            reps: sanitize::whole_count(reps).max(1),
            intensity_percent,
        };
    }

    let capped_sets = sanitize::whole_count(sets * JUNK_VOLUME_SET_FACTOR)
        .clamp(CAPPED_MIN_SETS, CAPPED_MAX_SETS);
    let capped_reps = sanitize::whole_count(reps - 1.0).max(CAPPED_MIN_REPS);
    let nudged = intensity_percent
        .filter(|percent| *percent > 0.0)
        .map(|percent| (percent + CAPPED_INTENSITY_NUDGE).min(MAX_WORKING_PERCENT));

    VolumePrescription {
        sets: capped_sets,
        reps: capped_reps,
        intensity_percent: nudged,
    }
}

/// Whether the next weight jump is too large relative to the current load
///
/// Isolation lifts switch to adding reps at a 15% relative jump, compounds at 20%.
/// Degenerate input never triggers the switch.
#[must_use]
pub fn should_switch_to_rep_progression(
    current_weight: f64,
    increment: f64,
    movement: MovementType,
) -> bool {
    if !(current_weight.is_finite() && current_weight > 0.0)
        || !(increment.is_finite() && increment > 0.0)
    {
        return false;
    }
    let cap = match movement {
        MovementType::Isolation => ISOLATION_JUMP_CAP,
        MovementType::Compound => COMPOUND_JUMP_CAP,
    };
    increment / current_weight >= cap
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_percent_lookup() {
        assert_eq!(rep_count_to_base_percent(5), 0.87);
        assert_eq!(rep_count_to_base_percent(2), 1.0);
        assert_eq!(rep_count_to_base_percent(4), 0.93);
        assert_eq!(rep_count_to_base_percent(7), 0.85);
        assert_eq!(rep_count_to_base_percent(9), 0.80);
        assert_eq!(rep_count_to_base_percent(13), 0.70);
        assert_eq!(rep_count_to_base_percent(14), 0.65);
        assert_eq!(rep_count_to_base_percent(30), 0.65);
        assert_eq!(rep_count_to_base_percent(0), 0.70);
    }

    #[test]
    fn test_working_percent_drops_with_effort() {
        let percent = working_percent(5, 8.0);
        assert!((percent - 0.82).abs() < 1e-9);
        assert_eq!(working_percent(1, 10.0), 0.99);
    }

    #[test]
    fn test_working_percent_stays_clamped() {
        for rpe in [-100.0, 0.0, 5.0, 10.0, 25.0, f64::NAN, f64::INFINITY] {
            for reps in [0, 1, 3, 8, 15, 40] {
                let percent = working_percent(reps, rpe);
                assert!((0.5..=0.99).contains(&percent), "{reps} @ {rpe} -> {percent}");
            }
        }
    }

    #[test]
    fn test_working_weight_rounds_to_step() {
        // 117 × 0.82 = 95.94 → 95
        assert_eq!(working_weight(117.0, 5, 8.0, 2.5), 95.0);
        assert_eq!(working_weight(0.0, 5, 8.0, 2.5), 0.0);
        assert_eq!(working_weight(-40.0, 5, 8.0, 2.5), 0.0);
    }

    #[test]
    fn test_volume_cap_scenario() {
        let capped = apply_volume_cap(8.0, 10.0, Some(0.8));
        assert_eq!(capped.sets, 5);
        assert_eq!(capped.reps, 9);
        let percent = capped.intensity_percent.unwrap_or_default();
        assert!((percent - 0.82).abs() < 1e-9);
    }

    #[test]
    fn test_volume_cap_bounds() {
        for sets in 7..=40 {
            let capped = apply_volume_cap(f64::from(sets), 2.0, None);
            assert!((3..=5).contains(&capped.sets));
            assert_eq!(capped.reps, 2);
            assert_eq!(capped.intensity_percent, None);
        }
        let passthrough = apply_volume_cap(0.0, 0.0, None);
        assert_eq!(passthrough.sets, 1);
        assert_eq!(passthrough.reps, 1);
        assert_eq!(apply_volume_cap(6.0, 5.0, Some(0.8)).sets, 6);
    }

    #[test]
    fn test_rep_progression_switch() {
        assert!(should_switch_to_rep_progression(9.0, 4.0, MovementType::Isolation));
        assert!(!should_switch_to_rep_progression(100.0, 2.5, MovementType::Compound));
        assert!(should_switch_to_rep_progression(10.0, 2.0, MovementType::Compound));
        assert!(!should_switch_to_rep_progression(0.0, 2.5, MovementType::Compound));
        assert!(!should_switch_to_rep_progression(f64::NAN, 2.5, MovementType::Isolation));
    }
}
