// ABOUTME: Session metrics engine deriving training stress from a session's sets
// ABOUTME: Tonnage, intensity, tension index, force-velocity, stress score, recovery and muscle split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

//! # Session Metrics
//!
//! Heuristic load metrics for a session made of one top set and `n` identical
//! backoff sets:
//!
//! - **Tonnage**: `top_w × top_r + backoff_w × backoff_r × n`
//! - **Average intensity**: mean set weight over capacity, capped at 100%
//! - **Mechanical tension**: `Σ w × r × (pct/100)^1.6 × (rpe/10)^2`
//! - **Force-velocity proxy**: `top_w × max(0.2, 1 − relative_load × 0.7)`
//! - **Normalized load volume**: `tonnage × rpe/10`
//! - **Stress score**: `0.55·I + 0.20·min(reps/28,1) + 0.15·min(tonnage/20000,1) + 0.10·min(rpe/10,1)`
//!
//! These are simplified heuristics, not validated sports-science models.
#![allow(clippy::cast_possible_truncation)] // Safe: hours and percents are bounded and non-negative
#![allow(clippy::cast_sign_loss)] // Safe: values are sanitized before casting

use liftplan_core::models::{
    Goal, IntensitySummary, MovementType, MuscleGroupSplit, StressLabel,
};
use liftplan_core::sanitize;

/// Effort assumed when none is usable
const DEFAULT_RPE: f64 = 7.5;
/// Exponent rewarding relative load in the tension index
const TENSION_LOAD_EXPONENT: f64 = 1.6;
/// Reps at which the rep component of stress saturates
const STRESS_REP_SATURATION: f64 = 28.0;
/// Tonnage at which the tonnage component of stress saturates
const STRESS_TONNAGE_SATURATION: f64 = 20_000.0;

/// Sets of one session as seen by the metrics engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionLoad {
    /// Top set load (kg)
    pub top_weight: f64,
    /// Top set reps
    pub top_reps: u32,
    /// Backoff set load (kg)
    pub backoff_weight: f64,
    /// Reps per backoff set
    pub backoff_reps: u32,
    /// Number of backoff sets
    pub backoff_sets: u32,
    /// Relative intensity when no capacity is known
    pub intensity_percent: Option<f64>,
    /// Capacity the session was planned from
    pub one_rm: Option<f64>,
    /// Mean effort rating
    pub rpe: f64,
    /// Movement type of the lift
    pub movement: MovementType,
    /// Training goal
    pub goal: Goal,
}

/// Base share of tonnage per group: legs, back, chest, shoulders, arms, core
const fn base_distribution(movement: MovementType) -> [f64; 6] {
    match movement {
        MovementType::Compound => [0.40, 0.25, 0.12, 0.08, 0.05, 0.10],
        MovementType::Isolation => [0.15, 0.15, 0.15, 0.20, 0.30, 0.05],
    }
}

const fn goal_bias(goal: Goal) -> [f64; 6] {
    match goal {
        Goal::Strength => [1.1, 1.1, 1.0, 1.0, 1.0, 1.1],
        Goal::Hypertrophy => [1.0, 1.0, 1.1, 1.1, 1.2, 1.0],
        Goal::Endurance => [1.05, 1.0, 1.0, 1.0, 1.0, 1.2],
    }
}

/// Distribute tonnage across muscle groups for a movement type and goal
#[must_use]
pub fn muscle_group_split(tonnage: f64, movement: MovementType, goal: Goal) -> MuscleGroupSplit {
    let base = base_distribution(movement);
    let bias = goal_bias(goal);
    let mut weights = [0.0; 6];
    for (slot, (share, factor)) in weights.iter_mut().zip(base.iter().zip(bias.iter())) {
        *slot = share * factor;
    }
    let total: f64 = weights.iter().sum();
    let tonnage = sanitize::non_negative(tonnage);
    let group = |index: usize| (weights[index] / total * tonnage).round();

    MuscleGroupSplit {
        legs: group(0),
        back: group(1),
        chest: group(2),
        shoulders: group(3),
        arms: group(4),
        core: group(5),
    }
}

fn set_tension(weight: f64, reps: f64, percent: f64, rpe: f64) -> f64 {
    weight * reps * (percent / 100.0).powf(TENSION_LOAD_EXPONENT) * (rpe / 10.0).powi(2)
}

/// Recovery hours and days for a stress score
#[must_use]
pub fn recovery_window(stress_score: f64, movement: MovementType) -> (u32, f64) {
    let (base, scale) = match movement {
        MovementType::Isolation => (18.0, 14.0),
        MovementType::Compound => (26.0, 22.0),
    };
    let hours = sanitize::non_negative(stress_score).mul_add(scale, base).round();
    let days = ((hours / 24.0 * 10.0).round() / 10.0).max(1.0);
    (hours as u32, days)
}

/// Derive the intensity summary for a session
///
/// Returns `None` when the top set has no load or no reps.
#[must_use]
pub fn build_intensity_summary(load: &SessionLoad) -> Option<IntensitySummary> {
    let top_weight = sanitize::non_negative(load.top_weight);
    let top_reps = f64::from(load.top_reps);
    if top_weight == 0.0 || top_reps == 0.0 {
        return None;
    }

    let backoff_weight = sanitize::non_negative(load.backoff_weight);
    let backoff_reps = f64::from(load.backoff_reps);
    let backoff_sets = f64::from(load.backoff_sets);
    let has_backoff = backoff_weight > 0.0 && backoff_reps > 0.0 && backoff_sets > 0.0;

    let backoff_volume = if has_backoff {
        backoff_weight * backoff_reps * backoff_sets
    } else {
        0.0
    };
    let tonnage = top_weight.mul_add(top_reps, backoff_volume);

    let one_rm = load
        .one_rm
        .map(sanitize::non_negative)
        .filter(|one_rm| *one_rm > 0.0);
    let average_weight = if has_backoff {
        backoff_weight.mul_add(backoff_sets, top_weight) / (1.0 + backoff_sets)
    } else {
        top_weight
    };
    let normalized_intensity = one_rm.map_or_else(
        || sanitize::non_negative(load.intensity_percent.unwrap_or(0.0)).min(1.0),
        |one_rm| (average_weight / one_rm).min(1.0),
    );
    let relative_load = one_rm.map_or(normalized_intensity, |one_rm| (top_weight / one_rm).min(1.0));

    let rpe = sanitize::positive_or(load.rpe, DEFAULT_RPE);
    let percent_of = |weight: f64| {
        one_rm.map_or(normalized_intensity * 100.0, |one_rm| {
            (weight / one_rm).min(1.0) * 100.0
        })
    };
    let mut tension = set_tension(top_weight, top_reps, percent_of(top_weight), rpe);
    if has_backoff {
        tension += backoff_sets
            * set_tension(backoff_weight, backoff_reps, percent_of(backoff_weight), rpe);
    }

    let total_reps = if has_backoff {
        backoff_reps.mul_add(backoff_sets, top_reps)
    } else {
        top_reps
    };
    let velocity_factor = relative_load.mul_add(-0.7, 1.0).max(0.2);

    let raw_stress = 0.10f64.mul_add(
        (rpe / 10.0).min(1.0),
        0.15f64.mul_add(
            (tonnage / STRESS_TONNAGE_SATURATION).min(1.0),
            0.55f64.mul_add(
                normalized_intensity,
                0.20 * (total_reps / STRESS_REP_SATURATION).min(1.0),
            ),
        ),
    );
    let stress_score = sanitize::clamp_finite(raw_stress, 0.0, 1.0);
    let (recovery_hours, recovery_days) = recovery_window(stress_score, load.movement);

    Some(IntensitySummary {
        tonnage: tonnage.round(),
        avg_intensity: (normalized_intensity * 100.0).round() as u32,
        mechanical_tension: tension.round(),
        force_velocity: (top_weight * velocity_factor).round(),
        normalized_load_volume: (tonnage * rpe / 10.0).round(),
        stress_score: (stress_score * 100.0).round() / 100.0,
        stress_label: StressLabel::from_score(stress_score),
        recovery_hours,
        recovery_days,
        muscle_split: muscle_group_split(tonnage, load.movement, load.goal),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SessionLoad {
        SessionLoad {
            top_weight: 100.0,
            top_reps: 5,
            backoff_weight: 90.0,
            backoff_reps: 5,
            backoff_sets: 3,
            intensity_percent: None,
            one_rm: Some(120.0),
            rpe: 8.0,
            movement: MovementType::Compound,
            goal: Goal::Strength,
        }
    }

    #[test]
    fn test_zero_top_weight_has_no_summary() {
        let load = SessionLoad {
            top_weight: 0.0,
            ..sample()
        };
        assert!(build_intensity_summary(&load).is_none());
        let load = SessionLoad {
            top_reps: 0,
            ..sample()
        };
        assert!(build_intensity_summary(&load).is_none());
        let load = SessionLoad {
            top_weight: f64::NAN,
            ..sample()
        };
        assert!(build_intensity_summary(&load).is_none());
    }

    #[test]
    fn test_reference_session() {
        let summary = build_intensity_summary(&sample()).unwrap_or_else(|| unreachable!());
        assert_eq!(summary.tonnage, 1850.0);
        assert_eq!(summary.avg_intensity, 77);
        assert_eq!(summary.force_velocity, 42.0);
        assert_eq!(summary.normalized_load_volume, 1480.0);
        assert_eq!(summary.stress_label, StressLabel::Moderate);
        assert_eq!(summary.stress_score, 0.66);
        assert_eq!(summary.recovery_hours, 41);
        assert_eq!(summary.recovery_days, 1.7);
        assert!((summary.mechanical_tension - 784.0).abs() <= 1.0);
        assert!((summary.muscle_split.total() - 1850.0).abs() <= 3.0);
    }

    #[test]
    fn test_percent_used_without_capacity() {
        let load = SessionLoad {
            one_rm: None,
            intensity_percent: Some(0.8),
            ..sample()
        };
        let summary = build_intensity_summary(&load).unwrap_or_else(|| unreachable!());
        assert_eq!(summary.avg_intensity, 80);
        // 100 × (1 − 0.8 × 0.7) = 44
        assert_eq!(summary.force_velocity, 44.0);
    }

    #[test]
    fn test_stress_saturates_at_one() {
        let load = SessionLoad {
            top_weight: 400.0,
            top_reps: 10,
            backoff_weight: 400.0,
            backoff_reps: 10,
            backoff_sets: 10,
            one_rm: Some(300.0),
            rpe: 12.0,
            ..sample()
        };
        let summary = build_intensity_summary(&load).unwrap_or_else(|| unreachable!());
        assert_eq!(summary.stress_score, 1.0);
        assert_eq!(summary.stress_label, StressLabel::High);
        assert_eq!(summary.avg_intensity, 100);
    }

    #[test]
    fn test_recovery_window_floor_and_isolation() {
        assert_eq!(recovery_window(0.0, MovementType::Isolation), (18, 1.0));
        assert_eq!(recovery_window(1.0, MovementType::Compound), (48, 2.0));
    }

    #[test]
    fn test_split_biases_toward_goal() {
        let strength = muscle_group_split(1000.0, MovementType::Isolation, Goal::Strength);
        let hypertrophy = muscle_group_split(1000.0, MovementType::Isolation, Goal::Hypertrophy);
        assert!(hypertrophy.arms > strength.arms);
        assert!(strength.legs > hypertrophy.legs);
    }
}
