// ABOUTME: Preference resolvers translating user traits into training parameters
// ABOUTME: Intensity and volume adjustments, day labels, rep ranges, rest, blueprints and deloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

//! # Preference Resolvers
//!
//! Pure functions of [`UserInput`]. They are resolved once per generation and
//! stay constant across the weeks of a program.

use liftplan_core::constants::deload::MIN_CADENCE_WEEKS;
use liftplan_core::constants::intensity::{
    HEAVY_REST_PERCENT, HEAVY_REST_REPS, MAX_RESOLVED_PERCENT, MIN_WORKING_PERCENT,
};
use liftplan_core::models::{ExperienceLevel, Goal, MovementType, RecoveryLevel, UserInput};
use liftplan_core::sanitize;

use crate::config::{DeloadConfig, ProgressionConfig};

/// Day labels for two, three and four sessions per week
const SESSION_DAYS_2: [&str; 2] = ["Mon", "Thu"];
const SESSION_DAYS_3: [&str; 3] = ["Mon", "Wed", "Fri"];
const SESSION_DAYS_4: [&str; 4] = ["Mon", "Tue", "Thu", "Fri"];

/// Labels used when a scheme's template is longer than the resolved day list
pub const FALLBACK_DAY_LABELS: [&str; 4] = ["Mon", "Wed", "Fri", "Sat"];

/// Goal-specific baseline sets and top-set targets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalBlueprint {
    /// Working sets including the top set
    pub base_sets: u32,
    /// Reps on the top set
    pub top_reps: u32,
    /// Effort on the top set
    pub top_rpe: f64,
}

/// Inclusive rep range for double progression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepRange {
    /// Starting reps
    pub start: u32,
    /// Upper bound before the weight increases
    pub end: u32,
}

/// Session context for rest selection
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RestContext {
    /// Reps per working set
    pub reps: u32,
    /// Relative intensity of the working sets, when known
    pub intensity_percent: Option<f64>,
}

#[derive(Debug, Clone, Copy)]
struct RestWindow {
    standard: &'static str,
    heavy: &'static str,
}

/// Experience adjustment to intensity
const fn experience_intensity(level: ExperienceLevel) -> f64 {
    match level {
        ExperienceLevel::Novice => -0.025,
        ExperienceLevel::Intermediate => 0.0,
        ExperienceLevel::Advanced => 0.02,
    }
}

const fn movement_intensity(movement: MovementType) -> f64 {
    match movement {
        MovementType::Compound => 0.0,
        MovementType::Isolation => -0.03,
    }
}

const fn recovery_intensity(level: RecoveryLevel) -> f64 {
    match level {
        RecoveryLevel::Limited => -0.03,
        RecoveryLevel::Balanced => 0.0,
        RecoveryLevel::Gifted => 0.02,
    }
}

/// Adjust a base percent for experience, movement and recovery, clamped to `[0.50, 0.97]`
#[must_use]
pub fn resolve_intensity_percent(base_percent: f64, input: &UserInput) -> f64 {
    let adjusted = sanitize::non_negative(base_percent)
        + experience_intensity(input.experience_level)
        + movement_intensity(input.movement_type)
        + recovery_intensity(input.recovery_level);
    sanitize::clamp_finite(adjusted, MIN_WORKING_PERCENT, MAX_RESOLVED_PERCENT)
}

/// Product of goal, recovery and experience volume multipliers
#[must_use]
pub fn resolve_volume_multiplier(input: &UserInput) -> f64 {
    let goal = match input.goal {
        Goal::Strength => 1.0,
        Goal::Hypertrophy => 1.35,
        Goal::Endurance => 1.15,
    };
    let recovery = match input.recovery_level {
        RecoveryLevel::Limited => 0.85,
        RecoveryLevel::Balanced => 1.0,
        RecoveryLevel::Gifted => 1.1,
    };
    let experience = match input.experience_level {
        ExperienceLevel::Novice => 0.92,
        ExperienceLevel::Intermediate => 1.0,
        ExperienceLevel::Advanced => 1.15,
    };
    goal * recovery * experience
}

/// Relative weekly progress: novices adapt fastest
#[must_use]
pub const fn resolve_progress_rate(input: &UserInput) -> f64 {
    match input.experience_level {
        ExperienceLevel::Novice => 1.1,
        ExperienceLevel::Intermediate => 0.85,
        ExperienceLevel::Advanced => 0.6,
    }
}

/// Weekly capacity growth: base step scaled by the progress rate
#[must_use]
pub fn resolve_weekly_progress_step(input: &UserInput, progression: &ProgressionConfig) -> f64 {
    sanitize::non_negative(progression.weekly_step_base) * resolve_progress_rate(input)
}

/// Ordered day labels for the clamped session frequency
#[must_use]
pub fn resolve_session_days(input: &UserInput) -> &'static [&'static str] {
    match input.clamped_sessions() {
        2 => &SESSION_DAYS_2,
        3 => &SESSION_DAYS_3,
        _ => &SESSION_DAYS_4,
    }
}

/// Day label for a template slot, using the fallback labels past the resolved list
#[must_use]
pub fn day_label(days: &[&'static str], index: usize) -> &'static str {
    days.get(index)
        .or_else(|| FALLBACK_DAY_LABELS.get(index))
        .copied()
        .unwrap_or("Day")
}

/// Double-progression rep range shifted by experience and recovery
#[must_use]
pub fn resolve_double_progression_range(input: &UserInput) -> RepRange {
    let (base_start, base_end): (i32, i32) = match input.goal {
        Goal::Strength => (6, 10),
        Goal::Hypertrophy => (8, 12),
        Goal::Endurance => (10, 15),
    };
    let experience_shift = match input.experience_level {
        ExperienceLevel::Advanced => -1,
        ExperienceLevel::Novice | ExperienceLevel::Intermediate => 0,
    };
    let recovery_shift = match input.recovery_level {
        RecoveryLevel::Limited => 1,
        RecoveryLevel::Balanced => 0,
        RecoveryLevel::Gifted => -1,
    };
    let shift = experience_shift + recovery_shift;

    let start = (base_start + shift).clamp(5, 20);
    let end = (base_end + shift).max(start + 1).clamp(start + 1, 25);
    RepRange {
        start: start.unsigned_abs(),
        end: end.unsigned_abs(),
    }
}

const fn rest_window(goal: Goal, movement: MovementType) -> RestWindow {
    match (goal, movement) {
        (Goal::Strength, MovementType::Compound) => RestWindow {
            standard: "2-3 min",
            heavy: "3-5 min",
        },
        (Goal::Strength, MovementType::Isolation) | (Goal::Hypertrophy, MovementType::Compound) => {
            RestWindow {
                standard: "90-120 s",
                heavy: "2-3 min",
            }
        }
        (Goal::Hypertrophy, MovementType::Isolation) | (Goal::Endurance, MovementType::Compound) => {
            RestWindow {
                standard: "60-90 s",
                heavy: "90-120 s",
            }
        }
        (Goal::Endurance, MovementType::Isolation) => RestWindow {
            standard: "45-60 s",
            heavy: "60-90 s",
        },
    }
}

/// Rest between sets from the goal×movement table, heavier at ≥85% or ≤4 reps
#[must_use]
pub fn resolve_rest_interval(input: &UserInput, context: RestContext) -> String {
    let window = rest_window(input.goal, input.movement_type);
    let heavy_by_load = context
        .intensity_percent
        .is_some_and(|percent| percent.is_finite() && percent >= HEAVY_REST_PERCENT);
    let heavy_by_reps = context.reps > 0 && context.reps <= HEAVY_REST_REPS;
    let rest = if heavy_by_load || heavy_by_reps {
        window.heavy
    } else {
        window.standard
    };
    rest.to_owned()
}

/// Baseline sets and top-set targets for the goal
#[must_use]
pub const fn resolve_goal_blueprint(input: &UserInput) -> GoalBlueprint {
    match input.goal {
        Goal::Strength => GoalBlueprint {
            base_sets: 5,
            top_reps: 3,
            top_rpe: 9.0,
        },
        Goal::Hypertrophy => GoalBlueprint {
            base_sets: 4,
            top_reps: 6,
            top_rpe: 8.5,
        },
        Goal::Endurance => GoalBlueprint {
            base_sets: 3,
            top_reps: 10,
            top_rpe: 8.0,
        },
    }
}

/// Set-count nudge from recovery capacity
#[must_use]
pub const fn resolve_recovery_set_adjustment(input: &UserInput) -> i32 {
    match input.recovery_level {
        RecoveryLevel::Limited => -1,
        RecoveryLevel::Balanced => 0,
        RecoveryLevel::Gifted => 1,
    }
}

/// Deload cadence after the recovery adjustment, never below two weeks
#[must_use]
pub fn resolve_deload_cadence(input: &UserInput, deload: &DeloadConfig) -> u32 {
    let base = deload.cadence_weeks.max(MIN_CADENCE_WEEKS);
    match input.recovery_level {
        RecoveryLevel::Limited => (base - 1).max(MIN_CADENCE_WEEKS),
        RecoveryLevel::Balanced => base,
        RecoveryLevel::Gifted => base.saturating_add(1),
    }
}

/// Whether `week_number` is a deload week
///
/// Every cadence-th week deloads, except the final week of the program.
#[must_use]
pub fn is_deload_week(
    week_number: u32,
    total_weeks: u32,
    input: &UserInput,
    deload: &DeloadConfig,
) -> bool {
    let cadence = resolve_deload_cadence(input, deload);
    week_number > 0 && week_number < total_weeks && week_number % cadence == 0
}

/// Add a signed adjustment to a set count, never dropping below `floor`
#[must_use]
pub fn adjusted_sets(base: u32, adjustment: i32, floor: u32) -> u32 {
    base.saturating_add_signed(adjustment).max(floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> UserInput {
        UserInput::new(100.0, 5)
    }

    #[test]
    fn test_intensity_adjustments_sum_and_clamp() {
        let novice_iso_limited = input()
            .with_experience(ExperienceLevel::Novice)
            .with_movement(MovementType::Isolation)
            .with_recovery(RecoveryLevel::Limited);
        let adjusted = resolve_intensity_percent(0.80, &novice_iso_limited);
        assert!((adjusted - 0.715).abs() < 1e-9);

        let strong = input()
            .with_experience(ExperienceLevel::Advanced)
            .with_recovery(RecoveryLevel::Gifted);
        assert_eq!(resolve_intensity_percent(0.96, &strong), 0.97);
        assert_eq!(resolve_intensity_percent(0.2, &input()), 0.5);
    }

    #[test]
    fn test_volume_multiplier_product() {
        let value = resolve_volume_multiplier(
            &input()
                .with_goal(Goal::Hypertrophy)
                .with_recovery(RecoveryLevel::Limited)
                .with_experience(ExperienceLevel::Novice),
        );
        assert!((value - 1.35 * 0.85 * 0.92).abs() < 1e-9);
        assert_eq!(resolve_volume_multiplier(&input()), 1.0);
    }

    #[test]
    fn test_session_days() {
        assert_eq!(
            resolve_session_days(&input().with_sessions_per_week(2)),
            &["Mon", "Thu"]
        );
        assert_eq!(resolve_session_days(&input().with_sessions_per_week(0)).len(), 2);
        assert_eq!(resolve_session_days(&input().with_sessions_per_week(9)).len(), 4);
        assert_eq!(day_label(&["Mon", "Thu"], 2), "Fri");
        assert_eq!(day_label(&["Mon", "Thu"], 3), "Sat");
    }

    #[test]
    fn test_double_progression_range_shifts() {
        let base = resolve_double_progression_range(&input().with_goal(Goal::Hypertrophy));
        assert_eq!(base, RepRange { start: 8, end: 12 });

        let advanced = resolve_double_progression_range(
            &input()
                .with_goal(Goal::Strength)
                .with_experience(ExperienceLevel::Advanced)
                .with_recovery(RecoveryLevel::Gifted),
        );
        assert_eq!(advanced, RepRange { start: 5, end: 8 });

        let limited = resolve_double_progression_range(
            &input()
                .with_goal(Goal::Endurance)
                .with_recovery(RecoveryLevel::Limited),
        );
        assert_eq!(limited, RepRange { start: 11, end: 16 });
    }

    #[test]
    fn test_rest_interval_escalates() {
        let strength = input();
        let light = RestContext {
            reps: 8,
            intensity_percent: Some(0.7),
        };
        assert_eq!(resolve_rest_interval(&strength, light), "2-3 min");
        let heavy_load = RestContext {
            reps: 8,
            intensity_percent: Some(0.85),
        };
        assert_eq!(resolve_rest_interval(&strength, heavy_load), "3-5 min");
        let low_reps = RestContext {
            reps: 3,
            intensity_percent: None,
        };
        assert_eq!(resolve_rest_interval(&strength, low_reps), "3-5 min");
    }

    #[test]
    fn test_deload_cadence() {
        let deload = DeloadConfig::default();
        let balanced = input();
        assert!(!is_deload_week(3, 8, &balanced, &deload));
        assert!(is_deload_week(4, 8, &balanced, &deload));
        assert!(!is_deload_week(8, 8, &balanced, &deload));

        let limited = input().with_recovery(RecoveryLevel::Limited);
        assert!(is_deload_week(3, 8, &limited, &deload));
        assert!(is_deload_week(6, 8, &limited, &deload));

        let gifted = input().with_recovery(RecoveryLevel::Gifted);
        assert!(!is_deload_week(4, 8, &gifted, &deload));
        assert!(is_deload_week(5, 8, &gifted, &deload));
    }

    #[test]
    fn test_gifted_cadence_saturates_at_the_top() {
        let deload = DeloadConfig {
            cadence_weeks: u32::MAX,
            ..DeloadConfig::default()
        };
        let gifted = input().with_recovery(RecoveryLevel::Gifted);
        assert_eq!(resolve_deload_cadence(&gifted, &deload), u32::MAX);
        assert!(!is_deload_week(6, 12, &gifted, &deload));
    }

    #[test]
    fn test_weekly_step_scales_with_experience() {
        let progression = ProgressionConfig::default();
        let novice = resolve_weekly_progress_step(
            &input().with_experience(ExperienceLevel::Novice),
            &progression,
        );
        let advanced = resolve_weekly_progress_step(
            &input().with_experience(ExperienceLevel::Advanced),
            &progression,
        );
        assert!(novice > advanced);
        assert!((novice - 0.022).abs() < 1e-9);
    }

    #[test]
    fn test_adjusted_sets_floor() {
        assert_eq!(adjusted_sets(5, -1, 4), 4);
        assert_eq!(adjusted_sets(3, -1, 4), 4);
        assert_eq!(adjusted_sets(5, 1, 4), 6);
    }
}
