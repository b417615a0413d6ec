// ABOUTME: Program length resolver combining per-scheme base weeks and goal adjustment
// ABOUTME: Honors explicit week overrides and keeps every program within 4-12 weeks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

use liftplan_core::constants::duration::{MAX_WEEKS, MIN_WEEKS};
use liftplan_core::models::{Goal, SchemeId, UserInput};

/// Base program length for a scheme before goal adjustment
#[must_use]
pub const fn base_weeks(scheme: SchemeId) -> u32 {
    match scheme {
        SchemeId::TexasMethod => 8,
        SchemeId::TopSetBackoff
        | SchemeId::Linear5x5
        | SchemeId::DoubleProgression
        | SchemeId::HeavyLightMedium
        | SchemeId::Dup
        | SchemeId::Sheiko
        | SchemeId::Conjugate => 6,
    }
}

const fn goal_adjustment(goal: Goal) -> i32 {
    match goal {
        Goal::Strength => 1,
        Goal::Hypertrophy => 0,
        Goal::Endurance => -1,
    }
}

/// Suggested duration for a scheme and goal, clamped to 4-12 weeks
#[must_use]
pub fn preview_duration(scheme: SchemeId, goal: Goal) -> u32 {
    let weeks = base_weeks(scheme).saturating_add_signed(goal_adjustment(goal));
    weeks.clamp(MIN_WEEKS, MAX_WEEKS)
}

/// Total weeks for a request: an explicit override wins, otherwise the preview
#[must_use]
pub fn resolve_program_duration(input: &UserInput) -> u32 {
    input
        .weeks
        .filter(|weeks| *weeks > 0)
        .map_or_else(
            || preview_duration(input.scheme, input.goal),
            |weeks| weeks.clamp(MIN_WEEKS, MAX_WEEKS),
        )
}

/// `"1 week"` or `"N weeks"`
#[must_use]
pub fn weeks_label(weeks: u32) -> String {
    if weeks == 1 {
        "1 week".to_owned()
    } else {
        format!("{weeks} weeks")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_by_goal() {
        assert_eq!(preview_duration(SchemeId::TexasMethod, Goal::Strength), 9);
        assert_eq!(preview_duration(SchemeId::Dup, Goal::Hypertrophy), 6);
        assert_eq!(preview_duration(SchemeId::Dup, Goal::Endurance), 5);
    }

    #[test]
    fn test_override_is_clamped() {
        let input = UserInput::new(100.0, 5).with_weeks(Some(30));
        assert_eq!(resolve_program_duration(&input), 12);
        let input = UserInput::new(100.0, 5).with_weeks(Some(2));
        assert_eq!(resolve_program_duration(&input), 4);
        let input = UserInput::new(100.0, 5).with_weeks(Some(0));
        assert_eq!(resolve_program_duration(&input), 7);
    }

    #[test]
    fn test_weeks_label() {
        assert_eq!(weeks_label(1), "1 week");
        assert_eq!(weeks_label(6), "6 weeks");
    }
}
