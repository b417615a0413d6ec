// ABOUTME: Conjugate scheme with max-effort, dynamic-effort and repetition days
// ABOUTME: Four sessions a week; capacity is nudged by recovery before loads are derived
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

use liftplan_core::models::{ProgramWeek, RpeTarget, SchemeId};

use super::builder::{work_week, SchemeContext, SchemeGenerator, SessionDraft, SetBlock};
use crate::algorithms::apply_volume_cap;

/// Max effort, dynamic effort, repetition and a second dynamic day
pub const SESSIONS_PER_WEEK: usize = 4;

/// Capacity nudge per point of recovery adjustment
const RECOVERY_CAPACITY_NUDGE: f64 = 0.02;

const MAX_EFFORT_REPS: u32 = 2;
const MAX_EFFORT_RPE: f64 = 9.5;
const MAX_EFFORT_BACKOFF_RPE: f64 = 9.0;
const MAX_EFFORT_BACKOFF_SETS: u32 = 2;
const BACKOFF_FRACTION: f64 = 0.9;

const DYNAMIC_PERCENT: f64 = 0.6;
const DYNAMIC_REPS: u32 = 2;
const DYNAMIC_SETS: u32 = 8;

const REPETITION_REPS: u32 = 10;
const REPETITION_RPE: f64 = 8.0;
const REPETITION_SETS: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayRole {
    MaxEffort,
    DynamicEffort,
    Repetition,
}

const WEEK_TEMPLATE: [DayRole; SESSIONS_PER_WEEK] = [
    DayRole::MaxEffort,
    DayRole::DynamicEffort,
    DayRole::Repetition,
    DayRole::DynamicEffort,
];

/// Conjugate generator
#[derive(Debug, Default, Clone, Copy)]
pub struct Conjugate;

impl Conjugate {
    fn max_effort(ctx: &SchemeContext<'_>, capacity: f64) -> SessionDraft {
        let top_weight = ctx.table_working_weight(capacity, MAX_EFFORT_REPS, MAX_EFFORT_RPE);
        let backoff_weight = ctx.round(top_weight * BACKOFF_FRACTION);
        SessionDraft::new(
            SetBlock::new(top_weight, MAX_EFFORT_REPS, 1, RpeTarget::Single(MAX_EFFORT_RPE)),
            vec![SetBlock::new(
                backoff_weight,
                MAX_EFFORT_REPS,
                MAX_EFFORT_BACKOFF_SETS,
                RpeTarget::Single(MAX_EFFORT_BACKOFF_RPE),
            )],
            "Max effort: one heavy double, then two doubles at 90%.",
        )
    }

    fn dynamic_effort(ctx: &SchemeContext<'_>, capacity: f64) -> SessionDraft {
        let weight = ctx.round(capacity * DYNAMIC_PERCENT);
        let intensity = if capacity > 0.0 {
            weight / capacity
        } else {
            DYNAMIC_PERCENT
        };
        let capped = apply_volume_cap(
            f64::from(DYNAMIC_SETS),
            f64::from(DYNAMIC_REPS),
            Some(intensity),
        );
        SessionDraft::straight_sets(
            SetBlock::new(weight, capped.reps, capped.sets, RpeTarget::range(6.0, 7.0)),
            "Dynamic effort: explosive intent on every rep, short rests.",
        )
        .with_intensity(intensity)
    }

    fn repetition(ctx: &SchemeContext<'_>, capacity: f64) -> SessionDraft {
        let weight = ctx.table_working_weight(capacity, REPETITION_REPS, REPETITION_RPE);
        let capped = apply_volume_cap(
            f64::from(REPETITION_SETS),
            f64::from(REPETITION_REPS),
            (capacity > 0.0).then(|| weight / capacity),
        );
        SessionDraft::straight_sets(
            SetBlock::new(weight, capped.reps, capped.sets, RpeTarget::Single(REPETITION_RPE)),
            "Repetition day: build volume and keep an eye on fatigue.",
        )
    }
}

impl SchemeGenerator for Conjugate {
    fn scheme(&self) -> SchemeId {
        SchemeId::Conjugate
    }

    fn sessions_per_week(&self, _ctx: &SchemeContext<'_>) -> usize {
        SESSIONS_PER_WEEK
    }

    fn deload_note(&self) -> &'static str {
        "Conjugate deload: technique and speed only."
    }

    fn work_week(&mut self, ctx: &SchemeContext<'_>, week_number: u32) -> ProgramWeek {
        let nudge = f64::from(ctx.recovery_adjustment).mul_add(RECOVERY_CAPACITY_NUDGE, 1.0);
        let capacity = ctx.projected_one_rm(week_number) * nudge;

        let sessions = WEEK_TEMPLATE
            .iter()
            .enumerate()
            .map(|(index, role)| {
                let draft = match role {
                    DayRole::MaxEffort => Self::max_effort(ctx, capacity),
                    DayRole::DynamicEffort => Self::dynamic_effort(ctx, capacity),
                    DayRole::Repetition => Self::repetition(ctx, capacity),
                };
                ctx.build_session(week_number, index, capacity, draft)
            })
            .collect();
        work_week(week_number, sessions)
    }
}

#[cfg(test)]
mod tests {
    use liftplan_core::models::UserInput;

    use super::*;
    use crate::config::EngineConfig;

    #[test]
    fn test_four_roles_with_capped_dynamic_volume() {
        let input = UserInput::new(100.0, 1)
            .with_scheme(SchemeId::Conjugate)
            .with_sessions_per_week(3);
        let config = EngineConfig::default();
        let ctx = SchemeContext::new(&input, 120.0, &config);
        let week = Conjugate.work_week(&ctx, 1);

        assert_eq!(week.sessions.len(), 4);
        assert_eq!(week.sessions[3].day_label, "Sat");

        // 2 reps @ 9.5 → 0.9875 × 120 = 118.5 → 117.5
        assert_eq!(week.sessions[0].top_set, "117.5×2 @ RPE 9.5");
        assert_eq!(week.sessions[0].backoff_sets.len(), 2);

        // 8 sets of 2 at 60% cap to 5 sets
        let dynamic = &week.sessions[1];
        assert_eq!(dynamic.top_set, "72.5×2 @ RPE 6-7");
        assert_eq!(dynamic.backoff_sets.len(), 4);
        assert!(dynamic.coaching_notes[0].contains("explosive"));

        // 10 reps @ 8 → 0.70 × 120 = 84 → 85
        assert_eq!(week.sessions[2].top_set, "85×10 @ RPE 8");
    }
}
