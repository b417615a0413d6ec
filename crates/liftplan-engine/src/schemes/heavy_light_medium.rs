// ABOUTME: Heavy-light-medium: three weekly days at 100%, 90% and 80% of the heavy-day load
// ABOUTME: Each day has its own rep target, set count and effort, all passed through the volume cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

use liftplan_core::models::{ProgramWeek, RpeTarget, SchemeId};

use super::builder::{work_week, SchemeContext, SchemeGenerator, SessionDraft, SetBlock};
use crate::algorithms::apply_volume_cap;

/// Heavy, light and medium days
pub const SESSIONS_PER_WEEK: usize = 3;

#[derive(Debug, Clone, Copy)]
struct DayRole {
    fraction: f64,
    reps: u32,
    rpe: f64,
    /// Offset from the blueprint's base sets
    set_offset: i32,
    min_sets: u32,
    note: &'static str,
}

/// Training-day order: heavy, medium, light
const DAY_ROLES: [DayRole; SESSIONS_PER_WEEK] = [
    DayRole {
        fraction: 1.0,
        reps: 5,
        rpe: 9.0,
        set_offset: 0,
        min_sets: 3,
        note: "Heavy day: low reps, the hardest work of the week.",
    },
    DayRole {
        fraction: 0.9,
        reps: 6,
        rpe: 8.0,
        set_offset: -1,
        min_sets: 3,
        note: "Medium day: steady technique at a moderate load.",
    },
    DayRole {
        fraction: 0.8,
        reps: 10,
        rpe: 7.0,
        set_offset: -1,
        min_sets: 2,
        note: "Light day: volume through reps with minimal stress.",
    },
];

/// Heavy-light-medium generator
#[derive(Debug, Default, Clone, Copy)]
pub struct HeavyLightMedium;

impl SchemeGenerator for HeavyLightMedium {
    fn scheme(&self) -> SchemeId {
        SchemeId::HeavyLightMedium
    }

    fn sessions_per_week(&self, _ctx: &SchemeContext<'_>) -> usize {
        SESSIONS_PER_WEEK
    }

    fn work_week(&mut self, ctx: &SchemeContext<'_>, week_number: u32) -> ProgramWeek {
        let projected = ctx.projected_one_rm(week_number);
        let heavy = DAY_ROLES[0];
        let heavy_weight = ctx.table_working_weight(projected, heavy.reps, heavy.rpe);

        let sessions = DAY_ROLES
            .iter()
            .enumerate()
            .map(|(index, role)| {
                let weight = ctx.round(heavy_weight * role.fraction);
                let sets = ctx
                    .blueprint
                    .base_sets
                    .saturating_add_signed(role.set_offset + ctx.recovery_adjustment)
                    .max(role.min_sets);
                let capped = apply_volume_cap(
                    f64::from(sets),
                    f64::from(role.reps),
                    (projected > 0.0).then(|| weight / projected),
                );
                let block = SetBlock::new(weight, capped.reps, capped.sets, RpeTarget::Single(role.rpe));
                ctx.build_session(
                    week_number,
                    index,
                    projected,
                    SessionDraft::straight_sets(block, role.note),
                )
            })
            .collect();
        work_week(week_number, sessions)
    }
}
