// ABOUTME: Daily undulating periodization: strength, hypertrophy and power sessions every week
// ABOUTME: The stimulus varies between sessions of the same week rather than between weeks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

use liftplan_core::models::{ProgramWeek, RpeTarget, SchemeId};

use super::builder::{work_week, SchemeContext, SchemeGenerator, SessionDraft, SetBlock};
use crate::algorithms::apply_volume_cap;

/// Strength, hypertrophy and power sessions
pub const SESSIONS_PER_WEEK: usize = 3;

const MIN_SETS: u32 = 3;

#[derive(Debug, Clone, Copy)]
struct Focus {
    name: &'static str,
    reps: u32,
    rpe: f64,
    set_offset: i32,
}

const FOCUSES: [Focus; SESSIONS_PER_WEEK] = [
    Focus {
        name: "Strength",
        reps: 5,
        rpe: 8.5,
        set_offset: 0,
    },
    Focus {
        name: "Hypertrophy",
        reps: 8,
        rpe: 8.0,
        set_offset: 1,
    },
    Focus {
        name: "Power",
        reps: 3,
        rpe: 7.5,
        set_offset: -1,
    },
];

/// DUP generator
#[derive(Debug, Default, Clone, Copy)]
pub struct DailyUndulating;

impl SchemeGenerator for DailyUndulating {
    fn scheme(&self) -> SchemeId {
        SchemeId::Dup
    }

    fn sessions_per_week(&self, _ctx: &SchemeContext<'_>) -> usize {
        SESSIONS_PER_WEEK
    }

    fn work_week(&mut self, ctx: &SchemeContext<'_>, week_number: u32) -> ProgramWeek {
        let projected = ctx.projected_one_rm(week_number);
        let base_sets = ctx
            .blueprint
            .base_sets
            .saturating_add_signed(ctx.recovery_adjustment)
            .max(MIN_SETS);

        let sessions = FOCUSES
            .iter()
            .enumerate()
            .map(|(index, focus)| {
                let weight = ctx.table_working_weight(projected, focus.reps, focus.rpe);
                let sets = base_sets.saturating_add_signed(focus.set_offset).max(MIN_SETS);
                let capped = apply_volume_cap(
                    f64::from(sets),
                    f64::from(focus.reps),
                    (projected > 0.0).then(|| weight / projected),
                );
                let block = SetBlock::new(weight, capped.reps, capped.sets, RpeTarget::Single(focus.rpe));
                let note = format!("{} focus: keep technique and bar speed consistent.", focus.name);
                ctx.build_session(
                    week_number,
                    index,
                    projected,
                    SessionDraft::straight_sets(block, note),
                )
            })
            .collect();
        work_week(week_number, sessions)
    }
}
