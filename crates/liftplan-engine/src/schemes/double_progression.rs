// ABOUTME: Double progression: reps climb at a fixed load, then the load steps up and reps reset
// ABOUTME: Large relative jumps are avoided by extending the rep range instead of adding weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

use liftplan_core::constants::volume::REP_EXTENSION_LIMIT;
use liftplan_core::models::{ProgramWeek, RpeTarget, SchemeId};
use tracing::debug;

use super::builder::{work_week, SchemeContext, SchemeGenerator, SessionDraft, SetBlock};
use crate::adjustments::{
    adjusted_sets, resolve_double_progression_range, resolve_intensity_percent, RepRange,
};
use crate::algorithms::{
    apply_volume_cap, should_switch_to_rep_progression, working_percent, LoadIncrement,
};

/// Effort target for every working set
const TARGET_RPE: f64 = 8.0;
/// Working sets before recovery and volume adjustments
const BASE_SETS: u32 = 3;

/// Double progression generator; carries the load and rep target between weeks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleProgression {
    range: RepRange,
    increment: LoadIncrement,
    weight: f64,
    reps: u32,
}

/// What happens after a week at the current load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NextStep {
    AddRep,
    ExtendRange,
    AddWeight,
}

impl DoubleProgression {
    /// Starting state: range start at the load for that rep target
    #[must_use]
    pub fn new(ctx: &SchemeContext<'_>) -> Self {
        let range = resolve_double_progression_range(ctx.input);
        let increment = ctx.increment;
        let percent =
            resolve_intensity_percent(working_percent(range.start, TARGET_RPE), ctx.input);
        Self {
            range,
            increment,
            weight: increment.round(ctx.capacity * percent),
            reps: range.start,
        }
    }

    fn next_step(&self, ctx: &SchemeContext<'_>) -> NextStep {
        if self.reps < self.range.end {
            return NextStep::AddRep;
        }
        let jump = self.increment.increment_from(self.weight);
        let too_large = should_switch_to_rep_progression(self.weight, jump, ctx.input.movement_type);
        if too_large && self.reps < self.range.end + REP_EXTENSION_LIMIT {
            NextStep::ExtendRange
        } else {
            NextStep::AddWeight
        }
    }

    fn advance(&mut self, step: NextStep) {
        match step {
            NextStep::AddRep | NextStep::ExtendRange => self.reps += 1,
            NextStep::AddWeight => {
                self.weight = self.increment.next(self.weight);
                self.reps = self.range.start;
            }
        }
    }
}

impl SchemeGenerator for DoubleProgression {
    fn scheme(&self) -> SchemeId {
        SchemeId::DoubleProgression
    }

    fn sessions_per_week(&self, ctx: &SchemeContext<'_>) -> usize {
        ctx.days.len()
    }

    fn work_week(&mut self, ctx: &SchemeContext<'_>, week_number: u32) -> ProgramWeek {
        let rpe = RpeTarget::Single(TARGET_RPE);
        let sets = adjusted_sets(BASE_SETS, ctx.recovery_adjustment, 2);
        let capped = apply_volume_cap(
            f64::from(sets) * ctx.volume_multiplier,
            f64::from(self.reps),
            None,
        );
        let block = SetBlock::new(self.weight, capped.reps, capped.sets, rpe);

        let step = self.next_step(ctx);
        let note = match step {
            NextStep::AddRep => format!(
                "Same load all sets; aim for {} reps next week.",
                self.reps + 1
            ),
            NextStep::ExtendRange => {
                "Next load jump is too large: keep the weight and add a rep instead.".to_owned()
            }
            NextStep::AddWeight => format!(
                "Top of the range reached: add weight next week and restart at {} reps.",
                self.range.start
            ),
        };
        debug!(
            week_number,
            weight = self.weight,
            reps = self.reps,
            ?step,
            "Double progression week"
        );

        let projected = ctx.projected_one_rm(week_number);
        let sessions = (0..self.sessions_per_week(ctx))
            .map(|index| {
                ctx.build_session(
                    week_number,
                    index,
                    projected,
                    SessionDraft::straight_sets(block, note.clone()),
                )
            })
            .collect();

        self.advance(step);
        work_week(week_number, sessions)
    }
}
