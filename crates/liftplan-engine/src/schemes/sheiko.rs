// ABOUTME: Sheiko-style waves: every session blends several sub-maximal load blocks
// ABOUTME: The heaviest block supplies the top set and everything else becomes backoff work
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

use liftplan_core::models::{ProgramWeek, RpeTarget, SchemeId};

use super::builder::{work_week, SchemeContext, SchemeGenerator, SessionDraft, SetBlock};

/// Three wave sessions per week
pub const SESSIONS_PER_WEEK: usize = 3;

#[derive(Debug, Clone, Copy)]
struct LoadBlock {
    percent: f64,
    sets: u32,
    reps: u32,
    rpe: f64,
}

const fn block(percent: f64, sets: u32, reps: u32, rpe: f64) -> LoadBlock {
    LoadBlock {
        percent,
        sets,
        reps,
        rpe,
    }
}

const DAY_TEMPLATES: [[LoadBlock; 2]; SESSIONS_PER_WEEK] = [
    [block(0.70, 3, 5, 7.5), block(0.75, 2, 4, 8.0)],
    [block(0.80, 2, 3, 8.5), block(0.70, 3, 5, 7.5)],
    [block(0.77, 2, 3, 8.5), block(0.72, 3, 4, 8.0)],
];

const NOTE: &str = "Wave session: clean technique and an even tempo on every set.";

/// Sheiko-style generator
#[derive(Debug, Default, Clone, Copy)]
pub struct SheikoStyle;

impl SheikoStyle {
    /// Promote the highest-percentage block to the top set; its remaining sets lead the backoffs
    fn session_draft(ctx: &SchemeContext<'_>, projected: f64, blocks: &[LoadBlock]) -> Option<SessionDraft> {
        let top_index = blocks
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.percent.total_cmp(&b.percent))
            .map(|(index, _)| index)?;
        let weighted = |load: &LoadBlock| {
            SetBlock::new(
                ctx.round(projected * load.percent),
                load.reps,
                load.sets,
                RpeTarget::Single(load.rpe),
            )
        };

        let top = weighted(&blocks[top_index]);
        let mut backoff = Vec::with_capacity(blocks.len());
        if top.sets > 1 {
            backoff.push(SetBlock {
                sets: top.sets - 1,
                ..top
            });
        }
        backoff.extend(
            blocks
                .iter()
                .enumerate()
                .filter(|(index, _)| *index != top_index)
                .map(|(_, load)| weighted(load)),
        );

        Some(SessionDraft::new(top, backoff, NOTE).with_intensity(blocks[top_index].percent))
    }
}

impl SchemeGenerator for SheikoStyle {
    fn scheme(&self) -> SchemeId {
        SchemeId::Sheiko
    }

    fn sessions_per_week(&self, _ctx: &SchemeContext<'_>) -> usize {
        SESSIONS_PER_WEEK
    }

    fn deload_note(&self) -> &'static str {
        "Deload: a single light wave with the emphasis on speed."
    }

    fn work_week(&mut self, ctx: &SchemeContext<'_>, week_number: u32) -> ProgramWeek {
        let projected = ctx.projected_one_rm(week_number);
        let sessions = DAY_TEMPLATES
            .iter()
            .enumerate()
            .filter_map(|(index, blocks)| {
                Self::session_draft(ctx, projected, blocks)
                    .map(|draft| ctx.build_session(week_number, index, projected, draft))
            })
            .collect();
        work_week(week_number, sessions)
    }
}
