// ABOUTME: Texas method: volume day, light recovery day and a heavy intensity day each week
// ABOUTME: Light day runs at 85% of the volume load; intensity day adds two 90% backoffs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

use liftplan_core::models::{ProgramWeek, RpeTarget, SchemeId};

use super::builder::{work_week, SchemeContext, SchemeGenerator, SessionDraft, SetBlock};
use crate::adjustments::adjusted_sets;
use crate::algorithms::apply_volume_cap;

/// Volume, light and intensity days
pub const SESSIONS_PER_WEEK: usize = 3;

const REPS: u32 = 5;
const VOLUME_DAY_RPE: f64 = 8.5;
const LIGHT_DAY_RPE: f64 = 7.0;
const INTENSITY_DAY_RPE: f64 = 9.5;
const INTENSITY_BACKOFF_RPE: f64 = 8.0;
const LIGHT_DAY_FRACTION: f64 = 0.85;
const BACKOFF_FRACTION: f64 = 0.9;
const MIN_VOLUME_SETS: u32 = 4;

/// Texas method generator
#[derive(Debug, Default, Clone, Copy)]
pub struct TexasMethod;

impl SchemeGenerator for TexasMethod {
    fn scheme(&self) -> SchemeId {
        SchemeId::TexasMethod
    }

    fn sessions_per_week(&self, _ctx: &SchemeContext<'_>) -> usize {
        SESSIONS_PER_WEEK
    }

    fn deload_note(&self) -> &'static str {
        "Deload: 60% of the volume day, crisp technique and fast reps."
    }

    fn work_week(&mut self, ctx: &SchemeContext<'_>, week_number: u32) -> ProgramWeek {
        let projected = ctx.projected_one_rm(week_number);
        let volume_weight = ctx.table_working_weight(projected, REPS, VOLUME_DAY_RPE);
        let light_weight = ctx.round(volume_weight * LIGHT_DAY_FRACTION);
        let intensity_weight = ctx.table_working_weight(projected, REPS, INTENSITY_DAY_RPE);
        let intensity_backoff = ctx.round(intensity_weight * BACKOFF_FRACTION);

        let volume_sets = adjusted_sets(ctx.blueprint.base_sets, ctx.recovery_adjustment, MIN_VOLUME_SETS);
        let volume = apply_volume_cap(f64::from(volume_sets), f64::from(REPS), None);

        let drafts = [
            SessionDraft::straight_sets(
                SetBlock::new(
                    volume_weight,
                    volume.reps,
                    volume.sets,
                    RpeTarget::Single(VOLUME_DAY_RPE),
                ),
                "Volume day: classic 5×5, add weight week to week.",
            ),
            SessionDraft::straight_sets(
                SetBlock::new(light_weight, REPS, 2, RpeTarget::Single(LIGHT_DAY_RPE)),
                "Light day: about 85% of the volume load, focus on speed and technique.",
            ),
            SessionDraft::new(
                SetBlock::new(intensity_weight, REPS, 1, RpeTarget::Single(INTENSITY_DAY_RPE)),
                vec![SetBlock::new(
                    intensity_backoff,
                    REPS,
                    2,
                    RpeTarget::Single(INTENSITY_BACKOFF_RPE),
                )],
                "Intensity day: one heavy set of five, then two backoff sets.",
            ),
        ];

        let sessions = drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| ctx.build_session(week_number, index, projected, draft))
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
    fn test_week_roles() {
        let input = UserInput::new(100.0, 5).with_scheme(SchemeId::TexasMethod);
        let config = EngineConfig::default();
        let ctx = SchemeContext::new(&input, 117.0, &config);
        let week = TexasMethod.work_week(&ctx, 1);

        assert_eq!(week.sessions.len(), 3);
        let volume = &week.sessions[0];
        // 5 reps @ 8.5 → 0.8325 × 117 = 97.4 → 97.5
        assert_eq!(volume.top_set, "97.5×5 @ RPE 8.5");
        assert_eq!(volume.backoff_sets.len(), 4);

        let light = &week.sessions[1];
        // 97.5 × 0.85 = 82.9 → 82.5
        assert_eq!(light.top_set, "82.5×5 @ RPE 7");
        assert_eq!(light.backoff_sets, vec!["82.5×5 @ RPE 7".to_owned()]);

        let intensity = &week.sessions[2];
        assert_eq!(intensity.top_set, "100×5 @ RPE 9.5");
        assert_eq!(intensity.backoff_sets, vec!["90×5 @ RPE 8".to_owned(); 2]);
    }
}
