// ABOUTME: Top set plus backoff scheme: one heavy set per session, then volume at 90% of it
// ABOUTME: Phases climb from 74% to 92% of projected capacity and the final week is a max test
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

use liftplan_core::models::{ProgramWeek, RpeTarget, SchemeId};
use tracing::debug;

use super::builder::{SchemeContext, SchemeGenerator, SessionDraft, SetBlock};
use crate::adjustments::{adjusted_sets, resolve_intensity_percent};
use crate::algorithms::apply_volume_cap;

/// Backoff load as a fraction of the top set
const BACKOFF_FRACTION: f64 = 0.9;
/// Extra reps on backoff sets
const BACKOFF_EXTRA_REPS: u32 = 2;

#[derive(Debug, Clone, Copy)]
struct Phase {
    label: &'static str,
    percent: f64,
    reps: u32,
    rpe: RpeTarget,
    backoff_rpe: RpeTarget,
}

const PHASES: [Phase; 5] = [
    Phase {
        label: "Accumulation 1",
        percent: 0.74,
        reps: 6,
        rpe: RpeTarget::Range { low: 7.0, high: 8.0 },
        backoff_rpe: RpeTarget::Range { low: 6.0, high: 7.0 },
    },
    Phase {
        label: "Accumulation 2",
        percent: 0.78,
        reps: 6,
        rpe: RpeTarget::Range { low: 7.0, high: 8.0 },
        backoff_rpe: RpeTarget::Range { low: 6.0, high: 7.0 },
    },
    Phase {
        label: "Transmutation",
        percent: 0.84,
        reps: 4,
        rpe: RpeTarget::Single(8.0),
        backoff_rpe: RpeTarget::Single(7.0),
    },
    Phase {
        label: "Heavy triples",
        percent: 0.88,
        reps: 3,
        rpe: RpeTarget::Range { low: 8.0, high: 9.0 },
        backoff_rpe: RpeTarget::Range { low: 7.0, high: 8.0 },
    },
    Phase {
        label: "Peak doubles",
        percent: 0.92,
        reps: 2,
        rpe: RpeTarget::Single(9.0),
        backoff_rpe: RpeTarget::Range { low: 8.0, high: 9.0 },
    },
];

/// Top set + backoff generator
#[derive(Debug, Default, Clone, Copy)]
pub struct TopSetBackoff;

impl SchemeGenerator for TopSetBackoff {
    fn scheme(&self) -> SchemeId {
        SchemeId::TopSetBackoff
    }

    fn sessions_per_week(&self, ctx: &SchemeContext<'_>) -> usize {
        ctx.days.len()
    }

    fn work_week(&mut self, ctx: &SchemeContext<'_>, week_number: u32) -> ProgramWeek {
        let sessions = self.sessions_per_week(ctx);
        if week_number == ctx.total_weeks {
            return ctx.test_week(week_number, sessions);
        }

        let phase = PHASES[ctx.phase_index(week_number, PHASES.len())];
        debug!(week_number, phase = phase.label, "Top set phase selected");
        let projected = ctx.projected_one_rm(week_number);
        let percent = resolve_intensity_percent(phase.percent, ctx.input);
        let top_weight = ctx.round(projected * percent);

        let backoff_sets = adjusted_sets(
            ctx.blueprint.base_sets.saturating_sub(1),
            ctx.recovery_adjustment,
            1,
        );
        let backoff_weight = ctx.round(top_weight * BACKOFF_FRACTION);
        let capped = apply_volume_cap(
            f64::from(backoff_sets) * ctx.volume_multiplier,
            f64::from(phase.reps + BACKOFF_EXTRA_REPS),
            (projected > 0.0).then(|| backoff_weight / projected),
        );

        let top = SetBlock::new(top_weight, phase.reps, 1, phase.rpe);
        let backoff = SetBlock::new(backoff_weight, capped.reps, capped.sets, phase.backoff_rpe);
        let note = format!(
            "{}: work up to one top set of {}, then hold 90% for the backoff sets.",
            phase.label, phase.reps
        );

        ProgramWeek {
            week_number,
            label: Some(phase.label.to_owned()),
            is_deload: false,
            sessions: (0..sessions)
                .map(|index| {
                    ctx.build_session(
                        week_number,
                        index,
                        projected,
                        SessionDraft::new(top, vec![backoff], note.clone())
                            .with_intensity(percent),
                    )
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use liftplan_core::models::{Goal, RecoveryLevel, UserInput};

    use super::*;
    use crate::config::EngineConfig;
    use crate::schemes::builder::run_generator;

    fn seven_weeks() -> UserInput {
        UserInput::new(100.0, 5).with_weeks(Some(7))
    }

    #[test]
    fn test_strength_week_one() {
        let input = seven_weeks();
        let config = EngineConfig::default();
        let ctx = SchemeContext::new(&input, 117.0, &config);
        let week = TopSetBackoff.work_week(&ctx, 1);

        assert_eq!(week.label.as_deref(), Some("Accumulation 1"));
        assert_eq!(week.sessions.len(), 3);
        let session = &week.sessions[0];
        // 0.74 × 117 = 86.6 → 87.5, backoff 0.9 × 87.5 = 78.75 → 80
        assert_eq!(session.top_set, "87.5×6 @ RPE 7-8");
        assert_eq!(session.backoff_sets.len(), 4);
        assert_eq!(session.backoff_sets[0], "80×8 @ RPE 6-7");
    }

    #[test]
    fn test_phases_walk_to_a_test_week() {
        let input = seven_weeks();
        let config = EngineConfig::default();
        let ctx = SchemeContext::new(&input, 117.0, &config);
        let weeks = run_generator(TopSetBackoff, &ctx);

        let labels: Vec<&str> = weeks
            .iter()
            .map(|week| week.label.as_deref().unwrap_or_default())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Accumulation 1",
                "Accumulation 2",
                "Transmutation",
                "Deload",
                "Heavy triples",
                "Peak doubles",
                "Test week",
            ]
        );

        let peaks: Vec<f64> = [0, 1, 2, 4, 5]
            .iter()
            .filter_map(|index| weeks[*index].peak_working_weight())
            .collect();
        assert_eq!(peaks.len(), 5);
        assert!(peaks.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(weeks[5].sessions[0].top_set, "117.5×2 @ RPE 9");

        let test = &weeks[6];
        assert!(test.sessions.iter().all(|s| s.working_weight.is_none()));
    }

    #[test]
    fn test_hypertrophy_volume_scales_backoffs() {
        let input = seven_weeks()
            .with_goal(Goal::Hypertrophy)
            .with_recovery(RecoveryLevel::Gifted);
        let config = EngineConfig::default();
        let ctx = SchemeContext::new(&input, 117.0, &config);
        let week = TopSetBackoff.work_week(&ctx, 1);
        // (4 - 1 + 1) × 1.35 × 1.1 = 5.94 → 6 sets, still under the cap
        assert_eq!(week.sessions[0].backoff_sets.len(), 6);
    }
}
