// ABOUTME: Linear 5×5 → 3×3 scheme moving through volume, strength and power phases
// ABOUTME: Phases stretch over the available work weeks and the final week is a max test
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

use liftplan_core::models::{ProgramWeek, RpeTarget, SchemeId};
use tracing::debug;

use super::builder::{SchemeContext, SchemeGenerator, SessionDraft, SetBlock};
use crate::adjustments::resolve_intensity_percent;

#[derive(Debug, Clone, Copy)]
struct Phase {
    label: &'static str,
    percent: f64,
    sets: u32,
    reps: u32,
    rpe: RpeTarget,
}

const PHASES: [Phase; 5] = [
    Phase {
        label: "Volume 1",
        percent: 0.72,
        sets: 5,
        reps: 5,
        rpe: RpeTarget::Range {
            low: 7.5,
            high: 8.0,
        },
    },
    Phase {
        label: "Volume 2",
        percent: 0.78,
        sets: 5,
        reps: 5,
        rpe: RpeTarget::Range {
            low: 7.5,
            high: 8.0,
        },
    },
    Phase {
        label: "Strength 1",
        percent: 0.82,
        sets: 4,
        reps: 4,
        rpe: RpeTarget::Single(8.0),
    },
    Phase {
        label: "Strength 2",
        percent: 0.86,
        sets: 4,
        reps: 4,
        rpe: RpeTarget::Range {
            low: 8.0,
            high: 8.5,
        },
    },
    Phase {
        label: "Power",
        percent: 0.90,
        sets: 3,
        reps: 3,
        rpe: RpeTarget::Range {
            low: 8.5,
            high: 9.0,
        },
    },
];

/// Linear 5×5 → 3×3 generator
#[derive(Debug, Default, Clone, Copy)]
pub struct Linear5x5;

impl SchemeGenerator for Linear5x5 {
    fn scheme(&self) -> SchemeId {
        SchemeId::Linear5x5
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
        debug!(week_number, phase = phase.label, "Linear phase selected");
        let projected = ctx.projected_one_rm(week_number);
        let percent = resolve_intensity_percent(phase.percent, ctx.input);
        let weight = ctx.round(projected * percent);
        let block = SetBlock::new(weight, phase.reps, phase.sets, phase.rpe);
        let note = format!(
            "{}: {}×{} across, same load every set.",
            phase.label, phase.sets, phase.reps
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
                        SessionDraft::straight_sets(block, note.clone()).with_intensity(percent),
                    )
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use liftplan_core::models::UserInput;

    use super::*;
    use crate::config::EngineConfig;

    #[test]
    fn test_phases_progress_and_end_with_test_week() {
        let input = UserInput::new(100.0, 5)
            .with_scheme(SchemeId::Linear5x5)
            .with_weeks(Some(6));
        let config = EngineConfig::default();
        let ctx = SchemeContext::new(&input, 117.0, &config);
        let mut generator = Linear5x5;

        let first = generator.work_week(&ctx, 1);
        assert_eq!(first.label.as_deref(), Some("Volume 1"));
        assert_eq!(first.sessions[0].backoff_sets.len(), 4);

        let fifth = generator.work_week(&ctx, 5);
        assert_eq!(fifth.label.as_deref(), Some("Power"));
        assert_eq!(fifth.sessions[0].backoff_sets.len(), 2);

        let last = generator.work_week(&ctx, 6);
        assert_eq!(last.label.as_deref(), Some("Test week"));
        assert!(last.sessions.iter().all(|s| s.working_weight.is_none()));
        assert!(last.sessions.iter().all(|s| s.intensity_summary.is_none()));
    }

    #[test]
    fn test_phase_percent_climbs() {
        let input = UserInput::new(100.0, 5).with_weeks(Some(6));
        let config = EngineConfig::default();
        let ctx = SchemeContext::new(&input, 117.0, &config);
        let mut generator = Linear5x5;
        let loads: Vec<f64> = [1, 2, 3, 5]
            .iter()
            .filter_map(|week| generator.work_week(&ctx, *week).peak_working_weight())
            .collect();
        assert!(loads.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
