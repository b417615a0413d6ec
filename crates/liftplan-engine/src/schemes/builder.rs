// ABOUTME: Shared week loop and session assembly used by every scheme generator
// ABOUTME: Resolves preferences once, inserts deload weeks and turns set drafts into sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

//! # Scheme Builder
//!
//! Every generator follows the same shape:
//!
//! 1. [`SchemeContext::new`] resolves duration, day labels, goal blueprint and
//!    volume adjustments once per request.
//! 2. [`run_generator`] walks weeks `1..=N`. Deload weeks are emitted by
//!    [`SchemeContext::deload_week`] from the preceding work week's peak load;
//!    all other weeks come from [`SchemeGenerator::work_week`].
//! 3. Each working session is described as a [`SessionDraft`] and finished by
//!    [`SchemeContext::build_session`]: set lines, rest, RPE guide, metrics and
//!    accessories.

use liftplan_core::constants::defaults::DEFAULT_ONE_RM;
use liftplan_core::constants::deload::{
    DELOAD_BACKOFF_SETS, DELOAD_REPS, DELOAD_RPE_HIGH, DELOAD_RPE_LOW,
};
use liftplan_core::models::{set_line, ProgramSession, ProgramWeek, RpeTarget, SchemeId, UserInput};
use liftplan_core::sanitize;
use tracing::debug;

use crate::accessories::build_accessory_progression;
use crate::adjustments::{
    day_label, is_deload_week, resolve_goal_blueprint, resolve_intensity_percent,
    resolve_recovery_set_adjustment, resolve_rest_interval, resolve_session_days,
    resolve_volume_multiplier, resolve_weekly_progress_step, GoalBlueprint, RestContext,
};
use crate::algorithms::{round_to_numeric_step, working_percent, LoadIncrement};
use crate::config::EngineConfig;
use crate::duration::resolve_program_duration;
use crate::metrics::{build_intensity_summary, SessionLoad};
use crate::rpe_guidance::build_rpe_guide;

/// Coaching note used on deload sessions unless a scheme supplies its own
pub const DEFAULT_DELOAD_NOTE: &str =
    "Deload: light technique work, stop every set with plenty in reserve.";

const TEST_WEEK_LABEL: &str = "Test week";
const TEST_WEEK_TOP_SET: &str = "Test week: work up to 1-2 heavy singles";
const TEST_WEEK_NOTE: &str = "Warm up thoroughly and stop once bar speed clearly drops.";

/// Identical sets at one load
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetBlock {
    /// Load (kg)
    pub weight: f64,
    /// Reps per set
    pub reps: u32,
    /// Number of sets
    pub sets: u32,
    /// Effort target
    pub rpe: RpeTarget,
}

impl SetBlock {
    /// Block of `sets` sets
    #[must_use]
    pub const fn new(weight: f64, reps: u32, sets: u32, rpe: RpeTarget) -> Self {
        Self {
            weight,
            reps,
            sets,
            rpe,
        }
    }

    fn line(&self) -> String {
        set_line(self.weight, self.reps, self.rpe)
    }
}

/// A working session before rest, guidance and metrics are attached
#[derive(Debug, Clone, PartialEq)]
pub struct SessionDraft {
    /// Heaviest set of the day
    pub top: SetBlock,
    /// Backoff blocks in prescription order
    pub backoff: Vec<SetBlock>,
    /// Top-set intensity when the scheme prescribes it directly
    pub intensity_percent: Option<f64>,
    /// Coaching note for the session
    pub note: String,
}

impl SessionDraft {
    /// One top set followed by the given backoff blocks
    #[must_use]
    pub fn new(top: SetBlock, backoff: Vec<SetBlock>, note: impl Into<String>) -> Self {
        Self {
            top: SetBlock { sets: 1, ..top },
            backoff,
            intensity_percent: None,
            note: note.into(),
        }
    }

    /// `sets` identical sets; the first is written as the top set
    #[must_use]
    pub fn straight_sets(block: SetBlock, note: impl Into<String>) -> Self {
        let remaining = block.sets.saturating_sub(1);
        let backoff = if remaining > 0 {
            vec![SetBlock {
                sets: remaining,
                ..block
            }]
        } else {
            Vec::new()
        };
        Self::new(block, backoff, note)
    }

    /// Copy with an explicit top-set intensity
    #[must_use]
    pub fn with_intensity(mut self, intensity_percent: f64) -> Self {
        self.intensity_percent = Some(intensity_percent);
        self
    }

    fn backoff_lines(&self) -> Vec<String> {
        self.backoff
            .iter()
            .flat_map(|block| {
                let line = block.line();
                (0..block.sets).map(move |_| line.clone())
            })
            .collect()
    }

    /// Backoff blocks folded into one average block for the metrics engine
    fn backoff_load(&self) -> (f64, u32, u32) {
        let sets: u32 = self.backoff.iter().map(|block| block.sets).sum();
        if sets == 0 {
            return (0.0, 0, 0);
        }
        let total_reps: f64 = self
            .backoff
            .iter()
            .map(|block| f64::from(block.reps) * f64::from(block.sets))
            .sum();
        let tonnage: f64 = self
            .backoff
            .iter()
            .map(|block| block.weight * f64::from(block.reps) * f64::from(block.sets))
            .sum();
        if total_reps <= 0.0 {
            return (0.0, 0, 0);
        }
        let mean_reps = sanitize::whole_count(total_reps / f64::from(sets)).max(1);
        ((tonnage / total_reps * 10.0).round() / 10.0, mean_reps, sets)
    }
}

/// Per-request values resolved once and shared by every week
#[derive(Debug, Clone)]
pub struct SchemeContext<'a> {
    /// Sanitized preferences
    pub input: &'a UserInput,
    /// Engine policy
    pub config: &'a EngineConfig,
    /// Capacity used for generation; the nominal default when no 1RM is known
    pub capacity: f64,
    /// Total weeks in the program
    pub total_weeks: u32,
    /// Day labels for the chosen frequency
    pub days: &'static [&'static str],
    /// Goal-specific set and top-set targets
    pub blueprint: GoalBlueprint,
    /// Volume multiplier from goal, recovery and experience
    pub volume_multiplier: f64,
    /// Weekly capacity growth fraction
    pub weekly_step: f64,
    /// Set-count nudge from recovery
    pub recovery_adjustment: i32,
    /// How the lift's load steps on the available equipment
    pub increment: LoadIncrement,
}

impl<'a> SchemeContext<'a> {
    /// Resolve everything that stays constant across weeks
    #[must_use]
    pub fn new(input: &'a UserInput, one_rm: f64, config: &'a EngineConfig) -> Self {
        let estimated = sanitize::non_negative(one_rm);
        let capacity = if estimated > 0.0 {
            estimated
        } else {
            sanitize::positive_or(config.default_one_rm, DEFAULT_ONE_RM)
        };

        Self {
            input,
            config,
            capacity,
            total_weeks: resolve_program_duration(input),
            days: resolve_session_days(input),
            blueprint: resolve_goal_blueprint(input),
            volume_multiplier: resolve_volume_multiplier(input),
            weekly_step: resolve_weekly_progress_step(input, &config.progression),
            recovery_adjustment: resolve_recovery_set_adjustment(input),
            increment: LoadIncrement::for_movement(input.movement_type, config.weight_step),
        }
    }

    /// Capacity compounded to `week_number`: `capacity × (1 + step × (n − 1))`
    #[must_use]
    pub fn projected_one_rm(&self, week_number: u32) -> f64 {
        let elapsed = f64::from(week_number.saturating_sub(1));
        self.capacity * self.weekly_step.mul_add(elapsed, 1.0)
    }

    /// Whether `week_number` is a deload week for this request
    #[must_use]
    pub fn is_deload(&self, week_number: u32) -> bool {
        is_deload_week(week_number, self.total_weeks, self.input, &self.config.deload)
    }

    /// Index into a phase table of `phase_count` entries
    ///
    /// Phases are spread evenly over the loaded weeks before the final week,
    /// so deloads never consume a phase.
    #[must_use]
    pub fn phase_index(&self, week_number: u32, phase_count: usize) -> usize {
        let loaded = |week: &u32| !self.is_deload(*week);
        let work_weeks = (1..self.total_weeks).filter(loaded).count();
        let position = (1..week_number).filter(loaded).count();
        let last = phase_count.saturating_sub(1);
        if work_weeks > 1 {
            (position * last / (work_weeks - 1)).min(last)
        } else {
            0
        }
    }

    /// Day label for a template slot
    #[must_use]
    pub fn day(&self, index: usize) -> &'static str {
        day_label(self.days, index)
    }

    /// Round a barbell load to the configured step
    #[must_use]
    pub fn round(&self, weight: f64) -> f64 {
        round_to_numeric_step(weight, self.config.weight_step)
    }

    /// Load for a rep and effort target, adjusted for the lifter's traits
    #[must_use]
    pub fn adjusted_working_weight(&self, one_rm: f64, reps: u32, rpe: f64) -> f64 {
        let percent = resolve_intensity_percent(working_percent(reps, rpe), self.input);
        self.round(one_rm * percent)
    }

    /// Load for a rep and effort target straight from the percent/RPE table
    #[must_use]
    pub fn table_working_weight(&self, one_rm: f64, reps: u32, rpe: f64) -> f64 {
        self.round(one_rm * working_percent(reps, rpe))
    }

    /// Turn a draft into a full session for week `week_number`, slot `index`
    #[must_use]
    pub fn build_session(
        &self,
        week_number: u32,
        index: usize,
        projected_one_rm: f64,
        draft: SessionDraft,
    ) -> ProgramSession {
        let top = draft.top;
        let intensity_percent = draft
            .intensity_percent
            .or_else(|| (projected_one_rm > 0.0).then(|| top.weight / projected_one_rm));
        let (backoff_weight, backoff_reps, backoff_sets) = draft.backoff_load();

        let load = SessionLoad {
            top_weight: top.weight,
            top_reps: top.reps,
            backoff_weight,
            backoff_reps,
            backoff_sets,
            intensity_percent,
            one_rm: Some(projected_one_rm),
            rpe: top.rpe.mean(),
            movement: self.input.movement_type,
            goal: self.input.goal,
        };

        let mut session = ProgramSession::new(self.day(index), top.line());
        session.backoff_sets = draft.backoff_lines();
        session.working_weight = Some(top.weight);
        session.intensity_summary = build_intensity_summary(&load);
        session.rest_interval = Some(resolve_rest_interval(
            self.input,
            RestContext {
                reps: top.reps,
                intensity_percent,
            },
        ));
        session.rpe_guide = build_rpe_guide(top.rpe, self.input.experience_level);
        session.coaching_notes = vec![draft.note];
        session.accessories = build_accessory_progression(week_number, index, self.input);
        session
    }

    /// Deload load: `reference × fraction` on the lift's equipment, stepped
    /// down once if rounding did not reduce it
    #[must_use]
    pub fn deload_weight(&self, reference: f64) -> f64 {
        let reference = sanitize::non_negative(reference);
        let reduced = self.increment.round(reference * self.config.deload.load_fraction);
        if reduced < reference {
            reduced
        } else {
            self.increment.previous(reference)
        }
    }

    /// Final max-test week: no prescribed load, so no metrics
    #[must_use]
    pub fn test_week(&self, week_number: u32, session_count: usize) -> ProgramWeek {
        let sessions = (0..session_count)
            .map(|index| {
                let mut session = ProgramSession::new(self.day(index), TEST_WEEK_TOP_SET);
                session.rest_interval = Some(resolve_rest_interval(
                    self.input,
                    RestContext {
                        reps: 1,
                        intensity_percent: None,
                    },
                ));
                session.coaching_notes = vec![TEST_WEEK_NOTE.to_owned()];
                session
            })
            .collect();
        ProgramWeek {
            week_number,
            label: Some(TEST_WEEK_LABEL.to_owned()),
            is_deload: false,
            sessions,
        }
    }

    /// Fixed-structure light week with `session_count` sessions
    #[must_use]
    pub fn deload_week(
        &self,
        week_number: u32,
        reference: f64,
        session_count: usize,
        note: &str,
    ) -> ProgramWeek {
        let weight = self.deload_weight(reference);
        let projected = self.projected_one_rm(week_number);
        let rpe = RpeTarget::range(DELOAD_RPE_LOW, DELOAD_RPE_HIGH);
        let block = SetBlock::new(weight, DELOAD_REPS, 1 + DELOAD_BACKOFF_SETS, rpe);
        let fraction = self.config.deload.load_fraction;

        let sessions = (0..session_count)
            .map(|index| {
                let mut session = ProgramSession::new(self.day(index), block.line());
                session.backoff_sets = (0..DELOAD_BACKOFF_SETS).map(|_| block.line()).collect();
                session.working_weight = Some(weight);
                session.intensity_summary = build_intensity_summary(&SessionLoad {
                    top_weight: weight,
                    top_reps: DELOAD_REPS,
                    backoff_weight: weight,
                    backoff_reps: DELOAD_REPS,
                    backoff_sets: DELOAD_BACKOFF_SETS,
                    intensity_percent: Some(fraction),
                    one_rm: Some(projected),
                    rpe: rpe.mean(),
                    movement: self.input.movement_type,
                    goal: self.input.goal,
                });
                session.rest_interval = Some(resolve_rest_interval(
                    self.input,
                    RestContext {
                        reps: DELOAD_REPS,
                        intensity_percent: Some(fraction),
                    },
                ));
                session.rpe_guide = build_rpe_guide(rpe, self.input.experience_level);
                session.coaching_notes = vec![note.to_owned()];
                session
            })
            .collect();

        ProgramWeek {
            week_number,
            label: Some("Deload".to_owned()),
            is_deload: true,
            sessions,
        }
    }
}

/// A periodization scheme expressed as its work-week template
pub trait SchemeGenerator {
    /// Scheme this generator produces
    fn scheme(&self) -> SchemeId;

    /// Sessions in every week, deloads included
    fn sessions_per_week(&self, ctx: &SchemeContext<'_>) -> usize;

    /// Build a non-deload week
    fn work_week(&mut self, ctx: &SchemeContext<'_>, week_number: u32) -> ProgramWeek;

    /// Coaching note for deload sessions
    fn deload_note(&self) -> &'static str {
        DEFAULT_DELOAD_NOTE
    }
}

/// Walk weeks `1..=N`, inserting deload weeks on cadence
pub fn run_generator<G: SchemeGenerator>(
    mut generator: G,
    ctx: &SchemeContext<'_>,
) -> Vec<ProgramWeek> {
    let mut weeks = Vec::with_capacity(ctx.total_weeks as usize);
    let mut reference: Option<f64> = None;

    for week_number in 1..=ctx.total_weeks {
        if ctx.is_deload(week_number) {
            let peak = reference.unwrap_or(ctx.capacity);
            debug!(
                scheme = generator.scheme().id(),
                week_number, peak, "Inserting deload week"
            );
            weeks.push(ctx.deload_week(
                week_number,
                peak,
                generator.sessions_per_week(ctx),
                generator.deload_note(),
            ));
            continue;
        }

        let week = generator.work_week(ctx, week_number);
        if let Some(peak) = week.peak_working_weight().filter(|peak| *peak > 0.0) {
            reference = Some(peak);
        }
        weeks.push(week);
    }

    weeks
}

/// Work week with no phase label
#[must_use]
pub fn work_week(week_number: u32, sessions: Vec<ProgramSession>) -> ProgramWeek {
    ProgramWeek {
        week_number,
        label: None,
        is_deload: false,
        sessions,
    }
}
