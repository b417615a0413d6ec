// ABOUTME: Scheme generators and the static dispatch table keyed by scheme id
// ABOUTME: Maps every SchemeId to its generator and declared weekly day template
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

//! # Scheme Generators
//!
//! Each scheme is a [`SchemeGenerator`] driven by the shared week loop in
//! [`builder`]. [`generate_program`] dispatches on the closed [`SchemeId`]
//! enum, so adding a scheme is a compile error until it is wired in here.

/// Shared week loop and session assembly
pub mod builder;
/// Conjugate
pub mod conjugate;
/// Double progression
pub mod double_progression;
/// Daily undulating periodization
pub mod dup;
/// Heavy-light-medium
pub mod heavy_light_medium;
/// Linear 5×5 → 3×3
pub mod linear;
/// Sheiko-style waves
pub mod sheiko;
/// Texas method
pub mod texas_method;
/// Top set + backoff
pub mod top_set;

use liftplan_core::models::{Program, SchemeId, UserInput};
use liftplan_core::sanitize;
use tracing::debug;

pub use builder::{run_generator, SchemeContext, SchemeGenerator, SessionDraft, SetBlock};
pub use conjugate::Conjugate;
pub use double_progression::DoubleProgression;
pub use dup::DailyUndulating;
pub use heavy_light_medium::HeavyLightMedium;
pub use linear::Linear5x5;
pub use sheiko::SheikoStyle;
pub use texas_method::TexasMethod;
pub use top_set::TopSetBackoff;

use crate::adjustments::resolve_session_days;
use crate::config::EngineConfig;

/// Sessions per week a scheme declares for this input, deload weeks included
#[must_use]
pub fn day_template_len(scheme: SchemeId, input: &UserInput) -> usize {
    match scheme {
        SchemeId::TopSetBackoff | SchemeId::Linear5x5 | SchemeId::DoubleProgression => {
            resolve_session_days(input).len()
        }
        SchemeId::TexasMethod => texas_method::SESSIONS_PER_WEEK,
        SchemeId::HeavyLightMedium => heavy_light_medium::SESSIONS_PER_WEEK,
        SchemeId::Dup => dup::SESSIONS_PER_WEEK,
        SchemeId::Sheiko => sheiko::SESSIONS_PER_WEEK,
        SchemeId::Conjugate => conjugate::SESSIONS_PER_WEEK,
    }
}

/// Generate a program for `input.scheme` from an estimated one-rep-max
///
/// Numeric input is sanitized first; a zero capacity generates from the
/// configured nominal capacity while `Program::one_rm` keeps the estimate.
#[must_use]
pub fn generate_program(input: &UserInput, one_rm: f64, config: &EngineConfig) -> Program {
    let input = input.sanitized();
    let estimated = sanitize::non_negative(one_rm);
    let ctx = SchemeContext::new(&input, estimated, config);
    debug!(
        scheme = input.scheme.id(),
        total_weeks = ctx.total_weeks,
        capacity = ctx.capacity,
        "Generating program"
    );

    let weeks = match input.scheme {
        SchemeId::TopSetBackoff => run_generator(TopSetBackoff, &ctx),
        SchemeId::Linear5x5 => run_generator(Linear5x5, &ctx),
        SchemeId::DoubleProgression => run_generator(DoubleProgression::new(&ctx), &ctx),
        SchemeId::TexasMethod => run_generator(TexasMethod, &ctx),
        SchemeId::HeavyLightMedium => run_generator(HeavyLightMedium, &ctx),
        SchemeId::Dup => run_generator(DailyUndulating, &ctx),
        SchemeId::Sheiko => run_generator(SheikoStyle, &ctx),
        SchemeId::Conjugate => run_generator(Conjugate, &ctx),
    };

    Program::new(input.scheme, &input, estimated, weeks)
}
