// ABOUTME: Plan builder: estimate capacity, attach formula variants and rep maxes, dispatch the scheme
// ABOUTME: Also compares every scheme for one lifter in parallel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

use liftplan_core::models::{Program, SchemeId, UserInput};
use rayon::prelude::*;
use tracing::info;

use crate::algorithms::{build_rep_max_table, estimate_all_formula_variants, estimate_one_rep_max};
use crate::config::EngineConfig;
use crate::duration::resolve_program_duration;
use crate::schemes::generate_program;

/// Build the full plan for a request
///
/// The one-rep-max comes from the configured formula. Formula variants and
/// the rep-max table are attached only when the reference lift is usable.
#[must_use]
pub fn build_plan(input: &UserInput, config: &EngineConfig) -> Program {
    let weight = input.safe_weight();
    let one_rm = estimate_one_rep_max(weight, input.reps, config.formula);

    let mut program = generate_program(input, one_rm, config);
    let variants = estimate_all_formula_variants(weight, input.reps);
    let rep_maxes = build_rep_max_table(one_rm);
    program.one_rm_variants = (!variants.is_empty()).then_some(variants);
    program.rep_maxes = (!rep_maxes.is_empty()).then_some(rep_maxes);

    info!(
        scheme = program.scheme.id(),
        one_rm,
        formula = config.formula.name(),
        weeks = program.weeks.len(),
        sessions = program.session_count(),
        "Generated program"
    );
    program
}

/// Side-by-side overview of one scheme for the same lifter
#[derive(Debug, Clone, PartialEq)]
pub struct SchemeComparison {
    /// Scheme compared
    pub scheme: SchemeId,
    /// Program length
    pub weeks: u32,
    /// Sessions across the whole program
    pub sessions: usize,
    /// Deload weeks in the program
    pub deload_weeks: usize,
    /// Heaviest working weight prescribed
    pub peak_working_weight: Option<f64>,
    /// Tonnage across the whole program
    pub total_tonnage: f64,
}

impl SchemeComparison {
    fn from_program(program: &Program, weeks: u32) -> Self {
        Self {
            scheme: program.scheme,
            weeks,
            sessions: program.session_count(),
            deload_weeks: program.weeks.iter().filter(|week| week.is_deload).count(),
            peak_working_weight: program
                .weeks
                .iter()
                .filter_map(|week| week.peak_working_weight())
                .reduce(f64::max),
            total_tonnage: program.weeks.iter().map(|week| week.tonnage()).sum(),
        }
    }
}

/// Generate every scheme for the same preferences and summarize each one
///
/// Generation is pure, so schemes are built on the rayon pool; results come
/// back in `SchemeId::ALL` order.
#[must_use]
pub fn compare_schemes(input: &UserInput, config: &EngineConfig) -> Vec<SchemeComparison> {
    let weight = input.safe_weight();
    let one_rm = estimate_one_rep_max(weight, input.reps, config.formula);

    SchemeId::ALL
        .par_iter()
        .map(|&scheme| {
            let scheme_input = input.clone().with_scheme(scheme);
            let program = generate_program(&scheme_input, one_rm, config);
            let weeks = resolve_program_duration(&scheme_input.sanitized());
            SchemeComparison::from_program(&program, weeks)
        })
        .collect()
}
