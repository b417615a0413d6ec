// ABOUTME: Structural invariants every scheme generator must hold across many inputs
// ABOUTME: Week numbering, day templates, deload loads, duration and determinism
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use liftplan::engine::adjustments::is_deload_week;
use liftplan::engine::algorithms::estimate_one_rep_max;
use liftplan::engine::duration::resolve_program_duration;
use liftplan::engine::{day_template_len, generate_program, EngineConfig};
use liftplan::models::{Program, SchemeId, UserInput};

fn generate(input: &UserInput, config: &EngineConfig) -> Program {
    let one_rm = estimate_one_rep_max(input.weight, input.reps, config.formula);
    generate_program(input, one_rm, config)
}

fn for_every_input(mut check: impl FnMut(&UserInput, &Program)) {
    common::init_test_logging();
    let config = EngineConfig::default();
    for scheme in SchemeId::ALL {
        for input in common::input_grid(scheme) {
            let program = generate(&input, &config);
            check(&input, &program);
        }
    }
}

#[test]
fn test_weeks_are_numbered_without_gaps() {
    for_every_input(|input, program| {
        let numbers: Vec<u32> = program.weeks.iter().map(|week| week.week_number).collect();
        let expected: Vec<u32> = (1..=resolve_program_duration(&input.sanitized())).collect();
        assert_eq!(numbers, expected, "{} {input:?}", input.scheme);
    });
}

#[test]
fn test_session_count_matches_day_template() {
    for_every_input(|input, program| {
        let expected = day_template_len(input.scheme, &input.sanitized());
        for week in &program.weeks {
            assert_eq!(
                week.sessions.len(),
                expected,
                "{} week {}",
                input.scheme,
                week.week_number
            );
        }
    });
}

#[test]
fn test_deload_weeks_are_lighter_than_the_week_before() {
    let config = EngineConfig::default();
    for_every_input(|input, program| {
        let sanitized = input.sanitized();
        let total = u32::try_from(program.weeks.len()).unwrap();
        for pair in program.weeks.windows(2) {
            let (previous, week) = (&pair[0], &pair[1]);
            assert_eq!(
                week.is_deload,
                is_deload_week(week.week_number, total, &sanitized, &config.deload)
            );
            if !week.is_deload {
                continue;
            }
            assert_eq!(week.label.as_deref(), Some("Deload"));
            let peak = previous.peak_working_weight().unwrap();
            for session in &week.sessions {
                let load = session.working_weight.unwrap();
                assert!(
                    load < peak,
                    "{} week {}: {load} not below {peak}",
                    input.scheme,
                    week.week_number
                );
            }
        }
    });
}

#[test]
fn test_every_program_has_a_deload_when_long_enough() {
    for_every_input(|input, program| {
        if program.weeks.len() > 5 {
            assert!(
                program.weeks.iter().any(|week| week.is_deload),
                "{} has no deload over {} weeks",
                input.scheme,
                program.weeks.len()
            );
        }
    });
}

#[test]
fn test_zero_capacity_still_prescribes_loads() {
    let config = EngineConfig::default();
    for scheme in SchemeId::ALL {
        let program = generate(&UserInput::new(0.0, 0).with_scheme(scheme), &config);
        assert_eq!(program.one_rm, 0.0);
        let first = &program.weeks[0];
        assert!(!first.sessions.is_empty());
        assert!(first.peak_working_weight().unwrap() > 0.0, "{scheme}");
        assert!(first.sessions.iter().all(|session| !session.top_set.is_empty()));
    }
}

#[test]
fn test_generation_is_deterministic() {
    let config = EngineConfig::default();
    for scheme in SchemeId::ALL {
        for input in common::input_grid(scheme) {
            assert_eq!(generate(&input, &config), generate(&input, &config));
        }
    }
}

#[test]
fn test_loaded_work_sessions_carry_metrics() {
    for_every_input(|input, program| {
        for week in program.weeks.iter().filter(|week| !week.is_deload) {
            for session in &week.sessions {
                if session.working_weight.is_some_and(|weight| weight > 0.0) {
                    let summary = session.intensity_summary.as_ref().unwrap_or_else(|| {
                        panic!("{} week {} has no metrics", input.scheme, week.week_number)
                    });
                    assert!(summary.tonnage > 0.0);
                    assert!((0.0..=1.0).contains(&summary.stress_score));
                }
            }
        }
    });
}
