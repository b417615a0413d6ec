// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Quiet logging setup and representative preference records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::wildcard_in_or_patterns
)]
//! Shared test utilities for `liftplan`

use std::env;
use std::sync::Once;

use tracing::Level;

use liftplan::models::{
    ExperienceLevel, Goal, MovementType, Program, RecoveryLevel, SchemeId, UserInput,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// 100 kg × 5, every other preference at its default
pub fn reference_input(scheme: SchemeId) -> UserInput {
    UserInput::new(100.0, 5).with_scheme(scheme)
}

/// Representative preference records for one scheme
///
/// Covers each goal, recovery extreme, movement type and session frequency,
/// plus a record with no usable reference lift.
pub fn input_grid(scheme: SchemeId) -> Vec<UserInput> {
    let mut inputs = Vec::new();
    for goal in Goal::ALL {
        for recovery in RecoveryLevel::ALL {
            for sessions in 2..=4 {
                inputs.push(
                    reference_input(scheme)
                        .with_goal(*goal)
                        .with_recovery(*recovery)
                        .with_sessions_per_week(sessions),
                );
            }
        }
    }
    for experience in ExperienceLevel::ALL {
        inputs.push(
            UserInput::new(22.0, 12)
                .with_scheme(scheme)
                .with_movement(MovementType::Isolation)
                .with_experience(*experience),
        );
    }
    inputs.push(UserInput::new(0.0, 0).with_scheme(scheme));
    inputs.push(reference_input(scheme).with_weeks(Some(12)));
    inputs
}

/// Saved-looking program with an explicit id
pub fn named_program(id: &str, scheme: SchemeId) -> Program {
    Program::new(scheme, &reference_input(scheme), 117.0, Vec::new()).with_id(id)
}
