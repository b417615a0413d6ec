// ABOUTME: Plain-language effort translations shown to novice lifters
// ABOUTME: Maps each RPE value in a target to a short hint joined with " · "
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

#![allow(clippy::cast_possible_truncation)] // Safe: effort values are small and finite

use liftplan_core::models::{ExperienceLevel, RpeTarget};

fn translate(rpe: f64) -> Option<String> {
    let rounded = rpe.round();
    let hint = match rounded as i64 {
        6 => "Warm-up feel, very easy",
        7 => "Bar moves fast",
        8 => "Hard, about 2 reps in reserve",
        9 => "Very hard, 1 rep left",
        10 => "Limit, no reps left",
        _ => return None,
    };
    Some(format!("RPE {rounded}: {hint}"))
}

/// Effort guide for novices; `None` for everyone else or untranslatable targets
#[must_use]
pub fn build_rpe_guide(rpe: RpeTarget, experience: ExperienceLevel) -> Option<String> {
    if experience != ExperienceLevel::Novice {
        return None;
    }
    let hints: Vec<String> = rpe
        .values()
        .into_iter()
        .filter(|value| value.is_finite())
        .filter_map(translate)
        .collect();
    if hints.is_empty() {
        None
    } else {
        Some(hints.join(" · "))
    }
}
