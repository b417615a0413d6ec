// ABOUTME: Week-by-week accessory prescriptions attached to working sessions
// ABOUTME: Two fixed slots whose rep range and load creep up with week and session position
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

use liftplan_core::models::{format_number, Accessory, Goal, MovementType, UserInput};
use liftplan_core::sanitize;

use crate::adjustments::RepRange;
use crate::algorithms::round_to_equipment_step;

/// Effort every accessory is prescribed at
const ACCESSORY_RPE: u32 = 7;
/// Load scale for isolation main lifts
const ISOLATION_LOAD_SCALE: f64 = 0.85;

#[derive(Debug, Clone, Copy)]
struct AccessorySlot {
    name: &'static str,
    range: RepRange,
    sets: u32,
    load_multiplier: f64,
    increment: f64,
}

const ACCESSORY_SLOTS: [AccessorySlot; 2] = [
    AccessorySlot {
        name: "Strength accessory",
        range: RepRange { start: 6, end: 10 },
        sets: 3,
        load_multiplier: 0.62,
        increment: 2.5,
    },
    AccessorySlot {
        name: "Pump / isolation",
        range: RepRange { start: 10, end: 15 },
        sets: 3,
        load_multiplier: 0.45,
        increment: 1.5,
    },
];

const fn goal_shift(goal: Goal) -> i64 {
    match goal {
        Goal::Strength => -1,
        Goal::Hypertrophy => 0,
        Goal::Endurance => 1,
    }
}

fn rep_range_label(range: RepRange, shift: u32) -> String {
    let start = range
        .start
        .saturating_add(shift)
        .clamp(range.start, range.end.saturating_sub(1).max(range.start));
    format!("{start}-{}", range.end)
}

fn suggested_load(reference: f64, multiplier: f64, shift: u32, increment: f64) -> f64 {
    let raw = reference.mul_add(multiplier, f64::from(shift) * increment * 0.5);
    if !raw.is_finite() || raw <= 0.0 {
        return 0.0;
    }
    round_to_equipment_step(raw)
}

/// Accessory prescriptions for a working session
///
/// `week_number` is 1-based, `session_index` 0-based. Loads derive from the
/// user's reference weight; without one the prescription omits the load.
#[must_use]
pub fn build_accessory_progression(
    week_number: u32,
    session_index: usize,
    input: &UserInput,
) -> Vec<Accessory> {
    let week = i64::from(week_number.max(1));
    let session = i64::try_from(session_index).unwrap_or(i64::MAX / 4);
    let reference = sanitize::non_negative(input.weight);
    let movement_scale = match input.movement_type {
        MovementType::Isolation => ISOLATION_LOAD_SCALE,
        MovementType::Compound => 1.0,
    };

    ACCESSORY_SLOTS
        .iter()
        .zip(0_i64..)
        .map(|(slot, slot_index)| {
            let raw_shift = week - 1 + session + slot_index + goal_shift(input.goal);
            let shift = u32::try_from(raw_shift.max(0)).unwrap_or(u32::MAX);
            let sets_label = format!(
                "{}×{} @ RPE {ACCESSORY_RPE}",
                slot.sets,
                rep_range_label(slot.range, shift)
            );
            let load = suggested_load(
                reference,
                slot.load_multiplier * movement_scale,
                shift,
                slot.increment,
            );
            let load_label = if load > 0.0 {
                format!("{} kg · {sets_label}", format_number(load))
            } else {
                sets_label
            };
            Accessory {
                name: slot.name.to_owned(),
                prescription: format!(
                    "{load_label} · +{} kg after upper bound",
                    format_number(slot.increment)
                ),
            }
        })
        .collect()
}
