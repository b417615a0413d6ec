// ABOUTME: Weight rounding to achievable equipment values and numeric plate steps
// ABOUTME: Also models the next/previous load increment per movement type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

//! # Load Rounding
//!
//! Two rounding models are used across the engine:
//!
//! - **Equipment rounding** snaps to the fixed dumbbell ladder
//!   ([`DUMBBELL_STEPS`]). The ladder is scanned in ascending order and a
//!   candidate only replaces the current best when it is *strictly* closer,
//!   so an exact tie keeps the lower weight (`21 → 20`, not `22`).
//! - **Numeric rounding** snaps to the nearest multiple of a plate step
//!   (2.5 kg by default).
//!
//! Both are idempotent.

use liftplan_core::constants::equipment::{DUMBBELL_STEPS, PLATE_INCREMENT};
use liftplan_core::models::MovementType;

/// Closest achievable dumbbell weight; exact ties resolve to the lower value
///
/// Non-finite input returns the lightest dumbbell.
#[must_use]
pub fn round_to_equipment_step(weight: f64) -> f64 {
    if !weight.is_finite() {
        return DUMBBELL_STEPS[0];
    }

    let mut closest = DUMBBELL_STEPS[0];
    let mut smallest_diff = (weight - closest).abs();
    for &candidate in &DUMBBELL_STEPS[1..] {
        let diff = (weight - candidate).abs();
        if diff < smallest_diff {
            closest = candidate;
            smallest_diff = diff;
        }
    }
    closest
}

/// Dumbbell immediately below the rounded weight, or the lightest one
#[must_use]
pub fn lower_equipment_step(weight: f64) -> f64 {
    let rounded = round_to_equipment_step(weight);
    DUMBBELL_STEPS
        .iter()
        .rev()
        .copied()
        .find(|step| *step < rounded)
        .unwrap_or(DUMBBELL_STEPS[0])
}

/// Dumbbell immediately above the rounded weight, or `None` at the top of the rack
#[must_use]
pub fn next_equipment_step(weight: f64) -> Option<f64> {
    let rounded = round_to_equipment_step(weight);
    DUMBBELL_STEPS.iter().copied().find(|step| *step > rounded)
}

/// Nearest multiple of `step`; zero for non-finite input or a non-positive step
#[must_use]
pub fn round_to_numeric_step(weight: f64, step: f64) -> f64 {
    if !weight.is_finite() || !step.is_finite() || step <= 0.0 || weight <= 0.0 {
        return 0.0;
    }
    (weight / step).round() * step
}

/// How a lift's load moves up or down by one increment
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadIncrement {
    /// Fixed dumbbell ladder, then plate steps once the rack runs out
    Dumbbell,
    /// Barbell loaded in plate steps of the given size
    Plate(f64),
}

impl LoadIncrement {
    /// Isolation work moves along the dumbbell ladder, compounds by plates
    #[must_use]
    pub fn for_movement(movement: MovementType, plate_step: f64) -> Self {
        match movement {
            MovementType::Isolation => Self::Dumbbell,
            MovementType::Compound => Self::Plate(plate_step),
        }
    }

    /// Snap a raw load to something achievable
    #[must_use]
    pub fn round(self, weight: f64) -> f64 {
        match self {
            Self::Dumbbell if weight <= rack_top() => round_to_equipment_step(weight),
            Self::Dumbbell => round_to_numeric_step(weight, PLATE_INCREMENT),
            Self::Plate(step) => round_to_numeric_step(weight, step),
        }
    }

    /// Next achievable load above `weight`
    #[must_use]
    pub fn next(self, weight: f64) -> f64 {
        let current = self.round(weight);
        match self {
            Self::Dumbbell => next_equipment_step(current)
                .filter(|_| current < rack_top())
                .unwrap_or(current + PLATE_INCREMENT),
            Self::Plate(step) => current + step,
        }
    }

    /// Achievable load strictly below `weight`, or zero when there is none
    #[must_use]
    pub fn previous(self, weight: f64) -> f64 {
        match self {
            Self::Dumbbell if weight > rack_top() + PLATE_INCREMENT => {
                (round_to_numeric_step(weight, PLATE_INCREMENT) - PLATE_INCREMENT).max(0.0)
            }
            Self::Dumbbell => DUMBBELL_STEPS
                .iter()
                .rev()
                .copied()
                .find(|step| *step < weight)
                .unwrap_or(0.0),
            Self::Plate(step) => (weight - step).max(0.0),
        }
    }

    /// Size of the jump from `weight` to [`Self::next`]
    #[must_use]
    pub fn increment_from(self, weight: f64) -> f64 {
        self.next(weight) - self.round(weight)
    }
}

fn rack_top() -> f64 {
    DUMBBELL_STEPS[DUMBBELL_STEPS.len() - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_tie_resolves_to_lower_value() {
        assert_eq!(round_to_equipment_step(21.0), 20.0);
        assert_eq!(round_to_equipment_step(6.0), 5.0);
        assert_eq!(round_to_equipment_step(11.0), 9.0);
    }

    #[test]
    fn test_equipment_rounding_edges() {
        assert_eq!(round_to_equipment_step(f64::NAN), 5.0);
        assert_eq!(round_to_equipment_step(-10.0), 5.0);
        assert_eq!(round_to_equipment_step(120.0), 40.0);
        assert_eq!(round_to_equipment_step(23.6), 25.0);
    }

    #[test]
    fn test_equipment_rounding_is_idempotent() {
        let mut weight = -3.0;
        while weight < 50.0 {
            let once = round_to_equipment_step(weight);
            assert_eq!(round_to_equipment_step(once), once);
            weight += 0.25;
        }
    }

    #[test]
    fn test_lower_and_next_step() {
        assert_eq!(lower_equipment_step(20.0), 18.0);
        assert_eq!(lower_equipment_step(5.0), 5.0);
        assert_eq!(lower_equipment_step(3.0), 5.0);
        assert_eq!(next_equipment_step(9.0), Some(13.0));
        assert_eq!(next_equipment_step(40.0), None);
    }

    #[test]
    fn test_numeric_step() {
        assert_eq!(round_to_numeric_step(101.0, 2.5), 100.0);
        assert_eq!(round_to_numeric_step(101.3, 2.5), 102.5);
        assert_eq!(round_to_numeric_step(101.0, 0.0), 0.0);
        assert_eq!(round_to_numeric_step(f64::INFINITY, 2.5), 0.0);
        assert_eq!(round_to_numeric_step(102.5, 2.5), 102.5);
    }

    #[test]
    fn test_load_increment_per_movement() {
        let plate = LoadIncrement::for_movement(MovementType::Compound, 2.5);
        assert_eq!(plate.next(100.0), 102.5);

        let dumbbell = LoadIncrement::for_movement(MovementType::Isolation, 2.5);
        assert_eq!(dumbbell.round(21.0), 20.0);
        assert_eq!(dumbbell.next(20.0), 22.0);
        assert_eq!(dumbbell.increment_from(9.0), 4.0);
        assert_eq!(dumbbell.next(40.0), 42.5);
        assert_eq!(dumbbell.round(61.0), 60.0);
    }

    #[test]
    fn test_previous_load_is_strictly_lighter() {
        let plate = LoadIncrement::Plate(2.5);
        assert_eq!(plate.previous(100.0), 97.5);
        assert_eq!(plate.previous(1.0), 0.0);

        let dumbbell = LoadIncrement::Dumbbell;
        assert_eq!(dumbbell.previous(20.0), 18.0);
        assert_eq!(dumbbell.previous(21.0), 20.0);
        assert_eq!(dumbbell.previous(5.0), 0.0);
        assert_eq!(dumbbell.previous(42.5), 40.0);
        assert_eq!(dumbbell.previous(60.0), 57.5);
    }
}
