// ABOUTME: One-rep-max estimation formulas from a submaximal set
// ABOUTME: Implements Epley, Brzycki, Lombardi, O'Connor and Wendler with a single-rep shortcut
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::sanitize;

/// One-rep-max estimation formula selection
///
/// Each formula converts a weight lifted for `r` reps into an estimated
/// single-rep maximum:
///
/// - `Epley`: `w × (1 + r/30)`
/// - `Brzycki`: `w / (1.0278 − 0.0278 × r)`
/// - `Lombardi`: `w × r^0.1`
/// - `OConnor`: `w × (1 + 0.025 × r)`
/// - `Wendler`: `w + w × r × 0.0333`
///
/// # References
///
/// - Epley, B. (1985). "Poundage Chart". Boyd Epley Workout.
/// - Brzycki, M. (1993). "Strength testing: predicting a one-rep max from reps-to-fatigue."
///   *Journal of Physical Education, Recreation & Dance*, 64(1), 88-90.
/// - `LeSuer`, D.A., et al. (1997). "The accuracy of prediction equations for estimating 1-RM
///   performance in the bench press, squat, and deadlift." *JSCR*, 11(4), 211-213.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OneRepMaxFormula {
    /// Epley (1985), the common default
    #[default]
    Epley,
    /// Brzycki (1993), conservative at higher reps
    Brzycki,
    /// Lombardi (1989), power curve
    Lombardi,
    /// O'Connor et al. (1989), linear and gentle
    #[serde(rename = "oconnor")]
    OConnor,
    /// Wendler 5/3/1 estimate
    Wendler,
}

impl OneRepMaxFormula {
    /// Every formula in display order
    pub const ALL: [Self; 5] = [
        Self::Epley,
        Self::Brzycki,
        Self::Lombardi,
        Self::OConnor,
        Self::Wendler,
    ];

    /// Stable key
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Epley => "epley",
            Self::Brzycki => "brzycki",
            Self::Lombardi => "lombardi",
            Self::OConnor => "oconnor",
            Self::Wendler => "wendler",
        }
    }

    /// Formula as text
    #[must_use]
    pub const fn formula(self) -> &'static str {
        match self {
            Self::Epley => "1RM = w × (1 + r / 30)",
            Self::Brzycki => "1RM = w / (1.0278 − 0.0278 × r)",
            Self::Lombardi => "1RM = w × r^0.1",
            Self::OConnor => "1RM = w × (1 + 0.025 × r)",
            Self::Wendler => "1RM = w + w × r × 0.0333",
        }
    }

    /// Estimate a one-rep-max, rounded to the nearest whole kilogram
    ///
    /// Non-finite or negative weights count as zero. Zero weight or zero reps
    /// estimate zero, and a single rep returns the rounded weight without
    /// applying any formula. Brzycki is undefined from 37 reps upward, where
    /// the estimate falls back to Epley.
    #[must_use]
    pub fn estimate(self, weight: f64, reps: u32) -> f64 {
        let weight = sanitize::non_negative(weight);
        if weight == 0.0 || reps == 0 {
            return 0.0;
        }
        if reps == 1 {
            return weight.round();
        }

        let r = f64::from(reps);
        let raw = match self {
            Self::Epley => epley(weight, r),
            Self::Brzycki => {
                let denominator = 0.0278f64.mul_add(-r, 1.0278);
                if denominator > 0.0 {
                    weight / denominator
                } else {
                    epley(weight, r)
                }
            }
            Self::Lombardi => weight * r.powf(0.1),
            Self::OConnor => weight * 0.025f64.mul_add(r, 1.0),
            Self::Wendler => (weight * r).mul_add(0.0333, weight),
        };
        sanitize::non_negative(raw).round()
    }
}

fn epley(weight: f64, reps: f64) -> f64 {
    weight * (1.0 + reps / 30.0)
}

impl FromStr for OneRepMaxFormula {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['\'', '_', '-'], "").as_str() {
            "epley" => Ok(Self::Epley),
            "brzycki" => Ok(Self::Brzycki),
            "lombardi" => Ok(Self::Lombardi),
            "oconnor" => Ok(Self::OConnor),
            "wendler" => Ok(Self::Wendler),
            _ => Err(AppError::invalid_input(format!(
                "Unknown one-rep-max formula: '{s}'. Valid options: epley, brzycki, lombardi, oconnor, wendler"
            ))),
        }
    }
}

impl fmt::Display for OneRepMaxFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
