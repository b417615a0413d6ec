// ABOUTME: Derived per-session training stress metrics attached to prescriptions
// ABOUTME: Tonnage, intensity, tension, stress label, recovery window and muscle split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse bucket for the composite stress score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StressLabel {
    /// Score below 0.45
    Light,
    /// Score below 0.70
    Moderate,
    /// Score of 0.70 and above
    High,
}

impl StressLabel {
    /// Bucket a composite score in `[0, 1]`
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score < 0.45 {
            Self::Light
        } else if score < 0.70 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Display name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl fmt::Display for StressLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session tonnage split across muscle groups (kg, rounded per group)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MuscleGroupSplit {
    /// Quadriceps, hamstrings, glutes and calves
    pub legs: f64,
    /// Lats, traps and spinal erectors
    pub back: f64,
    /// Pectorals
    pub chest: f64,
    /// Deltoids
    pub shoulders: f64,
    /// Biceps, triceps and forearms
    pub arms: f64,
    /// Trunk musculature
    pub core: f64,
}

impl MuscleGroupSplit {
    /// Sum of all groups
    #[must_use]
    pub fn total(&self) -> f64 {
        self.legs + self.back + self.chest + self.shoulders + self.arms + self.core
    }

    /// Groups as `(name, tonnage)` pairs in display order
    #[must_use]
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("legs", self.legs),
            ("back", self.back),
            ("chest", self.chest),
            ("shoulders", self.shoulders),
            ("arms", self.arms),
            ("core", self.core),
        ]
    }
}

/// Derived training-stress metrics for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntensitySummary {
    /// Total weight moved (kg)
    pub tonnage: f64,
    /// Average relative intensity, 0-100
    pub avg_intensity: u32,
    /// Mechanical tension index
    pub mechanical_tension: f64,
    /// Force-velocity proxy (kg)
    pub force_velocity: f64,
    /// Tonnage scaled by effort
    pub normalized_load_volume: f64,
    /// Composite recovery-stress score in `[0, 1]`
    pub stress_score: f64,
    /// Bucket of `stress_score`
    pub stress_label: StressLabel,
    /// Estimated hours until recovered
    pub recovery_hours: u32,
    /// Estimated days until recovered, one decimal
    pub recovery_days: f64,
    /// Tonnage distributed across muscle groups
    pub muscle_split: MuscleGroupSplit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stress_label_thresholds() {
        assert_eq!(StressLabel::from_score(0.0), StressLabel::Light);
        assert_eq!(StressLabel::from_score(0.449), StressLabel::Light);
        assert_eq!(StressLabel::from_score(0.45), StressLabel::Moderate);
        assert_eq!(StressLabel::from_score(0.699), StressLabel::Moderate);
        assert_eq!(StressLabel::from_score(0.70), StressLabel::High);
    }
}
