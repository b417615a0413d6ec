// ABOUTME: User preference record consumed by the engine and its enum dimensions
// ABOUTME: Goal, experience, recovery and movement type with strict and lenient parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::scheme::SchemeId;
use crate::constants::defaults::{
    DEFAULT_SESSIONS_PER_WEEK, MAX_SESSIONS_PER_WEEK, MIN_SESSIONS_PER_WEEK,
};
use crate::errors::{AppError, AppResult};
use crate::sanitize;

/// Declares a preference enum with its keys, default, and parsing behaviour.
///
/// Strict parsing (`FromStr`) rejects unknown keys with an error listing the
/// valid options. `parse_lenient` falls back to the default variant, and
/// deserialization goes through it so stored or hand-written profiles with a
/// stale key still load.
macro_rules! preference_enum {
    (
        $(#[$meta:meta])*
        $name:ident, label = $label:literal, default = $default:ident,
        { $( $(#[$vmeta:meta])* $variant:ident => $key:literal ),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase", from = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl $name {
            /// Every variant in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Stable lowercase key
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $key),+
                }
            }

            /// Parse a key, falling back to the default variant when unknown
            #[must_use]
            pub fn parse_lenient(value: &str) -> Self {
                value.parse().unwrap_or_else(|_| {
                    warn!(value, fallback = Self::$default.as_str(), "Unknown {}, using default", $label);
                    Self::$default
                })
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self::parse_lenient(&raw)
            }
        }

        impl FromStr for $name {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($key => Ok(Self::$variant),)+
                    other => Err(AppError::invalid_input(format!(
                        "Unknown {}: '{other}'. Valid options: {}",
                        $label,
                        [$($key),+].join(", ")
                    ))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

preference_enum! {
    /// Kind of movement the reference lift belongs to
    MovementType, label = "movement type", default = Compound, {
        /// Multi-joint barbell lift
        Compound => "compound",
        /// Single-joint accessory lift
        Isolation => "isolation",
    }
}

preference_enum! {
    /// Training goal driving set, rep and rest choices
    Goal, label = "goal", default = Strength, {
        /// Maximal strength
        Strength => "strength",
        /// Muscle growth
        Hypertrophy => "hypertrophy",
        /// Muscular endurance
        Endurance => "endurance",
    }
}

preference_enum! {
    /// Training age of the lifter
    ExperienceLevel, label = "experience level", default = Intermediate, {
        /// Under a year of structured training
        Novice => "novice",
        /// One to three years of structured training
        Intermediate => "intermediate",
        /// Several years of structured training
        Advanced => "advanced",
    }
}

preference_enum! {
    /// How well the lifter tolerates and recovers from training load
    RecoveryLevel, label = "recovery level", default = Balanced, {
        /// Recovers slowly, needs less volume
        Limited => "limited",
        /// Typical recovery
        Balanced => "balanced",
        /// Recovers quickly, tolerates more volume
        Gifted => "gifted",
    }
}

/// Immutable preference record for one generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInput {
    /// Weight of the reference lift (kg)
    pub weight: f64,
    /// Reps performed with the reference weight
    pub reps: u32,
    /// Movement type of the reference lift
    #[serde(default)]
    pub movement_type: MovementType,
    /// Training goal
    #[serde(default)]
    pub goal: Goal,
    /// Training age
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    /// Recovery capacity
    #[serde(default, alias = "talent_level")]
    pub recovery_level: RecoveryLevel,
    /// Requested training days per week (clamped to 2-4 on use)
    #[serde(default = "default_sessions_per_week")]
    pub sessions_per_week: u8,
    /// Chosen periodization scheme
    #[serde(default)]
    pub scheme: SchemeId,
    /// Explicit program length override in weeks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weeks: Option<u32>,
}

const fn default_sessions_per_week() -> u8 {
    DEFAULT_SESSIONS_PER_WEEK
}

impl Default for UserInput {
    fn default() -> Self {
        Self {
            weight: 0.0,
            reps: 0,
            movement_type: MovementType::default(),
            goal: Goal::default(),
            experience_level: ExperienceLevel::default(),
            recovery_level: RecoveryLevel::default(),
            sessions_per_week: DEFAULT_SESSIONS_PER_WEEK,
            scheme: SchemeId::default(),
            weeks: None,
        }
    }
}

impl UserInput {
    /// Create a record for a reference lift with default preferences
    #[must_use]
    pub fn new(weight: f64, reps: u32) -> Self {
        Self {
            weight,
            reps,
            ..Self::default()
        }
    }

    /// Copy with a different scheme
    #[must_use]
    pub fn with_scheme(mut self, scheme: SchemeId) -> Self {
        self.scheme = scheme;
        self
    }

    /// Copy with a different goal
    #[must_use]
    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goal = goal;
        self
    }

    /// Copy with a different experience level
    #[must_use]
    pub fn with_experience(mut self, experience_level: ExperienceLevel) -> Self {
        self.experience_level = experience_level;
        self
    }

    /// Copy with a different recovery level
    #[must_use]
    pub fn with_recovery(mut self, recovery_level: RecoveryLevel) -> Self {
        self.recovery_level = recovery_level;
        self
    }

    /// Copy with a different movement type
    #[must_use]
    pub fn with_movement(mut self, movement_type: MovementType) -> Self {
        self.movement_type = movement_type;
        self
    }

    /// Copy with a different session frequency
    #[must_use]
    pub fn with_sessions_per_week(mut self, sessions_per_week: u8) -> Self {
        self.sessions_per_week = sessions_per_week;
        self
    }

    /// Copy with an explicit week count
    #[must_use]
    pub fn with_weeks(mut self, weeks: Option<u32>) -> Self {
        self.weeks = weeks;
        self
    }

    /// Reference weight with non-finite or negative values mapped to zero
    #[must_use]
    pub fn safe_weight(&self) -> f64 {
        sanitize::non_negative(self.weight)
    }

    /// Session frequency clamped to the supported range
    #[must_use]
    pub fn clamped_sessions(&self) -> u8 {
        self.sessions_per_week
            .clamp(MIN_SESSIONS_PER_WEEK, MAX_SESSIONS_PER_WEEK)
    }

    /// Copy with every numeric field sanitized; the original is left untouched
    #[must_use]
    pub fn sanitized(&self) -> Self {
        Self {
            weight: self.safe_weight(),
            sessions_per_week: self.clamped_sessions(),
            weeks: self.weeks.filter(|weeks| *weeks > 0),
            ..self.clone()
        }
    }

    /// Form-level validation run before the engine is invoked
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` when the weight or reps are not
    /// positive, or `AppError::ValueOutOfRange` when the session frequency
    /// falls outside 2-4.
    pub fn validate(&self) -> AppResult<()> {
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(AppError::invalid_input(
                "Weight must be a number greater than zero",
            ));
        }
        if self.reps == 0 {
            return Err(AppError::invalid_input(
                "Reps must be a whole number greater than zero",
            ));
        }
        if !(MIN_SESSIONS_PER_WEEK..=MAX_SESSIONS_PER_WEEK).contains(&self.sessions_per_week) {
            return Err(AppError::out_of_range(format!(
                "Sessions per week must be between {MIN_SESSIONS_PER_WEEK} and {MAX_SESSIONS_PER_WEEK}, got {}",
                self.sessions_per_week
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_strict_parse_lists_valid_options() {
        let err = "power".parse::<Goal>().err();
        let message = err.map(|e| e.message).unwrap_or_default();
        assert!(message.contains("strength, hypertrophy, endurance"));
    }

    #[test]
    fn test_lenient_parse_falls_back() {
        assert_eq!(Goal::parse_lenient("POWER"), Goal::Strength);
        assert_eq!(Goal::parse_lenient(" Hypertrophy "), Goal::Hypertrophy);
        assert_eq!(
            ExperienceLevel::parse_lenient(""),
            ExperienceLevel::Intermediate
        );
        assert_eq!(RecoveryLevel::parse_lenient("x"), RecoveryLevel::Balanced);
        assert_eq!(MovementType::parse_lenient("x"), MovementType::Compound);
    }

    #[test]
    fn test_deserialize_falls_back_on_stale_keys() {
        let json = r#"{"weight":120,"reps":3,"goal":"power","experience_level":"Advanced","talent_level":"elite","scheme":"westside"}"#;
        let input: UserInput = serde_json::from_str(json).unwrap_or_else(|_| UserInput::new(0.0, 0));
        assert_eq!(input.weight, 120.0);
        assert_eq!(input.goal, Goal::Strength);
        assert_eq!(input.experience_level, ExperienceLevel::Advanced);
        assert_eq!(input.recovery_level, RecoveryLevel::Balanced);
        assert_eq!(input.scheme, SchemeId::TopSetBackoff);

        let round_trip = serde_json::to_string(&Goal::Hypertrophy).unwrap_or_default();
        assert_eq!(round_trip, "\"hypertrophy\"");
    }

    #[test]
    fn test_sanitized_clamps_without_mutating() {
        let input = UserInput {
            weight: f64::NAN,
            sessions_per_week: 9,
            weeks: Some(0),
            ..UserInput::new(0.0, 5)
        };
        let clean = input.sanitized();
        assert_eq!(clean.weight, 0.0);
        assert_eq!(clean.sessions_per_week, 4);
        assert_eq!(clean.weeks, None);
        assert!(input.weight.is_nan());
    }

    #[test]
    fn test_validate_reports_each_failure() {
        let bad_weight = UserInput::new(0.0, 5).validate();
        assert!(matches!(bad_weight, Err(ref e) if e.code == ErrorCode::InvalidInput));

        let bad_reps = UserInput::new(100.0, 0).validate();
        assert!(matches!(bad_reps, Err(ref e) if e.code == ErrorCode::InvalidInput));

        let bad_sessions = UserInput::new(100.0, 5).with_sessions_per_week(5).validate();
        assert!(matches!(bad_sessions, Err(ref e) if e.code == ErrorCode::ValueOutOfRange));

        assert!(UserInput::new(100.0, 5).validate().is_ok());
    }

    #[test]
    fn test_deserialize_accepts_talent_level_alias() {
        let json = r#"{"weight": 100.0, "reps": 5, "talent_level": "gifted"}"#;
        let input: UserInput = serde_json::from_str(json).unwrap_or_default();
        assert_eq!(input.recovery_level, RecoveryLevel::Gifted);
        assert_eq!(input.sessions_per_week, 3);
    }
}
