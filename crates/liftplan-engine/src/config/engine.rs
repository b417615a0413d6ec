// ABOUTME: Tunable engine policy with defaults, environment overrides and validation
// ABOUTME: Deload cadence and load, weekly progression step, fallback capacity, rounding step
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

use std::env;
use std::str::FromStr;

use liftplan_core::constants::defaults::{DEFAULT_ONE_RM, WEEKLY_STEP_BASE};
use liftplan_core::constants::deload::{
    DEFAULT_CADENCE_WEEKS, DEFAULT_LOAD_FRACTION, MAX_CADENCE_WEEKS, MIN_CADENCE_WEEKS,
};
use liftplan_core::constants::env_vars;
use liftplan_core::constants::equipment::DEFAULT_WEIGHT_STEP;
use liftplan_core::intelligence::algorithms::OneRepMaxFormula;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::ConfigError;

/// Deload week policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeloadConfig {
    /// A deload lands on every Nth week before recovery adjustment
    pub cadence_weeks: u32,
    /// Deload load as a fraction of the preceding working weight
    pub load_fraction: f64,
}

impl Default for DeloadConfig {
    fn default() -> Self {
        Self {
            cadence_weeks: DEFAULT_CADENCE_WEEKS,
            load_fraction: DEFAULT_LOAD_FRACTION,
        }
    }
}

/// Weekly progression policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Weekly capacity growth before the experience-based rate is applied
    pub weekly_step_base: f64,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            weekly_step_base: WEEKLY_STEP_BASE,
        }
    }
}

/// Engine configuration shared by every scheme generator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Deload policy
    pub deload: DeloadConfig,
    /// Progression policy
    pub progression: ProgressionConfig,
    /// Capacity used when the estimated one-rep-max is zero
    pub default_one_rm: f64,
    /// Formula used to estimate the one-rep-max from the reference lift
    pub formula: OneRepMaxFormula,
    /// Rounding step for barbell loads (kg)
    pub weight_step: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            deload: DeloadConfig::default(),
            progression: ProgressionConfig::default(),
            default_one_rm: DEFAULT_ONE_RM,
            formula: OneRepMaxFormula::default(),
            weight_step: DEFAULT_WEIGHT_STEP,
        }
    }
}

impl EngineConfig {
    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparseable value
    /// or the resulting configuration fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(?config, "Loaded engine configuration");
        Ok(config)
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(cadence) = env_override(env_vars::DELOAD_CADENCE)? {
            self.deload.cadence_weeks = cadence;
        }
        if let Some(fraction) = env_override(env_vars::DELOAD_FRACTION)? {
            self.deload.load_fraction = fraction;
        }
        if let Some(step) = env_override(env_vars::WEEKLY_STEP)? {
            self.progression.weekly_step_base = step;
        }
        if let Some(step) = env_override(env_vars::WEIGHT_STEP)? {
            self.weight_step = step;
        }
        if let Some(raw) = env_override::<String>(env_vars::FORMULA)? {
            self.formula = raw
                .parse()
                .map_err(|_| ConfigError::Parse(format!("{}={raw}", env_vars::FORMULA)))?;
        }
        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when any policy value is outside its accepted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_CADENCE_WEEKS..=MAX_CADENCE_WEEKS).contains(&self.deload.cadence_weeks) {
            return Err(ConfigError::ValueOutOfRange(
                "deload cadence must be between 2 and 52 weeks",
            ));
        }
        if !(self.deload.load_fraction > 0.0 && self.deload.load_fraction < 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "deload load fraction must be between 0 and 1 (exclusive)",
            ));
        }
        if !(0.0..=0.1).contains(&self.progression.weekly_step_base) {
            return Err(ConfigError::ValueOutOfRange(
                "weekly progress step must be between 0 and 0.1",
            ));
        }
        if !(self.default_one_rm.is_finite() && self.default_one_rm > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "default one-rep-max must be greater than zero",
            ));
        }
        if !(self.weight_step.is_finite() && self.weight_step > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "weight step must be greater than zero",
            ));
        }
        Ok(())
    }
}

fn env_override<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("{name}={raw}"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(error) => Err(error.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.deload.cadence_weeks, 4);
        assert_eq!(config.deload.load_fraction, 0.6);
        assert_eq!(config.default_one_rm, 100.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = EngineConfig::default();
        config.deload.cadence_weeks = 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));

        let mut config = EngineConfig::default();
        config.deload.cadence_weeks = u32::MAX;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));

        let mut config = EngineConfig::default();
        config.deload.load_fraction = 1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));

        let mut config = EngineConfig::default();
        config.weight_step = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }
}
