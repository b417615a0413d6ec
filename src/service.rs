// ABOUTME: Planner service wiring engine configuration, the generator and a program repository
// ABOUTME: Generation stays synchronous; only persistence is async
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

use std::collections::BTreeMap;
use std::path::Path;

use chrono::Utc;
use liftplan_core::errors::{AppError, AppResult};
use liftplan_core::models::{Program, RepMaxEntry, UserInput};
use liftplan_engine::algorithms::{
    build_rep_max_table, estimate_all_formula_variants, estimate_one_rep_max,
};
use liftplan_engine::{build_plan, compare_schemes, EngineConfig, SchemeComparison};
use tokio::fs;
use tracing::{debug, info};
use uuid::Uuid;

use crate::storage::ProgramRepository;

/// Capacity estimate for a reference lift
#[derive(Debug, Clone, PartialEq)]
pub struct OneRepMaxEstimate {
    /// Estimate from the configured formula
    pub one_rm: f64,
    /// Estimates from every formula keyed by name
    pub variants: BTreeMap<String, f64>,
    /// Rep-max ladder for `one_rm`
    pub rep_maxes: Vec<RepMaxEntry>,
}

/// Validates requests, generates programs and manages saved programs
pub struct PlannerService<R: ProgramRepository> {
    config: EngineConfig,
    repository: R,
}

impl<R: ProgramRepository> PlannerService<R> {
    /// Service over a repository
    pub const fn new(config: EngineConfig, repository: R) -> Self {
        Self { config, repository }
    }

    /// Engine configuration in use
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate the request and build its program
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-positive weight or reps, or a
    /// session frequency outside 2-4
    pub fn generate(&self, input: &UserInput) -> AppResult<Program> {
        input.validate()?;
        Ok(build_plan(input, &self.config))
    }

    /// Estimate capacity with every formula
    #[must_use]
    pub fn estimate(&self, weight: f64, reps: u32) -> OneRepMaxEstimate {
        let one_rm = estimate_one_rep_max(weight, reps, self.config.formula);
        OneRepMaxEstimate {
            one_rm,
            variants: estimate_all_formula_variants(weight, reps),
            rep_maxes: build_rep_max_table(one_rm),
        }
    }

    /// Validate the request and summarize every scheme for it
    ///
    /// # Errors
    ///
    /// Returns the same validation errors as [`Self::generate`]
    pub fn compare(&self, input: &UserInput) -> AppResult<Vec<SchemeComparison>> {
        input.validate()?;
        Ok(compare_schemes(input, &self.config))
    }

    /// Save a copy of the program under a fresh id, stamped with today's date
    ///
    /// # Errors
    ///
    /// Returns a storage error if the repository cannot be written
    pub async fn save(&self, program: Program) -> AppResult<Program> {
        let name = format!("{} ({})", program.name, Utc::now().format("%Y-%m-%d"));
        let saved = program.with_id(Uuid::new_v4().to_string()).with_name(name);
        self.repository.upsert(saved.clone()).await?;
        info!(id = %saved.id, scheme = saved.scheme.id(), "Program saved");
        Ok(saved)
    }

    /// Every saved program
    ///
    /// # Errors
    ///
    /// Returns a storage error if the repository cannot be read
    pub async fn list(&self) -> AppResult<Vec<Program>> {
        self.repository.list().await
    }

    /// A saved program by id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, or a storage error
    pub async fn get(&self, id: &str) -> AppResult<Program> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Program '{id}'")).with_resource_id(id))
    }

    /// Delete a saved program
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, or a storage error
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if self.repository.delete(id).await? {
            info!(%id, "Program deleted");
            Ok(())
        } else {
            Err(AppError::not_found(format!("Program '{id}'")).with_resource_id(id))
        }
    }
}

/// Read a lifter profile from a JSON file
///
/// The file holds a serialized [`UserInput`]. Unknown goal, experience,
/// recovery, movement or scheme keys fall back to their defaults with a
/// warning instead of rejecting the profile.
///
/// # Errors
///
/// Returns `InvalidInput` when the file cannot be read or is not a profile
pub async fn load_profile(path: &Path) -> AppResult<UserInput> {
    let raw = fs::read_to_string(path).await.map_err(|error| {
        AppError::invalid_input(format!("Cannot read profile {}: {error}", path.display()))
            .with_source(error)
    })?;
    let input: UserInput = serde_json::from_str(&raw).map_err(|error| {
        AppError::invalid_input(format!("Malformed profile {}: {error}", path.display()))
            .with_source(error)
    })?;
    debug!(path = %path.display(), scheme = input.scheme.id(), "Profile loaded");
    Ok(input)
}
