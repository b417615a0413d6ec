// ABOUTME: CLI command handlers returning rendered output for main to print
// ABOUTME: Generation, estimation, comparison and saved-program management
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

use std::path::Path;

use liftplan::engine::duration::preview_duration;
use liftplan::errors::AppResult;
use liftplan::formatters::{
    render_comparison, render_estimate, render_program, render_program_list, OutputFormat,
};
use liftplan::models::{ExperienceLevel, Goal, MovementType, RecoveryLevel, SchemeId, UserInput};
use liftplan::service::{load_profile, PlannerService};
use liftplan::storage::ProgramRepository;
use serde_json::json;

/// Preferences collected from the command line
pub struct PlanArgs {
    pub weight: f64,
    pub reps: u32,
    pub scheme: SchemeId,
    pub goal: Goal,
    pub experience: ExperienceLevel,
    pub recovery: RecoveryLevel,
    pub movement: MovementType,
    pub sessions: u8,
    pub weeks: Option<u32>,
}

impl PlanArgs {
    fn user_input(&self) -> UserInput {
        UserInput::new(self.weight, self.reps)
            .with_scheme(self.scheme)
            .with_goal(self.goal)
            .with_experience(self.experience)
            .with_recovery(self.recovery)
            .with_movement(self.movement)
            .with_sessions_per_week(self.sessions)
            .with_weeks(self.weeks)
    }
}

pub async fn generate<R: ProgramRepository>(
    service: &PlannerService<R>,
    args: &PlanArgs,
    save: bool,
    format: OutputFormat,
) -> AppResult<String> {
    let mut program = service.generate(&args.user_input())?;
    if save {
        program = service.save(program).await?;
    }
    let rendered = render_program(&program, format)?;
    if save && format == OutputFormat::Text {
        return Ok(format!("{rendered}\n\nSaved as {}", program.id));
    }
    Ok(rendered)
}

pub async fn generate_from_profile<R: ProgramRepository>(
    service: &PlannerService<R>,
    path: &Path,
    save: bool,
    format: OutputFormat,
) -> AppResult<String> {
    let input = load_profile(path).await?;
    let mut program = service.generate(&input)?;
    if save {
        program = service.save(program).await?;
    }
    render_program(&program, format)
}

pub fn compare<R: ProgramRepository>(
    service: &PlannerService<R>,
    args: &PlanArgs,
    format: OutputFormat,
) -> AppResult<String> {
    render_comparison(&service.compare(&args.user_input())?, format)
}

pub fn estimate<R: ProgramRepository>(
    service: &PlannerService<R>,
    weight: f64,
    reps: u32,
    format: OutputFormat,
) -> AppResult<String> {
    let estimate = service.estimate(weight, reps);
    render_estimate(estimate.one_rm, &estimate.variants, &estimate.rep_maxes, format)
}

pub async fn list<R: ProgramRepository>(
    service: &PlannerService<R>,
    format: OutputFormat,
) -> AppResult<String> {
    render_program_list(&service.list().await?, format)
}

pub async fn show<R: ProgramRepository>(
    service: &PlannerService<R>,
    id: &str,
    format: OutputFormat,
) -> AppResult<String> {
    render_program(&service.get(id).await?, format)
}

pub async fn delete<R: ProgramRepository>(
    service: &PlannerService<R>,
    id: &str,
) -> AppResult<String> {
    service.delete(id).await?;
    Ok(format!("Deleted {id}"))
}

pub fn schemes(format: OutputFormat) -> AppResult<String> {
    if format == OutputFormat::Json {
        let entries: Vec<_> = SchemeId::ALL
            .iter()
            .map(|scheme| {
                json!({
                    "id": scheme.id(),
                    "name": scheme.display_name(),
                    "description": scheme.description(),
                    "base_weeks": preview_duration(*scheme, Goal::Hypertrophy),
                })
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&entries)?);
    }
    Ok(SchemeId::ALL
        .iter()
        .map(|scheme| {
            format!(
                "{:<20} {:<24} {} wk  {}",
                scheme.id(),
                scheme.display_name(),
                preview_duration(*scheme, Goal::Hypertrophy),
                scheme.description()
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}
