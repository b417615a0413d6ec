// ABOUTME: Liftplan CLI - generate, estimate, compare and manage saved strength programs
// ABOUTME: Thin clap front end over PlannerService with a JSON file store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors
//!
//! Usage:
//! ```bash
//! # Six-to-twelve week program from a 100 kg × 5 reference lift
//! liftplan generate --weight 100 --reps 5 --scheme texas-method
//!
//! # Same program as JSON, saved to the program store
//! liftplan generate --weight 100 --reps 5 --format json --save
//!
//! # Program from a saved lifter profile (unknown keys fall back to defaults)
//! liftplan profile lifter.json
//!
//! # Summary of every scheme for the same lifter
//! liftplan compare --weight 100 --reps 5 --goal hypertrophy
//!
//! # One-rep-max estimates and rep-max table
//! liftplan estimate --weight 100 --reps 5
//!
//! # Manage saved programs
//! liftplan list
//! liftplan show <id>
//! liftplan delete <id>
//! ```

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};
use liftplan::config::AppConfig;
use liftplan::errors::AppError;
use liftplan::formatters::OutputFormat;
use liftplan::models::{ExperienceLevel, Goal, MovementType, RecoveryLevel, SchemeId};
use liftplan::service::PlannerService;
use liftplan::storage::FileRepository;
use tracing::debug;

use commands::PlanArgs;

#[derive(Parser)]
#[command(
    name = "liftplan",
    about = "Periodized strength program generator",
    long_about = "Builds multi-week strength programs from one reference lift using one of eight periodization schemes."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format: text or json
    #[arg(long, short = 'f', global = true, default_value = "text", value_parser = parse_format)]
    format: OutputFormat,

    /// Program store override (defaults to LIFTPLAN_STORE or the data dir)
    #[arg(long, global = true)]
    store: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a program
    Generate {
        #[command(flatten)]
        plan: PlanCli,

        /// Save the generated program to the store
        #[arg(long)]
        save: bool,
    },

    /// Generate a program from a JSON lifter profile
    Profile {
        /// Path to the profile file
        path: PathBuf,

        /// Save the generated program to the store
        #[arg(long)]
        save: bool,
    },

    /// Compare every scheme for the same lifter
    Compare {
        #[command(flatten)]
        plan: PlanCli,
    },

    /// Estimate a one-rep-max with every formula
    Estimate {
        /// Reference weight (kg)
        #[arg(long)]
        weight: f64,

        /// Reps performed with the reference weight
        #[arg(long)]
        reps: u32,
    },

    /// List saved programs
    List,

    /// Show a saved program
    Show {
        /// Program id
        id: String,
    },

    /// Delete a saved program
    Delete {
        /// Program id
        id: String,
    },

    /// List available schemes
    Schemes,
}

/// Preference flags shared by `generate` and `compare`
#[derive(clap::Args)]
struct PlanCli {
    /// Reference weight (kg)
    #[arg(long)]
    weight: f64,

    /// Reps performed with the reference weight
    #[arg(long)]
    reps: u32,

    /// Periodization scheme id
    #[arg(long, default_value = "top-set-backoff", value_parser = parse_key::<SchemeId>)]
    scheme: SchemeId,

    /// Training goal: strength, hypertrophy or endurance
    #[arg(long, default_value = "strength", value_parser = parse_key::<Goal>)]
    goal: Goal,

    /// Experience level: novice, intermediate or advanced
    #[arg(long, default_value = "intermediate", value_parser = parse_key::<ExperienceLevel>)]
    experience: ExperienceLevel,

    /// Recovery level: limited, balanced or gifted
    #[arg(long, default_value = "balanced", value_parser = parse_key::<RecoveryLevel>)]
    recovery: RecoveryLevel,

    /// Movement type: compound or isolation
    #[arg(long, default_value = "compound", value_parser = parse_key::<MovementType>)]
    movement: MovementType,

    /// Training days per week (2-4)
    #[arg(long, default_value = "3")]
    sessions: u8,

    /// Program length override in weeks (clamped to 4-12)
    #[arg(long)]
    weeks: Option<u32>,
}

impl From<PlanCli> for PlanArgs {
    fn from(cli: PlanCli) -> Self {
        Self {
            weight: cli.weight,
            reps: cli.reps,
            scheme: cli.scheme,
            goal: cli.goal,
            experience: cli.experience,
            recovery: cli.recovery,
            movement: cli.movement,
            sessions: cli.sessions,
            weeks: cli.weeks,
        }
    }
}

fn parse_key<T: FromStr<Err = AppError>>(raw: &str) -> Result<T, AppError> {
    raw.parse()
}

fn parse_format(raw: &str) -> Result<OutputFormat, AppError> {
    match raw.trim().to_lowercase().as_str() {
        "text" | "json" => Ok(OutputFormat::from_str_param(raw)),
        other => Err(AppError::invalid_input(format!(
            "Unknown format: '{other}'. Valid options: text, json"
        ))),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Error: {error:#}");
            let status = error
                .downcast_ref::<AppError>()
                .map_or(1, |app| app.code.exit_code());
            ExitCode::from(u8::try_from(status).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> Result<String> {
    let mut config = AppConfig::from_env()?;
    if let Some(store) = &cli.store {
        config = config.with_store_path(store);
    }
    let logging = if cli.verbose {
        config.logging.verbose()
    } else {
        config.logging
    };
    logging.init()?;
    debug!(store = %config.store_path.display(), format = %cli.format, "liftplan CLI");

    let service = PlannerService::new(config.engine, FileRepository::new(config.store_path));
    let format = cli.format;

    let output = match cli.command {
        Command::Generate { plan, save } => {
            commands::generate(&service, &plan.into(), save, format).await?
        }
        Command::Profile { path, save } => {
            commands::generate_from_profile(&service, &path, save, format).await?
        }
        Command::Compare { plan } => commands::compare(&service, &plan.into(), format)?,
        Command::Estimate { weight, reps } => commands::estimate(&service, weight, reps, format)?,
        Command::List => commands::list(&service, format).await?,
        Command::Show { id } => commands::show(&service, &id, format).await?,
        Command::Delete { id } => commands::delete(&service, &id).await?,
        Command::Schemes => commands::schemes(format)?,
    };
    Ok(output)
}
