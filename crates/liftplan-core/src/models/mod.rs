// ABOUTME: Core data models for preferences, generated programs and derived metrics
// ABOUTME: Shared by the engine, the persistence layer and renderers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

/// User preference record and its enum dimensions
pub mod input;
/// Effort targets and set notation
pub mod notation;
/// Program, week and session records
pub mod program;
/// Scheme identifiers
pub mod scheme;
/// Session stress metrics
pub mod summary;

pub use input::{ExperienceLevel, Goal, MovementType, RecoveryLevel, UserInput};
pub use notation::{format_number, set_line, RpeTarget};
pub use program::{Accessory, Program, ProgramSession, ProgramWeek, RepMaxEntry};
pub use scheme::SchemeId;
pub use summary::{IntensitySummary, MuscleGroupSplit, StressLabel};
