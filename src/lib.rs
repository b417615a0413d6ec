// ABOUTME: Main library entry point for the liftplan periodized program generator
// ABOUTME: Re-exports the core and engine crates and adds persistence, rendering and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

#![deny(unsafe_code)]

//! # Liftplan
//!
//! Generates multi-week strength programs from one reference lift
//! (weight × reps) and a handful of preferences, using one of eight
//! periodization schemes.
//!
//! ## Architecture
//!
//! - **`liftplan-core`**: data models, errors, constants and sanitizers
//! - **`liftplan-engine`**: the pure generator (no I/O, deterministic)
//! - this crate: the collaborators around it
//!   - **config**: environment-driven application configuration
//!   - **logging**: tracing subscriber setup
//!   - **storage**: program repositories (memory, JSON file)
//!   - **formatters**: text and JSON renderers
//!   - **service**: `PlannerService` orchestration
//!
//! ## Example
//!
//! ```rust,no_run
//! use liftplan::engine::{build_plan, EngineConfig};
//! use liftplan::models::{SchemeId, UserInput};
//!
//! let input = UserInput::new(100.0, 5).with_scheme(SchemeId::TexasMethod);
//! let program = build_plan(&input, &EngineConfig::default());
//! assert_eq!(program.weeks[0].sessions.len(), 3);
//! ```

/// Application configuration
pub mod config;

/// Output renderers
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Program service layer
pub mod service;

/// Program persistence
pub mod storage;

pub use liftplan_core::{constants, errors, models, sanitize};
pub use liftplan_engine as engine;
