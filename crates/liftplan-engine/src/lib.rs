// ABOUTME: Periodization engine turning a reference lift and preferences into a weekly program
// ABOUTME: Pure and deterministic; emits tracing events but never installs a subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

#![deny(unsafe_code)]

//! # Liftplan Engine
//!
//! Everything between a [`UserInput`](liftplan_core::models::UserInput) and a
//! generated [`Program`](liftplan_core::models::Program). No I/O happens here;
//! two calls with identical input produce identical programs.
//!
//! ## Modules
//!
//! - **algorithms**: Rounding, one-rep-max estimation and the percent/RPE/volume core
//! - **adjustments**: Preference resolvers (intensity, volume, days, rest, deloads)
//! - **duration**: Program length per scheme and goal
//! - **metrics**: Session tonnage, stress and recovery summaries
//! - **accessories**: Secondary lift prescriptions
//! - **rpe_guidance**: Effort translation for novices
//! - **schemes**: The eight scheme generators and their dispatch table
//! - **planner**: Full plan building and scheme comparison
//! - **config**: Tunable engine policy

/// Secondary lift prescriptions
pub mod accessories;

/// Preference resolvers
pub mod adjustments;

/// Rounding, capacity estimation and progression math
pub mod algorithms;

/// Engine policy configuration
pub mod config;

/// Program length resolution
pub mod duration;

/// Session metrics engine
pub mod metrics;

/// Plan builder and scheme comparison
pub mod planner;

/// RPE guide text
pub mod rpe_guidance;

/// Scheme generators
pub mod schemes;

pub use config::{ConfigError, EngineConfig};
pub use planner::{build_plan, compare_schemes, SchemeComparison};
pub use schemes::{day_template_len, generate_program};
