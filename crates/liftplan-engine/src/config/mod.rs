// ABOUTME: Configuration module for the liftplan-engine crate
// ABOUTME: Re-exports engine policy configuration and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

/// Engine policy: deload cadence, progression step, fallbacks
pub mod engine;
/// Configuration validation errors
pub mod error;

pub use engine::{DeloadConfig, EngineConfig, ProgressionConfig};
pub use error::ConfigError;
