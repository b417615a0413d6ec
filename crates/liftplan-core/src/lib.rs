// ABOUTME: Core types and constants for the liftplan program generator
// ABOUTME: Foundation crate with error handling, data models, sanitizers and numeric policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

#![deny(unsafe_code)]

//! # Liftplan Core
//!
//! Foundation crate providing shared types and constants for the liftplan
//! workspace. It changes rarely, so the engine and the application crate can
//! rebuild independently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `StorageError`
//! - **constants**: Numeric policy organized by domain
//! - **sanitize**: Boundary functions that turn malformed numbers into safe values
//! - **models**: `UserInput`, `Program`, `ProgramWeek`, `ProgramSession` and metrics
//! - **intelligence**: Algorithm selection types (`OneRepMaxFormula`)

/// Unified error handling system with standard error codes
pub mod errors;

/// Numeric policy organized by domain
pub mod constants;

/// Numeric sanitizers for input boundaries
pub mod sanitize;

/// Core data models
pub mod models;

/// Intelligence types (`OneRepMaxFormula`)
pub mod intelligence;
