// ABOUTME: Configuration module for the liftplan application crate
// ABOUTME: Re-exports the environment-driven application configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

/// Environment-driven application configuration
pub mod environment;

pub use environment::{resolve_store_path, AppConfig};
