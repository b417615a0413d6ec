// ABOUTME: Storage error types for program persistence backends
// ABOUTME: Covers I/O failures and malformed stored data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

use std::io;
use thiserror::Error;

/// Errors raised by program repositories
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    /// Underlying file system failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Stored data could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
