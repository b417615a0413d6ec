// ABOUTME: Program persistence abstraction with pluggable repository backends
// ABOUTME: Saved programs are stored verbatim and keyed by their id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

/// JSON file repository
pub mod file;
/// In-memory repository
pub mod memory;

use async_trait::async_trait;
use liftplan_core::errors::AppResult;
use liftplan_core::models::Program;

pub use file::FileRepository;
pub use memory::InMemoryRepository;

/// Key-value store of generated programs
///
/// Programs are kept in insertion order; an upsert of an existing id replaces
/// the record in place.
#[async_trait]
pub trait ProgramRepository: Send + Sync {
    /// Every saved program
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn list(&self) -> AppResult<Vec<Program>>;

    /// Program with the given id, if saved
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn get(&self, id: &str) -> AppResult<Option<Program>>;

    /// Insert or replace a program by id
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn upsert(&self, program: Program) -> AppResult<()>;

    /// Remove a program; returns whether it existed
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// Replace the record with the same id or append it
fn upsert_into(programs: &mut Vec<Program>, program: Program) {
    match programs.iter_mut().find(|existing| existing.id == program.id) {
        Some(existing) => *existing = program,
        None => programs.push(program),
    }
}

/// Remove every record with the id; returns whether any was removed
fn remove_from(programs: &mut Vec<Program>, id: &str) -> bool {
    let before = programs.len();
    programs.retain(|program| program.id != id);
    programs.len() != before
}
