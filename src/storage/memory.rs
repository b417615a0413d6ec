// ABOUTME: In-memory program repository for tests and ephemeral sessions
// ABOUTME: Shares one Vec of programs behind an async RwLock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

use std::sync::Arc;

use async_trait::async_trait;
use liftplan_core::errors::AppResult;
use liftplan_core::models::Program;
use tokio::sync::RwLock;

use super::{remove_from, upsert_into, ProgramRepository};

/// Repository that lives only as long as the process
///
/// Clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    store: Arc<RwLock<Vec<Program>>>,
}

impl InMemoryRepository {
    /// Empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProgramRepository for InMemoryRepository {
    async fn list(&self) -> AppResult<Vec<Program>> {
        Ok(self.store.read().await.clone())
    }

    async fn get(&self, id: &str) -> AppResult<Option<Program>> {
        Ok(self
            .store
            .read()
            .await
            .iter()
            .find(|program| program.id == id)
            .cloned())
    }

    async fn upsert(&self, program: Program) -> AppResult<()> {
        upsert_into(&mut *self.store.write().await, program);
        Ok(())
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        Ok(remove_from(&mut *self.store.write().await, id))
    }
}
