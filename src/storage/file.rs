// ABOUTME: JSON file program repository: one array of programs rewritten atomically
// ABOUTME: A missing or corrupt file reads as an empty store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use liftplan_core::errors::{AppResult, StorageError};
use liftplan_core::models::Program;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::{remove_from, upsert_into, ProgramRepository};

/// Repository backed by a single JSON file
#[derive(Debug)]
pub struct FileRepository {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl FileRepository {
    /// Repository at `path`; the file is created on first write
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Backing file location
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Vec<Program>, StorageError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Program store does not exist yet");
                return Ok(Vec::new());
            }
            Err(error) => return Err(error.into()),
        };

        match serde_json::from_slice(&bytes) {
            Ok(programs) => Ok(programs),
            Err(error) => {
                warn!(
                    path = %self.path.display(),
                    %error,
                    "Program store is unreadable, treating it as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    async fn write_all(&self, programs: &[Program]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(programs)?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, json).await?;
        fs::rename(&staging, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl ProgramRepository for FileRepository {
    async fn list(&self) -> AppResult<Vec<Program>> {
        Ok(self.read_all().await?)
    }

    async fn get(&self, id: &str) -> AppResult<Option<Program>> {
        Ok(self
            .read_all()
            .await?
            .into_iter()
            .find(|program| program.id == id))
    }

    async fn upsert(&self, program: Program) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut programs = self.read_all().await?;
        let id = program.id.clone();
        upsert_into(&mut programs, program);
        self.write_all(&programs).await?;
        info!(%id, path = %self.path.display(), "Saved program");
        Ok(())
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let _guard = self.write_lock.lock().await;
        let mut programs = self.read_all().await?;
        if !remove_from(&mut programs, id) {
            return Ok(false);
        }
        self.write_all(&programs).await?;
        info!(%id, path = %self.path.display(), "Deleted program");
        Ok(true)
    }
}
