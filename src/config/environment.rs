// ABOUTME: Application configuration assembled from environment variables
// ABOUTME: Program store location, logging settings and validated engine policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Contributors

use std::env;
use std::path::{Path, PathBuf};

use liftplan_core::constants::env_vars;
use liftplan_core::errors::AppResult;
use liftplan_engine::config::EngineConfig;
use tracing::{debug, warn};

use crate::logging::LoggingConfig;

/// Directory created under the platform data dir
const DATA_DIR_NAME: &str = "liftplan";
/// File holding every saved program
const STORE_FILE_NAME: &str = "programs.json";

/// Configuration for the CLI and service layer
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JSON file backing the program repository
    pub store_path: PathBuf,
    /// Logging setup
    pub logging: LoggingConfig,
    /// Engine policy
    pub engine: EngineConfig,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns a configuration error when an engine override cannot be parsed
    /// or fails validation
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            store_path: resolve_store_path(env::var(env_vars::STORE_PATH).ok().as_deref()),
            logging: LoggingConfig::from_env(),
            engine: EngineConfig::from_env()?,
        };
        debug!(store = %config.store_path.display(), "Loaded application configuration");
        Ok(config)
    }

    /// Copy with an explicit store location
    #[must_use]
    pub fn with_store_path(mut self, path: impl AsRef<Path>) -> Self {
        self.store_path = path.as_ref().to_path_buf();
        self
    }
}

/// Store location: an explicit override, else `<data dir>/liftplan/programs.json`
///
/// Platforms without a data directory fall back to the working directory.
#[must_use]
pub fn resolve_store_path(override_path: Option<&str>) -> PathBuf {
    if let Some(path) = override_path.map(str::trim).filter(|path| !path.is_empty()) {
        return PathBuf::from(path);
    }
    dirs::data_dir().map_or_else(
        || {
            warn!("No platform data directory, storing programs in the working directory");
            PathBuf::from(STORE_FILE_NAME)
        },
        |dir| dir.join(DATA_DIR_NAME).join(STORE_FILE_NAME),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_store_path_wins() {
        assert_eq!(
            resolve_store_path(Some("/tmp/plans.json")),
            PathBuf::from("/tmp/plans.json")
        );
    }

    #[test]
    fn test_blank_override_uses_default_file_name() {
        let path = resolve_store_path(Some("  "));
        assert!(path.ends_with(STORE_FILE_NAME));
    }
}
