//! Core runtime configuration.
//!
//! # Responsibility
//! - Describe where state and logs live and how verbose logging is.
//! - Resolve defaults and environment overrides in one place.
//!
//! # Invariants
//! - `db_path()` is always `data_dir/db_file_name`.
//! - Environment overrides are trimmed; blank values are ignored.

use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_DB_FILE_NAME: &str = "daybook.sqlite3";
const ENV_LOG_LEVEL: &str = "DAYBOOK_LOG_LEVEL";
const ENV_LOG_DIR: &str = "DAYBOOK_LOG_DIR";
const ENV_DATA_DIR: &str = "DAYBOOK_DATA_DIR";

/// Runtime configuration consumed by logging, storage and the host bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling log files. Logging stays off when unset.
    pub log_dir: Option<PathBuf>,
    /// Directory holding the state database.
    pub data_dir: PathBuf,
    /// State database file name inside `data_dir`.
    pub db_file_name: String,
    /// Answer given by `confirm` when no host app is attached.
    pub confirm_default: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            data_dir: std::env::temp_dir().join("daybook"),
            db_file_name: DEFAULT_DB_FILE_NAME.to_string(),
            confirm_default: false,
        }
    }
}

impl CoreConfig {
    /// Builds a config from defaults overlaid with `DAYBOOK_*` variables.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup.
    ///
    /// Split out from [`CoreConfig::from_env`] so callers and tests can
    /// supply values without touching the process environment.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(level) = read(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        if let Some(dir) = read(ENV_LOG_DIR) {
            self.log_dir = Some(PathBuf::from(dir));
        }
        if let Some(dir) = read(ENV_DATA_DIR) {
            self.data_dir = PathBuf::from(dir);
        }
        self
    }

    /// Full path of the state database file.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(&self.db_file_name)
    }
}
