//! Configuration schema definitions and loading.
//!
//! Configuration is optional: every field has a default, and a missing
//! default config file is not an error. All configurations are
//! serializable to/from TOML format.

mod error;
mod loading;
mod log_level;
mod paths;


use std::path::PathBuf;

pub use error::ConfigError;
pub use log_level::{LogFormat, LogLevel};
pub use paths::ConfigPaths;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{reconciler::ReconcilePolicy, store::CommandStore};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct Config {
    /// Logging settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// How the nvram store is reached.
    #[serde(default)]
    pub store: StoreConfig,

    /// Reconciliation reporting policy.
    #[serde(default)]
    pub reconcile: ReconcilePolicy,
}

/// General configuration settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct GeneralConfig {
    /// Log level used when `RUST_LOG` is not set.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Log line format. `NVRAM_TASK_LOG_FORMAT` takes precedence.
    #[serde(default)]
    pub log_format: LogFormat,

    /// Directory for daily rotated log files. Logs go to stderr only when unset.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

/// Store access settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StoreConfig {
    /// Program invoked for nvram access, resolved through `PATH` when not absolute.
    #[serde(default = "default_program")]
    pub program: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
        }
    }
}

fn default_program() -> PathBuf {
    PathBuf::from(crate::store::DEFAULT_PROGRAM)
}

impl StoreConfig {
    /// Builds the command-backed store described by this configuration.
    pub fn command_store(&self) -> CommandStore {
        CommandStore::new(&self.program)
    }
}
