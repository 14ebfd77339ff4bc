//! Configuration types

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_MAX_RESOLUTION_DEPTH};

/// How bulk loads treat invalid entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadMode {
    /// Skip invalid entries and report them
    #[default]
    Lenient,
    /// Fail the whole load on the first invalid entry
    Strict,
}

/// Resolution policy of a container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Bulk-load policy
    pub load_mode: LoadMode,

    /// Longest resolution path allowed before resolution is aborted
    pub max_depth: usize,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            load_mode: LoadMode::Lenient,
            max_depth: DEFAULT_MAX_RESOLUTION_DEPTH,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Container policy
    pub container: ContainerConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Key → type name bindings loaded at startup
    pub bindings: BTreeMap<String, String>,
}
