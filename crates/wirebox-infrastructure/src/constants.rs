//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `wirebox_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "wirebox.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "wirebox";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "WIREBOX";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// RESOLUTION CONSTANTS
// ============================================================================

/// Default limit on the length of a resolution path
pub const DEFAULT_MAX_RESOLUTION_DEPTH: usize = 64;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV: &str = "WIREBOX_LOG";

/// File name prefix used when logging to a file without a stem
pub const LOG_FILE_PREFIX: &str = "wirebox";
