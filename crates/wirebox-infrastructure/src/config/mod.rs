//! Configuration
//!
//! Layered configuration via Figment: defaults, then a TOML file, then
//! `WIREBOX_`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, ContainerConfig, LoadMode, LoggingConfig};
