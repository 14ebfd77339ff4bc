//! # Infrastructure Layer
//!
//! The dependency container and the technical concerns around it.
//!
//! ## Module Categories
//!
//! ### Resolution
//! | Module | Description |
//! |--------|-------------|
//! | [`container`] | Binding registry, parameter binding and autowiring resolver |
//! | [`catalog`] | Type descriptors, registered at link time or at runtime |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based layered configuration |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod catalog;
pub mod config;
pub mod constants;
pub mod container;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use catalog::{TYPE_DESCRIPTORS, TypeCatalog};
pub use container::{Container, ContainerFactory, LoadReport, SkippedEntry};
pub use error_ext::ErrorContext;
