//! # wirebox
//!
//! A registry of named bindings plus a recursive autowiring resolver.
//!
//! Keys are bound to one of three targets: a type reference (constructed on
//! every `get`), a pre-built instance (returned as-is) or a factory (called
//! with the caller's parameters). Type references are constructed from
//! [`TypeDescriptor`]s; constructor parameters are filled from explicit
//! values first, then by resolving their declared types through the same
//! container.
//!
//! ## Example
//!
//! ```ignore
//! use wirebox::{Container, Object};
//! use wirebox::demo::{self, Car};
//!
//! let mut container = Container::new(demo::linked_catalog());
//! container.set("Color");
//! container.set("Car");
//!
//! let car: Arc<Car> = container.get_as("Car", vec![Object::from("Alice")])?;
//! assert_eq!(car.owner, "Alice");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Errors, type-erased objects, bindings and type descriptors
//! - `infrastructure` - Container, type catalog, configuration and logging
//! - `demo` - Sample types published to the linked catalog

pub mod demo;

/// Domain layer - errors, objects, bindings and descriptors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use wirebox_domain::*;
}

/// Infrastructure layer - container, catalog, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use wirebox_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the container entry points at the crate root
pub use infrastructure::{Container, ContainerFactory, LoadReport, TYPE_DESCRIPTORS, TypeCatalog};
