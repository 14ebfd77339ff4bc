//! Domain ports
//!
//! Interfaces the container depends on without knowing their implementation.

pub mod introspection;

pub use introspection::TypeIntrospector;
