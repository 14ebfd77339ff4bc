//! Type Catalog
//!
//! Holds the [`TypeDescriptor`]s the resolver can construct. Descriptors reach
//! the catalog two ways:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  1. Link time:  #[linkme::distributed_slice(TYPE_DESCRIPTORS)]  │
//! │                 static CAR: TypeDescriptor = ...                │
//! │                              ↓                                  │
//! │                 TypeCatalog::linked()                           │
//! │                                                                 │
//! │  2. Runtime:    TypeCatalog::new().with(CAR_DESCRIPTOR)         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use wirebox_infrastructure::catalog::{TYPE_DESCRIPTORS, TypeCatalog};
//!
//! #[linkme::distributed_slice(TYPE_DESCRIPTORS)]
//! static COLOR: TypeDescriptor = TypeDescriptor::concrete("Color", &[], |_| {
//!     Ok(Object::of(Color::default()))
//! });
//!
//! let catalog = TypeCatalog::linked();
//! assert!(catalog.knows("Color"));
//! ```

use std::collections::HashMap;
use std::fmt;

use tracing::warn;
use wirebox_domain::ports::TypeIntrospector;
use wirebox_domain::value_objects::{TypeDescriptor, TypeKind};

// Auto-collection via linkme distributed slices - types submit descriptors at compile time
#[linkme::distributed_slice]
pub static TYPE_DESCRIPTORS: [TypeDescriptor] = [..];

/// Name-indexed set of type descriptors
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    types: HashMap<&'static str, TypeDescriptor>,
}

impl TypeCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding every descriptor registered through [`TYPE_DESCRIPTORS`]
    pub fn linked() -> Self {
        let mut catalog = Self::new();
        catalog.extend(TYPE_DESCRIPTORS.iter().copied());
        catalog
    }

    /// Register a descriptor, returning the one it replaced
    pub fn register(&mut self, descriptor: TypeDescriptor) -> Option<TypeDescriptor> {
        if !descriptor.has_ordered_parameters() {
            warn!(
                type_name = descriptor.name,
                "Parameter indices do not match declaration order; binding follows declaration order"
            );
        }
        let previous = self.types.insert(descriptor.name, descriptor);
        if previous.is_some() {
            warn!(type_name = descriptor.name, "Replacing type descriptor");
        }
        previous
    }

    /// Builder-style [`TypeCatalog::register`]
    #[must_use]
    pub fn with(mut self, descriptor: TypeDescriptor) -> Self {
        self.register(descriptor);
        self
    }

    /// Names of all described types, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.types.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of described types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Summary of the described types, for CLI output
    pub fn available(&self) -> AvailableTypes {
        let mut types: Vec<(&'static str, TypeKind)> = self
            .types
            .values()
            .map(|descriptor| (descriptor.name, descriptor.kind))
            .collect();
        types.sort_unstable_by_key(|(name, _)| *name);
        AvailableTypes { types }
    }
}

impl Extend<TypeDescriptor> for TypeCatalog {
    fn extend<I: IntoIterator<Item = TypeDescriptor>>(&mut self, iter: I) {
        for descriptor in iter {
            self.register(descriptor);
        }
    }
}

impl FromIterator<TypeDescriptor> for TypeCatalog {
    fn from_iter<I: IntoIterator<Item = TypeDescriptor>>(iter: I) -> Self {
        let mut catalog = Self::new();
        catalog.extend(iter);
        catalog
    }
}

impl TypeIntrospector for TypeCatalog {
    fn describe(&self, type_name: &str) -> Option<&TypeDescriptor> {
        self.types.get(type_name)
    }
}

/// Described types with their kinds
#[derive(Debug, Clone)]
pub struct AvailableTypes {
    /// `(name, kind)` pairs sorted by name
    pub types: Vec<(&'static str, TypeKind)>,
}

impl fmt::Display for AvailableTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Available Types:")?;
        if self.types.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for (name, kind) in &self.types {
            writeln!(f, "  - {name} ({kind})")?;
        }
        Ok(())
    }
}
