//! Type introspection port
//!
//! The resolver never inspects Rust types itself. It asks a
//! [`TypeIntrospector`] for the descriptor published under a type name.

use crate::value_objects::TypeDescriptor;

/// Source of type descriptors
pub trait TypeIntrospector: Send + Sync {
    /// Descriptor published under `type_name`
    fn describe(&self, type_name: &str) -> Option<&TypeDescriptor>;

    /// Whether `type_name` names a described type of any kind
    fn knows(&self, type_name: &str) -> bool {
        self.describe(type_name).is_some()
    }

    /// Whether `type_name` names a type that can be constructed directly
    fn is_constructible(&self, type_name: &str) -> bool {
        self.describe(type_name)
            .is_some_and(TypeDescriptor::is_instantiable)
    }
}
