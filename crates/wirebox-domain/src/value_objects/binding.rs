//! Bindings: what a registry key resolves to

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::value_objects::{Arguments, Object};

/// Callable target, invoked with the caller's positional parameters
pub type FactoryFn = dyn Fn(Arguments) -> Result<Object> + Send + Sync;

/// Shared factory handle
#[derive(Clone)]
pub struct Factory(Arc<FactoryFn>);

impl Factory {
    /// Wrap a closure as a factory
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn(Arguments) -> Result<Object> + Send + Sync + 'static,
    {
        Self(Arc::new(factory))
    }

    /// Invoke the factory
    pub fn call(&self, arguments: Arguments) -> Result<Object> {
        (self.0)(arguments)
    }

    /// Identity comparison
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Factory(..)")
    }
}

/// Target of a binding
#[derive(Clone, Debug)]
pub enum Target {
    /// Name of a type to construct through autowiring
    TypeReference(String),
    /// Pre-built instance, returned verbatim when no parameters are given
    Instance(Object),
    /// Callable invoked on every resolution
    Factory(Factory),
}

impl Target {
    /// Reference a type by name
    pub fn type_reference(type_name: impl Into<String>) -> Self {
        Self::TypeReference(type_name.into())
    }

    /// Wrap a closure as a factory target
    pub fn factory<F>(factory: F) -> Self
    where
        F: Fn(Arguments) -> Result<Object> + Send + Sync + 'static,
    {
        Self::Factory(Factory::new(factory))
    }

    /// Kind of target, for diagnostics
    pub fn kind(&self) -> TargetKind {
        match self {
            Self::TypeReference(_) => TargetKind::TypeReference,
            Self::Instance(_) => TargetKind::Instance,
            Self::Factory(_) => TargetKind::Factory,
        }
    }

    /// Resolved type name of the target
    ///
    /// Factories have no type name.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::TypeReference(type_name) => Some(type_name),
            Self::Instance(object) => Some(object.type_name()),
            Self::Factory(_) => None,
        }
    }
}

impl From<&str> for Target {
    fn from(type_name: &str) -> Self {
        Self::TypeReference(type_name.to_string())
    }
}

impl From<String> for Target {
    fn from(type_name: String) -> Self {
        Self::TypeReference(type_name)
    }
}

impl From<Object> for Target {
    fn from(object: Object) -> Self {
        Self::Instance(object)
    }
}

impl From<Factory> for Target {
    fn from(factory: Factory) -> Self {
        Self::Factory(factory)
    }
}

/// Discriminant of [`Target`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// [`Target::TypeReference`]
    TypeReference,
    /// [`Target::Instance`]
    Instance,
    /// [`Target::Factory`]
    Factory,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeReference => write!(f, "type reference"),
            Self::Instance => write!(f, "instance"),
            Self::Factory => write!(f, "factory"),
        }
    }
}

/// A key together with its target
#[derive(Clone, Debug)]
pub struct Binding {
    /// Registry key
    pub key: String,
    /// What the key resolves to
    pub target: Target,
}

impl Binding {
    /// Create a binding
    pub fn new(key: impl Into<String>, target: impl Into<Target>) -> Self {
        Self {
            key: key.into(),
            target: target.into(),
        }
    }
}

/// One entry of a bulk load
///
/// Both halves are optional: a missing key is derived from the target's type
/// name, a missing target makes the entry invalid.
#[derive(Clone, Debug, Default)]
pub struct LoadEntry {
    /// Explicit key
    pub key: Option<String>,
    /// Target, `None` models an absent value
    pub target: Option<Target>,
}

impl LoadEntry {
    /// Entry with an explicit key
    pub fn keyed(key: impl Into<String>, target: impl Into<Target>) -> Self {
        Self {
            key: Some(key.into()),
            target: Some(target.into()),
        }
    }

    /// Entry whose key is derived from the target
    pub fn unkeyed(target: impl Into<Target>) -> Self {
        Self {
            key: None,
            target: Some(target.into()),
        }
    }

    /// Entry with no target
    pub fn absent(key: Option<String>) -> Self {
        Self { key, target: None }
    }

    /// Human-readable label for logs and errors
    pub fn label(&self) -> String {
        match (&self.key, self.target.as_ref().and_then(Target::type_name)) {
            (Some(key), _) => key.clone(),
            (None, Some(type_name)) => type_name.to_string(),
            (None, None) => "<unnamed>".to_string(),
        }
    }
}

impl From<Binding> for LoadEntry {
    fn from(binding: Binding) -> Self {
        Self {
            key: Some(binding.key),
            target: Some(binding.target),
        }
    }
}

impl<K: Into<String>, T: Into<Target>> From<(K, T)> for LoadEntry {
    fn from((key, target): (K, T)) -> Self {
        Self::keyed(key, target)
    }
}
