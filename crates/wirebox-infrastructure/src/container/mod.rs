//! Dependency container
//!
//! A registry of named bindings plus a recursive autowiring resolver.
//!
//! ## Architecture
//!
//! ```text
//! set / bind / load ──→ BindingRegistry ──→ get(key, params)
//!                                               │
//!                                   Resolver (dispatch, cycle guard)
//!                                               │
//!                          ParameterBinder ←── TypeCatalog (descriptors)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut container = Container::new(catalog);
//! container.set("Color");
//! container.set("Car");
//!
//! // `Color` is resolved automatically, `"Alice"` fills the plain parameter
//! let car: Arc<Car> = container.get_as("Car", vec![Object::from("Alice")])?;
//! ```
//!
//! The container does no internal locking. Share it behind a lock when
//! registration and resolution happen on different threads.

pub mod bootstrap;
mod binder;
pub mod registry;
mod resolver;

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};
use wirebox_domain::error::{Error, Result};
use wirebox_domain::ports::TypeIntrospector;
use wirebox_domain::value_objects::{LoadEntry, Object, Target};

use crate::config::{ContainerConfig, LoadMode};
use registry::{BindingRegistry, normalize_entry};
use resolver::Resolver;

pub use bootstrap::ContainerFactory;
pub use registry::{LoadReport, SkippedEntry};

/// Registry of named bindings with autowiring resolution
pub struct Container {
    registry: BindingRegistry,
    catalog: Arc<dyn TypeIntrospector>,
    config: ContainerConfig,
}

impl Container {
    /// Create an empty container over `catalog` with the default policy
    pub fn new<C: TypeIntrospector + 'static>(catalog: C) -> Self {
        Self::with_config(catalog, ContainerConfig::default())
    }

    /// Create an empty container with an explicit policy
    pub fn with_config<C: TypeIntrospector + 'static>(catalog: C, config: ContainerConfig) -> Self {
        Self::from_shared(Arc::new(catalog), config)
    }

    /// Create an empty container over a catalog shared with other containers
    pub fn from_shared(catalog: Arc<dyn TypeIntrospector>, config: ContainerConfig) -> Self {
        Self {
            registry: BindingRegistry::new(),
            catalog,
            config,
        }
    }

    /// Bind `key` to itself as a type reference
    pub fn set(&mut self, key: impl Into<String>) {
        let key = key.into();
        let target = Target::TypeReference(key.clone());
        self.registry.insert(key, target);
    }

    /// Bind `key` to an explicit target
    ///
    /// Strings become type references, [`Object`]s become instances and
    /// [`wirebox_domain::Factory`]s become factories. Type references are not
    /// validated until they are resolved.
    pub fn bind(&mut self, key: impl Into<String>, target: impl Into<Target>) {
        self.registry.insert(key.into(), target.into());
    }

    /// Whether `key` has a binding
    pub fn has(&self, key: &str) -> bool {
        self.registry.contains(key)
    }

    /// Register many entries at once
    ///
    /// In [`LoadMode::Lenient`] invalid entries are skipped and reported; in
    /// [`LoadMode::Strict`] the first invalid entry fails the whole load and
    /// nothing is registered.
    pub fn load<I>(&mut self, entries: I) -> Result<LoadReport>
    where
        I: IntoIterator,
        I::Item: Into<LoadEntry>,
    {
        let mut report = LoadReport::default();
        let mut accepted = Vec::new();

        for entry in entries {
            let entry: LoadEntry = entry.into();
            let label = entry.label();
            match normalize_entry(entry, self.catalog.as_ref()) {
                Ok(binding) => accepted.push(binding),
                Err(error) if self.config.load_mode == LoadMode::Strict => return Err(error),
                Err(error) => {
                    warn!(entry = %label, error = %error, "Skipping invalid binding");
                    report.skipped.push(SkippedEntry {
                        entry: label,
                        reason: error.to_string(),
                    });
                }
            }
        }

        for binding in accepted {
            report.registered.push(binding.key.clone());
            self.registry.insert(binding.key, binding.target);
        }

        info!(
            registered = report.registered.len(),
            skipped = report.skipped.len(),
            "Loaded bindings"
        );
        Ok(report)
    }

    /// Owned snapshot of every binding, ordered by key
    pub fn view(&self) -> BTreeMap<String, Target> {
        self.registry.snapshot()
    }

    /// Resolve `key` with explicit positional parameters
    ///
    /// Fails with [`Error::NotFound`] for unbound keys and with
    /// [`Error::NotInstantiable`] when the target type cannot be constructed.
    /// A failure anywhere in the dependency graph fails the whole call.
    pub fn get(&self, key: &str, params: Vec<Object>) -> Result<Object> {
        Resolver::new(&self.registry, self.catalog.as_ref(), self.config.max_depth)
            .resolve(key, params)
    }

    /// Resolve `key` with no explicit parameters
    pub fn resolve(&self, key: &str) -> Result<Object> {
        self.get(key, Vec::new())
    }

    /// Resolve `key` and downcast the result
    pub fn get_as<T: Any + Send + Sync>(&self, key: &str, params: Vec<Object>) -> Result<Arc<T>> {
        let object = self.get(key, params)?;
        object.downcast::<T>().ok_or_else(|| {
            Error::internal(format!(
                "'{key}' resolved to {}, expected {}",
                object.type_name(),
                std::any::type_name::<T>()
            ))
        })
    }

    /// Registered keys, sorted
    pub fn keys(&self) -> Vec<String> {
        self.registry.keys()
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether the container has no bindings
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Resolution policy in effect
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// Catalog the container resolves types from
    pub fn catalog(&self) -> &dyn TypeIntrospector {
        self.catalog.as_ref()
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("keys", &self.registry.keys())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
