//! Resolution: binding dispatch and autowiring
//!
//! One [`Resolver`] lives for the duration of a top-level `get`. It carries
//! the resolution path so that a key re-entered while still being resolved is
//! reported as a cycle instead of recursing until the stack runs out.
//!
//! ```text
//! get(key, params)
//!   │
//!   ├─ Factory        → factory(params)
//!   ├─ Instance       → params empty ? instance : autowire(instance type, params)
//!   └─ TypeReference  → autowire(type, params)
//!                          │
//!                          └─ ParameterBinder ─→ get(declared type, []) ...
//! ```

use tracing::debug;
use wirebox_domain::error::{Error, Result};
use wirebox_domain::ports::TypeIntrospector;
use wirebox_domain::value_objects::{Arguments, Object, Target};

use super::binder::{DependencySource, ParameterBinder};
use super::registry::BindingRegistry;

/// State of one top-level resolution
pub(crate) struct Resolver<'a> {
    registry: &'a BindingRegistry,
    catalog: &'a dyn TypeIntrospector,
    max_depth: usize,
    path: Vec<String>,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(
        registry: &'a BindingRegistry,
        catalog: &'a dyn TypeIntrospector,
        max_depth: usize,
    ) -> Self {
        Self {
            registry,
            catalog,
            max_depth,
            path: Vec::new(),
        }
    }

    /// Resolve `key` with explicit positional parameters
    pub(crate) fn resolve(&mut self, key: &str, params: Vec<Object>) -> Result<Object> {
        let registry = self.registry;
        let target = registry.get(key).ok_or_else(|| Error::not_found(key))?;

        self.enter(key)?;
        let result = self.dispatch(key, target, params);
        self.path.pop();
        result
    }

    fn enter(&mut self, key: &str) -> Result<()> {
        if let Some(start) = self.path.iter().position(|active| active == key) {
            let cycle = self.path[start..]
                .iter()
                .map(String::as_str)
                .chain(std::iter::once(key));
            return Err(Error::cyclic_dependency(cycle));
        }
        if self.path.len() >= self.max_depth {
            return Err(Error::depth_exceeded(key, self.max_depth));
        }
        self.path.push(key.to_string());
        Ok(())
    }

    fn dispatch(&mut self, key: &str, target: &'a Target, params: Vec<Object>) -> Result<Object> {
        match target {
            Target::Factory(factory) => {
                debug!(key, params = params.len(), "Invoking factory");
                factory.call(Arguments::new(params))
            }
            Target::Instance(instance) if params.is_empty() => {
                debug!(key, "Returning bound instance");
                Ok(instance.clone())
            }
            Target::Instance(instance) => {
                debug!(
                    key,
                    type_name = instance.type_name(),
                    "Parameters supplied, rebuilding instance type"
                );
                self.autowire(instance.type_name(), params)
            }
            Target::TypeReference(type_name) => {
                debug!(key, type_name = %type_name, "Autowiring type reference");
                self.autowire(type_name, params)
            }
        }
    }

    fn autowire(&mut self, type_name: &str, params: Vec<Object>) -> Result<Object> {
        let catalog = self.catalog;
        let descriptor = catalog.describe(type_name).ok_or_else(|| {
            Error::not_instantiable(type_name, "type is not described in the catalog")
        })?;
        if let Some(reason) = descriptor.not_instantiable_reason() {
            return Err(Error::not_instantiable(type_name, reason));
        }

        let arguments = ParameterBinder::new(descriptor).bind(params, self)?;
        descriptor.construct(arguments)
    }
}

impl DependencySource for Resolver<'_> {
    fn can_resolve(&self, type_name: &str) -> bool {
        self.registry.contains(type_name) || self.catalog.knows(type_name)
    }

    fn resolve_dependency(&mut self, type_name: &str) -> Result<Object> {
        self.resolve(type_name, Vec::new())
    }
}
