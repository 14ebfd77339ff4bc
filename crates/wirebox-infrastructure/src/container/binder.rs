//! Parameter binding
//!
//! Produces the final, positional argument list for a constructor. For each
//! declared parameter, in order:
//!
//! 1. an explicit value at the same index wins,
//! 2. otherwise a resolvable declared type is resolved through the container,
//! 3. otherwise the parameter default is used,
//! 4. otherwise binding fails with [`Error::MissingArgument`].

use tracing::trace;
use wirebox_domain::error::{Error, Result};
use wirebox_domain::value_objects::{Arguments, Object, TypeDescriptor};

/// Where class-typed parameters are resolved from
pub(crate) trait DependencySource {
    /// Whether `type_name` can be handed to [`DependencySource::resolve_dependency`]
    fn can_resolve(&self, type_name: &str) -> bool;

    /// Resolve `type_name` with no explicit parameters
    fn resolve_dependency(&mut self, type_name: &str) -> Result<Object>;
}

/// Binds explicit values and resolved dependencies to one type's parameters
pub(crate) struct ParameterBinder<'d> {
    descriptor: &'d TypeDescriptor,
}

impl<'d> ParameterBinder<'d> {
    pub(crate) fn new(descriptor: &'d TypeDescriptor) -> Self {
        Self { descriptor }
    }

    /// Build the argument list; values past the last parameter are dropped
    pub(crate) fn bind<S: DependencySource>(
        &self,
        explicit: Vec<Object>,
        source: &mut S,
    ) -> Result<Arguments> {
        let mut explicit: Vec<Option<Object>> = explicit.into_iter().map(Some).collect();
        let mut bound = Vec::with_capacity(self.descriptor.parameters.len());

        // Slice order is the positional order; `index` is only a label
        for (position, parameter) in self.descriptor.parameters.iter().enumerate() {
            let supplied = explicit.get_mut(position).and_then(Option::take);
            let value = if let Some(value) = supplied {
                trace!(
                    type_name = self.descriptor.name,
                    parameter = parameter.name,
                    "Using explicit argument"
                );
                value
            } else if let Some(declared) = parameter
                .declared_type
                .filter(|declared| source.can_resolve(declared))
            {
                trace!(
                    type_name = self.descriptor.name,
                    parameter = parameter.name,
                    dependency = declared,
                    "Resolving dependency"
                );
                source.resolve_dependency(declared)?
            } else if let Some(default) = parameter.default {
                trace!(
                    type_name = self.descriptor.name,
                    parameter = parameter.name,
                    "Using parameter default"
                );
                default()
            } else {
                return Err(Error::missing_argument(
                    self.descriptor.name,
                    parameter.name,
                    position,
                ));
            };
            bound.push(value);
        }

        Ok(Arguments::new(bound))
    }
}
