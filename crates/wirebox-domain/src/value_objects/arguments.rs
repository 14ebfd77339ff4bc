//! Ordered argument lists passed to constructors and factories

use std::any::Any;
use std::sync::Arc;

use crate::constants::ANY_ARGUMENT_TYPE;
use crate::error::{Error, Result};
use crate::value_objects::Object;

/// Final, positional argument list
///
/// Constructors receive the list produced by parameter binding; factories
/// receive the caller's parameters verbatim.
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    values: Vec<Object>,
}

impl Arguments {
    /// Create an argument list from positional values
    pub fn new(values: Vec<Object>) -> Self {
        Self { values }
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Argument at `index`
    pub fn get(&self, index: usize) -> Result<&Object> {
        self.values
            .get(index)
            .ok_or_else(|| Error::argument_missing(index, ANY_ARGUMENT_TYPE))
    }

    /// Argument at `index`, shared as an `Arc<T>`
    ///
    /// Use this for injected services so that the constructed object holds the
    /// same instance the container resolved.
    pub fn shared<T: Any + Send + Sync>(&self, index: usize) -> Result<Arc<T>> {
        let object = self.typed_slot::<T>(index)?;
        object
            .downcast::<T>()
            .ok_or_else(|| Self::mismatch::<T>(index, object))
    }

    /// Argument at `index`, cloned out as a `T`
    pub fn cloned<T: Any + Clone>(&self, index: usize) -> Result<T> {
        let object = self.typed_slot::<T>(index)?;
        object
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| Self::mismatch::<T>(index, object))
    }

    /// Iterate over the arguments in positional order
    pub fn iter(&self) -> std::slice::Iter<'_, Object> {
        self.values.iter()
    }

    /// Consume the list
    pub fn into_vec(self) -> Vec<Object> {
        self.values
    }

    fn typed_slot<T: Any>(&self, index: usize) -> Result<&Object> {
        self.values
            .get(index)
            .ok_or_else(|| Error::argument_missing(index, std::any::type_name::<T>()))
    }

    fn mismatch<T: Any>(index: usize, object: &Object) -> Error {
        Error::argument_type(index, std::any::type_name::<T>(), object.type_name())
    }
}

impl From<Vec<Object>> for Arguments {
    fn from(values: Vec<Object>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<Object> for Arguments {
    fn from_iter<I: IntoIterator<Item = Object>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Arguments {
    type Item = Object;
    type IntoIter = std::vec::IntoIter<Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = &'a Object;
    type IntoIter = std::slice::Iter<'a, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
