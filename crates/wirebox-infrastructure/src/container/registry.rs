//! Binding registry
//!
//! Key → [`Target`] storage. Keys are unique; a later insert under the same
//! key replaces the earlier target. Nothing is ever removed.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;
use wirebox_domain::error::{Error, Result};
use wirebox_domain::ports::TypeIntrospector;
use wirebox_domain::value_objects::{Binding, LoadEntry, Target};

/// Mutable binding storage owned by a container
#[derive(Debug, Clone, Default)]
pub struct BindingRegistry {
    bindings: HashMap<String, Target>,
}

impl BindingRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `target` under `key`, returning the target it replaced
    pub fn insert(&mut self, key: String, target: Target) -> Option<Target> {
        debug!(key = %key, kind = %target.kind(), "Registering binding");
        let previous = self.bindings.insert(key, target);
        if let Some(previous) = &previous {
            debug!(previous = %previous.kind(), "Binding overwritten");
        }
        previous
    }

    /// Target bound to `key`
    pub fn get(&self, key: &str) -> Option<&Target> {
        self.bindings.get(key)
    }

    /// Exact membership test
    pub fn contains(&self, key: &str) -> bool {
        self.bindings.contains_key(key)
    }

    /// Owned, ordered copy of every binding
    pub fn snapshot(&self) -> BTreeMap<String, Target> {
        self.bindings
            .iter()
            .map(|(key, target)| (key.clone(), target.clone()))
            .collect()
    }

    /// Registered keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.bindings.keys().cloned().collect();
        keys.sort_unstable();
        keys
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Turn a bulk-load entry into a binding
///
/// Fails with [`Error::InvalidDependency`] when the target is absent, when a
/// type reference names no constructible type, or when no key can be derived.
pub(crate) fn normalize_entry(
    entry: LoadEntry,
    catalog: &dyn TypeIntrospector,
) -> Result<Binding> {
    let label = entry.label();
    let Some(target) = entry.target else {
        return Err(Error::invalid_dependency(label, "target is absent"));
    };

    if let Target::TypeReference(type_name) = &target {
        if !catalog.is_constructible(type_name) {
            return Err(Error::invalid_dependency(
                label,
                format!("'{type_name}' does not name a constructible type"),
            ));
        }
    }

    let key = match entry.key {
        Some(key) => key,
        None => match target.type_name() {
            Some(type_name) => type_name.to_string(),
            None => {
                return Err(Error::invalid_dependency(
                    label,
                    "a factory entry needs an explicit key",
                ));
            }
        },
    };

    if key.is_empty() {
        return Err(Error::invalid_dependency(label, "key is empty"));
    }

    Ok(Binding { key, target })
}

/// Outcome of a bulk load
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Keys registered, in load order
    pub registered: Vec<String>,
    /// Entries that were dropped
    pub skipped: Vec<SkippedEntry>,
}

impl LoadReport {
    /// Whether every entry was registered
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// A dropped bulk-load entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Key or derived label of the entry
    pub entry: String,
    /// Why it was dropped
    pub reason: String,
}
