//! Error handling types

use thiserror::Error;

use crate::constants::RESOLUTION_PATH_SEPARATOR;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for wirebox
#[derive(Error, Debug)]
pub enum Error {
    /// No binding is registered under the requested key
    #[error(
        "Binding not found: '{key}'. Create a definition by using `set(\"{key}\")` prior to getting the object."
    )]
    NotFound {
        /// The key that was requested
        key: String,
    },

    /// The target type cannot be constructed
    #[error("Type {type_name} is not instantiable: {reason}")]
    NotInstantiable {
        /// Name of the type that was requested
        type_name: String,
        /// Why the type cannot be constructed
        reason: String,
    },

    /// A bulk-load entry could not be turned into a binding
    #[error("Invalid dependency '{entry}': {reason}")]
    InvalidDependency {
        /// Key (or best description) of the rejected entry
        entry: String,
        /// Why the entry was rejected
        reason: String,
    },

    /// A key reappeared while it was still being resolved
    #[error("Cyclic dependency detected: {path}")]
    CyclicDependency {
        /// Resolution path, e.g. `A -> B -> A`
        path: String,
    },

    /// The resolution path grew past the configured depth limit
    #[error("Resolution depth exceeded ({max_depth}) while resolving '{key}'")]
    ResolutionDepthExceeded {
        /// Key that would have exceeded the limit
        key: String,
        /// Configured depth limit
        max_depth: usize,
    },

    /// A constructor parameter had no explicit value, no resolvable type and no default
    #[error("Missing argument #{index} (`{parameter}`) for {type_name}")]
    MissingArgument {
        /// Type being constructed
        type_name: String,
        /// Declared parameter name
        parameter: String,
        /// Positional index of the parameter
        index: usize,
    },

    /// A constructor or factory read a position the argument list does not have
    #[error("Argument #{index} is missing, expected {expected}")]
    ArgumentMissing {
        /// Positional index that was read
        index: usize,
        /// Type the caller asked for
        expected: String,
    },

    /// An argument could not be read as the type a constructor or factory expected
    #[error("Argument #{index} has type {actual}, expected {expected}")]
    ArgumentType {
        /// Positional index of the argument
        index: usize,
        /// Type the caller asked for
        expected: String,
        /// Type name carried by the argument
        actual: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Resolution error creation methods
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(key: S) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Create a not instantiable error
    pub fn not_instantiable<S: Into<String>, R: Into<String>>(type_name: S, reason: R) -> Self {
        Self::NotInstantiable {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid dependency error
    pub fn invalid_dependency<S: Into<String>, R: Into<String>>(entry: S, reason: R) -> Self {
        Self::InvalidDependency {
            entry: entry.into(),
            reason: reason.into(),
        }
    }

    /// Create a cyclic dependency error from the keys on the resolution path
    pub fn cyclic_dependency<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let path = path
            .into_iter()
            .map(|key| key.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(RESOLUTION_PATH_SEPARATOR);
        Self::CyclicDependency { path }
    }

    /// Create a resolution depth error
    pub fn depth_exceeded<S: Into<String>>(key: S, max_depth: usize) -> Self {
        Self::ResolutionDepthExceeded {
            key: key.into(),
            max_depth,
        }
    }

    /// Create a missing argument error
    pub fn missing_argument<S: Into<String>, P: Into<String>>(
        type_name: S,
        parameter: P,
        index: usize,
    ) -> Self {
        Self::MissingArgument {
            type_name: type_name.into(),
            parameter: parameter.into(),
            index,
        }
    }

    /// Create a missing argument position error
    pub fn argument_missing<E: Into<String>>(index: usize, expected: E) -> Self {
        Self::ArgumentMissing {
            index,
            expected: expected.into(),
        }
    }

    /// Create an argument type error
    pub fn argument_type<E: Into<String>, A: Into<String>>(
        index: usize,
        expected: E,
        actual: A,
    ) -> Self {
        Self::ArgumentType {
            index,
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

// Configuration and I/O error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Create an internal error with source
    pub fn internal_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Internal {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Classification helpers
impl Error {
    /// True for [`Error::NotFound`]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for [`Error::NotInstantiable`]
    pub fn is_not_instantiable(&self) -> bool {
        matches!(self, Self::NotInstantiable { .. })
    }

    /// True for errors raised by the cycle and depth guards
    pub fn is_cycle(&self) -> bool {
        matches!(
            self,
            Self::CyclicDependency { .. } | Self::ResolutionDepthExceeded { .. }
        )
    }
}
