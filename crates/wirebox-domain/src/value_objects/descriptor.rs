//! Type and constructor-parameter descriptors
//!
//! A [`TypeDescriptor`] is what makes a type resolvable: it names the type,
//! says whether it can be constructed, lists its constructor parameters in
//! positional order and points at the constructor itself. Descriptors are
//! `const`-constructible so they can be declared as statics and collected at
//! link time.
//!
//! ```ignore
//! static CAR: TypeDescriptor = TypeDescriptor::concrete(
//!     "Car",
//!     &[
//!         ParameterDescriptor::value(0, "name"),
//!         ParameterDescriptor::typed(1, "color", "Color"),
//!     ],
//!     |args| {
//!         Ok(Object::of(Car {
//!             name: args.cloned(0)?,
//!             color: args.shared(1)?,
//!         }))
//!     },
//! );
//! ```

use crate::error::{Error, Result};
use crate::value_objects::{Arguments, Object};

/// Constructor invoked with the bound, positional argument list
pub type Constructor = fn(Arguments) -> Result<Object>;

/// Produces the value of a parameter that was neither supplied nor resolvable
pub type DefaultValue = fn() -> Object;

/// Constructibility class of a described type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Regular type with a constructor
    Concrete,
    /// Partially implemented base type; never constructed directly
    Abstract,
    /// Pure contract; resolvable only through a binding to an implementation
    Interface,
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Concrete => write!(f, "concrete"),
            Self::Abstract => write!(f, "abstract"),
            Self::Interface => write!(f, "interface"),
        }
    }
}

/// One constructor parameter
#[derive(Debug, Clone, Copy)]
pub struct ParameterDescriptor {
    /// Position in the constructor's argument list; must match the
    /// parameter's place in [`TypeDescriptor::parameters`]
    pub index: usize,
    /// Declared name, used in error messages
    pub name: &'static str,
    /// Class-like type resolved through the container, `None` for plain values
    pub declared_type: Option<&'static str>,
    /// Fallback when no value is supplied and nothing can be resolved
    pub default: Option<DefaultValue>,
}

impl ParameterDescriptor {
    /// A plain-value parameter that must be supplied by the caller
    pub const fn value(index: usize, name: &'static str) -> Self {
        Self {
            index,
            name,
            declared_type: None,
            default: None,
        }
    }

    /// A parameter whose declared type is resolved through the container
    pub const fn typed(index: usize, name: &'static str, declared_type: &'static str) -> Self {
        Self {
            index,
            name,
            declared_type: Some(declared_type),
            default: None,
        }
    }

    /// Attach a default value
    pub const fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }
}

/// Description of a resolvable type
#[derive(Debug, Clone, Copy)]
pub struct TypeDescriptor {
    /// Catalog name of the type
    pub name: &'static str,
    /// Constructibility class
    pub kind: TypeKind,
    /// Constructor parameters in positional order
    pub parameters: &'static [ParameterDescriptor],
    /// Constructor, absent for abstract types and interfaces
    pub constructor: Option<Constructor>,
}

impl TypeDescriptor {
    /// Describe a concrete type
    pub const fn concrete(
        name: &'static str,
        parameters: &'static [ParameterDescriptor],
        constructor: Constructor,
    ) -> Self {
        Self {
            name,
            kind: TypeKind::Concrete,
            parameters,
            constructor: Some(constructor),
        }
    }

    /// Describe an abstract type
    pub const fn abstract_type(name: &'static str) -> Self {
        Self {
            name,
            kind: TypeKind::Abstract,
            parameters: &[],
            constructor: None,
        }
    }

    /// Describe an interface
    pub const fn interface(name: &'static str) -> Self {
        Self {
            name,
            kind: TypeKind::Interface,
            parameters: &[],
            constructor: None,
        }
    }

    /// Whether the type can be constructed directly
    pub fn is_instantiable(&self) -> bool {
        self.not_instantiable_reason().is_none()
    }

    /// Why the type cannot be constructed, if it cannot
    pub fn not_instantiable_reason(&self) -> Option<String> {
        match (self.kind, self.constructor) {
            (TypeKind::Concrete, Some(_)) => None,
            (TypeKind::Concrete, None) => Some("type has no constructor".to_string()),
            (kind, _) => Some(format!("type is {kind}")),
        }
    }

    /// Whether every parameter's `index` equals its position in `parameters`
    pub fn has_ordered_parameters(&self) -> bool {
        self.parameters
            .iter()
            .enumerate()
            .all(|(position, parameter)| parameter.index == position)
    }

    /// Run the constructor with an already bound argument list
    pub fn construct(&self, arguments: Arguments) -> Result<Object> {
        match self.constructor {
            Some(constructor) if self.kind == TypeKind::Concrete => constructor(arguments),
            _ => Err(Error::not_instantiable(
                self.name,
                self.not_instantiable_reason()
                    .unwrap_or_else(|| "type cannot be constructed".to_string()),
            )),
        }
    }
}
