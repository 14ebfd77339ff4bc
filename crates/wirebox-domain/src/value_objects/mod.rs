//! Value objects shared by every layer
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Object`] | Type-erased value with its resolved type name |
//! | [`Arguments`] | Positional argument list for constructors and factories |
//! | [`Target`] | What a key resolves to: type reference, instance or factory |
//! | [`TypeDescriptor`] | Constructibility, parameters and constructor of a type |

pub mod arguments;
pub mod binding;
pub mod descriptor;
pub mod object;

pub use arguments::Arguments;
pub use binding::{Binding, Factory, FactoryFn, LoadEntry, Target, TargetKind};
pub use descriptor::{Constructor, DefaultValue, ParameterDescriptor, TypeDescriptor, TypeKind};
pub use object::{Injectable, Object};
