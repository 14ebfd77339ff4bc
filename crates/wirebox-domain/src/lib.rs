//! # Domain Layer
//!
//! Types shared by the container and its callers: the error type, the
//! type-erased [`Object`] and the binding and descriptor value objects.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error kinds raised by registration and resolution |
//! | [`value_objects`] | Objects, arguments, targets and descriptors |
//! | [`ports`] | The [`TypeIntrospector`] seam used by the resolver |
//! | [`constants`] | Domain constants |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::TypeIntrospector;
pub use value_objects::*;
