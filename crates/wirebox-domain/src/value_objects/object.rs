//! Type-erased values handled by the container
//!
//! Everything the container stores or hands out is an [`Object`]: pre-built
//! instances, constructor results, factory results and positional arguments.
//! An object carries the name of its type so that an instance binding can be
//! re-autowired from the type it was built from.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A type that can be named by the container
///
/// `TYPE_NAME` is the registry key and catalog name of the type. It does not
/// have to match the Rust path of the type.
pub trait Injectable: Any + Send + Sync {
    /// Name under which the type is described in a catalog
    const TYPE_NAME: &'static str;
}

/// Shared, type-erased value with its resolved type name
///
/// Cloning an object clones the handle, not the value: clones are the same
/// instance as far as [`Object::ptr_eq`] is concerned.
#[derive(Clone)]
pub struct Object {
    type_name: Arc<str>,
    value: Arc<dyn Any + Send + Sync>,
}

impl Object {
    /// Wrap a value of an [`Injectable`] type
    pub fn of<T: Injectable>(value: T) -> Self {
        Self::named(T::TYPE_NAME, value)
    }

    /// Wrap an already shared value of an [`Injectable`] type
    pub fn from_shared<T: Injectable>(value: Arc<T>) -> Self {
        Self {
            type_name: Arc::from(T::TYPE_NAME),
            value,
        }
    }

    /// Wrap a plain value, named after its Rust type (`i64`, `alloc::string::String`, ...)
    pub fn value<T: Any + Send + Sync>(value: T) -> Self {
        Self::named(std::any::type_name::<T>(), value)
    }

    /// Wrap a value under an explicit type name
    pub fn named<T: Any + Send + Sync>(type_name: impl Into<Arc<str>>, value: T) -> Self {
        Self {
            type_name: type_name.into(),
            value: Arc::new(value),
        }
    }

    /// Resolved type name of the wrapped value
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Whether the wrapped value is a `T`
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Borrow the wrapped value as a `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Share the wrapped value as an `Arc<T>`
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.value).downcast::<T>().ok()
    }

    /// Identity comparison: true when both handles point at the same value
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

macro_rules! impl_from_plain {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Object {
                fn from(value: $ty) -> Self {
                    Self::value(value)
                }
            }
        )*
    };
}

impl_from_plain!(bool, i32, i64, u32, u64, usize, f64, String);

impl From<&str> for Object {
    fn from(value: &str) -> Self {
        Self::value(value.to_string())
    }
}
