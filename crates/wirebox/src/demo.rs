//! Sample types published to the linked catalog
//!
//! Used by the `wirebox` binary and the crate examples.
//!
//! | Type | Kind | Parameters |
//! |------|------|------------|
//! | `Color` | concrete | none |
//! | `Car` | concrete | `owner` (plain, defaults to `"nobody"`), `color: Color` |
//! | `Vehicle` | interface | |
//! | `Garage` | concrete | `vehicle: Vehicle` |

use std::sync::Arc;

use linkme::distributed_slice;
use wirebox_domain::{Injectable, Object, ParameterDescriptor, TypeDescriptor};
use wirebox_infrastructure::{TYPE_DESCRIPTORS, TypeCatalog};

/// Paint color, always built as red
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color {
    pub name: String,
}

impl Injectable for Color {
    const TYPE_NAME: &'static str = "Color";
}

/// A car with an owner and an injected color
#[derive(Debug)]
pub struct Car {
    pub owner: String,
    pub color: Arc<Color>,
}

impl Injectable for Car {
    const TYPE_NAME: &'static str = "Car";
}

/// Holds whatever is bound to `Vehicle`
#[derive(Debug)]
pub struct Garage {
    pub vehicle: Object,
}

impl Injectable for Garage {
    const TYPE_NAME: &'static str = "Garage";
}

#[distributed_slice(TYPE_DESCRIPTORS)]
static COLOR: TypeDescriptor = TypeDescriptor::concrete(Color::TYPE_NAME, &[], |_| {
    Ok(Object::of(Color {
        name: "red".to_string(),
    }))
});

#[distributed_slice(TYPE_DESCRIPTORS)]
static CAR: TypeDescriptor = TypeDescriptor::concrete(
    Car::TYPE_NAME,
    &[
        ParameterDescriptor::value(0, "owner").with_default(|| Object::from("nobody")),
        ParameterDescriptor::typed(1, "color", Color::TYPE_NAME),
    ],
    |args| {
        Ok(Object::of(Car {
            owner: args.cloned(0)?,
            color: args.shared(1)?,
        }))
    },
);

#[distributed_slice(TYPE_DESCRIPTORS)]
static VEHICLE: TypeDescriptor = TypeDescriptor::interface("Vehicle");

#[distributed_slice(TYPE_DESCRIPTORS)]
static GARAGE: TypeDescriptor = TypeDescriptor::concrete(
    Garage::TYPE_NAME,
    &[ParameterDescriptor::typed(0, "vehicle", "Vehicle")],
    |args| {
        Ok(Object::of(Garage {
            vehicle: args.get(0)?.clone(),
        }))
    },
);

/// Catalog of every linked descriptor, the sample types included
pub fn linked_catalog() -> TypeCatalog {
    TypeCatalog::linked()
}
