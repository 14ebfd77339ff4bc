use wirebox_domain::{Object, TypeDescriptor, TypeIntrospector, TypeKind};
use wirebox_infrastructure::TypeCatalog;

use crate::fixtures;

#[test]
fn test_empty_catalog() {
    let catalog = TypeCatalog::new();

    assert!(catalog.is_empty());
    assert!(!catalog.knows("Plain"));
    assert!(catalog.describe("Plain").is_none());
}

#[test]
fn test_describe_returns_registered_descriptor() {
    let catalog = fixtures::catalog();

    let descriptor = catalog.describe("WithParameters").unwrap();

    assert_eq!(descriptor.kind, TypeKind::Concrete);
    assert_eq!(descriptor.parameters.len(), 4);
}

#[test]
fn test_constructible_only_for_concrete_types() {
    let catalog = fixtures::catalog();

    assert!(catalog.is_constructible("Plain"));
    assert!(!catalog.is_constructible("Shape"));
    assert!(!catalog.is_constructible("Greeter"));
    assert!(!catalog.is_constructible("Nothing"));
}

#[test]
fn test_register_replaces_by_name() {
    let mut catalog = TypeCatalog::new().with(TypeDescriptor::abstract_type("Thing"));

    let previous = catalog.register(TypeDescriptor::concrete("Thing", &[], |_| {
        Ok(Object::named("Thing", ()))
    }));

    assert_eq!(previous.map(|descriptor| descriptor.kind), Some(TypeKind::Abstract));
    assert_eq!(catalog.len(), 1);
    assert!(catalog.is_constructible("Thing"));
}

#[test]
fn test_names_are_sorted() {
    let catalog = TypeCatalog::new()
        .with(TypeDescriptor::interface("Zeta"))
        .with(TypeDescriptor::interface("Alpha"));

    assert_eq!(catalog.names(), vec!["Alpha", "Zeta"]);
}

#[test]
fn test_available_lists_kinds() {
    let catalog = TypeCatalog::new()
        .with(fixtures::PLAIN)
        .with(fixtures::SHAPE)
        .with(fixtures::GREETER);

    let rendered = catalog.available().to_string();

    assert!(rendered.starts_with("Available Types:"));
    assert!(rendered.contains("  - Greeter (interface)"));
    assert!(rendered.contains("  - Plain (concrete)"));
    assert!(rendered.contains("  - Shape (abstract)"));
}

#[test]
fn test_available_on_empty_catalog() {
    let rendered = TypeCatalog::new().available().to_string();

    assert!(rendered.contains("(none)"));
}
