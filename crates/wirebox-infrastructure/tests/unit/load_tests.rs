//! Bulk load in lenient and strict mode

use wirebox_domain::{Binding, Error, Factory, LoadEntry, Object, Target, TargetKind};
use wirebox_infrastructure::Container;
use wirebox_infrastructure::config::{ContainerConfig, LoadMode};

use crate::fixtures::{self, Plain};

fn strict_container() -> Container {
    let config = ContainerConfig {
        load_mode: LoadMode::Strict,
        ..ContainerConfig::default()
    };
    Container::with_config(fixtures::catalog(), config)
}

#[test]
fn test_load_registers_valid_entries() {
    let mut container = Container::new(fixtures::catalog());

    let report = container
        .load([("plain", "Plain"), ("other", "OtherPlain")])
        .unwrap();

    assert!(report.is_complete());
    assert_eq!(report.registered, vec!["plain", "other"]);
    assert!(container.has("plain"));
    assert!(container.has("other"));
}

#[test]
fn test_lenient_load_skips_absent_and_unknown() {
    let mut container = Container::new(fixtures::catalog());

    let report = container
        .load(vec![
            LoadEntry::keyed("a", "Plain"),
            LoadEntry::absent(Some("null".to_string())),
            LoadEntry::keyed("b", "Nothing"),
        ])
        .unwrap();

    assert_eq!(container.keys(), vec!["a"]);
    assert_eq!(report.registered, vec!["a"]);
    let skipped: Vec<&str> = report.skipped.iter().map(|s| s.entry.as_str()).collect();
    assert_eq!(skipped, vec!["null", "b"]);
    assert!(!report.is_complete());
}

#[test]
fn test_load_derives_instance_key_from_type() {
    let mut container = Container::new(fixtures::catalog());
    let instance = Object::of(Plain);

    container
        .load(vec![LoadEntry::unkeyed(instance.clone())])
        .unwrap();

    let resolved = container.resolve("Plain").unwrap();
    assert!(resolved.ptr_eq(&instance));
}

#[test]
fn test_load_derives_type_reference_key() {
    let mut container = Container::new(fixtures::catalog());

    container.load(vec![LoadEntry::unkeyed("Plain")]).unwrap();

    assert!(matches!(
        container.view().get("Plain"),
        Some(Target::TypeReference(name)) if name == "Plain"
    ));
}

#[test]
fn test_lenient_load_skips_non_constructible_targets() {
    let mut container = Container::new(fixtures::catalog());

    let report = container
        .load(vec![
            LoadEntry::keyed("a", "Plain"),
            LoadEntry::absent(Some("null".to_string())),
            LoadEntry::keyed("b", "Shape"),
            LoadEntry::keyed("c", "Greeter"),
        ])
        .unwrap();

    assert_eq!(report.registered, vec!["a"]);
    assert!(container.has("a"));
    assert!(!container.has("b"));
    assert!(!container.has("c"));
    let skipped: Vec<&str> = report.skipped.iter().map(|s| s.entry.as_str()).collect();
    assert_eq!(skipped, vec!["null", "b", "c"]);
}

#[test]
fn test_load_binds_interface_key_to_implementation() {
    let mut container = Container::new(fixtures::catalog());

    let report = container.load([("Greeter", "EnglishGreeter")]).unwrap();

    assert!(report.is_complete());
    assert_eq!(container.resolve("Greeter").unwrap().type_name(), "EnglishGreeter");
}

#[test]
fn test_load_keeps_keyed_factory() {
    let mut container = Container::new(fixtures::catalog());
    let factory = Factory::new(|_| Ok(Object::from(1_i64)));

    container
        .load(vec![LoadEntry::keyed("one", factory.clone())])
        .unwrap();

    let view = container.view();
    assert!(matches!(view.get("one"), Some(Target::Factory(bound)) if bound.ptr_eq(&factory)));
}

#[test]
fn test_load_skips_unkeyed_factory() {
    let mut container = Container::new(fixtures::catalog());

    let report = container
        .load(vec![LoadEntry::unkeyed(Factory::new(|_| {
            Ok(Object::from(1_i64))
        }))])
        .unwrap();

    assert!(container.is_empty());
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].entry, "<unnamed>");
}

#[test]
fn test_load_skips_empty_key() {
    let mut container = Container::new(fixtures::catalog());

    let report = container.load([("", "Plain")]).unwrap();

    assert!(container.is_empty());
    assert_eq!(report.skipped.len(), 1);
}

#[test]
fn test_load_overwrites_existing_binding() {
    let mut container = Container::new(fixtures::catalog());
    container.bind("service", Object::of(Plain));

    container.load([("service", "OtherPlain")]).unwrap();

    assert_eq!(container.view()["service"].kind(), TargetKind::TypeReference);
}

#[test]
fn test_load_later_entry_wins() {
    let mut container = Container::new(fixtures::catalog());

    container
        .load([("service", "Plain"), ("service", "OtherPlain")])
        .unwrap();

    let resolved = container.resolve("service").unwrap();
    assert_eq!(resolved.type_name(), "OtherPlain");
}

#[test]
fn test_load_accepts_bindings() {
    let mut container = Container::new(fixtures::catalog());

    container
        .load(vec![Binding::new("plain", "Plain")])
        .unwrap();

    assert!(container.has("plain"));
}

#[test]
fn test_strict_load_fails_without_registering() {
    let mut container = strict_container();

    let error = container
        .load(vec![
            LoadEntry::keyed("a", "Plain"),
            LoadEntry::keyed("b", "Nothing"),
            LoadEntry::keyed("c", "OtherPlain"),
        ])
        .unwrap_err();

    assert!(matches!(error, Error::InvalidDependency { ref entry, .. } if entry == "b"));
    assert!(container.is_empty());
}

#[test]
fn test_strict_load_rejects_abstract_target() {
    let mut container = strict_container();

    let error = container
        .load([("a", "Plain"), ("b", "Shape")])
        .unwrap_err();

    assert!(matches!(error, Error::InvalidDependency { ref entry, .. } if entry == "b"));
    assert!(!container.has("a"));
    assert!(!container.has("b"));
}

#[test]
fn test_strict_load_registers_valid_batch() {
    let mut container = strict_container();

    let report = container
        .load([("a", "Plain"), ("c", "OtherPlain")])
        .unwrap();

    assert!(report.is_complete());
    assert_eq!(container.len(), 2);
}
