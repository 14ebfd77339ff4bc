//! Tests for positional argument access

use std::sync::Arc;

use wirebox_domain::{Arguments, Error, Injectable, Object};

struct Engine {
    cylinders: u32,
}

impl Injectable for Engine {
    const TYPE_NAME: &'static str = "Engine";
}

#[test]
fn test_cloned_plain_values() {
    let args = Arguments::new(vec![Object::from(5_i64), Object::from("five")]);

    assert_eq!(args.len(), 2);
    assert_eq!(args.cloned::<i64>(0).unwrap(), 5);
    assert_eq!(args.cloned::<String>(1).unwrap(), "five");
}

#[test]
fn test_shared_keeps_the_same_instance() {
    let engine = Object::of(Engine { cylinders: 6 });
    let args = Arguments::new(vec![engine.clone()]);

    let first: Arc<Engine> = args.shared(0).unwrap();
    let second: Arc<Engine> = engine.downcast().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.cylinders, 6);
}

#[test]
fn test_type_mismatch_reports_both_types() {
    let args = Arguments::new(vec![Object::from("five")]);

    match args.cloned::<i64>(0) {
        Err(Error::ArgumentType {
            index,
            expected,
            actual,
        }) => {
            assert_eq!(index, 0);
            assert_eq!(expected, "i64");
            assert!(actual.contains("String"));
        }
        other => panic!("Expected ArgumentType error, got {other:?}"),
    }
}

#[test]
fn test_missing_position() {
    let args = Arguments::default();

    assert!(args.is_empty());
    assert!(matches!(
        args.get(3),
        Err(Error::ArgumentMissing { index: 3, .. })
    ));
    assert!(matches!(
        args.shared::<Engine>(0),
        Err(Error::ArgumentMissing { index: 0, ref expected }) if expected.ends_with("Engine")
    ));
}

#[test]
fn test_collect_from_iterator() {
    let args: Arguments = (1_i64..=3).map(Object::from).collect();
    let values: Vec<i64> = args
        .iter()
        .filter_map(|object| object.downcast_ref::<i64>().copied())
        .collect();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn test_missing_position_is_not_a_type_mismatch() {
    let args = Arguments::new(vec![Object::from(1_i64)]);

    let error = args.cloned::<i64>(1).unwrap_err();

    assert!(matches!(error, Error::ArgumentMissing { index: 1, ref expected } if expected == "i64"));
    assert_eq!(error.to_string(), "Argument #1 is missing, expected i64");
}
