//! Tests for type descriptors

use wirebox_domain::{
    Arguments, Error, Object, ParameterDescriptor, TypeDescriptor, TypeKind,
};

static POINT: TypeDescriptor = TypeDescriptor::concrete(
    "Point",
    &[
        ParameterDescriptor::value(0, "x"),
        ParameterDescriptor::value(1, "y").with_default(|| Object::from(0_i64)),
    ],
    |args| {
        let x: i64 = args.cloned(0)?;
        let y: i64 = args.cloned(1)?;
        Ok(Object::named("Point", (x, y)))
    },
);

#[test]
fn test_concrete_descriptor_is_instantiable() {
    assert_eq!(POINT.kind, TypeKind::Concrete);
    assert!(POINT.is_instantiable());
    assert!(POINT.parameters[1].default.is_some());
    assert!(POINT.parameters[0].declared_type.is_none());
}

#[test]
fn test_construct_runs_the_constructor() {
    let args = Arguments::new(vec![Object::from(3_i64), Object::from(4_i64)]);
    let point = POINT.construct(args).unwrap();
    assert_eq!(point.type_name(), "Point");
    assert_eq!(point.downcast_ref::<(i64, i64)>(), Some(&(3, 4)));
}

#[test]
fn test_abstract_and_interface_are_not_instantiable() {
    let shape = TypeDescriptor::abstract_type("Shape");
    let drawable = TypeDescriptor::interface("Drawable");

    assert!(!shape.is_instantiable());
    assert!(!drawable.is_instantiable());
    assert_eq!(
        drawable.not_instantiable_reason().as_deref(),
        Some("type is interface")
    );

    match shape.construct(Arguments::default()) {
        Err(Error::NotInstantiable { type_name, reason }) => {
            assert_eq!(type_name, "Shape");
            assert_eq!(reason, "type is abstract");
        }
        other => panic!("Expected NotInstantiable error, got {other:?}"),
    }
}

#[test]
fn test_typed_parameter() {
    let parameter = ParameterDescriptor::typed(2, "engine", "Engine");
    assert_eq!(parameter.index, 2);
    assert_eq!(parameter.declared_type, Some("Engine"));
}

#[test]
fn test_parameter_order_check() {
    static SWAPPED: TypeDescriptor = TypeDescriptor::concrete(
        "Swapped",
        &[
            ParameterDescriptor::value(1, "a"),
            ParameterDescriptor::value(0, "b"),
        ],
        |_| Ok(Object::named("Swapped", ())),
    );

    assert!(POINT.has_ordered_parameters());
    assert!(!SWAPPED.has_ordered_parameters());
    assert!(TypeDescriptor::interface("Drawable").has_ordered_parameters());
}
