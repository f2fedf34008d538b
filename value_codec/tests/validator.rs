//! Factory validation observed through the public generation entry point.

use value_codec::{
    AccessorDecl, CODEC_TYPE_NAME, DeclaredShape, Diagnostics, FactoryDecl, TypeDescriptor,
    generate,
};

fn foo_shape() -> DeclaredShape {
    DeclaredShape::new("Foo")
        .with_accessor(AccessorDecl::new("a", TypeDescriptor::named("String")))
}

#[test]
fn factory_for_an_unrelated_type_warns_once_and_generates_nothing() {
    let shape = foo_shape().with_factory(FactoryDecl::new(
        "codec",
        TypeDescriptor::parameterized(CODEC_TYPE_NAME, vec![TypeDescriptor::named("Bar")]),
    ));
    let mut diagnostics = Diagnostics::new();
    assert!(generate(&shape, &mut diagnostics).is_none());
    assert_eq!(diagnostics.warnings().len(), 1);
    let warning = &diagnostics.warnings()[0];
    assert!(warning.contains("ValueCodec<Bar>"), "{warning}");
    assert!(warning.contains("`Foo`"), "{warning}");
}

#[test]
fn well_typed_factory_generates_with_no_warnings() {
    let shape = foo_shape().with_factory(FactoryDecl::for_value_type("Foo", false));
    let mut diagnostics = Diagnostics::new();
    let schema = generate(&shape, &mut diagnostics).expect("schema");
    assert_eq!(schema.type_name, "Foo");
    assert!(diagnostics.is_empty());
}

#[test]
fn accessor_prefixes_are_stripped_in_the_schema() {
    let shape = DeclaredShape::new("Prefixed")
        .with_accessor(AccessorDecl::new("get_width", TypeDescriptor::named("i64")))
        .with_accessor(AccessorDecl::new("is_open", TypeDescriptor::named("bool")))
        .with_accessor(AccessorDecl::new("getHeight", TypeDescriptor::named("i64")))
        .with_factory(FactoryDecl::for_value_type("Prefixed", false));
    let mut diagnostics = Diagnostics::new();
    let schema = generate(&shape, &mut diagnostics).expect("schema");
    let names: Vec<&str> = schema.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["width", "open", "height"]);
}
