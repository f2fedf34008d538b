//! Unit tests for extraction, naming, and default resolution.

use rstest::rstest;

use crate::descriptor::TypeDescriptor;
use crate::shape::{AccessorDecl, DeclaredShape, StagedSetterDecl};
use crate::value::Value;

use super::{DefaultCategory, default_value, defaults, extract};

fn text() -> TypeDescriptor {
    TypeDescriptor::named("String")
}

#[rstest]
#[case("name", "name")]
#[case("get_name", "name")]
#[case("is_awesome", "awesome")]
#[case("getName", "name")]
#[case("isAwesome", "awesome")]
#[case("get", "get")]
#[case("is", "is")]
#[case("island", "island")]
#[case("getter", "getter")]
fn accessor_prefixes_are_stripped(#[case] accessor: &str, #[case] property: &str) {
    let shape = DeclaredShape::new("Test").with_accessor(AccessorDecl::new(accessor, text()));
    let schema = extract(&shape);
    assert_eq!(schema.properties[0].name, property);
    assert_eq!(schema.properties[0].wire_name, property);
}

#[test]
fn ordinals_are_dense_and_ordered() {
    let shape = DeclaredShape::new("Test")
        .with_accessor(AccessorDecl::new("a", text()))
        .with_accessor(AccessorDecl::new("b", text()))
        .with_accessor(AccessorDecl::new("c", text()));
    let schema = extract(&shape);
    let ordinals: Vec<_> = schema.properties.iter().map(|p| p.ordinal).collect();
    assert_eq!(ordinals, vec![0, 1, 2]);
}

#[test]
fn explicit_wire_name_and_alternates_are_kept() {
    let shape = DeclaredShape::new("Test").with_accessor(
        AccessorDecl::new("i", text())
            .with_wire_name("_I")
            .with_alternate("_I_1")
            .with_alternate("_I_2"),
    );
    let schema = extract(&shape);
    let p = &schema.properties[0];
    assert_eq!(p.wire_name, "_I");
    assert!(p.alternate_wire_names.contains("_I_1"));
    assert!(p.alternate_wire_names.contains("_I_2"));
}

#[test]
fn alternate_equal_to_primary_is_dropped() {
    let shape = DeclaredShape::new("Test").with_accessor(
        AccessorDecl::new("d", text())
            .with_wire_name("_D")
            .with_alternate("_D"),
    );
    let schema = extract(&shape);
    assert!(schema.properties[0].alternate_wire_names.is_empty());
}

#[test]
fn staged_setter_is_cross_referenced_by_name_and_type() {
    let shape = DeclaredShape::new("Test")
        .with_accessor(AccessorDecl::new("a", text()))
        .with_accessor(AccessorDecl::new("b", TypeDescriptor::named("i64")))
        .with_staged_setter(StagedSetterDecl::new("a", text()))
        .with_staged_setter(StagedSetterDecl::new("set_b", TypeDescriptor::named("i64")));
    let schema = extract(&shape);
    assert!(schema.properties[0].has_staged_setter);
    assert!(schema.properties[1].has_staged_setter);
    // A full complement of setters alone does not flip staged construction.
    assert!(!schema.uses_staged_construction);
}

#[test]
fn mismatched_setter_type_does_not_back_the_property() {
    let shape = DeclaredShape::new("Test")
        .with_accessor(AccessorDecl::new("a", text()))
        .with_staged_setter(StagedSetterDecl::new("a", TypeDescriptor::named("i64")));
    let schema = extract(&shape);
    assert!(!schema.properties[0].has_staged_setter);
}

#[test]
fn setter_only_property_is_write_only_and_forces_staging() {
    let shape = DeclaredShape::new("Test")
        .with_accessor(AccessorDecl::new("a", text()))
        .with_staged_setter(StagedSetterDecl::new("set_hidden", text()));
    let schema = extract(&shape);
    assert!(schema.uses_staged_construction);
    let hidden = schema.property("hidden").map(|p| (p.ordinal, p.readable));
    assert_eq!(hidden, Some((1, false)));
}

#[rstest]
#[case(TypeDescriptor::named("i32"), false, DefaultCategory::Integer, Value::Integer(0))]
#[case(TypeDescriptor::named("f64"), false, DefaultCategory::Float, Value::Float(0.0))]
#[case(TypeDescriptor::named("bool"), false, DefaultCategory::Boolean, Value::Bool(false))]
#[case(TypeDescriptor::named("char"), false, DefaultCategory::Character, Value::Char('\0'))]
#[case(
    TypeDescriptor::parameterized("Vec", vec![TypeDescriptor::named("String")]),
    false,
    DefaultCategory::Sequence,
    Value::Seq(vec![])
)]
#[case(
    TypeDescriptor::parameterized(
        "BTreeMap",
        vec![TypeDescriptor::named("String"), TypeDescriptor::named("i64")],
    ),
    false,
    DefaultCategory::Mapping,
    Value::Map(vec![])
)]
#[case(TypeDescriptor::named("String"), true, DefaultCategory::Nullable, Value::Null)]
#[case(TypeDescriptor::named("String"), false, DefaultCategory::Reference, Value::Null)]
#[case(TypeDescriptor::parameter(0), false, DefaultCategory::Reference, Value::Null)]
fn default_categories_and_fill_values(
    #[case] declared: TypeDescriptor,
    #[case] nullable: bool,
    #[case] category: DefaultCategory,
    #[case] fill: Value,
) {
    assert_eq!(defaults::category_of(&declared, nullable), category);
    assert_eq!(default_value(category), fill);
}

#[test]
fn formal_parameters_are_preserved_in_order() {
    let shape = DeclaredShape::new("Pair")
        .with_formal_parameter("A")
        .with_formal_parameter("B");
    let schema = extract(&shape);
    assert!(schema.is_generic());
    assert_eq!(schema.formal_parameters, vec!["A", "B"]);
}
