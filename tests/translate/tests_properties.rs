//! Property translation: backing fields, lateinit, raw-field exposure,
//! renames, exclusion, and delegated properties.

use crate::helpers::graph_fixtures::*;
use crate::helpers::view_assertions::*;
use lumen::light::{LightMemberKind, Modifier};
use lumen::mapper::Ruleset;
use lumen::symbols::{
    AnnotationValue, DeclKind, GraphBuilder, PropertyDecl, SourceAnnotation, SourceModifiers,
    SymbolGraph, TypeShape, UseSite,
};
use lumen::translate::{TranslationContext, translate};
use lumen::{DeclId, UnitId};

fn class_with_property(
    name: &str,
    modifiers: SourceModifiers,
    annotations: Vec<SourceAnnotation>,
    prop: PropertyDecl,
) -> (SymbolGraph, UnitId, DeclId) {
    let mut b = GraphBuilder::new();
    let unit = b.unit("holder", "demo");
    let class = plain_class(&mut b, unit, "Holder");
    b.add(unit, Some(class), name, modifiers, annotations, DeclKind::Property(prop))
        .unwrap();
    (b.finish(), unit, class)
}

#[test]
fn test_backing_field_is_private_and_final_for_val() {
    let (graph, _, class) = class_with_property(
        "title",
        SourceModifiers::default(),
        vec![],
        PropertyDecl::val(TypeShape::string()),
    );
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, class);
    let field = view
        .members_named("title")
        .find(|m| m.is_field())
        .expect("backing field");
    assert_modifier(field, Modifier::Private);
    assert_modifier(field, Modifier::Final);
}

#[test]
fn test_lateinit_field_uses_property_visibility() {
    let (graph, _, class) = class_with_property(
        "service",
        SourceModifiers::default().lateinit(),
        vec![],
        PropertyDecl::var(TypeShape::named("demo.Service")),
    );
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, class);
    let field = view
        .members_named("service")
        .find(|m| m.is_field())
        .expect("lateinit field");
    assert_modifier(field, Modifier::Public);
    assert_not_modifier(field, Modifier::Private);

    // Lateinit accessors never carry nullability markers.
    let getter = get_member(&view, "getService");
    assert!(!getter.annotations.contains("lang.annot.NotNull"));
    assert!(!getter.annotations.contains("lang.annot.Nullable"));
}

#[test]
fn test_raw_field_exposure_suppresses_accessors() {
    let (graph, _, class) = class_with_property(
        "config",
        SourceModifiers::default(),
        vec![SourceAnnotation::new("lang.jvm.Field")],
        PropertyDecl::val(TypeShape::string()),
    );
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, class);
    let field = get_member(&view, "config");
    assert!(field.is_field());
    assert_modifier(field, Modifier::Public);
    assert_modifier(field, Modifier::Final);
    assert_no_member(&view, "getConfig");
}

#[test]
fn test_getter_rename_via_use_site_directive() {
    let (graph, _, class) = class_with_property(
        "size",
        SourceModifiers::default(),
        vec![
            SourceAnnotation::new("lang.jvm.Name")
                .at(UseSite::Get)
                .with_arg("name", AnnotationValue::Str("length".into())),
        ],
        PropertyDecl::val(TypeShape::int()),
    );
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, class);
    get_member(&view, "length");
    assert_no_member(&view, "getSize");
}

#[test]
fn test_setter_exclusion_keeps_getter() {
    let (graph, _, class) = class_with_property(
        "state",
        SourceModifiers::default(),
        vec![SourceAnnotation::new("lang.jvm.Synthetic").at(UseSite::Set)],
        PropertyDecl::var(TypeShape::int()),
    );
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, class);
    get_member(&view, "getState");
    assert_no_member(&view, "setState");
}

#[test]
fn test_whole_property_exclusion() {
    let (graph, _, class) = class_with_property(
        "hidden",
        SourceModifiers::default(),
        vec![SourceAnnotation::new("lang.jvm.Synthetic")],
        PropertyDecl::var(TypeShape::int()),
    );
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, class);
    assert_no_member(&view, "hidden");
    assert_no_member(&view, "getHidden");
    assert_no_member(&view, "setHidden");
}

#[test]
fn test_delegated_property_stores_delegate_field() {
    let (graph, _, class) = class_with_property(
        "title",
        SourceModifiers::default(),
        vec![],
        PropertyDecl::val(TypeShape::string()).delegated(TypeShape::named_final("demo.Lazy")),
    );
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, class);
    let delegate = get_member(&view, "title$delegate");
    assert!(delegate.is_field());
    assert_modifier(delegate, Modifier::Private);
    assert_modifier(delegate, Modifier::Final);
    let LightMemberKind::Field { ty } = &delegate.kind else {
        panic!("delegate must be a field");
    };
    assert_eq!(ty.to_string(), "demo.Lazy");

    get_member(&view, "getTitle");
    assert!(
        view.members_named("title").all(|m| !m.is_field()),
        "no plain backing field for a delegated property"
    );
}

#[test]
fn test_annotation_defaults_to_backing_field() {
    let (graph, _, class) = class_with_property(
        "tag",
        SourceModifiers::default(),
        vec![SourceAnnotation::new("demo.Marker")],
        PropertyDecl::val(TypeShape::string()),
    );
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, class);
    let field = view
        .members_named("tag")
        .find(|m| m.is_field())
        .expect("backing field");
    assert!(field.annotations.contains("demo.Marker"));

    let getter = get_member(&view, "getTag");
    assert!(!getter.annotations.contains("demo.Marker"));
}

#[test]
fn test_setparam_annotation_routes_to_setter_parameter() {
    let (graph, _, class) = class_with_property(
        "state",
        SourceModifiers::default(),
        vec![SourceAnnotation::new("demo.Valid").at(UseSite::SetParam)],
        PropertyDecl::var(TypeShape::int()),
    );
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, class);
    let setter = get_member(&view, "setState");
    assert!(setter.params()[0].annotations.contains("demo.Valid"));
}

#[test]
fn test_const_property_is_a_static_constant() {
    let (graph, _, class) = class_with_property(
        "LIMIT",
        SourceModifiers::default().constant(),
        vec![],
        PropertyDecl::val(TypeShape::int()),
    );
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, class);
    let field = get_member(&view, "LIMIT");
    assert!(field.is_field());
    assert_modifier(field, Modifier::Static);
    assert_modifier(field, Modifier::Final);
    assert_no_member(&view, "getLIMIT");
}
