//! Objects and companions: singleton fields, static promotion, and
//! promotion-only members.

use crate::helpers::view_assertions::*;
use lumen::light::{Modifier, SyntheticRule};
use lumen::mapper::Ruleset;
use lumen::symbols::{
    AnnotationValue, ClassDecl, ClassKind, DeclKind, FunctionDecl, GraphBuilder, PropertyDecl,
    SourceAnnotation, SourceModifiers, SymbolGraph, TypeShape,
};
use lumen::translate::{TranslationContext, translate};
use lumen::{DeclId, UnitId};

fn static_annotation() -> SourceAnnotation {
    SourceAnnotation::new("lang.jvm.Static")
}

fn static_only_annotation() -> SourceAnnotation {
    SourceAnnotation::new("lang.jvm.Static").with_arg("only", AnnotationValue::Bool(true))
}

/// `object Registry { @Static fun create(): String }`
fn registry_object(annotation: SourceAnnotation) -> (SymbolGraph, UnitId, DeclId) {
    let mut b = GraphBuilder::new();
    let unit = b.unit("registry", "demo");
    let object = b
        .add(
            unit,
            None,
            "Registry",
            SourceModifiers::default(),
            vec![],
            DeclKind::Class(ClassDecl::new(ClassKind::Object {
                is_companion: false,
            })),
        )
        .unwrap();
    b.add(
        unit,
        Some(object),
        "create",
        SourceModifiers::default(),
        vec![annotation],
        DeclKind::Function(FunctionDecl::new(vec![], TypeShape::string())),
    )
    .unwrap();
    (b.finish(), unit, object)
}

/// `class Owner { companion object Companion { ... } }`
fn owner_with_companion() -> (SymbolGraph, UnitId, DeclId, DeclId) {
    let mut b = GraphBuilder::new();
    let unit = b.unit("owner", "demo");
    let owner = b
        .add(
            unit,
            None,
            "Owner",
            SourceModifiers::default(),
            vec![],
            DeclKind::Class(ClassDecl::new(ClassKind::Class)),
        )
        .unwrap();
    let companion = b
        .add(
            unit,
            Some(owner),
            "Companion",
            SourceModifiers::default(),
            vec![],
            DeclKind::Class(ClassDecl::new(ClassKind::Object { is_companion: true })),
        )
        .unwrap();
    b.add(
        unit,
        Some(companion),
        "make",
        SourceModifiers::default(),
        vec![static_annotation()],
        DeclKind::Function(FunctionDecl::new(vec![], TypeShape::int())),
    )
    .unwrap();
    b.add(
        unit,
        Some(companion),
        "VERSION",
        SourceModifiers::default().constant(),
        vec![],
        DeclKind::Property(PropertyDecl::val(TypeShape::int())),
    )
    .unwrap();
    (b.finish(), unit, owner, companion)
}

#[test]
fn test_named_object_has_instance_field_and_private_ctor() {
    let (graph, _, object) = registry_object(static_annotation());
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, object);
    let instance = get_member(&view, "INSTANCE");
    assert!(instance.is_field());
    assert_modifier(instance, Modifier::Static);
    assert_modifier(instance, Modifier::Final);

    let ctor = view.members.iter().find(|m| m.is_constructor()).unwrap();
    assert_modifier(ctor, Modifier::Private);
}

#[test]
fn test_promoted_member_appears_twice_on_named_object() {
    let (graph, _, object) = registry_object(static_annotation());
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, object);
    let creates: Vec<_> = view.members_named("create").collect();
    assert_eq!(creates.len(), 2, "instance form plus static duplicate");

    let static_form = creates
        .iter()
        .find(|m| m.modifiers.contains(Modifier::Static))
        .expect("static duplicate");
    assert_rule(static_form, SyntheticRule::StaticPromotion);

    let instance_form = creates
        .iter()
        .find(|m| !m.modifiers.contains(Modifier::Static))
        .expect("instance form");
    assert!(!instance_form.origin.is_synthetic());
}

#[test]
fn test_promotion_only_suppresses_instance_form() {
    let (graph, _, object) = registry_object(static_only_annotation());
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, object);
    let creates: Vec<_> = view.members_named("create").collect();
    assert_eq!(creates.len(), 1, "only the static form remains");
    assert_modifier(creates[0], Modifier::Static);
    assert_rule(creates[0], SyntheticRule::StaticPromotion);
}

#[test]
fn test_companion_member_promoted_onto_owner() {
    let (graph, _, owner, companion) = owner_with_companion();
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let owner_view = translate(&ctx, owner);
    let make = get_member(&owner_view, "make");
    assert_modifier(make, Modifier::Static);
    assert_rule(make, SyntheticRule::StaticPromotion);

    // The companion's own view keeps the instance form.
    let companion_view = translate(&ctx, companion);
    let make = get_member(&companion_view, "make");
    assert!(!make.modifiers.contains(Modifier::Static));
    assert!(!make.origin.is_synthetic());
}

#[test]
fn test_companion_instance_field_on_owner() {
    let (graph, _, owner, _) = owner_with_companion();
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, owner);
    let field = get_member(&view, "Companion");
    assert!(field.is_field());
    assert_modifier(field, Modifier::Static);
    assert_modifier(field, Modifier::Final);
}

#[test]
fn test_const_is_promotion_only() {
    let (graph, _, owner, companion) = owner_with_companion();
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let owner_view = translate(&ctx, owner);
    let version = get_member(&owner_view, "VERSION");
    assert!(version.is_field());
    assert_modifier(version, Modifier::Static);
    assert_modifier(version, Modifier::Final);

    let companion_view = translate(&ctx, companion);
    assert_no_member(&companion_view, "VERSION");
    assert_no_member(&companion_view, "getVERSION");
}

#[test]
fn test_companion_foreign_name_is_nested() {
    let (graph, _, _, companion) = owner_with_companion();
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, companion);
    assert_eq!(view.qualified_name.as_ref(), "demo.Owner$Companion");
    assert_modifier_set_contains(&view, Modifier::Static);
}

fn assert_modifier_set_contains(view: &lumen::light::LightClassView, modifier: Modifier) {
    assert!(
        view.modifiers.contains(modifier),
        "expected class {} to be {}",
        view.qualified_name,
        modifier.as_str()
    );
}
