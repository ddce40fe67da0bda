//! Default-parameter overload expansion: counts, prefix shapes, and
//! opt-out directives.

use crate::helpers::graph_fixtures::*;
use crate::helpers::view_assertions::*;
use lumen::light::SyntheticRule;
use lumen::mapper::Ruleset;
use lumen::symbols::{
    AnnotationValue, ClassDecl, ClassKind, ConstructorDecl, DeclKind, FunctionDecl, GraphBuilder,
    Param, SourceAnnotation, SourceModifiers, SymbolGraph, TypeShape,
};
use lumen::translate::{TranslationContext, translate};
use lumen::{DeclId, UnitId};

/// `fun greet(a: Int, b: Int = 1, c: String = "x"): Unit` on a class.
fn class_with_defaults(annotations: Vec<SourceAnnotation>) -> (SymbolGraph, UnitId, DeclId) {
    let mut b = GraphBuilder::new();
    let unit = b.unit("greeter", "demo");
    let class = plain_class(&mut b, unit, "Greeter");
    b.add(
        unit,
        Some(class),
        "greet",
        SourceModifiers::default(),
        annotations,
        DeclKind::Function(FunctionDecl::new(
            vec![
                Param::new("a", TypeShape::int()),
                Param::new("b", TypeShape::int()).defaulted(),
                Param::new("c", TypeShape::string()).defaulted(),
            ],
            TypeShape::unit(),
        )),
    )
    .unwrap();
    (b.finish(), unit, class)
}

#[test]
fn test_two_defaults_yield_three_callable_shapes() {
    let (graph, _, class) = class_with_defaults(vec![]);
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, class);
    let greets: Vec<_> = view.members_named("greet").collect();
    assert_eq!(greets.len(), 3, "base shape plus one per omitted default");

    let mut arities: Vec<usize> = greets.iter().map(|m| m.params().len()).collect();
    arities.sort_unstable();
    assert_eq!(arities, vec![1, 2, 3]);
}

#[test]
fn test_overloads_are_strict_prefixes() {
    let (graph, _, class) = class_with_defaults(vec![]);
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, class);
    for member in view.synthetic_members(SyntheticRule::OverloadExpansion) {
        let names: Vec<&str> = member.params().iter().map(|p| p.name.as_str()).collect();
        assert!(
            ["a"] == names.as_slice() || ["a", "b"] == names.as_slice(),
            "overload must be a prefix of (a, b, c), got {names:?}"
        );
    }
}

#[test]
fn test_bare_opt_out_suppresses_all_overloads() {
    let (graph, _, class) = class_with_defaults(vec![SourceAnnotation::new("lang.jvm.NoOverloads")]);
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, class);
    assert_eq!(view.members_named("greet").count(), 1);
    assert_eq!(count_rule(&view, SyntheticRule::OverloadExpansion), 0);
}

#[test]
fn test_threshold_opt_out_suppresses_low_arity_entries() {
    let (graph, _, class) = class_with_defaults(vec![
        SourceAnnotation::new("lang.jvm.NoOverloads").with_arg("below", AnnotationValue::Int(2)),
    ]);
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, class);
    let greets: Vec<_> = view.members_named("greet").collect();
    assert_eq!(greets.len(), 2, "the 1-ary entry must be suppressed");
    assert!(greets.iter().all(|m| m.params().len() >= 2));
}

#[test]
fn test_constructor_defaults_expand_too() {
    let mut b = GraphBuilder::new();
    let unit = b.unit("box", "demo");
    let class = b
        .add(
            unit,
            None,
            "Box",
            SourceModifiers::default(),
            vec![],
            DeclKind::Class(ClassDecl::new(ClassKind::Class)),
        )
        .unwrap();
    b.add(
        unit,
        Some(class),
        "<init>",
        SourceModifiers::default(),
        vec![],
        DeclKind::Constructor(ConstructorDecl::primary(vec![
            Param::new("size", TypeShape::int()),
            Param::new("label", TypeShape::string()).defaulted(),
        ])),
    )
    .unwrap();
    let graph = b.finish();
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, class);
    let ctors: Vec<_> = view.members.iter().filter(|m| m.is_constructor()).collect();
    assert_eq!(ctors.len(), 2);
    let mut arities: Vec<usize> = ctors.iter().map(|m| m.params().len()).collect();
    arities.sort_unstable();
    assert_eq!(arities, vec![1, 2]);
}

#[test]
fn test_expansion_respects_ruleset() {
    let (graph, _, class) = class_with_defaults(vec![]);
    let ruleset = Ruleset {
        expand_overloads: false,
        ..Ruleset::default()
    };
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, class);
    assert_eq!(view.members_named("greet").count(), 1);
}
