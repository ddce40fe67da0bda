//! Function translation: suspend shapes, declared exceptions, varargs,
//! renames, exclusion, and interface members.

use crate::helpers::graph_fixtures::*;
use crate::helpers::view_assertions::*;
use lumen::light::{JvmType, LightMemberKind, Modifier};
use lumen::mapper::Ruleset;
use lumen::symbols::{
    AnnotationValue, ClassDecl, ClassKind, DeclKind, FunctionDecl, GraphBuilder, Param,
    SourceAnnotation, SourceModifiers, SymbolGraph, TypeParam, TypeShape,
};
use lumen::translate::{TranslationContext, translate};
use lumen::{DeclId, UnitId};

fn class_with_function(
    name: &str,
    modifiers: SourceModifiers,
    annotations: Vec<SourceAnnotation>,
    func: FunctionDecl,
) -> (SymbolGraph, UnitId, DeclId) {
    let mut b = GraphBuilder::new();
    let unit = b.unit("api", "demo");
    let class = plain_class(&mut b, unit, "Api");
    b.add(unit, Some(class), name, modifiers, annotations, DeclKind::Function(func))
        .unwrap();
    (b.finish(), unit, class)
}

#[test]
fn test_suspend_appends_continuation_and_erases_return() {
    let (graph, _, class) = class_with_function(
        "load",
        SourceModifiers::default(),
        vec![],
        FunctionDecl::new(vec![Param::new("id", TypeShape::int())], TypeShape::string()).suspend(),
    );
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, class);
    let load = get_member(&view, "load");
    let LightMemberKind::Method {
        params,
        return_type,
        ..
    } = &load.kind
    else {
        panic!("load must be a method");
    };
    assert_eq!(params.len(), 2);
    assert_eq!(params[1].name.as_str(), "$completion");
    assert_eq!(
        params[1].ty.to_string(),
        "lang.coroutines.Continuation<? super java.lang.String>"
    );
    assert_eq!(*return_type, JvmType::object());
    assert!(load.annotations.contains("lang.annot.Nullable"));
}

#[test]
fn test_throws_directive_carries_exception_list() {
    let (graph, _, class) = class_with_function(
        "read",
        SourceModifiers::default(),
        vec![SourceAnnotation::new("lang.jvm.Throws").with_arg(
            "classes",
            AnnotationValue::Types(vec![
                "java.io.IOException".into(),
                "java.lang.IllegalStateException".into(),
            ]),
        )],
        FunctionDecl::new(vec![], TypeShape::string()),
    );
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, class);
    let read = get_member(&view, "read");
    let LightMemberKind::Method { throws, .. } = &read.kind else {
        panic!("read must be a method");
    };
    let rendered: Vec<&str> = throws.iter().map(|t| t.as_ref()).collect();
    assert_eq!(
        rendered,
        vec!["java.io.IOException", "java.lang.IllegalStateException"]
    );
}

#[test]
fn test_vararg_parameter_maps_to_array() {
    let (graph, _, class) = class_with_function(
        "join",
        SourceModifiers::default(),
        vec![],
        FunctionDecl::new(
            vec![Param::new("parts", TypeShape::string()).vararg()],
            TypeShape::string(),
        ),
    );
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, class);
    let join = get_member(&view, "join");
    let param = &join.params()[0];
    assert!(param.is_vararg);
    assert_eq!(param.ty.to_string(), "java.lang.String[]");
}

#[test]
fn test_reified_inline_function_is_excluded() {
    let (graph, _, class) = class_with_function(
        "cast",
        SourceModifiers::default().inline(),
        vec![],
        FunctionDecl {
            type_params: vec![TypeParam::reified("T")],
            params: vec![],
            return_type: TypeShape::any(),
            is_suspend: false,
            has_body: true,
        },
    );
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, class);
    assert_no_member(&view, "cast");
}

#[test]
fn test_function_rename_directive() {
    let (graph, _, class) = class_with_function(
        "paint",
        SourceModifiers::default(),
        vec![SourceAnnotation::new("lang.jvm.Name")
            .with_arg("name", AnnotationValue::Str("render".into()))],
        FunctionDecl::new(vec![], TypeShape::unit()),
    );
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, class);
    get_member(&view, "render");
    assert_no_member(&view, "paint");
}

#[test]
fn test_excluded_function_is_absent() {
    let (graph, _, class) = class_with_function(
        "internalHook",
        SourceModifiers::default(),
        vec![SourceAnnotation::new("lang.jvm.Synthetic")],
        FunctionDecl::new(vec![], TypeShape::unit()),
    );
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, class);
    assert_no_member(&view, "internalHook");
}

#[test]
fn test_external_function_is_native() {
    let (graph, _, class) = class_with_function(
        "checksum",
        SourceModifiers::default().external(),
        vec![],
        FunctionDecl::new(vec![], TypeShape::int()),
    );
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, class);
    let checksum = get_member(&view, "checksum");
    assert_modifier(checksum, Modifier::Native);
}

#[test]
fn test_interface_members_default_versus_abstract() {
    let mut b = GraphBuilder::new();
    let unit = b.unit("shapes", "demo");
    let interface = b
        .add(
            unit,
            None,
            "Shape",
            SourceModifiers::default(),
            vec![],
            DeclKind::Class(ClassDecl::new(ClassKind::Interface)),
        )
        .unwrap();
    add_function(
        &mut b,
        unit,
        interface,
        "area",
        FunctionDecl::new(vec![], TypeShape::int()).without_body(),
    );
    add_function(
        &mut b,
        unit,
        interface,
        "describe",
        FunctionDecl::new(vec![], TypeShape::string()),
    );
    let graph = b.finish();
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, interface);
    let area = get_member(&view, "area");
    assert_modifier(area, Modifier::Abstract);
    assert_not_modifier(area, Modifier::Final);

    let describe = get_member(&view, "describe");
    assert_modifier(describe, Modifier::Default);
    assert_not_modifier(describe, Modifier::Abstract);
}

#[test]
fn test_unit_return_maps_to_void() {
    let (graph, _, class) = class_with_function(
        "touch",
        SourceModifiers::default(),
        vec![],
        FunctionDecl::new(vec![], TypeShape::unit()),
    );
    let ruleset = Ruleset::default();
    let ctx = TranslationContext::new(&graph, &ruleset);

    let view = translate(&ctx, class);
    let touch = get_member(&view, "touch");
    let LightMemberKind::Method { return_type, .. } = &touch.kind else {
        panic!("touch must be a method");
    };
    assert_eq!(*return_type, JvmType::Void);
    assert!(touch.annotations.is_empty(), "void carries no nullability");
}
