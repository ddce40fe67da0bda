//! Graph fixtures for translation tests.
//!
//! Each fixture builds the symbol graph the semantic engine would hand
//! over for one small source unit.

use lumen::base::{DeclId, UnitId};
use lumen::symbols::{
    ClassDecl, ClassKind, ConstructorDecl, DeclKind, Delegation, FunctionDecl, GraphBuilder, Param,
    PropertyDecl, SourceModifiers, SymbolGraph, TypeShape,
};

/// A plain public final class with no members.
pub fn plain_class(b: &mut GraphBuilder, unit: UnitId, name: &str) -> DeclId {
    b.add(
        unit,
        None,
        name,
        SourceModifiers::default(),
        vec![],
        DeclKind::Class(ClassDecl::new(ClassKind::Class)),
    )
    .expect("class fixture")
}

/// Add a property member with default modifiers.
pub fn add_property(
    b: &mut GraphBuilder,
    unit: UnitId,
    class: DeclId,
    name: &str,
    prop: PropertyDecl,
) -> DeclId {
    b.add(
        unit,
        Some(class),
        name,
        SourceModifiers::default(),
        vec![],
        DeclKind::Property(prop),
    )
    .expect("property fixture")
}

/// Add a function member with default modifiers.
pub fn add_function(
    b: &mut GraphBuilder,
    unit: UnitId,
    class: DeclId,
    name: &str,
    func: FunctionDecl,
) -> DeclId {
    b.add(
        unit,
        Some(class),
        name,
        SourceModifiers::default(),
        vec![],
        DeclKind::Function(func),
    )
    .expect("function fixture")
}

/// `data class Person(val name: String, var age: Int)` in unit `demo`.
pub fn data_class_person() -> (SymbolGraph, UnitId, DeclId) {
    let mut b = GraphBuilder::new();
    let unit = b.unit("person", "demo");

    let mut class_decl = ClassDecl::new(ClassKind::Class);
    class_decl.is_data = true;
    let class = b
        .add(
            unit,
            None,
            "Person",
            SourceModifiers::default(),
            vec![],
            DeclKind::Class(class_decl),
        )
        .expect("data class");

    b.add(
        unit,
        Some(class),
        "<init>",
        SourceModifiers::default(),
        vec![],
        DeclKind::Constructor(ConstructorDecl::primary(vec![
            Param::new("name", TypeShape::string()),
            Param::new("age", TypeShape::int()),
        ])),
    )
    .expect("primary constructor");

    add_property(
        &mut b,
        unit,
        class,
        "name",
        PropertyDecl::val(TypeShape::string()).in_primary(0),
    );
    add_property(
        &mut b,
        unit,
        class,
        "age",
        PropertyDecl::var(TypeShape::int()).in_primary(1),
    );

    (b.finish(), unit, class)
}

/// `interface Engine` with three abstract members, and
/// `class Car(e: Engine) : Engine by e`.
pub fn delegating_car() -> (SymbolGraph, UnitId, DeclId) {
    let mut b = GraphBuilder::new();
    let unit = b.unit("car", "demo");

    let interface = b
        .add(
            unit,
            None,
            "Engine",
            SourceModifiers::default(),
            vec![],
            DeclKind::Class(ClassDecl::new(ClassKind::Interface)),
        )
        .expect("interface");
    add_function(
        &mut b,
        unit,
        interface,
        "start",
        FunctionDecl::new(vec![], TypeShape::unit()).without_body(),
    );
    add_function(
        &mut b,
        unit,
        interface,
        "stop",
        FunctionDecl::new(vec![], TypeShape::unit()).without_body(),
    );
    add_function(
        &mut b,
        unit,
        interface,
        "fuel",
        FunctionDecl::new(vec![Param::new("amount", TypeShape::int())], TypeShape::boolean())
            .without_body(),
    );

    let mut car_decl = ClassDecl::new(ClassKind::Class);
    car_decl.delegations.push(Delegation {
        interface: "demo.Engine".into(),
    });
    let car = b
        .add(
            unit,
            None,
            "Car",
            SourceModifiers::default(),
            vec![],
            DeclKind::Class(car_decl),
        )
        .expect("delegating class");

    (b.finish(), unit, car)
}
