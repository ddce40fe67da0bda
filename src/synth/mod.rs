//! Synthetic member generation.
//!
//! Each function here implements one generation rule from the feature
//! surface: accessors, backing fields, component accessors, data-class
//! utilities, delegation forwarders, overload expansion, static
//! promotion, enum utilities. Every produced member carries the
//! [`SyntheticRule`] that generated it; explicit declarations always win
//! over a synthetic member with the same signature (callers consult
//! [`LightMember::signature_key`] before installing).
//!
//! All functions are pure over the passed graph/ruleset. Unresolved
//! inputs degrade to omitted members, logged at `warn`, never errors to
//! the caller.

use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::{trace, warn};

use crate::base::{Name, QualifiedName};
use crate::light::{
    AnnotationSet, AnnotationView, JvmType, LightMember, LightMemberKind, MemberOrigin, Modifier,
    ModifierSet, ParamView, SyntheticRule, TypeParamView,
};
use crate::mapper::{
    self, AnnotationTarget, Directives, MemberFacet, NoOverloads, Ruleset, TypePosition, known,
    map_type, member_modifiers, nullability_annotation, route_annotations,
};
use crate::symbols::{
    ClassDecl, ClassKind, ConstructorDecl, Decl, DeclKind, FunctionDecl, Param, PropertyDecl,
    SymbolGraph, TypeParam, UseSite,
};

/// Internal faults hit while synthesizing members.
///
/// Never escapes the public surface: callers recover by omitting the
/// dependent members.
#[derive(Debug, Error)]
pub enum SynthesisFault {
    /// A delegated interface could not be resolved in the graph.
    #[error("unresolved delegation target: {0}")]
    UnresolvedInterface(QualifiedName),

    /// A delegation target resolved to a non-interface declaration.
    #[error("delegation target is not an interface: {0}")]
    NotAnInterface(QualifiedName),

    /// An anonymous object has several unrelated inferred supertypes.
    #[error("ambiguous supertype for anonymous object")]
    AmbiguousSupertype,
}

// ============================================================================
// SHARED MEMBER CONSTRUCTION
// ============================================================================

/// How a callable member is constructed.
#[derive(Debug, Clone, Copy)]
pub struct MethodOptions {
    pub in_interface: bool,
    pub make_static: bool,
    /// Forwarders are plain `public final` regardless of source modality.
    pub force_public_final: bool,
    pub origin: MemberOrigin,
}

impl MethodOptions {
    pub fn explicit(decl: &Decl, in_interface: bool) -> Self {
        Self {
            in_interface,
            make_static: false,
            force_public_final: false,
            origin: MemberOrigin::Explicit { decl: decl.id },
        }
    }
}

/// Map one value parameter to its view.
fn param_view(param: &Param, ruleset: &Ruleset) -> ParamView {
    let directives = Directives::parse(&param.annotations);
    let mapped = map_type(&param.ty, TypePosition::Param, ruleset);
    let (ty, is_vararg) = if param.is_vararg {
        (JvmType::Array(Box::new(mapped)), true)
    } else {
        (mapped, false)
    };

    let mut annotations =
        route_annotations(&directives, AnnotationTarget::Param, AnnotationTarget::Param);
    if let Some(marker) = nullability_annotation(&param.ty, &ty, ruleset) {
        annotations.insert(marker);
    }

    ParamView {
        name: param.name.clone(),
        ty,
        is_vararg,
        annotations,
    }
}

/// Map declared type parameters to their view form.
pub fn map_type_params(type_params: &[TypeParam], ruleset: &Ruleset) -> Vec<TypeParamView> {
    type_params
        .iter()
        .map(|tp| TypeParamView {
            name: tp.name.clone(),
            bounds: tp
                .bounds
                .iter()
                .map(|b| map_type(b, TypePosition::TypeArgument, ruleset))
                .collect(),
        })
        .collect()
}

/// Translate a function declaration into a light method.
///
/// Returns `None` when the member is excluded from the foreign view
/// (explicit exclusion, or an inline function with reified parameters,
/// which a foreign caller cannot instantiate).
pub fn method_from_function(
    decl: &Decl,
    func: &FunctionDecl,
    opts: &MethodOptions,
    ruleset: &Ruleset,
) -> Option<LightMember> {
    let directives = Directives::parse(&decl.annotations);
    if directives.excludes_declaration() {
        return None;
    }
    if decl.modifiers.is_inline && func.has_reified_params() {
        trace!(name = %decl.name, "reified inline function excluded from view");
        return None;
    }

    let name = directives
        .renamed(None)
        .cloned()
        .unwrap_or_else(|| decl.name.clone());

    let mut modifiers = if opts.force_public_final {
        ModifierSet::of([Modifier::Public, Modifier::Final])
    } else {
        member_modifiers(
            &decl.modifiers,
            MemberFacet::Method {
                in_interface: opts.in_interface,
                has_body: func.has_body,
            },
        )
    };
    if opts.make_static {
        modifiers.insert(Modifier::Static);
    }

    let mut params: Vec<ParamView> = func.params.iter().map(|p| param_view(p, ruleset)).collect();
    let mut return_type = map_type(&func.return_type, TypePosition::Return, ruleset);
    let mut annotations =
        route_annotations(&directives, AnnotationTarget::Method, AnnotationTarget::Method);

    if func.is_suspend {
        // The foreign shape of a suspend function: one trailing
        // continuation parameter, erased object return.
        let boxed_return = map_type(&func.return_type, TypePosition::TypeArgument, ruleset);
        let continuation = JvmType::generic(
            known::CONTINUATION,
            vec![JvmType::super_wildcard(boxed_return)],
        );
        params.push(ParamView::new("$completion", continuation));
        return_type = JvmType::object();
        if ruleset.emit_nullability {
            annotations.insert(AnnotationView::marker(known::NULLABLE));
        }
    } else if let Some(marker) = nullability_annotation(&func.return_type, &return_type, ruleset) {
        annotations.insert(marker);
    }

    Some(LightMember {
        name,
        kind: LightMemberKind::Method {
            type_params: map_type_params(&func.type_params, ruleset),
            params,
            return_type,
            throws: directives.throws.clone(),
        },
        modifiers,
        annotations,
        origin: opts.origin,
    })
}

/// Translate a constructor declaration into a light constructor.
pub fn constructor_member(
    decl: &Decl,
    ctor: &ConstructorDecl,
    class_name: &Name,
    force_private: bool,
    ruleset: &Ruleset,
) -> Option<LightMember> {
    let directives = Directives::parse(&decl.annotations);
    if directives.excludes_declaration() {
        return None;
    }

    let mut modifiers = member_modifiers(&decl.modifiers, MemberFacet::Constructor);
    if force_private {
        modifiers = ModifierSet::of([Modifier::Private]);
    }

    Some(LightMember {
        name: class_name.clone(),
        kind: LightMemberKind::Constructor {
            params: ctor.params.iter().map(|p| param_view(p, ruleset)).collect(),
            throws: directives.throws.clone(),
        },
        modifiers,
        annotations: route_annotations(
            &directives,
            AnnotationTarget::Method,
            AnnotationTarget::Method,
        ),
        origin: MemberOrigin::Explicit { decl: decl.id },
    })
}

// ============================================================================
// DEFAULT CONSTRUCTOR
// ============================================================================

/// The implicit no-arg constructor, synthesized only when no explicit
/// constructor exists and the class kind permits instantiation.
pub fn default_constructor(class_name: &Name, visibility: Modifier) -> LightMember {
    LightMember {
        name: class_name.clone(),
        kind: LightMemberKind::Constructor {
            params: Vec::new(),
            throws: Vec::new(),
        },
        modifiers: ModifierSet::of([visibility]),
        annotations: AnnotationSet::new(),
        origin: MemberOrigin::Synthetic {
            rule: SyntheticRule::DefaultConstructor,
        },
    }
}

// ============================================================================
// PROPERTIES
// ============================================================================

/// How property members are constructed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyOptions {
    pub in_interface: bool,
    pub make_static: bool,
    /// Record components surface accessors named after the property
    /// itself, without the `get` prefix.
    pub record_accessors: bool,
}

fn field_member(
    name: Name,
    ty: JvmType,
    modifiers: ModifierSet,
    annotations: AnnotationSet,
) -> LightMember {
    LightMember {
        name,
        kind: LightMemberKind::Field { ty },
        modifiers,
        annotations,
        origin: MemberOrigin::Synthetic {
            rule: SyntheticRule::BackingField,
        },
    }
}

/// Translate a property declaration into its foreign members: accessors
/// and, where the declaration implies one, a field.
pub fn property_members(
    decl: &Decl,
    prop: &PropertyDecl,
    opts: &PropertyOptions,
    ruleset: &Ruleset,
) -> Vec<LightMember> {
    let directives = Directives::parse(&decl.annotations);
    if directives.excludes_declaration() {
        return Vec::new();
    }

    let mut members = Vec::new();
    let field_ty = map_type(&prop.ty, TypePosition::Field, ruleset);
    let field_annotations = {
        let mut set = route_annotations(&directives, AnnotationTarget::Field, default_target(prop));
        if !decl.modifiers.is_lateinit {
            if let Some(marker) = nullability_annotation(&prop.ty, &field_ty, ruleset) {
                set.insert(marker);
            }
        }
        set
    };

    // `const` and raw-field exposure emit a single field, no accessors.
    if decl.modifiers.is_const {
        let modifiers = ModifierSet::of([
            mapper::map_visibility(decl.modifiers.visibility),
            Modifier::Static,
            Modifier::Final,
        ]);
        members.push(field_member(
            decl.name.clone(),
            field_ty,
            modifiers,
            field_annotations,
        ));
        return members;
    }

    if directives.raw_field {
        let mut modifiers = ModifierSet::new();
        modifiers.insert(mapper::map_visibility(decl.modifiers.visibility));
        if opts.make_static {
            modifiers.insert(Modifier::Static);
        }
        if !prop.is_mutable {
            modifiers.insert(Modifier::Final);
        }
        members.push(field_member(
            decl.name.clone(),
            field_ty,
            modifiers,
            field_annotations,
        ));
        return members;
    }

    // Delegated properties store the delegate, never a plain backing field.
    if let Some(delegate_ty) = &prop.delegate_type {
        let ty = map_type(delegate_ty, TypePosition::Field, ruleset);
        let modifiers = ModifierSet::of([Modifier::Private, Modifier::Final]);
        members.push(field_member(
            Name::from(format!("{}$delegate", decl.name)),
            ty,
            modifiers,
            AnnotationSet::new(),
        ));
    } else if prop.has_backing_field && !opts.in_interface {
        let mut modifiers = ModifierSet::new();
        if decl.modifiers.is_lateinit {
            // Lateinit exposes the field with the property's visibility;
            // it stays assignable until first write.
            modifiers.insert(mapper::map_visibility(decl.modifiers.visibility));
        } else {
            modifiers.insert(Modifier::Private);
            if !prop.is_mutable {
                modifiers.insert(Modifier::Final);
            }
        }
        if opts.make_static {
            modifiers.insert(Modifier::Static);
        }
        members.push(field_member(
            decl.name.clone(),
            field_ty,
            modifiers,
            field_annotations,
        ));
    }

    let accessor_origin = MemberOrigin::Synthetic {
        rule: SyntheticRule::PropertyAccessor,
    };
    let suppress_nullability = decl.modifiers.is_lateinit;

    if !directives.excludes(UseSite::Get) {
        let name = directives
            .renamed(Some(UseSite::Get))
            .cloned()
            .unwrap_or_else(|| {
                if opts.record_accessors {
                    decl.name.clone()
                } else {
                    mapper::getter_name(&decl.name)
                }
            });
        let mut modifiers = member_modifiers(
            &decl.modifiers,
            MemberFacet::Getter {
                in_interface: opts.in_interface,
            },
        );
        if opts.make_static {
            modifiers.insert(Modifier::Static);
        }
        let return_type = map_type(&prop.ty, TypePosition::Return, ruleset);
        let mut annotations = route_annotations(
            &directives,
            AnnotationTarget::Getter,
            default_target(prop),
        );
        if !suppress_nullability {
            if let Some(marker) = nullability_annotation(&prop.ty, &return_type, ruleset) {
                annotations.insert(marker);
            }
        }
        members.push(LightMember {
            name,
            kind: LightMemberKind::Method {
                type_params: Vec::new(),
                params: Vec::new(),
                return_type,
                throws: Vec::new(),
            },
            modifiers,
            annotations,
            origin: accessor_origin,
        });
    }

    if prop.is_mutable && !directives.excludes(UseSite::Set) {
        let name = directives
            .renamed(Some(UseSite::Set))
            .cloned()
            .unwrap_or_else(|| mapper::setter_name(&decl.name));
        let mut modifiers = member_modifiers(
            &decl.modifiers,
            MemberFacet::Setter {
                in_interface: opts.in_interface,
            },
        );
        if opts.make_static {
            modifiers.insert(Modifier::Static);
        }
        let param_ty = map_type(&prop.ty, TypePosition::Param, ruleset);
        let mut param = ParamView::new("value", param_ty.clone());
        param.annotations = route_annotations(
            &directives,
            AnnotationTarget::SetterParam,
            AnnotationTarget::SetterParam,
        );
        if !suppress_nullability {
            if let Some(marker) = nullability_annotation(&prop.ty, &param_ty, ruleset) {
                param.annotations.insert(marker);
            }
        }
        members.push(LightMember {
            name,
            kind: LightMemberKind::Method {
                type_params: Vec::new(),
                params: vec![param],
                return_type: JvmType::Void,
                throws: Vec::new(),
            },
            modifiers,
            annotations: route_annotations(
                &directives,
                AnnotationTarget::Setter,
                default_target(prop),
            ),
            origin: accessor_origin,
        });
    }

    members
}

/// Fixed default annotation target per property shape: the backing
/// field when one exists, otherwise the getter.
fn default_target(prop: &PropertyDecl) -> AnnotationTarget {
    if prop.has_backing_field {
        AnnotationTarget::Field
    } else {
        AnnotationTarget::Getter
    }
}

/// An annotation-class property surfaces as one abstract annotation
/// method carrying the property's name.
pub fn annotation_method(decl: &Decl, prop: &PropertyDecl, ruleset: &Ruleset) -> LightMember {
    LightMember {
        name: decl.name.clone(),
        kind: LightMemberKind::Method {
            type_params: Vec::new(),
            params: Vec::new(),
            return_type: map_type(&prop.ty, TypePosition::Return, ruleset),
            throws: Vec::new(),
        },
        modifiers: ModifierSet::of([Modifier::Public, Modifier::Abstract]),
        annotations: AnnotationSet::new(),
        origin: MemberOrigin::Explicit { decl: decl.id },
    }
}

// ============================================================================
// DATA CLASSES
// ============================================================================

/// Positional component accessors, in primary-constructor order.
pub fn component_functions(
    primary_props: &[(&Decl, &PropertyDecl)],
    ruleset: &Ruleset,
) -> Vec<LightMember> {
    if !ruleset.synthesize_components {
        return Vec::new();
    }
    primary_props
        .iter()
        .enumerate()
        .map(|(i, (_, prop))| {
            let return_type = map_type(&prop.ty, TypePosition::Return, ruleset);
            let mut annotations = AnnotationSet::new();
            if let Some(marker) = nullability_annotation(&prop.ty, &return_type, ruleset) {
                annotations.insert(marker);
            }
            LightMember {
                name: Name::from(format!("component{}", i + 1)),
                kind: LightMemberKind::Method {
                    type_params: Vec::new(),
                    params: Vec::new(),
                    return_type,
                    throws: Vec::new(),
                },
                modifiers: ModifierSet::of([Modifier::Public, Modifier::Final]),
                annotations,
                origin: MemberOrigin::Synthetic {
                    rule: SyntheticRule::ComponentFunction,
                },
            }
        })
        .collect()
}

/// `equals`/`hashCode`/`toString`/`copy` for a data-like class.
pub fn data_class_utilities(
    self_type: JvmType,
    primary_props: &[(&Decl, &PropertyDecl)],
    ruleset: &Ruleset,
) -> Vec<LightMember> {
    let origin = MemberOrigin::Synthetic {
        rule: SyntheticRule::DataClassUtility,
    };
    let public_final = || ModifierSet::of([Modifier::Public, Modifier::Final]);
    let not_null = |set: &mut AnnotationSet| {
        if ruleset.emit_nullability {
            set.insert(AnnotationView::marker(known::NOT_NULL));
        }
    };

    let mut members = Vec::new();

    let mut equals_param = ParamView::new("other", JvmType::object());
    if ruleset.emit_nullability {
        equals_param
            .annotations
            .insert(AnnotationView::marker(known::NULLABLE));
    }
    members.push(LightMember {
        name: Name::from("equals"),
        kind: LightMemberKind::Method {
            type_params: Vec::new(),
            params: vec![equals_param],
            return_type: JvmType::Primitive(crate::light::JvmPrimitive::Boolean),
            throws: Vec::new(),
        },
        modifiers: public_final(),
        annotations: AnnotationSet::new(),
        origin,
    });

    members.push(LightMember {
        name: Name::from("hashCode"),
        kind: LightMemberKind::Method {
            type_params: Vec::new(),
            params: Vec::new(),
            return_type: JvmType::Primitive(crate::light::JvmPrimitive::Int),
            throws: Vec::new(),
        },
        modifiers: public_final(),
        annotations: AnnotationSet::new(),
        origin,
    });

    let mut to_string_annotations = AnnotationSet::new();
    not_null(&mut to_string_annotations);
    members.push(LightMember {
        name: Name::from("toString"),
        kind: LightMemberKind::Method {
            type_params: Vec::new(),
            params: Vec::new(),
            return_type: JvmType::string(),
            throws: Vec::new(),
        },
        modifiers: public_final(),
        annotations: to_string_annotations,
        origin,
    });

    let copy_params: Vec<ParamView> = primary_props
        .iter()
        .map(|(decl, prop)| {
            let ty = map_type(&prop.ty, TypePosition::Param, ruleset);
            let mut param = ParamView::new(decl.name.clone(), ty.clone());
            if let Some(marker) = nullability_annotation(&prop.ty, &ty, ruleset) {
                param.annotations.insert(marker);
            }
            param
        })
        .collect();
    let mut copy_annotations = AnnotationSet::new();
    not_null(&mut copy_annotations);
    members.push(LightMember {
        name: Name::from("copy"),
        kind: LightMemberKind::Method {
            type_params: Vec::new(),
            params: copy_params,
            return_type: self_type,
            throws: Vec::new(),
        },
        modifiers: public_final(),
        annotations: copy_annotations,
        origin,
    });

    members
}

// ============================================================================
// DELEGATION
// ============================================================================

/// Forwarder methods for every abstract member of each delegated
/// interface not explicitly overridden in source.
///
/// Unresolvable delegations degrade to omitted forwarders.
pub fn delegation_forwarders(
    graph: &SymbolGraph,
    class: &ClassDecl,
    explicit_keys: &FxHashSet<String>,
    ruleset: &Ruleset,
) -> Vec<LightMember> {
    let mut members = Vec::new();
    let mut seen: FxHashSet<String> = explicit_keys.clone();

    for delegation in &class.delegations {
        match forwarders_for(graph, &delegation.interface, ruleset) {
            Ok(forwarders) => {
                for member in forwarders {
                    // First delegation wins when two interfaces share a
                    // signature; overridden members never forward.
                    if seen.insert(member.signature_key()) {
                        members.push(member);
                    }
                }
            }
            Err(fault) => {
                warn!(%fault, "skipping delegation forwarders");
            }
        }
    }

    members
}

fn forwarders_for(
    graph: &SymbolGraph,
    interface: &QualifiedName,
    ruleset: &Ruleset,
) -> Result<Vec<LightMember>, SynthesisFault> {
    let id = graph
        .resolve(interface)
        .ok_or_else(|| SynthesisFault::UnresolvedInterface(interface.clone()))?;
    let decl = graph
        .get(id)
        .ok_or_else(|| SynthesisFault::UnresolvedInterface(interface.clone()))?;
    let class = decl
        .as_class()
        .filter(|c| c.kind == ClassKind::Interface)
        .ok_or_else(|| SynthesisFault::NotAnInterface(interface.clone()))?;

    let origin = MemberOrigin::Synthetic {
        rule: SyntheticRule::DelegateForwarder,
    };
    let mut members = Vec::new();

    for member_id in &class.members {
        let Some(member) = graph.get(*member_id) else {
            continue;
        };
        match &member.kind {
            DeclKind::Function(func) if !func.has_body => {
                let opts = MethodOptions {
                    in_interface: false,
                    make_static: false,
                    force_public_final: true,
                    origin,
                };
                // Forwarder signature is copied verbatim from the
                // interface member.
                if let Some(m) = method_from_function(member, func, &opts, ruleset) {
                    members.push(m);
                }
            }
            DeclKind::Property(prop) => {
                for mut accessor in property_members(
                    member,
                    prop,
                    &PropertyOptions {
                        in_interface: true,
                        ..PropertyOptions::default()
                    },
                    ruleset,
                ) {
                    if !accessor.is_method() {
                        continue;
                    }
                    accessor.modifiers = ModifierSet::of([Modifier::Public, Modifier::Final]);
                    accessor.origin = origin;
                    members.push(accessor);
                }
            }
            _ => {}
        }
    }

    Ok(members)
}

// ============================================================================
// OVERLOAD EXPANSION
// ============================================================================

/// Descending-arity overloads for a callable with defaulted parameters.
///
/// For *k* defaulted parameters this yields up to *k* members, the i-th
/// omitting the rightmost *i* defaulted parameters. An opt-out directive
/// suppresses all of them, or only those below an arity threshold.
pub fn expand_overloads(
    base: &LightMember,
    source_params: &[Param],
    no_overloads: Option<NoOverloads>,
    ruleset: &Ruleset,
) -> Vec<LightMember> {
    if !ruleset.expand_overloads {
        return Vec::new();
    }
    if let Some(NoOverloads { below: None }) = no_overloads {
        return Vec::new();
    }

    let defaulted: Vec<usize> = source_params
        .iter()
        .enumerate()
        .filter(|(_, p)| p.has_default)
        .map(|(i, _)| i)
        .collect();
    if defaulted.is_empty() {
        return Vec::new();
    }

    let base_params = base.params();
    debug_assert_eq!(base_params.len(), source_params.len());

    let mut overloads = Vec::new();
    for omitted in 1..=defaulted.len() {
        let dropped: FxHashSet<usize> = defaulted[defaulted.len() - omitted..]
            .iter()
            .copied()
            .collect();
        let params: Vec<ParamView> = base_params
            .iter()
            .enumerate()
            .filter(|(i, _)| !dropped.contains(i))
            .map(|(_, p)| p.clone())
            .collect();

        if let Some(NoOverloads { below: Some(n) }) = no_overloads {
            if (params.len() as u32) < n {
                continue;
            }
        }

        let kind = match &base.kind {
            LightMemberKind::Method {
                type_params,
                return_type,
                throws,
                ..
            } => LightMemberKind::Method {
                type_params: type_params.clone(),
                params,
                return_type: return_type.clone(),
                throws: throws.clone(),
            },
            LightMemberKind::Constructor { throws, .. } => LightMemberKind::Constructor {
                params,
                throws: throws.clone(),
            },
            LightMemberKind::Field { .. } => continue,
        };

        overloads.push(LightMember {
            name: base.name.clone(),
            kind,
            modifiers: base.modifiers.clone(),
            annotations: base.annotations.clone(),
            origin: MemberOrigin::Synthetic {
                rule: SyntheticRule::OverloadExpansion,
            },
        });
    }

    overloads
}

// ============================================================================
// STATIC PROMOTION & ENUMS
// ============================================================================

/// The static duplicate of an object/companion member, installed on the
/// enclosing light class.
pub fn promote_member(member: &LightMember) -> LightMember {
    let mut promoted = member.clone();
    promoted.modifiers.insert(Modifier::Static);
    promoted.origin = MemberOrigin::Synthetic {
        rule: SyntheticRule::StaticPromotion,
    };
    promoted
}

/// `values()` and `valueOf(String)` for an enum class.
pub fn enum_utilities(enum_type: JvmType, ruleset: &Ruleset) -> Vec<LightMember> {
    let origin = MemberOrigin::Synthetic {
        rule: SyntheticRule::EnumUtility,
    };
    let not_null = |set: &mut AnnotationSet| {
        if ruleset.emit_nullability {
            set.insert(AnnotationView::marker(known::NOT_NULL));
        }
    };

    let mut values_annotations = AnnotationSet::new();
    not_null(&mut values_annotations);
    let values = LightMember {
        name: Name::from("values"),
        kind: LightMemberKind::Method {
            type_params: Vec::new(),
            params: Vec::new(),
            return_type: JvmType::Array(Box::new(enum_type.clone())),
            throws: Vec::new(),
        },
        modifiers: ModifierSet::of([Modifier::Public, Modifier::Static]),
        annotations: values_annotations,
        origin,
    };

    let mut value_of_annotations = AnnotationSet::new();
    not_null(&mut value_of_annotations);
    let mut name_param = ParamView::new("name", JvmType::string());
    not_null(&mut name_param.annotations);
    let value_of = LightMember {
        name: Name::from("valueOf"),
        kind: LightMemberKind::Method {
            type_params: Vec::new(),
            params: vec![name_param],
            return_type: enum_type,
            throws: Vec::new(),
        },
        modifiers: ModifierSet::of([Modifier::Public, Modifier::Static]),
        annotations: value_of_annotations,
        origin,
    };

    vec![values, value_of]
}
