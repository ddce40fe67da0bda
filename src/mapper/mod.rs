//! Modifier, annotation, and type mapping onto the foreign (JVM) surface.
//!
//! Everything here is a pure function of the declared symbol surface:
//! same inputs, same output, no shared state. The translator composes
//! these mappings; the synthesizer reuses them for generated members.
//!
//! ## Key Types
//!
//! - [`Directives`] — parsed well-known `lang.jvm.*` annotations
//! - [`MemberFacet`], [`AnnotationTarget`] — the target use-site a
//!   mapping is computed for
//! - [`Ruleset`] — the active language-feature ruleset (passed, never
//!   global)
//! - [`map_type`] — erasure/boxing plus wildcard optimization

mod directives;

pub use directives::{Directives, NoOverloads, StaticDirective};

use crate::base::Name;
use crate::light::{AnnotationSet, AnnotationView, JvmPrimitive, JvmType, Modifier, ModifierSet};
use crate::symbols::{
    Builtin, Modality, SourceModifiers, TypeArg, TypeShape, UseSite, Variance, Visibility,
};

/// Qualified names the mapper interprets or emits.
pub mod known {
    /// Static promotion of an object/companion member.
    pub const STATIC: &str = "lang.jvm.Static";
    /// Expose a property as a raw field, suppressing accessors.
    pub const FIELD: &str = "lang.jvm.Field";
    /// Foreign-name override.
    pub const NAME: &str = "lang.jvm.Name";
    /// Exclude from the foreign view.
    pub const SYNTHETIC: &str = "lang.jvm.Synthetic";
    /// Opt out of default-parameter overload expansion.
    pub const NO_OVERLOADS: &str = "lang.jvm.NoOverloads";
    /// Declared exception list.
    pub const THROWS: &str = "lang.jvm.Throws";
    /// Emitted nullability markers.
    pub const NOT_NULL: &str = "lang.annot.NotNull";
    pub const NULLABLE: &str = "lang.annot.Nullable";
    /// Trailing parameter type appended to suspend functions.
    pub const CONTINUATION: &str = "lang.coroutines.Continuation";
}

// ============================================================================
// RULESET
// ============================================================================

/// The active language-feature ruleset.
///
/// A view's member list is a pure function of its symbol's declared shape
/// and this ruleset. Passed explicitly through the translation context so
/// independent sessions never interfere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ruleset {
    /// Synthesize descending-arity overloads for defaulted parameters.
    pub expand_overloads: bool,
    /// Apply wildcard suppression (return position, final upper bounds).
    /// When off, projections always render as plain wildcards.
    pub wildcard_optimization: bool,
    /// Emit `NotNull`/`Nullable` on reference-typed members.
    pub emit_nullability: bool,
    /// Synthesize positional component accessors for data classes.
    pub synthesize_components: bool,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self {
            expand_overloads: true,
            wildcard_optimization: true,
            emit_nullability: true,
            synthesize_components: true,
        }
    }
}

// ============================================================================
// MODIFIER MAPPING
// ============================================================================

/// The member facet a modifier set is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberFacet {
    Method { in_interface: bool, has_body: bool },
    Getter { in_interface: bool },
    Setter { in_interface: bool },
    Field,
    Constructor,
}

/// Map source visibility to its target modifier.
///
/// Precedence: narrower never widens on the mapped lattice. `internal`
/// maps to public because the foreign resolver has no module notion.
pub fn map_visibility(visibility: Visibility) -> Modifier {
    match visibility {
        Visibility::Public | Visibility::Internal => Modifier::Public,
        Visibility::Protected => Modifier::Protected,
        Visibility::Private => Modifier::Private,
    }
}

/// Map a member's declared modifiers for one target facet.
///
/// Static-ness and value-dependent finality (e.g. `final` on immutable
/// backing fields) are decided by the caller, which knows the member's
/// container and payload.
pub fn member_modifiers(mods: &SourceModifiers, facet: MemberFacet) -> ModifierSet {
    let mut set = ModifierSet::new();
    set.insert(map_visibility(mods.visibility));

    let method_like = match facet {
        MemberFacet::Method {
            in_interface,
            has_body,
        } => Some((in_interface, has_body)),
        // Interface property accessors are abstract; bodies on accessors
        // do not survive to the foreign surface.
        MemberFacet::Getter { in_interface } | MemberFacet::Setter { in_interface } => {
            Some((in_interface, false))
        }
        MemberFacet::Field | MemberFacet::Constructor => None,
    };

    if let Some((in_interface, has_body)) = method_like {
        if in_interface {
            if has_body {
                set.insert(Modifier::Default);
            } else {
                set.insert(Modifier::Abstract);
            }
        } else {
            match mods.modality {
                Modality::Abstract => set.insert(Modifier::Abstract),
                Modality::Final | Modality::Sealed => set.insert(Modifier::Final),
                Modality::Open => {}
            }
        }
        if mods.is_external {
            set.insert(Modifier::Native);
        }
    }

    set
}

// ============================================================================
// ANNOTATION ROUTING
// ============================================================================

/// Addressable targets annotations are routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationTarget {
    Class,
    Method,
    Getter,
    Setter,
    Field,
    SetterParam,
    Param,
}

fn explicit_target(use_site: UseSite) -> AnnotationTarget {
    match use_site {
        // The property itself has no foreign member; its getter stands in
        // for the property facet.
        UseSite::Property => AnnotationTarget::Getter,
        UseSite::Get => AnnotationTarget::Getter,
        UseSite::Set => AnnotationTarget::Setter,
        UseSite::Field => AnnotationTarget::Field,
        UseSite::Param => AnnotationTarget::Param,
        UseSite::SetParam => AnnotationTarget::SetterParam,
    }
}

/// Route declared (non-directive) annotations to one target.
///
/// Annotations with an explicit use-site go only to that target; the
/// rest go to `default` (the fixed default-target-per-declaration-kind
/// table, supplied by the caller).
pub fn route_annotations(
    directives: &Directives,
    target: AnnotationTarget,
    default: AnnotationTarget,
) -> AnnotationSet {
    let mut set = AnnotationSet::new();
    for annotation in &directives.passthrough {
        let routed = match annotation.use_site {
            Some(site) => explicit_target(site),
            None => default,
        };
        if routed == target {
            set.insert(AnnotationView::with_args(
                annotation.name.clone(),
                directives::render_args(&annotation.args),
            ));
        }
    }
    set
}

/// The nullability marker for a member of the given source type, if the
/// ruleset emits one and the mapped type is a reference type.
pub fn nullability_annotation(
    shape: &TypeShape,
    mapped: &JvmType,
    ruleset: &Ruleset,
) -> Option<AnnotationView> {
    if !ruleset.emit_nullability || !mapped.is_reference() {
        return None;
    }
    let name = if shape.is_nullable() {
        known::NULLABLE
    } else {
        known::NOT_NULL
    };
    Some(AnnotationView::marker(name))
}

// ============================================================================
// TYPE MAPPING
// ============================================================================

/// The position a type is mapped for; drives boxing and wildcard rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypePosition {
    Return,
    Param,
    Field,
    TypeArgument,
}

fn boxed_builtin(kind: Builtin) -> JvmType {
    match kind {
        Builtin::Int => JvmType::reference(JvmPrimitive::Int.boxed()),
        Builtin::Long => JvmType::reference(JvmPrimitive::Long.boxed()),
        Builtin::Short => JvmType::reference(JvmPrimitive::Short.boxed()),
        Builtin::Byte => JvmType::reference(JvmPrimitive::Byte.boxed()),
        Builtin::Double => JvmType::reference(JvmPrimitive::Double.boxed()),
        Builtin::Float => JvmType::reference(JvmPrimitive::Float.boxed()),
        Builtin::Boolean => JvmType::reference(JvmPrimitive::Boolean.boxed()),
        Builtin::Char => JvmType::reference(JvmPrimitive::Char.boxed()),
        Builtin::Unit => JvmType::reference("lang.Unit"),
        Builtin::Any => JvmType::object(),
        Builtin::String => JvmType::string(),
        Builtin::Nothing => JvmType::reference("java.lang.Void"),
    }
}

fn primitive_builtin(kind: Builtin) -> Option<JvmPrimitive> {
    match kind {
        Builtin::Int => Some(JvmPrimitive::Int),
        Builtin::Long => Some(JvmPrimitive::Long),
        Builtin::Short => Some(JvmPrimitive::Short),
        Builtin::Byte => Some(JvmPrimitive::Byte),
        Builtin::Double => Some(JvmPrimitive::Double),
        Builtin::Float => Some(JvmPrimitive::Float),
        Builtin::Boolean => Some(JvmPrimitive::Boolean),
        Builtin::Char => Some(JvmPrimitive::Char),
        _ => None,
    }
}

/// Whether a shape names a type with no proper subtypes, making a
/// covariant wildcard on it pointless.
fn shape_is_final(shape: &TypeShape) -> bool {
    match shape {
        // Builtins are final types except the top type.
        TypeShape::Builtin { kind, .. } => !matches!(kind, Builtin::Any),
        TypeShape::Named { is_final, .. } => *is_final,
        TypeShape::TypeVar { .. } => false,
    }
}

/// Map a resolved source type onto the erased foreign type for one
/// position. Pure and total; unresolvable pieces cannot occur because
/// the input is already resolved.
pub fn map_type(shape: &TypeShape, position: TypePosition, ruleset: &Ruleset) -> JvmType {
    let in_return = position == TypePosition::Return;
    match shape {
        TypeShape::Builtin { kind, nullable } => {
            if in_return && *kind == Builtin::Unit && !nullable {
                return JvmType::Void;
            }
            if in_return && *kind == Builtin::Nothing && !nullable {
                return JvmType::Void;
            }
            match primitive_builtin(*kind) {
                Some(p) if !*nullable && position != TypePosition::TypeArgument => {
                    JvmType::Primitive(p)
                }
                _ => boxed_builtin(*kind),
            }
        }
        TypeShape::Named { name, args, .. } => JvmType::Reference {
            name: name.clone(),
            args: args
                .iter()
                .map(|arg| map_type_arg(arg, in_return, ruleset))
                .collect(),
        },
        TypeShape::TypeVar { name, .. } => JvmType::TypeVar(name.clone()),
    }
}

/// Map one type argument, collapsing use-site variance into the
/// narrowest wildcard that is still a safe bound.
fn map_type_arg(arg: &TypeArg, in_return: bool, ruleset: &Ruleset) -> JvmType {
    match arg {
        TypeArg::Star => JvmType::Wildcard(crate::light::WildcardBound::Unbounded),
        TypeArg::Typed { shape, variance } => {
            let inner = map_type(shape, TypePosition::TypeArgument, ruleset);
            let optimize = ruleset.wildcard_optimization;
            match variance {
                Variance::Invariant => inner,
                Variance::Out => {
                    // Wildcards change overload resolvability; suppress
                    // them in return position and on final upper bounds.
                    if optimize && (in_return || shape_is_final(shape)) {
                        inner
                    } else if inner.is_object() {
                        JvmType::Wildcard(crate::light::WildcardBound::Unbounded)
                    } else {
                        JvmType::extends_wildcard(inner)
                    }
                }
                Variance::In => {
                    if optimize && in_return {
                        inner
                    } else {
                        JvmType::super_wildcard(inner)
                    }
                }
            }
        }
    }
}

// ============================================================================
// NAMING
// ============================================================================

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Default getter name for a property.
pub fn getter_name(property: &str) -> Name {
    Name::from(format!("get{}", capitalize(property)))
}

/// Default setter name for a property.
pub fn setter_name(property: &str) -> Name {
    Name::from(format!("set{}", capitalize(property)))
}
