//! Output model — light class views.
//!
//! ## Key Types
//!
//! - [`LightClassView`] — the translated, read-only view of one declaration
//! - [`LightMember`] — field / method / constructor with origin tracking
//! - [`SyntheticRule`] — which generation rule produced a synthetic member
//! - [`ModifierSet`], [`AnnotationSet`] — ordered target modifier surface
//! - [`JvmType`] — erased foreign-side types
//!
//! Views are created by the translator, owned by the cache, and handed to
//! consumers as shared read-only references. A view is never mutated; it
//! is dropped wholesale on invalidation.

mod jvm;
mod modifiers;

pub use jvm::{JvmPrimitive, JvmType, WildcardBound};
pub use modifiers::{AnnotationSet, AnnotationView, Modifier, ModifierSet};

use crate::base::{DeclId, Name, QualifiedName, VersionStamp};

/// The foreign-side kind of a light class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightClassKind {
    Class,
    Interface,
    Enum,
    Annotation,
    Record,
}

impl LightClassKind {
    /// Declaration keyword used by the renderer.
    pub fn keyword(&self) -> &'static str {
        match self {
            LightClassKind::Class => "class",
            LightClassKind::Interface => "interface",
            LightClassKind::Enum => "enum",
            LightClassKind::Annotation => "@interface",
            LightClassKind::Record => "record",
        }
    }
}

/// Which rule produced a synthetic member.
///
/// Variant order is the fixed rule-priority order used when rendering:
/// synthetic members are grouped by rule after all explicit members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SyntheticRule {
    DefaultConstructor,
    PropertyAccessor,
    BackingField,
    ComponentFunction,
    DataClassUtility,
    DelegateForwarder,
    OverloadExpansion,
    StaticPromotion,
    EnumUtility,
}

impl SyntheticRule {
    pub fn display(&self) -> &'static str {
        match self {
            SyntheticRule::DefaultConstructor => "default constructor",
            SyntheticRule::PropertyAccessor => "property accessor",
            SyntheticRule::BackingField => "backing field",
            SyntheticRule::ComponentFunction => "component function",
            SyntheticRule::DataClassUtility => "data class utility",
            SyntheticRule::DelegateForwarder => "delegate forwarder",
            SyntheticRule::OverloadExpansion => "overload expansion",
            SyntheticRule::StaticPromotion => "static promotion",
            SyntheticRule::EnumUtility => "enum utility",
        }
    }
}

/// Where a light member came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberOrigin {
    /// Written explicitly in source.
    Explicit { decl: DeclId },
    /// Produced by exactly one generation rule.
    Synthetic { rule: SyntheticRule },
}

impl MemberOrigin {
    pub fn is_synthetic(&self) -> bool {
        matches!(self, MemberOrigin::Synthetic { .. })
    }

    pub fn rule(&self) -> Option<SyntheticRule> {
        match self {
            MemberOrigin::Synthetic { rule } => Some(*rule),
            MemberOrigin::Explicit { .. } => None,
        }
    }
}

/// A type parameter on the foreign view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParamView {
    pub name: Name,
    pub bounds: Vec<JvmType>,
}

/// A parameter of a light method or constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamView {
    pub name: Name,
    pub ty: JvmType,
    pub is_vararg: bool,
    pub annotations: AnnotationSet,
}

impl ParamView {
    pub fn new(name: impl Into<Name>, ty: JvmType) -> Self {
        Self {
            name: name.into(),
            ty,
            is_vararg: false,
            annotations: AnnotationSet::new(),
        }
    }
}

/// Variant payload of a light member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightMemberKind {
    Field {
        ty: JvmType,
    },
    Method {
        type_params: Vec<TypeParamView>,
        params: Vec<ParamView>,
        return_type: JvmType,
        throws: Vec<QualifiedName>,
    },
    Constructor {
        params: Vec<ParamView>,
        throws: Vec<QualifiedName>,
    },
}

/// One member of a light class view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightMember {
    pub name: Name,
    pub kind: LightMemberKind,
    pub modifiers: ModifierSet,
    pub annotations: AnnotationSet,
    pub origin: MemberOrigin,
}

impl LightMember {
    pub fn is_field(&self) -> bool {
        matches!(self.kind, LightMemberKind::Field { .. })
    }

    pub fn is_method(&self) -> bool {
        matches!(self.kind, LightMemberKind::Method { .. })
    }

    pub fn is_constructor(&self) -> bool {
        matches!(self.kind, LightMemberKind::Constructor { .. })
    }

    pub fn params(&self) -> &[ParamView] {
        match &self.kind {
            LightMemberKind::Method { params, .. } | LightMemberKind::Constructor { params, .. } => {
                params
            }
            LightMemberKind::Field { .. } => &[],
        }
    }

    /// Signature key for explicit-wins suppression: a synthetic member is
    /// dropped when an explicit member carries the same key. Fields are
    /// keyed by name alone; callables by name plus rendered parameter types.
    pub fn signature_key(&self) -> String {
        match &self.kind {
            LightMemberKind::Field { .. } => format!("field:{}", self.name),
            LightMemberKind::Method { params, .. } => {
                let tys: Vec<String> = params.iter().map(|p| p.ty.to_string()).collect();
                format!("method:{}({})", self.name, tys.join(","))
            }
            LightMemberKind::Constructor { params, .. } => {
                let tys: Vec<String> = params.iter().map(|p| p.ty.to_string()).collect();
                format!("ctor:({})", tys.join(","))
            }
        }
    }
}

/// The translated output for one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightClassView {
    /// The declaration this view was computed from, if it has one.
    /// Unit facade views synthesize members from many declarations and
    /// carry `None`.
    pub decl: Option<DeclId>,
    /// Foreign qualified name, `$`-nested (`demo.Outer$Inner`).
    pub qualified_name: QualifiedName,
    pub kind: LightClassKind,
    pub modifiers: ModifierSet,
    pub annotations: AnnotationSet,
    pub type_params: Vec<TypeParamView>,
    pub extends: Option<JvmType>,
    pub implements: Vec<JvmType>,
    /// For inline/value classes: the boxed representation type that is
    /// the effective JVM-visible shape. A flag, not a structural rewrite.
    pub value_repr: Option<JvmType>,
    /// Explicit members in source order, then synthetic members grouped
    /// by [`SyntheticRule`] priority.
    pub members: Vec<LightMember>,
    /// The version stamp this view was computed against.
    pub stamp: VersionStamp,
}

impl LightClassView {
    /// Members produced by a particular synthetic rule.
    pub fn synthetic_members(&self, rule: SyntheticRule) -> impl Iterator<Item = &LightMember> + '_ {
        self.members
            .iter()
            .filter(move |m| m.origin.rule() == Some(rule))
    }

    /// Explicit members, in source order.
    pub fn explicit_members(&self) -> impl Iterator<Item = &LightMember> + '_ {
        self.members.iter().filter(|m| !m.origin.is_synthetic())
    }

    /// Find members by name.
    pub fn members_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a LightMember> + 'a {
        self.members.iter().filter(move |m| m.name.as_str() == name)
    }
}
