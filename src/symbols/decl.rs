//! Declaration model — the symbol surface consumed from the semantic engine.
//!
//! A [`Decl`] is an immutable snapshot of one resolved declaration for a
//! given version stamp of its unit. Declaration kinds form a closed
//! variant ([`DeclKind`]); the translator matches on it exhaustively, so
//! adding a kind is a compile-time exhaustiveness failure rather than a
//! silent no-op.

use crate::base::{DeclId, Name, QualifiedName, UnitId};

use super::types::{TypeParam, TypeShape};

// ============================================================================
// MODIFIERS
// ============================================================================

/// Source-language visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    /// Module-internal; the foreign resolver has no module notion, so this
    /// widens to public on the mapped side (the mapped lattice, not the
    /// source lattice, is what "never widens" is checked against).
    Internal,
    Protected,
    Private,
}

/// Source-language modality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modality {
    Final,
    Open,
    Abstract,
    Sealed,
}

/// The declared modifier set of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceModifiers {
    pub visibility: Visibility,
    pub modality: Modality,
    pub is_const: bool,
    pub is_lateinit: bool,
    pub is_inline: bool,
    pub is_external: bool,
    pub is_override: bool,
}

impl SourceModifiers {
    pub fn new(visibility: Visibility, modality: Modality) -> Self {
        Self {
            visibility,
            modality,
            is_const: false,
            is_lateinit: false,
            is_inline: false,
            is_external: false,
            is_override: false,
        }
    }

    /// `public final`, the default for most declarations.
    pub fn public_final() -> Self {
        Self::new(Visibility::Public, Modality::Final)
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[must_use]
    pub fn with_modality(mut self, modality: Modality) -> Self {
        self.modality = modality;
        self
    }

    #[must_use]
    pub fn lateinit(mut self) -> Self {
        self.is_lateinit = true;
        self
    }

    #[must_use]
    pub fn constant(mut self) -> Self {
        self.is_const = true;
        self
    }

    #[must_use]
    pub fn inline(mut self) -> Self {
        self.is_inline = true;
        self
    }

    #[must_use]
    pub fn external(mut self) -> Self {
        self.is_external = true;
        self
    }

    #[must_use]
    pub fn overriding(mut self) -> Self {
        self.is_override = true;
        self
    }
}

impl Default for SourceModifiers {
    fn default() -> Self {
        Self::public_final()
    }
}

// ============================================================================
// ANNOTATIONS
// ============================================================================

/// Use-site target of an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UseSite {
    Property,
    Get,
    Set,
    Field,
    Param,
    SetParam,
}

impl UseSite {
    pub fn display(&self) -> &'static str {
        match self {
            UseSite::Property => "property",
            UseSite::Get => "get",
            UseSite::Set => "set",
            UseSite::Field => "field",
            UseSite::Param => "param",
            UseSite::SetParam => "setparam",
        }
    }
}

/// An annotation argument value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnnotationValue {
    Str(Name),
    Int(i64),
    Bool(bool),
    /// A list of class references, e.g. a declared-exception list.
    Types(Vec<QualifiedName>),
}

/// A named annotation argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnotationArg {
    pub name: Name,
    pub value: AnnotationValue,
}

/// An annotation as declared in source, with its optional use-site target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceAnnotation {
    pub name: QualifiedName,
    pub use_site: Option<UseSite>,
    pub args: Vec<AnnotationArg>,
}

impl SourceAnnotation {
    pub fn new(name: impl Into<QualifiedName>) -> Self {
        Self {
            name: name.into(),
            use_site: None,
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn at(mut self, use_site: UseSite) -> Self {
        self.use_site = Some(use_site);
        self
    }

    #[must_use]
    pub fn with_arg(mut self, name: impl Into<Name>, value: AnnotationValue) -> Self {
        self.args.push(AnnotationArg {
            name: name.into(),
            value,
        });
        self
    }

    /// Look up an argument by name.
    pub fn arg(&self, name: &str) -> Option<&AnnotationValue> {
        self.args
            .iter()
            .find(|a| a.name.as_str() == name)
            .map(|a| &a.value)
    }
}

// ============================================================================
// DECLARATION KINDS
// ============================================================================

/// A value parameter of a function or constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Param {
    pub name: Name,
    pub ty: TypeShape,
    pub has_default: bool,
    pub is_vararg: bool,
    pub annotations: Vec<SourceAnnotation>,
}

impl Param {
    pub fn new(name: impl Into<Name>, ty: TypeShape) -> Self {
        Self {
            name: name.into(),
            ty,
            has_default: false,
            is_vararg: false,
            annotations: Vec::new(),
        }
    }

    #[must_use]
    pub fn defaulted(mut self) -> Self {
        self.has_default = true;
        self
    }

    #[must_use]
    pub fn vararg(mut self) -> Self {
        self.is_vararg = true;
        self
    }
}

/// The kind of a class-like declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
    EnumEntry,
    Annotation,
    Object { is_companion: bool },
    Record,
}

impl ClassKind {
    pub fn display(&self) -> &'static str {
        match self {
            ClassKind::Class => "class",
            ClassKind::Interface => "interface",
            ClassKind::Enum => "enum",
            ClassKind::EnumEntry => "enum entry",
            ClassKind::Annotation => "annotation",
            ClassKind::Object { is_companion: true } => "companion object",
            ClassKind::Object { is_companion: false } => "object",
            ClassKind::Record => "record",
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, ClassKind::Object { .. })
    }

    /// Whether an implicit no-arg constructor may be synthesized.
    pub fn permits_instantiation(&self) -> bool {
        matches!(self, ClassKind::Class | ClassKind::Record)
    }
}

/// Where a class-like declaration sits relative to its surroundings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Locality {
    TopLevel,
    Nested,
    /// Declared inside a function/property body. The foreign qualifier is
    /// derived from the innermost enclosing member, not the file.
    Local { enclosing_member: DeclId },
    /// An anonymous object expression. `candidates` are the supertypes
    /// inferred at the construction site; an explicit supertype, if any,
    /// is recorded in `ClassDecl::supertypes` and wins.
    Anonymous {
        index: u32,
        candidates: Vec<TypeShape>,
    },
}

/// A declared supertype reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SuperRef {
    pub ty: TypeShape,
    pub is_interface: bool,
}

impl SuperRef {
    pub fn class(ty: TypeShape) -> Self {
        Self {
            ty,
            is_interface: false,
        }
    }

    pub fn interface(ty: TypeShape) -> Self {
        Self {
            ty,
            is_interface: true,
        }
    }
}

/// A `by`-clause delegation of one implemented interface to a backing value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Delegation {
    pub interface: QualifiedName,
}

/// Payload of a class-like declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub kind: ClassKind,
    pub is_data: bool,
    /// Inline/value class: a single-property wrapper whose boxed
    /// representation is the JVM-visible shape.
    pub is_value: bool,
    /// Nested classes are static on the foreign side unless inner.
    pub is_inner: bool,
    pub type_params: Vec<TypeParam>,
    pub supertypes: Vec<SuperRef>,
    pub delegations: Vec<Delegation>,
    /// Member declarations in source order.
    pub members: Vec<DeclId>,
    pub companion: Option<DeclId>,
    pub locality: Locality,
}

impl ClassDecl {
    pub fn new(kind: ClassKind) -> Self {
        Self {
            kind,
            is_data: false,
            is_value: false,
            is_inner: false,
            type_params: Vec::new(),
            supertypes: Vec::new(),
            delegations: Vec::new(),
            members: Vec::new(),
            companion: None,
            locality: Locality::TopLevel,
        }
    }
}

/// Payload of a function declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    pub type_params: Vec<TypeParam>,
    pub params: Vec<Param>,
    pub return_type: TypeShape,
    pub is_suspend: bool,
    /// Interface members with a body map to `default` methods.
    pub has_body: bool,
}

impl FunctionDecl {
    pub fn new(params: Vec<Param>, return_type: TypeShape) -> Self {
        Self {
            type_params: Vec::new(),
            params,
            return_type,
            is_suspend: false,
            has_body: true,
        }
    }

    #[must_use]
    pub fn suspend(mut self) -> Self {
        self.is_suspend = true;
        self
    }

    #[must_use]
    pub fn without_body(mut self) -> Self {
        self.has_body = false;
        self
    }

    /// Returns true if any type parameter is reified, which makes the
    /// function uncallable from the foreign language when inline.
    pub fn has_reified_params(&self) -> bool {
        self.type_params.iter().any(|tp| tp.is_reified)
    }
}

/// Payload of a property declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDecl {
    pub ty: TypeShape,
    pub is_mutable: bool,
    pub has_backing_field: bool,
    /// Position in the primary constructor, if declared there. Drives
    /// component-accessor synthesis for data classes, in this order.
    pub primary_index: Option<u32>,
    /// Type of the delegate expression for `by`-delegated properties;
    /// stored in a `<name>$delegate` field instead of a backing field.
    pub delegate_type: Option<TypeShape>,
}

impl PropertyDecl {
    pub fn val(ty: TypeShape) -> Self {
        Self {
            ty,
            is_mutable: false,
            has_backing_field: true,
            primary_index: None,
            delegate_type: None,
        }
    }

    pub fn var(ty: TypeShape) -> Self {
        Self {
            ty,
            is_mutable: true,
            has_backing_field: true,
            primary_index: None,
            delegate_type: None,
        }
    }

    #[must_use]
    pub fn in_primary(mut self, index: u32) -> Self {
        self.primary_index = Some(index);
        self
    }

    #[must_use]
    pub fn without_field(mut self) -> Self {
        self.has_backing_field = false;
        self
    }

    #[must_use]
    pub fn delegated(mut self, delegate_type: TypeShape) -> Self {
        self.delegate_type = Some(delegate_type);
        self.has_backing_field = false;
        self
    }
}

/// Payload of a constructor declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorDecl {
    pub params: Vec<Param>,
    pub is_primary: bool,
}

impl ConstructorDecl {
    pub fn primary(params: Vec<Param>) -> Self {
        Self {
            params,
            is_primary: true,
        }
    }

    pub fn secondary(params: Vec<Param>) -> Self {
        Self {
            params,
            is_primary: false,
        }
    }
}

/// Closed variant over declaration kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclKind {
    Class(ClassDecl),
    Function(FunctionDecl),
    Property(PropertyDecl),
    Constructor(ConstructorDecl),
}

impl DeclKind {
    pub fn display(&self) -> &'static str {
        match self {
            DeclKind::Class(c) => c.kind.display(),
            DeclKind::Function(_) => "function",
            DeclKind::Property(_) => "property",
            DeclKind::Constructor(_) => "constructor",
        }
    }
}

// ============================================================================
// DECLARATION
// ============================================================================

/// One resolved declaration.
///
/// Owned by the [`SymbolGraph`](super::SymbolGraph); the translator and
/// views refer to it by [`DeclId`] only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decl {
    pub id: DeclId,
    pub unit: UnitId,
    pub name: Name,
    /// Source-side qualified name (`demo.Person`, `demo.Person.name`).
    pub qualified_name: QualifiedName,
    pub modifiers: SourceModifiers,
    pub annotations: Vec<SourceAnnotation>,
    /// Enclosing declaration, resolved by lookup key through the graph.
    pub enclosing: Option<DeclId>,
    pub kind: DeclKind,
}

impl Decl {
    pub fn as_class(&self) -> Option<&ClassDecl> {
        match &self.kind {
            DeclKind::Class(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionDecl> {
        match &self.kind {
            DeclKind::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_property(&self) -> Option<&PropertyDecl> {
        match &self.kind {
            DeclKind::Property(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_constructor(&self) -> Option<&ConstructorDecl> {
        match &self.kind {
            DeclKind::Constructor(c) => Some(c),
            _ => None,
        }
    }

    /// Find an annotation by qualified name, ignoring use-site targets.
    pub fn annotation(&self, name: &str) -> Option<&SourceAnnotation> {
        self.annotations.iter().find(|a| a.name.as_ref() == name)
    }
}
