//! Input boundary — the resolved symbol graph consumed from the
//! semantic engine.
//!
//! ## Key Types
//!
//! - [`SymbolGraph`] — arena of declarations with lookup indexes and
//!   per-unit version stamps; the versioned read-only context
//! - [`GraphBuilder`] — engine-side (and test-side) construction
//! - [`Decl`], [`DeclKind`] — one declaration; closed kind variant
//! - [`TypeShape`] — already-resolved types
//! - [`SourceModifiers`], [`SourceAnnotation`], [`UseSite`] — declared
//!   modifier/annotation surface
//!
//! Everything here is immutable for a given version stamp; the only
//! mutation is [`SymbolGraph::touch_unit`], which models an engine edit.

mod decl;
mod graph;
mod types;

pub use decl::{
    AnnotationArg, AnnotationValue, ClassDecl, ClassKind, ConstructorDecl, Decl, DeclKind,
    Delegation, FunctionDecl, Locality, Modality, Param, PropertyDecl, SourceAnnotation,
    SourceModifiers, SuperRef, UseSite, Visibility,
};
pub use graph::{GraphBuilder, GraphError, SymbolGraph};
pub use types::{Builtin, TypeArg, TypeParam, TypeShape, Variance};
