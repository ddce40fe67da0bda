//! # lumen-base
//!
//! Core library for synthesizing JVM-visible light class views from a
//! resolved symbol graph.
//!
//! Given the semantic model of a source-language declaration, lumen
//! produces an equivalent foreign-language class view: a read-only,
//! non-executable shape (members, modifiers, signatures, annotations)
//! that a cross-language consumer can resolve against without compiled
//! output. Views are cheap to recompute, cached per declaration, and
//! invalidated wholesale when the owning source unit changes.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! render    → golden-text rendering of views
//!   ↓
//! cache     → version-stamped memoization, single-flight compute
//!   ↓
//! translate → per-declaration translator (exhaustive over kinds)
//!   ↓
//! synth     → synthetic member generation rules
//!   ↓
//! mapper    → modifier/annotation/type mapping to the JVM surface
//!   ↓
//! light     → output model (LightClassView, LightMember)
//!   ↓
//! symbols   → input symbol graph (engine boundary)
//!   ↓
//! base      → primitives (DeclId, UnitId, VersionStamp)
//! ```

// ============================================================================
// MODULES (dependency order: base → symbols → light → mapper → synth →
// translate → cache → render)
// ============================================================================

/// Foundation types: DeclId, UnitId, VersionStamp, names
pub mod base;

/// Input boundary: resolved symbol graph from the semantic engine
pub mod symbols;

/// Output model: light class views and their members
pub mod light;

/// Modifier, annotation, and type mapping to the foreign surface
pub mod mapper;

/// Synthetic member generation rules
pub mod synth;

/// The symbol-to-class translator
pub mod translate;

/// Cache and invalidation layer
pub mod cache;

/// Golden-text rendering for verification
pub mod render;

// Re-export the core surface
pub use base::{DeclId, Name, QualifiedName, UnitId, VersionStamp};
pub use cache::LightClassCache;
pub use light::{
    LightClassKind, LightClassView, LightMember, LightMemberKind, MemberOrigin, Modifier,
    ModifierSet, SyntheticRule,
};
pub use mapper::Ruleset;
pub use render::{render_unit, render_view};
pub use symbols::{GraphBuilder, SymbolGraph};
pub use translate::{TranslationContext, ViewKey, translate, view_owner};
