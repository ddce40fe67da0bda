//! Foundation types for the Lumen core.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`DeclId`] - Identity of a declaration in the symbol graph
//! - [`UnitId`] - Identity of a source unit (file/module), the invalidation scope
//! - [`VersionStamp`] - Monotonic token for a source unit's symbol-table state
//! - [`Name`], [`QualifiedName`] - Name types shared by input and output models
//!
//! This module has NO dependencies on other lumen modules.

mod ids;
mod version;

pub use ids::{DeclId, UnitId};
pub use version::VersionStamp;

use std::sync::Arc;

/// A simple (unqualified) name.
pub type Name = smol_str::SmolStr;

/// A qualified name (`a.b.C` on the source side, `a.b.C$Inner` on the
/// foreign side). Cheap to clone and share across views.
pub type QualifiedName = Arc<str>;
