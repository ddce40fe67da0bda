//! The symbol graph — arena storage plus lookup indexes.
//!
//! The graph is the versioned read-only context the translator runs
//! against. It is built by the external semantic engine (in tests, by
//! [`GraphBuilder`]) and passed explicitly; nothing in this crate holds a
//! process-wide graph, so independent translation sessions never
//! interfere.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::base::{DeclId, Name, QualifiedName, UnitId, VersionStamp};

use super::decl::{ClassKind, Decl, DeclKind, Locality, SourceAnnotation, SourceModifiers};

/// Errors reported while assembling a graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Two declarations share a source qualified name.
    #[error("duplicate qualified name: {0}")]
    DuplicateQualifiedName(QualifiedName),

    /// The enclosing declaration id does not exist.
    #[error("unknown enclosing declaration for '{0}'")]
    UnknownEnclosing(Name),

    /// The enclosing declaration exists but is not class-like.
    #[error("enclosing declaration of '{0}' is not a class")]
    EnclosingNotAClass(Name),

    /// The unit id does not exist.
    #[error("unknown unit id")]
    UnknownUnit,

    /// A companion object was declared outside a class.
    #[error("companion object '{0}' has no enclosing class")]
    CompanionOutsideClass(Name),
}

/// Per-unit state: package, version stamp, top-level declarations.
#[derive(Debug, Clone)]
struct UnitState {
    name: Name,
    package: Name,
    stamp: VersionStamp,
    top_level: Vec<DeclId>,
    decls: Vec<DeclId>,
}

/// Arena of declarations with by-name and by-unit indexes.
#[derive(Debug, Default)]
pub struct SymbolGraph {
    decls: Vec<Decl>,
    units: Vec<UnitState>,
    by_qname: FxHashMap<QualifiedName, DeclId>,
}

impl SymbolGraph {
    /// Look up a declaration. Returns `None` for a foreign/stale id;
    /// callers degrade rather than fail (unresolved-input recovery).
    pub fn get(&self, id: DeclId) -> Option<&Decl> {
        self.decls.get(id.index())
    }

    /// Look up a declaration, panicking on a bad id. Only for ids that
    /// were handed out by this graph.
    pub fn decl(&self, id: DeclId) -> &Decl {
        &self.decls[id.index()]
    }

    /// Resolve a source qualified name to its declaration.
    pub fn resolve(&self, qualified_name: &str) -> Option<DeclId> {
        self.by_qname.get(qualified_name).copied()
    }

    /// Current version stamp of a unit. Unknown units report the initial
    /// stamp; translation degrades rather than fails on foreign ids.
    pub fn unit_stamp(&self, unit: UnitId) -> VersionStamp {
        self.units
            .get(unit.index())
            .map(|u| u.stamp)
            .unwrap_or(VersionStamp::INITIAL)
    }

    /// The unit's declared package.
    pub fn unit_package(&self, unit: UnitId) -> &str {
        self.units
            .get(unit.index())
            .map(|u| u.package.as_str())
            .unwrap_or("")
    }

    /// The unit's simple name.
    pub fn unit_name(&self, unit: UnitId) -> &str {
        self.units
            .get(unit.index())
            .map(|u| u.name.as_str())
            .unwrap_or("")
    }

    /// Top-level declarations of a unit, in source order.
    pub fn top_level(&self, unit: UnitId) -> &[DeclId] {
        self.units
            .get(unit.index())
            .map(|u| u.top_level.as_slice())
            .unwrap_or(&[])
    }

    /// Every declaration owned by a unit.
    pub fn unit_decls(&self, unit: UnitId) -> &[DeclId] {
        self.units
            .get(unit.index())
            .map(|u| u.decls.as_slice())
            .unwrap_or(&[])
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Record an edit to a unit: bumps its version stamp. Cached views
    /// computed against the old stamp become stale.
    pub fn touch_unit(&mut self, unit: UnitId) {
        let state = &mut self.units[unit.index()];
        state.stamp = state.stamp.bumped();
        tracing::debug!(unit = unit.index(), stamp = state.stamp.value(), "unit touched");
    }
}

/// Incremental construction of a [`SymbolGraph`].
///
/// Declarations are added parent-first; adding a member to a class-like
/// enclosing declaration appends it to that class's member list. The
/// builder rejects duplicate qualified names and dangling enclosing ids.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: SymbolGraph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source unit with its package.
    pub fn unit(&mut self, name: impl Into<Name>, package: impl Into<Name>) -> UnitId {
        let id = UnitId::new(self.graph.units.len());
        self.graph.units.push(UnitState {
            name: name.into(),
            package: package.into(),
            stamp: VersionStamp::INITIAL,
            top_level: Vec::new(),
            decls: Vec::new(),
        });
        id
    }

    /// Add a declaration. `enclosing` must already exist and be a class.
    pub fn add(
        &mut self,
        unit: UnitId,
        enclosing: Option<DeclId>,
        name: impl Into<Name>,
        modifiers: SourceModifiers,
        annotations: Vec<SourceAnnotation>,
        kind: DeclKind,
    ) -> Result<DeclId, GraphError> {
        let name = name.into();
        if unit.index() >= self.graph.units.len() {
            return Err(GraphError::UnknownUnit);
        }

        let qualified_name: QualifiedName = match enclosing {
            Some(parent) => {
                let parent_decl = self
                    .graph
                    .get(parent)
                    .ok_or_else(|| GraphError::UnknownEnclosing(name.clone()))?;
                format!("{}.{}", parent_decl.qualified_name, name).into()
            }
            None => {
                let package = &self.graph.units[unit.index()].package;
                if package.is_empty() {
                    name.as_str().into()
                } else {
                    format!("{}.{}", package, name).into()
                }
            }
        };

        if self.graph.by_qname.contains_key(&qualified_name) {
            return Err(GraphError::DuplicateQualifiedName(qualified_name));
        }

        let id = DeclId::new(self.graph.decls.len());
        let is_companion = matches!(
            &kind,
            DeclKind::Class(c) if matches!(c.kind, ClassKind::Object { is_companion: true })
        );

        // A class declared inside another class is nested unless the
        // engine said otherwise (local/anonymous localities stand).
        let mut kind = kind;
        if enclosing.is_some() {
            if let DeclKind::Class(class) = &mut kind {
                if class.locality == Locality::TopLevel {
                    class.locality = Locality::Nested;
                }
            }
        }

        // Wire the member into its enclosing class.
        if let Some(parent) = enclosing {
            let parent_decl = &mut self.graph.decls[parent.index()];
            match &mut parent_decl.kind {
                DeclKind::Class(class) => {
                    if is_companion {
                        class.companion = Some(id);
                    }
                    class.members.push(id);
                }
                _ => return Err(GraphError::EnclosingNotAClass(name)),
            }
        } else if is_companion {
            return Err(GraphError::CompanionOutsideClass(name));
        }

        self.graph.decls.push(Decl {
            id,
            unit,
            name,
            qualified_name: qualified_name.clone(),
            modifiers,
            annotations,
            enclosing,
            kind,
        });
        self.graph.by_qname.insert(qualified_name, id);

        let unit_state = &mut self.graph.units[unit.index()];
        unit_state.decls.push(id);
        if enclosing.is_none() {
            unit_state.top_level.push(id);
        }

        Ok(id)
    }

    pub fn finish(self) -> SymbolGraph {
        self.graph
    }
}
