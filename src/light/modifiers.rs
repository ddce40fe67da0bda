//! Target-language modifier and annotation sets.
//!
//! Both sets are ordered: modifiers iterate in canonical JVM order,
//! annotations in insertion order with by-name deduplication. Rendering
//! the same set twice yields identical text.

use indexmap::{IndexMap, IndexSet};

use crate::base::{Name, QualifiedName};

/// Closed enumeration of target-language modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    PackageLocal,
    Abstract,
    Default,
    Static,
    Final,
    Native,
}

impl Modifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            // Package-local is the absence of a keyword in the target
            // language; rendered explicitly so golden text stays unambiguous.
            Modifier::PackageLocal => "/* package-local */",
            Modifier::Abstract => "abstract",
            Modifier::Default => "default",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Native => "native",
        }
    }

    /// Canonical ordering rank (visibility first, then the JLS-suggested
    /// modifier order).
    fn rank(&self) -> u8 {
        match self {
            Modifier::Public | Modifier::Protected | Modifier::Private | Modifier::PackageLocal => 0,
            Modifier::Abstract => 1,
            Modifier::Default => 2,
            Modifier::Static => 3,
            Modifier::Final => 4,
            Modifier::Native => 5,
        }
    }

    pub fn is_visibility(&self) -> bool {
        self.rank() == 0
    }
}

/// An ordered set of target modifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifierSet {
    inner: IndexSet<Modifier>,
}

impl ModifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of(modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        let mut set = Self::new();
        for m in modifiers {
            set.insert(m);
        }
        set
    }

    pub fn insert(&mut self, modifier: Modifier) {
        self.inner.insert(modifier);
    }

    pub fn remove(&mut self, modifier: Modifier) {
        self.inner.shift_remove(&modifier);
    }

    pub fn contains(&self, modifier: Modifier) -> bool {
        self.inner.contains(&modifier)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// The visibility modifier, if one is present.
    pub fn visibility(&self) -> Option<Modifier> {
        self.inner.iter().copied().find(Modifier::is_visibility)
    }

    /// Iterate in canonical order regardless of insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        let mut sorted: Vec<Modifier> = self.inner.iter().copied().collect();
        sorted.sort_by_key(|m| m.rank());
        sorted.into_iter()
    }
}

impl FromIterator<Modifier> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        Self::of(iter)
    }
}

/// One annotation on the foreign view, with pre-rendered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationView {
    pub name: QualifiedName,
    pub args: Vec<Name>,
}

impl AnnotationView {
    pub fn marker(name: impl Into<QualifiedName>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args(name: impl Into<QualifiedName>, args: Vec<Name>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Simple name for rendering (`lang.annot.NotNull` renders `@NotNull`).
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

/// An insertion-ordered, by-name-deduplicated annotation set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationSet {
    inner: IndexMap<QualifiedName, AnnotationView>,
}

impl AnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an annotation. The first insertion of a name wins; a
    /// duplicate never overwrites an already-routed annotation.
    pub fn insert(&mut self, annotation: AnnotationView) {
        self.inner
            .entry(annotation.name.clone())
            .or_insert(annotation);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnnotationView> + '_ {
        self.inner.values()
    }
}
