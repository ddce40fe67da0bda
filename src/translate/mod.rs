//! The symbol-to-class translator.
//!
//! One light class view per declaration: top-level and nested classes get
//! their own view, local and anonymous classes attach under a synthetic
//! `$`-qualifier, and a unit's top-level functions/properties surface as
//! static members of a per-unit facade class.
//!
//! [`translate`] is total and non-throwing: internal inconsistencies
//! degrade to a best-effort partial view (declared members only, the
//! dependent synthetic rules skipped), never an error to a caller that
//! is mid-keystroke.
//!
//! Assembly order is invariant: explicit members in source order, then
//! synthetic members grouped by [`SyntheticRule`] priority.

use rustc_hash::FxHashSet;
use tracing::{debug, trace, warn};

use crate::base::{DeclId, Name, QualifiedName, UnitId, VersionStamp};
use crate::light::{
    AnnotationSet, JvmType, LightClassKind, LightClassView, LightMember, LightMemberKind,
    MemberOrigin, Modifier, ModifierSet, SyntheticRule,
};
use crate::mapper::{
    self, AnnotationTarget, Directives, Ruleset, TypePosition, map_type, route_annotations,
};
use crate::symbols::{
    ClassDecl, ClassKind, Decl, DeclKind, Locality, Modality, PropertyDecl, SymbolGraph, TypeShape,
};
use crate::synth::{
    self, MethodOptions, PropertyOptions, SynthesisFault,
};

/// The versioned read-only context one translation runs against.
///
/// Passed explicitly; independent sessions (tests, parallel tools) never
/// share state through this crate.
#[derive(Clone, Copy)]
pub struct TranslationContext<'a> {
    pub graph: &'a SymbolGraph,
    pub ruleset: &'a Ruleset,
}

impl<'a> TranslationContext<'a> {
    pub fn new(graph: &'a SymbolGraph, ruleset: &'a Ruleset) -> Self {
        Self { graph, ruleset }
    }
}

/// Identity of one light class view.
///
/// Class-like declarations own a view directly; a unit's top-level
/// callables and properties share the unit facade view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKey {
    Class(DeclId),
    Facade(UnitId),
}

impl ViewKey {
    /// The unit whose version stamp governs this view.
    pub fn unit(&self, graph: &SymbolGraph) -> UnitId {
        match self {
            ViewKey::Class(id) => graph
                .get(*id)
                .map(|d| d.unit)
                .unwrap_or_else(|| UnitId::new(0)),
            ViewKey::Facade(unit) => *unit,
        }
    }
}

/// The view a declaration belongs to: its own for classes, the enclosing
/// class's for members, the unit facade for top-level callables.
pub fn view_owner(graph: &SymbolGraph, decl: DeclId) -> ViewKey {
    match graph.get(decl) {
        Some(d) => match (&d.kind, d.enclosing) {
            (DeclKind::Class(_), _) => ViewKey::Class(decl),
            (_, Some(parent)) => ViewKey::Class(parent),
            (_, None) => ViewKey::Facade(d.unit),
        },
        None => ViewKey::Class(decl),
    }
}

/// Translate the view owning `decl`. Total: unknown ids yield an empty
/// degraded view rather than an error.
pub fn translate(ctx: &TranslationContext, decl: DeclId) -> LightClassView {
    translate_key(ctx, view_owner(ctx.graph, decl))
}

/// Translate one view by key.
pub fn translate_key(ctx: &TranslationContext, key: ViewKey) -> LightClassView {
    match key {
        ViewKey::Class(id) => match ctx.graph.get(id).and_then(|d| d.as_class().map(|c| (d, c))) {
            Some((decl, class)) => translate_class(ctx, decl, class),
            None => {
                warn!(id = id.index(), "translating unknown declaration; degraded view");
                degraded_view(id)
            }
        },
        ViewKey::Facade(unit) => translate_facade(ctx, unit),
    }
}

fn degraded_view(id: DeclId) -> LightClassView {
    LightClassView {
        decl: Some(id),
        qualified_name: "<unresolved>".into(),
        kind: LightClassKind::Class,
        modifiers: ModifierSet::new(),
        annotations: AnnotationSet::new(),
        type_params: Vec::new(),
        extends: None,
        implements: Vec::new(),
        value_repr: None,
        members: Vec::new(),
        stamp: VersionStamp::INITIAL,
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

/// Foreign name of the per-unit facade class.
pub fn facade_qualified_name(graph: &SymbolGraph, unit: UnitId) -> QualifiedName {
    let package = graph.unit_package(unit);
    let class = format!("{}Facade", capitalize(graph.unit_name(unit)));
    if package.is_empty() {
        class.into()
    } else {
        format!("{package}.{class}").into()
    }
}

/// Foreign qualified name of a class-like declaration: `$`-nested under
/// its enclosing class, or under `Owner$member` for local/anonymous
/// declarations.
pub fn foreign_qualified_name(graph: &SymbolGraph, decl: &Decl) -> QualifiedName {
    let Some(class) = decl.as_class() else {
        return decl.qualified_name.clone();
    };

    match &class.locality {
        Locality::TopLevel => decl.qualified_name.clone(),
        Locality::Nested => match decl.enclosing.and_then(|p| graph.get(p)) {
            Some(parent) => format!("{}${}", foreign_qualified_name(graph, parent), decl.name).into(),
            None => decl.qualified_name.clone(),
        },
        Locality::Local { enclosing_member } => {
            match graph.get(*enclosing_member) {
                Some(member) => {
                    let owner = owner_name(graph, view_owner(graph, member.id));
                    format!("{owner}${}${}", member.name, decl.name).into()
                }
                None => decl.qualified_name.clone(),
            }
        }
        Locality::Anonymous { index, .. } => {
            let owner = match decl.enclosing.and_then(|p| graph.get(p)) {
                Some(parent) => foreign_qualified_name(graph, parent),
                None => facade_qualified_name(graph, decl.unit),
            };
            format!("{owner}${index}").into()
        }
    }
}

fn owner_name(graph: &SymbolGraph, key: ViewKey) -> QualifiedName {
    match key {
        ViewKey::Class(id) => match graph.get(id) {
            Some(decl) => foreign_qualified_name(graph, decl),
            None => "<unresolved>".into(),
        },
        ViewKey::Facade(unit) => facade_qualified_name(graph, unit),
    }
}

// ============================================================================
// CLASS TRANSLATION
// ============================================================================

/// Accumulates members in the invariant output order.
#[derive(Default)]
struct MemberSink {
    explicit: Vec<LightMember>,
    explicit_keys: FxHashSet<String>,
    accessors: Vec<LightMember>,
    fields: Vec<LightMember>,
    components: Vec<LightMember>,
    data_utilities: Vec<LightMember>,
    forwarders: Vec<LightMember>,
    overloads: Vec<LightMember>,
    promotions: Vec<LightMember>,
    enum_utilities: Vec<LightMember>,
    default_ctor: Option<LightMember>,
}

impl MemberSink {
    fn push_explicit(&mut self, member: LightMember) {
        self.explicit_keys.insert(member.signature_key());
        self.explicit.push(member);
    }

    /// Route property members into their rule groups.
    fn push_property_members(&mut self, members: Vec<LightMember>) {
        for member in members {
            match member.origin.rule() {
                Some(SyntheticRule::BackingField) => self.fields.push(member),
                _ => self.accessors.push(member),
            }
        }
    }

    /// Assemble in the fixed rule-priority order, suppressing synthetics
    /// that collide with an explicit signature (explicit declarations win).
    fn finish(self) -> Vec<LightMember> {
        let mut out = self.explicit;
        let keys = self.explicit_keys;

        let groups = [
            self.default_ctor.into_iter().collect::<Vec<_>>(),
            self.accessors,
            self.fields,
            self.components,
            self.data_utilities,
            self.forwarders,
            self.overloads,
            self.promotions,
            self.enum_utilities,
        ];
        for group in groups {
            for member in group {
                if keys.contains(&member.signature_key()) {
                    trace!(name = %member.name, "explicit declaration wins over synthetic");
                    continue;
                }
                out.push(member);
            }
        }
        out
    }
}

fn light_kind(kind: ClassKind) -> LightClassKind {
    match kind {
        ClassKind::Class | ClassKind::EnumEntry | ClassKind::Object { .. } => LightClassKind::Class,
        ClassKind::Interface => LightClassKind::Interface,
        ClassKind::Enum => LightClassKind::Enum,
        ClassKind::Annotation => LightClassKind::Annotation,
        ClassKind::Record => LightClassKind::Record,
    }
}

fn class_modifiers(decl: &Decl, class: &ClassDecl, has_abstract_members: bool) -> ModifierSet {
    let mut set = ModifierSet::new();

    match class.locality {
        Locality::Local { .. } | Locality::Anonymous { .. } => {
            set.insert(Modifier::PackageLocal);
        }
        _ => {
            set.insert(mapper::map_visibility(decl.modifiers.visibility));
        }
    }

    if matches!(class.locality, Locality::Nested) && !class.is_inner {
        set.insert(Modifier::Static);
    }

    match class.kind {
        ClassKind::Class => match decl.modifiers.modality {
            // Sealed classes are uninstantiable from the outside;
            // abstract plus private constructors on the foreign side.
            Modality::Abstract | Modality::Sealed => {
                set.insert(Modifier::Abstract);
            }
            Modality::Final => {
                set.insert(Modifier::Final);
            }
            Modality::Open => {}
        },
        ClassKind::Interface | ClassKind::Annotation => {
            set.insert(Modifier::Abstract);
        }
        ClassKind::Enum => {
            if !has_abstract_members {
                set.insert(Modifier::Final);
            }
        }
        ClassKind::EnumEntry | ClassKind::Object { .. } | ClassKind::Record => {
            set.insert(Modifier::Final);
        }
    }

    set
}

/// Supertype choice for an anonymous object: explicit wins, a unique
/// inferred candidate wins, anything else is the documented tie-break.
fn pick_anonymous_supertype(candidates: &[TypeShape]) -> Result<Option<&TypeShape>, SynthesisFault> {
    match candidates {
        [] => Ok(None),
        [single] => Ok(Some(single)),
        _ => Err(SynthesisFault::AmbiguousSupertype),
    }
}

fn translate_class(ctx: &TranslationContext, decl: &Decl, class: &ClassDecl) -> LightClassView {
    let graph = ctx.graph;
    let ruleset = ctx.ruleset;
    let foreign_name = foreign_qualified_name(graph, decl);
    trace!(name = %foreign_name, kind = class.kind.display(), "translating class");

    let self_type = JvmType::reference(foreign_name.clone());
    let in_interface = matches!(class.kind, ClassKind::Interface);
    let is_annotation = matches!(class.kind, ClassKind::Annotation);
    let is_record = matches!(class.kind, ClassKind::Record);
    let force_private_ctors =
        decl.modifiers.modality == Modality::Sealed || class.kind == ClassKind::Enum;

    // ---- supertypes -------------------------------------------------------
    let mut extends: Option<JvmType> = None;
    let mut implements: Vec<JvmType> = Vec::new();

    match &class.locality {
        Locality::Anonymous { candidates, .. } if class.supertypes.is_empty() => {
            match pick_anonymous_supertype(candidates) {
                Ok(Some(shape)) => place_supertype(graph, ruleset, shape, &mut extends, &mut implements),
                Ok(None) => {}
                Err(fault) => {
                    debug!(%fault, "falling back to the top reference type");
                }
            }
        }
        _ => {
            for super_ref in &class.supertypes {
                let mapped = map_type(&super_ref.ty, TypePosition::Return, ruleset);
                if super_ref.is_interface {
                    implements.push(mapped);
                } else if extends.is_none() {
                    extends = Some(mapped);
                } else {
                    warn!(class = %foreign_name, "multiple class supertypes; keeping the first");
                }
            }
        }
    }

    // Delegated interfaces are implemented interfaces.
    for delegation in &class.delegations {
        let mapped = JvmType::reference(delegation.interface.clone());
        if !implements.contains(&mapped) {
            implements.push(mapped);
        }
    }

    if class.kind == ClassKind::Enum {
        extends = Some(JvmType::generic("java.lang.Enum", vec![self_type.clone()]));
    }
    if class.kind == ClassKind::EnumEntry {
        if let Some(parent) = decl.enclosing.and_then(|p| graph.get(p)) {
            extends = Some(JvmType::reference(foreign_qualified_name(graph, parent)));
        }
    }

    // ---- members ----------------------------------------------------------
    let mut sink = MemberSink::default();
    let mut primary_props: Vec<(&Decl, &PropertyDecl)> = Vec::new();
    let mut has_explicit_ctor = false;
    let mut has_abstract_members = false;
    let companion_of_owner = matches!(class.kind, ClassKind::Object { is_companion: true });

    for member_id in &class.members {
        let Some(member) = graph.get(*member_id) else {
            warn!(id = member_id.index(), "member lookup failed; omitting");
            continue;
        };
        let directives = Directives::parse(&member.annotations);

        match &member.kind {
            DeclKind::Constructor(ctor) => {
                has_explicit_ctor = true;
                if let Some(built) = synth::constructor_member(
                    member,
                    ctor,
                    &decl.name,
                    force_private_ctors,
                    ruleset,
                ) {
                    if ruleset.expand_overloads {
                        sink.overloads.extend(synth::expand_overloads(
                            &built,
                            &ctor.params,
                            directives.no_overloads,
                            ruleset,
                        ));
                    }
                    sink.push_explicit(built);
                }
            }
            DeclKind::Function(func) => {
                if member.modifiers.modality == Modality::Abstract {
                    has_abstract_members = true;
                }
                // Promotion-only members surface solely as statics on the
                // enclosing class; no instance form here.
                if class.kind.is_object() && directives.statik.is_some_and(|s| s.only) {
                    continue;
                }
                let opts = MethodOptions::explicit(member, in_interface || is_annotation);
                if let Some(built) = synth::method_from_function(member, func, &opts, ruleset) {
                    if !func.is_suspend && ruleset.expand_overloads {
                        sink.overloads.extend(synth::expand_overloads(
                            &built,
                            &func.params,
                            directives.no_overloads,
                            ruleset,
                        ));
                    }
                    sink.push_explicit(built);
                }
            }
            DeclKind::Property(prop) => {
                if prop.primary_index.is_some() {
                    primary_props.push((member, prop));
                }
                if is_annotation {
                    sink.push_explicit(synth::annotation_method(member, prop, ruleset));
                    continue;
                }
                // Promotion-only members live on the enclosing class, not
                // on the companion's own view.
                if companion_of_owner
                    && (member.modifiers.is_const || directives.raw_field)
                {
                    continue;
                }
                if class.kind.is_object() && directives.statik.is_some_and(|s| s.only) {
                    continue;
                }
                let opts = PropertyOptions {
                    in_interface,
                    make_static: class.kind.is_object() && member.modifiers.is_const,
                    record_accessors: is_record,
                };
                sink.push_property_members(synth::property_members(member, prop, &opts, ruleset));
            }
            DeclKind::Class(member_class) => {
                // Nested classes get their own views. Enum entries surface
                // as constant fields here.
                if member_class.kind == ClassKind::EnumEntry {
                    sink.push_explicit(LightMember {
                        name: member.name.clone(),
                        kind: LightMemberKind::Field {
                            ty: self_type.clone(),
                        },
                        modifiers: ModifierSet::of([
                            Modifier::Public,
                            Modifier::Static,
                            Modifier::Final,
                        ]),
                        annotations: AnnotationSet::new(),
                        origin: MemberOrigin::Explicit { decl: member.id },
                    });
                }
            }
        }
    }

    primary_props.sort_by_key(|(_, prop)| prop.primary_index);

    // ---- synthetic rules --------------------------------------------------
    if !has_explicit_ctor && class.kind.permits_instantiation() {
        let visibility = if force_private_ctors {
            Modifier::Private
        } else {
            mapper::map_visibility(decl.modifiers.visibility)
        };
        sink.default_ctor = Some(synth::default_constructor(&decl.name, visibility));
    }
    if class.kind.is_object() {
        // Objects are singletons: private constructor, the instance
        // reachable through a static field.
        sink.default_ctor = Some(synth::default_constructor(&decl.name, Modifier::Private));
    }

    if class.is_data {
        sink.components
            .extend(synth::component_functions(&primary_props, ruleset));
        sink.data_utilities
            .extend(synth::data_class_utilities(self_type.clone(), &primary_props, ruleset));
    }
    if is_record {
        // Records carry equality/printing utilities but no positional
        // component accessors or copy.
        sink.data_utilities.extend(
            synth::data_class_utilities(self_type.clone(), &primary_props, ruleset)
                .into_iter()
                .filter(|m| m.name.as_str() != "copy"),
        );
    }

    sink.forwarders.extend(synth::delegation_forwarders(
        graph,
        class,
        &sink.explicit_keys,
        ruleset,
    ));

    // Static promotion from the companion onto this (owning) class, and
    // the companion instance field itself.
    if let Some(companion_id) = class.companion {
        match graph.get(companion_id).and_then(|d| d.as_class().map(|c| (d, c))) {
            Some((companion_decl, companion_class)) => {
                sink.promotions.push(companion_instance_field(
                    &companion_decl.name,
                    foreign_qualified_name(graph, companion_decl),
                ));
                sink.promotions
                    .extend(promoted_members(ctx, companion_class, true));
            }
            None => warn!(class = %foreign_name, "companion lookup failed; omitting promotions"),
        }
    }
    if let ClassKind::Object { is_companion } = class.kind {
        if !is_companion {
            sink.promotions.push(singleton_instance_field(self_type.clone()));
            // A named object's enclosing light class is itself: statically
            // promoted members are duplicated onto its own view.
            sink.promotions.extend(promoted_members(ctx, class, false));
        }
    }

    if class.kind == ClassKind::Enum {
        sink.enum_utilities
            .extend(synth::enum_utilities(self_type.clone(), ruleset));
    }

    // ---- modifiers, annotations, header -----------------------------------
    let directives = Directives::parse(&decl.annotations);
    let annotations = route_annotations(&directives, AnnotationTarget::Class, AnnotationTarget::Class);
    let modifiers = class_modifiers(decl, class, has_abstract_members);

    let value_repr = if class.is_value {
        primary_props
            .first()
            .map(|(_, prop)| map_type(&prop.ty, TypePosition::Field, ruleset))
    } else {
        None
    };

    LightClassView {
        decl: Some(decl.id),
        qualified_name: foreign_name,
        kind: light_kind(class.kind),
        modifiers,
        annotations,
        type_params: synth::map_type_params(&class.type_params, ruleset),
        extends,
        implements,
        value_repr,
        members: sink.finish(),
        stamp: graph.unit_stamp(decl.unit),
    }
}

fn place_supertype(
    graph: &SymbolGraph,
    ruleset: &Ruleset,
    shape: &TypeShape,
    extends: &mut Option<JvmType>,
    implements: &mut Vec<JvmType>,
) {
    let mapped = map_type(shape, TypePosition::Return, ruleset);
    let is_interface = shape
        .named_ref()
        .and_then(|name| graph.resolve(name))
        .and_then(|id| graph.get(id))
        .and_then(|d| d.as_class())
        .is_some_and(|c| c.kind == ClassKind::Interface);
    if is_interface {
        implements.push(mapped);
    } else {
        *extends = Some(mapped);
    }
}

/// The `public static final Companion` field on the owning class.
fn companion_instance_field(name: &Name, companion_type: QualifiedName) -> LightMember {
    LightMember {
        name: name.clone(),
        kind: LightMemberKind::Field {
            ty: JvmType::reference(companion_type),
        },
        modifiers: ModifierSet::of([Modifier::Public, Modifier::Static, Modifier::Final]),
        annotations: AnnotationSet::new(),
        origin: MemberOrigin::Synthetic {
            rule: SyntheticRule::StaticPromotion,
        },
    }
}

/// The `INSTANCE` field of a named object.
fn singleton_instance_field(self_type: JvmType) -> LightMember {
    LightMember {
        name: Name::from("INSTANCE"),
        kind: LightMemberKind::Field { ty: self_type },
        modifiers: ModifierSet::of([Modifier::Public, Modifier::Static, Modifier::Final]),
        annotations: AnnotationSet::new(),
        origin: MemberOrigin::Synthetic {
            rule: SyntheticRule::StaticPromotion,
        },
    }
}

/// Members of an object/companion that are statically promoted onto the
/// enclosing class.
///
/// `include_fields`: on the owner, promotion-only members (`const`,
/// raw-field) surface as static fields; on a named object's own view
/// those are already present as members.
fn promoted_members(
    ctx: &TranslationContext,
    object_class: &ClassDecl,
    include_fields: bool,
) -> Vec<LightMember> {
    let graph = ctx.graph;
    let ruleset = ctx.ruleset;
    let mut promoted = Vec::new();

    for member_id in &object_class.members {
        let Some(member) = graph.get(*member_id) else {
            continue;
        };
        let directives = Directives::parse(&member.annotations);

        match &member.kind {
            DeclKind::Function(func) => {
                if directives.statik.is_none() {
                    continue;
                }
                let opts = MethodOptions::explicit(member, false);
                if let Some(built) = synth::method_from_function(member, func, &opts, ruleset) {
                    promoted.push(synth::promote_member(&built));
                }
            }
            DeclKind::Property(prop) => {
                let promotion_only = member.modifiers.is_const || directives.raw_field;
                if directives.statik.is_none() && !promotion_only {
                    continue;
                }
                if promotion_only && !include_fields {
                    continue;
                }
                let opts = PropertyOptions::default();
                for built in synth::property_members(member, prop, &opts, ruleset) {
                    promoted.push(synth::promote_member(&built));
                }
            }
            DeclKind::Class(_) | DeclKind::Constructor(_) => {}
        }
    }

    promoted
}

// ============================================================================
// FACADE TRANSLATION
// ============================================================================

/// The per-unit facade: top-level functions and properties surface as
/// static members of a synthesized final class.
fn translate_facade(ctx: &TranslationContext, unit: UnitId) -> LightClassView {
    let graph = ctx.graph;
    let ruleset = ctx.ruleset;
    let name = facade_qualified_name(graph, unit);
    trace!(name = %name, "translating unit facade");

    let mut sink = MemberSink::default();

    for decl_id in graph.top_level(unit) {
        let Some(member) = graph.get(*decl_id) else {
            continue;
        };
        let directives = Directives::parse(&member.annotations);

        match &member.kind {
            DeclKind::Function(func) => {
                let opts = MethodOptions {
                    in_interface: false,
                    make_static: true,
                    force_public_final: false,
                    origin: MemberOrigin::Explicit { decl: member.id },
                };
                if let Some(built) = synth::method_from_function(member, func, &opts, ruleset) {
                    if !func.is_suspend && ruleset.expand_overloads {
                        sink.overloads.extend(synth::expand_overloads(
                            &built,
                            &func.params,
                            directives.no_overloads,
                            ruleset,
                        ));
                    }
                    sink.push_explicit(built);
                }
            }
            DeclKind::Property(prop) => {
                let opts = PropertyOptions {
                    make_static: true,
                    ..PropertyOptions::default()
                };
                sink.push_property_members(synth::property_members(member, prop, &opts, ruleset));
            }
            DeclKind::Class(_) | DeclKind::Constructor(_) => {}
        }
    }

    LightClassView {
        decl: None,
        qualified_name: name,
        kind: LightClassKind::Class,
        modifiers: ModifierSet::of([Modifier::Public, Modifier::Final]),
        annotations: AnnotationSet::new(),
        type_params: Vec::new(),
        extends: None,
        implements: Vec::new(),
        value_repr: None,
        members: sink.finish(),
        stamp: graph.unit_stamp(unit),
    }
}
