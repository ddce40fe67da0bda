//! Parsing of well-known `lang.jvm.*` annotations into directives.
//!
//! Directives steer translation (static promotion, raw-field exposure,
//! renames, exclusion, overload opt-out, declared exceptions) and are
//! consumed here; they never appear as annotations on the output view.
//! Everything else passes through for use-site routing.

use crate::base::{Name, QualifiedName};
use crate::symbols::{AnnotationArg, AnnotationValue, SourceAnnotation, UseSite};

use super::known;

/// Static promotion of an object/companion member onto the enclosing
/// class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StaticDirective {
    /// Suppress the instance form on the object's own class.
    pub only: bool,
}

/// Opt-out of default-parameter overload expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoOverloads {
    /// When set, only synthesized overloads of arity < `below` are
    /// suppressed; otherwise all of them are.
    pub below: Option<u32>,
}

/// The interpreted directive surface of one declaration.
#[derive(Debug, Clone, Default)]
pub struct Directives {
    pub statik: Option<StaticDirective>,
    pub raw_field: bool,
    /// Foreign-name overrides, per use-site target (`None` = the
    /// declaration itself).
    renames: Vec<(Option<UseSite>, Name)>,
    /// Exclusion targets (`None` = the whole declaration).
    excluded: Vec<Option<UseSite>>,
    pub no_overloads: Option<NoOverloads>,
    pub throws: Vec<QualifiedName>,
    /// Annotations that are not directives; routed by use-site.
    pub passthrough: Vec<SourceAnnotation>,
}

impl Directives {
    /// Interpret a declaration's annotation list.
    pub fn parse(annotations: &[SourceAnnotation]) -> Self {
        let mut directives = Directives::default();

        for annotation in annotations {
            match annotation.name.as_ref() {
                known::STATIC => {
                    let only = matches!(annotation.arg("only"), Some(AnnotationValue::Bool(true)));
                    directives.statik = Some(StaticDirective { only });
                }
                known::FIELD => directives.raw_field = true,
                known::NAME => {
                    if let Some(AnnotationValue::Str(name)) = annotation.arg("name") {
                        directives
                            .renames
                            .push((annotation.use_site, name.clone()));
                    }
                }
                known::SYNTHETIC => directives.excluded.push(annotation.use_site),
                known::NO_OVERLOADS => {
                    let below = match annotation.arg("below") {
                        Some(AnnotationValue::Int(n)) if *n >= 0 => Some(*n as u32),
                        _ => None,
                    };
                    directives.no_overloads = Some(NoOverloads { below });
                }
                known::THROWS => {
                    if let Some(AnnotationValue::Types(classes)) = annotation.arg("classes") {
                        directives.throws.extend(classes.iter().cloned());
                    }
                }
                _ => directives.passthrough.push(annotation.clone()),
            }
        }

        directives
    }

    /// The rename for one use-site target, falling back to the
    /// declaration-level rename.
    pub fn renamed(&self, use_site: Option<UseSite>) -> Option<&Name> {
        self.renames
            .iter()
            .find(|(site, _)| *site == use_site)
            .or_else(|| self.renames.iter().find(|(site, _)| site.is_none()))
            .map(|(_, name)| name)
    }

    /// Whether the whole declaration is excluded from the foreign view.
    pub fn excludes_declaration(&self) -> bool {
        self.excluded.contains(&None) || self.excluded.contains(&Some(UseSite::Property))
    }

    /// Whether one facet of the declaration is excluded.
    pub fn excludes(&self, use_site: UseSite) -> bool {
        self.excluded.contains(&Some(use_site))
    }
}

/// Deterministic rendering of annotation arguments for the output view.
pub(crate) fn render_args(args: &[AnnotationArg]) -> Vec<Name> {
    args.iter()
        .map(|arg| match &arg.value {
            AnnotationValue::Str(s) => Name::from(format!("{} = \"{}\"", arg.name, s)),
            AnnotationValue::Int(n) => Name::from(format!("{} = {}", arg.name, n)),
            AnnotationValue::Bool(b) => Name::from(format!("{} = {}", arg.name, b)),
            AnnotationValue::Types(types) => {
                let rendered: Vec<&str> = types.iter().map(|t| t.as_ref()).collect();
                Name::from(format!("{} = {{{}}}", arg.name, rendered.join(", ")))
            }
        })
        .collect()
}
