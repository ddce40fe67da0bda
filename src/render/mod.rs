//! Deterministic golden-text rendering of light class views.
//!
//! The renderer is the verification surface: a whitespace-normalized,
//! byte-stable serialization of modifiers, annotations, supertypes, and
//! members. Members are serialized in the order the translator produced
//! them (explicit in source order, synthetics grouped by rule), so
//! rendering is a pure walk with no reordering of its own.

use tokio_util::sync::CancellationToken;

use crate::base::UnitId;
use crate::light::{
    AnnotationSet, JvmType, LightClassView, LightMember, LightMemberKind, ParamView, TypeParamView,
};
use crate::translate::{TranslationContext, ViewKey, translate_key};

/// Render one view to its golden text. Idempotent and byte-stable.
pub fn render_view(view: &LightClassView) -> String {
    let mut out = String::new();
    render_header(view, &mut out);
    out.push_str(" {\n");
    for member in &view.members {
        out.push_str("  ");
        render_member(member, &mut out);
        out.push('\n');
    }
    out.push_str("}\n");
    out
}

/// Render every view of a unit: top-level classes in source order, then
/// the unit facade when the unit has top-level callables or properties.
///
/// Returns `None` if the cancellation token is signalled.
pub fn render_unit(
    ctx: &TranslationContext,
    unit: UnitId,
    cancel: &CancellationToken,
) -> Option<String> {
    let mut sections = Vec::new();
    let mut has_facade_members = false;

    for decl_id in ctx.graph.top_level(unit) {
        if cancel.is_cancelled() {
            return None;
        }
        let Some(decl) = ctx.graph.get(*decl_id) else {
            continue;
        };
        match &decl.kind {
            crate::symbols::DeclKind::Class(_) => {
                let view = translate_key(ctx, ViewKey::Class(*decl_id));
                sections.push(render_view(&view));
            }
            _ => has_facade_members = true,
        }
    }

    if has_facade_members {
        if cancel.is_cancelled() {
            return None;
        }
        let view = translate_key(ctx, ViewKey::Facade(unit));
        sections.push(render_view(&view));
    }

    Some(sections.join("\n"))
}

fn render_header(view: &LightClassView, out: &mut String) {
    render_annotations(&view.annotations, out);
    for modifier in view.modifiers.iter() {
        out.push_str(modifier.as_str());
        out.push(' ');
    }
    out.push_str(view.kind.keyword());
    out.push(' ');
    out.push_str(&view.qualified_name);
    render_type_params(&view.type_params, out);
    if let Some(repr) = &view.value_repr {
        out.push_str(&format!(" /* boxed: {repr} */"));
    }
    if let Some(extends) = &view.extends {
        out.push_str(&format!(" extends {extends}"));
    }
    if !view.implements.is_empty() {
        let rendered: Vec<String> = view.implements.iter().map(|t| t.to_string()).collect();
        out.push_str(&format!(" implements {}", rendered.join(", ")));
    }
}

fn render_type_params(type_params: &[TypeParamView], out: &mut String) {
    if type_params.is_empty() {
        return;
    }
    out.push('<');
    for (i, tp) in type_params.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&tp.name);
        let bounds: Vec<String> = tp
            .bounds
            .iter()
            .filter(|b| !b.is_object())
            .map(|b| b.to_string())
            .collect();
        if !bounds.is_empty() {
            out.push_str(" extends ");
            out.push_str(&bounds.join(" & "));
        }
    }
    out.push('>');
}

fn render_annotations(annotations: &AnnotationSet, out: &mut String) {
    for annotation in annotations.iter() {
        out.push('@');
        out.push_str(annotation.simple_name());
        if !annotation.args.is_empty() {
            let args: Vec<&str> = annotation.args.iter().map(|a| a.as_str()).collect();
            out.push_str(&format!("({})", args.join(", ")));
        }
        out.push(' ');
    }
}

fn render_member(member: &LightMember, out: &mut String) {
    render_annotations(&member.annotations, out);
    for modifier in member.modifiers.iter() {
        out.push_str(modifier.as_str());
        out.push(' ');
    }

    match &member.kind {
        LightMemberKind::Field { ty } => {
            out.push_str(&format!("{ty} {};", member.name));
        }
        LightMemberKind::Method {
            type_params,
            params,
            return_type,
            throws,
        } => {
            if !type_params.is_empty() {
                render_type_params(type_params, out);
                out.push(' ');
            }
            out.push_str(&format!("{return_type} {}(", member.name));
            render_params(params, out);
            out.push(')');
            render_throws(throws, out);
            out.push(';');
        }
        LightMemberKind::Constructor { params, throws } => {
            out.push_str(&format!("{}(", member.name));
            render_params(params, out);
            out.push(')');
            render_throws(throws, out);
            out.push(';');
        }
    }
}

fn render_params(params: &[ParamView], out: &mut String) {
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        render_annotations(&param.annotations, out);
        match (&param.ty, param.is_vararg) {
            (JvmType::Array(elem), true) => out.push_str(&format!("{elem}... {}", param.name)),
            (ty, _) => out.push_str(&format!("{ty} {}", param.name)),
        }
    }
}

fn render_throws(throws: &[crate::base::QualifiedName], out: &mut String) {
    if throws.is_empty() {
        return;
    }
    let rendered: Vec<&str> = throws.iter().map(|t| t.as_ref()).collect();
    out.push_str(&format!(" throws {}", rendered.join(", ")));
}
