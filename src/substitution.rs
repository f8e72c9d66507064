//! Placeholder substitution over template text.
//!
//! The engine is an ordered pipeline: named tokens first, legacy signature
//! boilerplate stripping, then a catch-all pass that deletes whatever
//! `{{...}}` survived, and finally whitespace normalization. The catch-all
//! always runs last, so no unresolved token can reach a rendered document.

use lazy_static::lazy_static;
use log::debug;
use regex::{Captures, Regex};

use crate::context::TermContext;
use crate::format;

/// Known tokens and how each resolves against the context. New template
/// tokens are added here; anything not in this table is removed by the
/// catch-all pass.
const TOKEN_RULES: &[(&str, fn(&TermContext) -> String)] = &[
    ("patient_name", |ctx| ctx.patient.name.trim().to_string()),
    ("patient_cpf", |ctx| format::format_cpf(&ctx.patient.cpf)),
    ("patient_birth_date", |ctx| {
        format::format_date(&ctx.patient.birth_date)
    }),
    ("professional_name", |ctx| {
        ctx.professional.name.trim().to_string()
    }),
    ("professional_license", |ctx| {
        format::format_license(&ctx.professional.license)
    }),
    ("procedure_label", |ctx| ctx.procedure_label.trim().to_string()),
    ("signed_at", |ctx| {
        format::format_date_time(non_empty(&ctx.signed_at))
    }),
    ("image_authorization", |ctx| {
        format::image_authorization_block(ctx.image_authorization)
    }),
];

lazy_static! {
    static ref TOKEN_RE: Regex = Regex::new(r"\{\{\s*(\w+)\s*\}\}").unwrap();
    static ref SIGNATURE_LINE_RE: Regex = Regex::new(
        r"(?m)^[ \t]*(?:Assinatura do(?:\(a\))? (?:Paciente|Profissional)|Local e Data)[ \t]*:?[ \t_]*$\n?"
    )
    .unwrap();
    static ref EXTRA_NEWLINES_RE: Regex = Regex::new(r"\n{3,}").unwrap();
}

/// Substitute every known token in `template` with its formatted value.
///
/// Guarantees on the output, whatever the template and context:
/// - no `{{...}}`-shaped token survives, known or not;
/// - the fill-in signature lines of the printed forms are gone (signatures
///   are captured digitally by the host application);
/// - at most one consecutive blank line, no leading or trailing whitespace.
pub fn substitute(template: &str, ctx: &TermContext) -> String {
    // Named tokens. Unknown ones are left in place for the catch-all.
    let replaced = TOKEN_RE.replace_all(template, |caps: &Captures<'_>| {
        let name = &caps[1];
        match TOKEN_RULES.iter().find(|(token, _)| *token == name) {
            Some((_, resolve)) => resolve(ctx),
            None => caps[0].to_string(),
        }
    });

    let stripped = SIGNATURE_LINE_RE.replace_all(&replaced, "");

    // Catch-all, always the last substitution step.
    let cleaned = TOKEN_RE.replace_all(&stripped, |caps: &Captures<'_>| {
        debug!("discarding unresolved template token {}", &caps[0]);
        String::new()
    });

    let collapsed = EXTRA_NEWLINES_RE.replace_all(&cleaned, "\n\n");
    collapsed.trim().to_string()
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
