//! Rendering entry points.
//!
//! Two operations share the same substitution engine:
//! - [`TermRenderer::render_final`] - strict; an incomplete context yields
//!   empty content, so nothing that looks like a finished document can be
//!   persisted by mistake;
//! - [`TermRenderer::render_preview`] - best effort; substitutes whatever is
//!   present so the host form can show a live preview while fields are still
//!   missing.

use log::debug;
use serde::Serialize;

use crate::context::{FieldId, TermContext};
use crate::registry::TermRegistry;
use crate::substitution::substitute;
use crate::validation::validate_context;

/// Outcome of a render call.
///
/// A value object consumed immediately by the caller: persisted as the
/// signed snapshot when `missing_fields` is empty, or displayed as a
/// work-in-progress preview otherwise.
#[derive(Debug, Clone, Serialize)]
pub struct RenderResult {
    pub title: String,
    pub content: String,
    /// Empty exactly when the document is final and signable.
    pub missing_fields: Vec<FieldId>,
}

impl RenderResult {
    /// True when `content` can be persisted as the signed snapshot.
    pub fn is_final(&self) -> bool {
        self.missing_fields.is_empty()
    }
}

/// Renders consent terms against an injected registry.
pub struct TermRenderer<'r> {
    registry: &'r TermRegistry,
}

impl<'r> TermRenderer<'r> {
    pub fn new(registry: &'r TermRegistry) -> Self {
        Self { registry }
    }

    /// Render the final, signable document.
    ///
    /// Returns `None` when `procedure_key` is unknown: there is nothing to
    /// render, which is different from a known document with missing fields.
    /// With fields missing, `content` stays empty and `title` falls back to
    /// the raw title template, usable as a label but never as the document.
    pub fn render_final(&self, procedure_key: &str, ctx: &TermContext) -> Option<RenderResult> {
        let definition = self.registry.lookup(procedure_key)?;

        let missing_fields = validate_context(ctx);
        if !missing_fields.is_empty() {
            debug!(
                "term '{}' not final: {} field(s) missing",
                definition.key,
                missing_fields.len()
            );
            return Some(RenderResult {
                title: definition.title.to_string(),
                content: String::new(),
                missing_fields,
            });
        }

        Some(RenderResult {
            title: substitute(definition.title, ctx),
            content: substitute(definition.body, ctx),
            missing_fields,
        })
    }

    /// Render a live preview, substituting whatever the context already has.
    ///
    /// Unresolved tokens are stripped, never surfaced; `missing_fields`
    /// tells the form what still blocks the final render.
    pub fn render_preview(&self, procedure_key: &str, ctx: &TermContext) -> Option<RenderResult> {
        let definition = self.registry.lookup(procedure_key)?;

        Some(RenderResult {
            title: substitute(definition.title, ctx),
            content: substitute(definition.body, ctx),
            missing_fields: validate_context(ctx),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::builtin_registry;

    #[test]
    fn test_unknown_procedure_renders_nothing() {
        let registry = builtin_registry();
        let renderer = TermRenderer::new(&registry);
        let ctx = TermContext::default();

        assert!(renderer.render_final("procedimento-inexistente", &ctx).is_none());
        assert!(renderer.render_preview("procedimento-inexistente", &ctx).is_none());
    }

    #[test]
    fn test_incomplete_context_keeps_content_empty() {
        let registry = builtin_registry();
        let renderer = TermRenderer::new(&registry);
        let ctx = TermContext::default();

        let result = renderer.render_final("toxina-botulinica", &ctx).unwrap();
        assert!(!result.is_final());
        assert_eq!(result.content, "");
        assert_eq!(result.title, "TERMO DE CONSENTIMENTO - TOXINA BOTULÍNICA");
    }

    #[test]
    fn test_preview_never_leaks_tokens() {
        let registry = builtin_registry();
        let renderer = TermRenderer::new(&registry);
        let ctx = TermContext::default();

        let result = renderer.render_preview("toxina-botulinica", &ctx).unwrap();
        assert!(!result.is_final());
        assert!(!result.content.contains("{{"));
        assert!(!result.content.contains("}}"));
    }
}
