//! Template registry - resolves procedure keys to consent-term templates.
//!
//! Several business keys may point at the same template: clinically
//! equivalent procedures share one legal text, so alias keys resolve to the
//! reference-identical definition instead of a copy.

use std::collections::HashMap;

use log::debug;
use serde::Serialize;
use thiserror::Error;

/// A registered consent-term template.
///
/// `title` and `body` are raw template text and may contain `{{...}}`
/// tokens; they only become a document through the substitution engine.
#[derive(Debug, Serialize)]
pub struct TemplateDefinition {
    /// Canonical key, lowercase and hyphenated.
    pub key: &'static str,
    /// Display name for pickers and listings.
    pub label: &'static str,
    /// Title template.
    pub title: &'static str,
    /// Body template.
    pub body: &'static str,
}

/// Errors raised while assembling a registry. These are configuration
/// defects caught at startup, not runtime conditions.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("template key '{0}' registered twice")]
    DuplicateKey(String),
    #[error("alias '{alias}' points to unregistered key '{target}'")]
    UnknownAliasTarget { alias: String, target: String },
}

/// Builder for [`TermRegistry`]. The registration order of canonical
/// templates is the listing order.
#[derive(Default)]
pub struct RegistryBuilder {
    by_key: HashMap<&'static str, &'static TemplateDefinition>,
    canonical: Vec<&'static TemplateDefinition>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canonical template under its own key.
    pub fn register(
        mut self,
        definition: &'static TemplateDefinition,
    ) -> Result<Self, RegistryError> {
        if self.by_key.contains_key(definition.key) {
            return Err(RegistryError::DuplicateKey(definition.key.to_string()));
        }
        self.by_key.insert(definition.key, definition);
        self.canonical.push(definition);
        Ok(self)
    }

    /// Register an alias resolving to an already registered key.
    pub fn alias(mut self, alias: &'static str, target: &'static str) -> Result<Self, RegistryError> {
        if self.by_key.contains_key(alias) {
            return Err(RegistryError::DuplicateKey(alias.to_string()));
        }
        let definition =
            self.by_key
                .get(target)
                .copied()
                .ok_or_else(|| RegistryError::UnknownAliasTarget {
                    alias: alias.to_string(),
                    target: target.to_string(),
                })?;
        self.by_key.insert(alias, definition);
        Ok(self)
    }

    /// Freeze the registry. No mutation is possible afterwards.
    pub fn build(self) -> TermRegistry {
        debug!(
            "term registry built: {} keys, {} canonical templates",
            self.by_key.len(),
            self.canonical.len()
        );
        TermRegistry {
            by_key: self.by_key,
            canonical: self.canonical,
        }
    }
}

/// Immutable mapping from procedure keys (canonical and alias) to consent
/// templates. Built once at startup; safe for unsynchronized concurrent
/// reads.
pub struct TermRegistry {
    by_key: HashMap<&'static str, &'static TemplateDefinition>,
    canonical: Vec<&'static TemplateDefinition>,
}

impl TermRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Exact, case-sensitive lookup. Alias keys resolve to the same
    /// definition as their canonical key.
    pub fn lookup(&self, key: &str) -> Option<&'static TemplateDefinition> {
        self.by_key.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Canonical templates in registration order, one entry per definition,
    /// alias keys excluded.
    pub fn canonical_templates(&self) -> &[&'static TemplateDefinition] {
        &self.canonical
    }

    /// Number of registered keys, aliases included.
    pub fn key_count(&self) -> usize {
        self.by_key.len()
    }
}
