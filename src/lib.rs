//! Consent-term rendering core of the clinic management application.
//!
//! This crate owns the generation of the consent documents ("termos de
//! consentimento") patients sign before aesthetic procedures:
//! - `format` - value formatting (CPF mask, dates, council license)
//! - `context` - the data the host application collects before rendering
//! - `validation` - mandatory-field checks over a possibly partial context
//! - `substitution` - placeholder substitution over template text
//! - `registry` - procedure-key to template resolution, aliases included
//! - `templates` - the built-in catalog of consent-term templates
//! - `renderer` - the entry points, `render_final` and `render_preview`
//!
//! Persistence, signature capture and presentation belong to the host
//! application. Everything here is synchronous, free of I/O and safe to call
//! concurrently: the only shared state is the registry, which is immutable
//! once built.

pub mod context;
pub mod format;
pub mod registry;
pub mod renderer;
pub mod substitution;
pub mod templates;
pub mod validation;

pub use context::{FieldId, PatientInfo, ProfessionalInfo, TermContext};
pub use registry::{RegistryBuilder, RegistryError, TemplateDefinition, TermRegistry};
pub use renderer::{RenderResult, TermRenderer};
pub use substitution::substitute;
pub use templates::builtin_registry;
pub use validation::validate_context;
