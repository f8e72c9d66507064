//! Mandatory-field checks over a possibly partial context.

use crate::context::{FieldId, TermContext};

/// List every mandatory field missing from `ctx`, in stable order.
///
/// Pure and side-effect-free: completeness is recomputed on every call and
/// the context is never mutated, so the same input always produces the same
/// list. An empty result means the term can be rendered as final.
///
/// Text fields count as present when non-empty after trimming; the image
/// authorization counts as present for both `Some(true)` and `Some(false)`.
pub fn validate_context(ctx: &TermContext) -> Vec<FieldId> {
    let mut missing = Vec::new();

    if ctx.patient.name.trim().is_empty() {
        missing.push(FieldId::PatientName);
    }
    if ctx.patient.cpf.trim().is_empty() {
        missing.push(FieldId::PatientCpf);
    }
    if ctx.patient.birth_date.trim().is_empty() {
        missing.push(FieldId::PatientBirthDate);
    }
    if ctx.professional.name.trim().is_empty() {
        missing.push(FieldId::ProfessionalName);
    }
    if ctx.professional.license.trim().is_empty() {
        missing.push(FieldId::ProfessionalLicense);
    }
    if ctx.signed_at.trim().is_empty() {
        missing.push(FieldId::SignedAt);
    }
    if ctx.image_authorization.is_none() {
        missing.push(FieldId::ImageAuthorization);
    }
    if ctx.procedure_label.trim().is_empty() {
        missing.push(FieldId::ProcedureLabel);
    }

    missing
}
