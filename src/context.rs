//! Context assembled by the host application before rendering a term.
//!
//! The host screens collect these values from the patient record, the
//! logged-in professional and the signature capture UI, and send them here
//! as one struct. Nothing is defaulted behind the caller's back: a field the
//! form has not filled in yet simply stays empty and shows up in
//! `validate_context`.

use serde::{Deserialize, Serialize};

/// Patient identification block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientInfo {
    #[serde(default)]
    pub name: String,
    /// CPF, with or without the mask.
    #[serde(default)]
    pub cpf: String,
    /// ISO date (`YYYY-MM-DD`) or RFC 3339 timestamp.
    #[serde(default)]
    pub birth_date: String,
}

/// Professional responsible for the procedure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfessionalInfo {
    #[serde(default)]
    pub name: String,
    /// Council license, free form (`"CRM 12345"`, `"CRM-SP: 12345"`).
    #[serde(default)]
    pub license: String,
}

/// Everything a consent term needs to be rendered.
///
/// All fields are required for a *final* render but may be absent while the
/// host form is still being filled in; [`crate::validate_context`] reports
/// which ones are missing. `image_authorization` is `Option<bool>` on
/// purpose: an explicit refusal (`false`) is a complete answer, only the
/// absence of a decision counts as missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TermContext {
    #[serde(default)]
    pub patient: PatientInfo,
    #[serde(default)]
    pub professional: ProfessionalInfo,
    /// Moment of the signature, RFC 3339.
    #[serde(default)]
    pub signed_at: String,
    /// Display name of the procedure. Not used for template lookup.
    #[serde(default)]
    pub procedure_label: String,
    #[serde(default)]
    pub image_authorization: Option<bool>,
}

/// Mandatory fields of a [`TermContext`], in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    PatientName,
    PatientCpf,
    PatientBirthDate,
    ProfessionalName,
    ProfessionalLicense,
    SignedAt,
    ImageAuthorization,
    ProcedureLabel,
}

impl FieldId {
    /// Stable identifier, the same string the template tokens use.
    pub const fn id(self) -> &'static str {
        match self {
            FieldId::PatientName => "patient_name",
            FieldId::PatientCpf => "patient_cpf",
            FieldId::PatientBirthDate => "patient_birth_date",
            FieldId::ProfessionalName => "professional_name",
            FieldId::ProfessionalLicense => "professional_license",
            FieldId::SignedAt => "signed_at",
            FieldId::ImageAuthorization => "image_authorization",
            FieldId::ProcedureLabel => "procedure_label",
        }
    }

    /// Display label for host form messages.
    pub const fn label(self) -> &'static str {
        match self {
            FieldId::PatientName => "Nome do paciente",
            FieldId::PatientCpf => "CPF do paciente",
            FieldId::PatientBirthDate => "Data de nascimento",
            FieldId::ProfessionalName => "Nome do profissional",
            FieldId::ProfessionalLicense => "Registro profissional",
            FieldId::SignedAt => "Data da assinatura",
            FieldId::ImageAuthorization => "Autorização de uso de imagem",
            FieldId::ProcedureLabel => "Nome do procedimento",
        }
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
