//! Shared fixtures for the integration tests.

use consent_terms::{PatientInfo, ProfessionalInfo, TermContext};

/// A context with every mandatory field filled in.
#[allow(dead_code)]
pub fn complete_context() -> TermContext {
    TermContext {
        patient: PatientInfo {
            name: "Maria Aparecida Souza".to_string(),
            cpf: "39053344705".to_string(),
            birth_date: "1988-04-12".to_string(),
        },
        professional: ProfessionalInfo {
            name: "Dra. Carla Menezes".to_string(),
            license: "CRM-SP 123456".to_string(),
        },
        signed_at: "2026-03-15T14:30:00-03:00".to_string(),
        procedure_label: "Toxina Botulínica".to_string(),
        image_authorization: Some(true),
    }
}
