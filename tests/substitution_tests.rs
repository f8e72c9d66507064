mod common;

use common::complete_context;
use consent_terms::{substitute, TermContext};

#[test]
fn test_known_tokens_resolve_to_formatted_values() {
    let ctx = complete_context();
    let template = "Paciente: {{patient_name}}\n\
                    CPF: {{patient_cpf}}\n\
                    Nascimento: {{patient_birth_date}}\n\
                    Profissional: {{professional_name}} ({{professional_license}})\n\
                    Procedimento: {{procedure_label}}\n\
                    Assinado em {{signed_at}}";

    let output = substitute(template, &ctx);
    assert!(output.contains("Paciente: Maria Aparecida Souza"));
    assert!(output.contains("CPF: 390.533.447-05"));
    assert!(output.contains("Nascimento: 12/04/1988"));
    assert!(output.contains("Profissional: Dra. Carla Menezes (CRM-SP: 123456)"));
    assert!(output.contains("Procedimento: Toxina Botulínica"));
    assert!(output.contains("Assinado em 15/03/2026 14:30"));
}

#[test]
fn test_substitution_is_deterministic() {
    let template = "{{patient_name}} - {{signed_at}} - {{desconhecido}}";

    let complete = complete_context();
    assert_eq!(
        substitute(template, &complete),
        substitute(template, &complete)
    );
}

#[test]
fn test_substitution_is_idempotent_on_its_own_output() {
    let ctx = complete_context();
    let template = "Titular: {{patient_name}}\n\n\n\nCPF: {{patient_cpf}}\n{{image_authorization}}";

    let once = substitute(template, &ctx);
    assert_eq!(substitute(&once, &ctx), once);
}

#[test]
fn test_unknown_tokens_are_removed() {
    let ctx = complete_context();
    let template = "Antes {{totally_unknown_token}} depois";

    let output = substitute(template, &ctx);
    assert_eq!(output, "Antes  depois");
    assert!(!output.contains("{{"));
    assert!(!output.contains("}}"));
}

#[test]
fn test_no_placeholder_shape_survives() {
    let ctx = TermContext::default();
    let template = "{{patient_name}} {{ typo_token }} {{outro}}{{image_authorization}}";

    let output = substitute(template, &ctx);
    assert!(!output.contains("{{"));
    assert!(!output.contains("}}"));
}

#[test]
fn test_checkbox_exclusivity() {
    let template = "{{image_authorization}}";

    let mut ctx = complete_context();
    let granted = substitute(template, &ctx);
    assert!(granted.contains("( X ) SIM"));
    assert!(granted.contains("(   ) NÃO"));

    ctx.image_authorization = Some(false);
    let refused = substitute(template, &ctx);
    assert!(refused.contains("(   ) SIM"));
    assert!(refused.contains("( X ) NÃO"));
    assert_eq!(refused.lines().count(), 2);
}

#[test]
fn test_manual_signature_boilerplate_is_stripped() {
    let ctx = complete_context();
    let template = "Declaro estar de acordo.\n\
                    \n\
                    Local e Data: _______________________\n\
                    Assinatura do(a) Paciente: __________\n\
                    Assinatura do(a) Profissional: ______\n";

    let output = substitute(template, &ctx);
    assert_eq!(output, "Declaro estar de acordo.");
    assert!(!output.contains("Assinatura"));
    assert!(!output.contains('_'));
}

#[test]
fn test_newline_runs_collapse_to_one_blank_line() {
    let ctx = complete_context();
    let template = "Primeiro parágrafo.\n\n\n\n\nSegundo parágrafo.\n\n\n";

    assert_eq!(
        substitute(template, &ctx),
        "Primeiro parágrafo.\n\nSegundo parágrafo."
    );
}

#[test]
fn test_missing_fields_render_as_blanks_not_tokens() {
    let mut ctx = complete_context();
    ctx.patient.cpf.clear();
    ctx.patient.birth_date = "data inválida".to_string();

    let output = substitute("CPF: {{patient_cpf}} Nascimento: {{patient_birth_date}}", &ctx);
    assert_eq!(output, "CPF:  Nascimento:");
}
