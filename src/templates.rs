//! Built-in catalog of consent-term templates.
//!
//! Template bodies are the literal legal texts under `templates/`, embedded
//! at compile time. Keys follow the procedure catalog of the host
//! application; aliases cover the alternative names the catalog uses for
//! clinically equivalent procedures, which share one legal text.

use crate::registry::{RegistryError, TemplateDefinition, TermRegistry};

pub static TOXINA_BOTULINICA: TemplateDefinition = TemplateDefinition {
    key: "toxina-botulinica",
    label: "Toxina Botulínica",
    title: "TERMO DE CONSENTIMENTO - TOXINA BOTULÍNICA",
    body: include_str!("../templates/toxina_botulinica.txt"),
};

pub static PREENCHIMENTO_FACIAL: TemplateDefinition = TemplateDefinition {
    key: "preenchimento-facial",
    label: "Preenchimento com Ácido Hialurônico",
    title: "TERMO DE CONSENTIMENTO - PREENCHIMENTO COM ÁCIDO HIALURÔNICO",
    body: include_str!("../templates/preenchimento_facial.txt"),
};

pub static PEELING_QUIMICO: TemplateDefinition = TemplateDefinition {
    key: "peeling-quimico",
    label: "Peeling Químico",
    title: "TERMO DE CONSENTIMENTO - PEELING QUÍMICO",
    body: include_str!("../templates/peeling_quimico.txt"),
};

pub static MICROAGULHAMENTO: TemplateDefinition = TemplateDefinition {
    key: "microagulhamento",
    label: "Microagulhamento",
    title: "TERMO DE CONSENTIMENTO - MICROAGULHAMENTO",
    body: include_str!("../templates/microagulhamento.txt"),
};

pub static BIOESTIMULADOR_COLAGENO: TemplateDefinition = TemplateDefinition {
    key: "bioestimulador-colageno",
    label: "Bioestimulador de Colágeno",
    title: "TERMO DE CONSENTIMENTO - BIOESTIMULADOR DE COLÁGENO",
    body: include_str!("../templates/bioestimulador_colageno.txt"),
};

pub static FIOS_PDO: TemplateDefinition = TemplateDefinition {
    key: "fios-pdo",
    label: "Fios de Sustentação de PDO",
    title: "TERMO DE CONSENTIMENTO - FIOS DE SUSTENTAÇÃO DE PDO",
    body: include_str!("../templates/fios_pdo.txt"),
};

pub static LASER_FRACIONADO: TemplateDefinition = TemplateDefinition {
    key: "laser-fracionado",
    label: "Laser Fracionado",
    title: "TERMO DE CONSENTIMENTO - LASER FRACIONADO",
    body: include_str!("../templates/laser_fracionado.txt"),
};

pub static DEPILACAO_LASER: TemplateDefinition = TemplateDefinition {
    key: "depilacao-laser",
    label: "Depilação a Laser",
    title: "TERMO DE CONSENTIMENTO - DEPILAÇÃO A LASER",
    body: include_str!("../templates/depilacao_laser.txt"),
};

pub static LIMPEZA_DE_PELE: TemplateDefinition = TemplateDefinition {
    key: "limpeza-de-pele",
    label: "Limpeza de Pele Profunda",
    title: "TERMO DE CONSENTIMENTO - LIMPEZA DE PELE PROFUNDA",
    body: include_str!("../templates/limpeza_de_pele.txt"),
};

pub static RADIOFREQUENCIA: TemplateDefinition = TemplateDefinition {
    key: "radiofrequencia",
    label: "Radiofrequência",
    title: "TERMO DE CONSENTIMENTO - RADIOFREQUÊNCIA",
    body: include_str!("../templates/radiofrequencia.txt"),
};

pub static INTRADERMOTERAPIA: TemplateDefinition = TemplateDefinition {
    key: "intradermoterapia",
    label: "Intradermoterapia",
    title: "TERMO DE CONSENTIMENTO - INTRADERMOTERAPIA",
    body: include_str!("../templates/intradermoterapia.txt"),
};

pub static JATO_DE_PLASMA: TemplateDefinition = TemplateDefinition {
    key: "jato-de-plasma",
    label: "Jato de Plasma",
    title: "TERMO DE CONSENTIMENTO - JATO DE PLASMA",
    body: include_str!("../templates/jato_de_plasma.txt"),
};

/// Assemble the registry with every built-in template and alias.
///
/// This is the explicit startup call: the host application builds the
/// registry once and hands it to [`crate::TermRenderer`] by reference.
pub fn builtin_registry() -> TermRegistry {
    try_builtin_registry().expect("built-in template catalog is consistent")
}

fn try_builtin_registry() -> Result<TermRegistry, RegistryError> {
    Ok(TermRegistry::builder()
        .register(&TOXINA_BOTULINICA)?
        .alias("botox", "toxina-botulinica")?
        .alias("botox-facial", "toxina-botulinica")?
        .register(&PREENCHIMENTO_FACIAL)?
        .alias("preenchimento-labial", "preenchimento-facial")?
        .alias("acido-hialuronico", "preenchimento-facial")?
        .register(&PEELING_QUIMICO)?
        .alias("peeling", "peeling-quimico")?
        .register(&MICROAGULHAMENTO)?
        .alias("dermaroller", "microagulhamento")?
        .register(&BIOESTIMULADOR_COLAGENO)?
        .alias("bioestimulador", "bioestimulador-colageno")?
        .register(&FIOS_PDO)?
        .alias("fios-de-sustentacao", "fios-pdo")?
        .register(&LASER_FRACIONADO)?
        .alias("laser-co2", "laser-fracionado")?
        .register(&DEPILACAO_LASER)?
        .alias("depilacao-a-laser", "depilacao-laser")?
        .register(&LIMPEZA_DE_PELE)?
        .register(&RADIOFREQUENCIA)?
        .register(&INTRADERMOTERAPIA)?
        .alias("mesoterapia", "intradermoterapia")?
        .register(&JATO_DE_PLASMA)?
        .alias("plasma", "jato-de-plasma")?
        .build())
}
