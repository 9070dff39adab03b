//! Welcome message prompt templates and the guard against clinical wording.
//!
//! Pluravita is a coaching community, not a health service, so neither the
//! prompt nor the generated text may present it as therapy or medical care.

use serde::Deserialize;

pub const WORD_LIMIT: usize = 40;
const MAX_NAME_CHARS: usize = 80;

// Lowercase stems, matched as substrings.
const CLINICAL_TERMS: &[&str] = &[
    // en
    "therapy",
    "therapist",
    "therapeutic",
    "clinical",
    "clinic",
    "diagnos",
    "psychological treatment",
    "medical",
    "psychiatr",
    // es
    "terapia",
    "terapeuta",
    "clínic",
    "diagnóstic",
    "tratamiento psicológico",
    "médic",
    "psiquiatr",
    // de
    "therapie",
    "therapeut",
    "klinisch",
    "psychologische behandlung",
    "medizinisch",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    De,
}

/// Strips anything that could break out of the quoted name in the prompt.
pub fn sanitize_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_control() && !matches!(c, '"' | '`' | '\\'))
        .take(MAX_NAME_CHARS)
        .collect::<String>()
        .trim()
        .to_string()
}

pub fn welcome_prompt(language: Language, name: &str) -> String {
    match language {
        Language::En => format!(
            "Generate a very short, warm, and supportive thank you message in English for someone named \"{name}\" \
             who has just joined a waitlist for a well-being and coaching community called Pluravita. \
             Use at most {WORD_LIMIT} words. Emphasize growth and personalized support. \
             DO NOT mention therapy, clinical care, medical diagnosis, or psychological treatment. \
             Focus on well-being. Reply with the message only."
        ),
        Language::Es => format!(
            "Genera un mensaje de agradecimiento muy corto, cálido y de apoyo en español para alguien llamado \"{name}\" \
             que acaba de unirse a una lista de espera para una comunidad de bienestar y coaching llamada Pluravita. \
             Usa como máximo {WORD_LIMIT} palabras. Enfatiza el crecimiento y el apoyo personalizado. \
             NO menciones terapia, atención clínica, diagnóstico médico o tratamiento psicológico. \
             Enfócate en el bienestar. Responde solo con el mensaje."
        ),
        Language::De => format!(
            "Erzeuge eine sehr kurze, herzliche und unterstützende Dankesnachricht auf Deutsch für eine Person namens \"{name}\", \
             die sich gerade auf die Warteliste für eine Wohlfühl-Community namens Pluravita gesetzt hat. \
             Verwende höchstens {WORD_LIMIT} Wörter. Betone Wachstum und persönliche Unterstützung. \
             Erwähne KEINE Therapie, klinische Versorgung, medizinische Diagnose oder psychologische Behandlung. \
             Fokus auf Wohlbefinden. Antworte nur mit der Nachricht."
        ),
    }
}

pub fn mentions_clinical_terms(text: &str) -> bool {
    let lower = text.to_lowercase();
    CLINICAL_TERMS.iter().any(|term| lower.contains(term))
}
