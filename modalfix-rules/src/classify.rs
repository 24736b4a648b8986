//! Heuristic message classifier.
//!
//! Maps the literal text of a legacy call's message argument to a
//! notification category. Rules run in priority order; the first match wins
//! and anything unmatched degrades to `Alert`, never to an error.

use modalfix_types::NotificationKind;

/// Completed-action verbs that, followed by ` exitosamente`, mark a success
/// message. Closed set observed in the migrated corpus.
const SUCCESS_VERBS: &[&str] = &[
    "creado",
    "actualizado",
    "eliminado",
    "subido",
    "aprobado",
    "rechazado",
    "activado",
    "desactivado",
];

/// Message prefixes that identify validation/domain errors.
const ERROR_PREFIXES: &[&str] = &[
    "Las contraseñas",
    "La contraseña",
    "Debes aceptar",
    "Máximo",
];

/// Markers that flip an entity-specific message ("Usuario ...") to success.
const ENTITY_SUCCESS_MARKERS: &[&str] = &["exitosamente", "activado", "desactivado"];

/// Classify a message into a notification category.
///
/// Pure and deterministic; `Confirm` is never returned here (that category is
/// chosen structurally by the call rewriter, not by message content).
pub fn classify_message(message: &str) -> NotificationKind {
    if message.starts_with('✅') || contains_success_verb(message) {
        return NotificationKind::Success;
    }

    if message.starts_with('❌')
        || message.starts_with("Error")
        || ERROR_PREFIXES.iter().any(|p| message.starts_with(p))
    {
        return NotificationKind::Error;
    }

    if message.starts_with("Por favor") || message.starts_with("Generando") {
        return NotificationKind::Alert;
    }

    if let Some(rest) = message.strip_prefix("Usuario ") {
        if ENTITY_SUCCESS_MARKERS.iter().any(|m| rest.contains(m)) {
            return NotificationKind::Success;
        }
        return NotificationKind::Error;
    }

    NotificationKind::Alert
}

fn contains_success_verb(message: &str) -> bool {
    SUCCESS_VERBS.iter().any(|verb| {
        message
            .match_indices(verb)
            .any(|(idx, _)| message[idx + verb.len()..].starts_with(" exitosamente"))
    })
}
