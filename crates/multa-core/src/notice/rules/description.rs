//! Infraction description and observation extraction.

use super::patterns::{DESCRICAO_OSO, OBSERVACAO};

/// The one canned infraction description these notices carry.
const OSO_SENTENCE: &str = "Deixar de cumprir os horários estabelecidos na OSO.";

/// Emit the fixed schedule-non-compliance sentence when the notice mentions
/// it. This is a presence check; the output is always the canonical sentence.
pub fn extract_descricao_infracao(text: &str) -> Option<String> {
    DESCRICAO_OSO
        .is_match(text)
        .then(|| OSO_SENTENCE.to_string())
}

/// Extract the multi-line observation block after `Observação:`.
///
/// The capture runs in dot-matches-newline mode and stops at the first
/// year-led line or at the salutation marker, whichever comes first.
pub fn extract_observacao(text: &str) -> Option<String> {
    OBSERVACAO
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}
