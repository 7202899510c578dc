//! Date and time extraction for infraction notices.
//!
//! All values are passed through verbatim in their `DD/MM/YYYY` printed form.
//! Nothing here parses into a calendar type: downstream systems consume the
//! notice's own formatting.

use super::patterns::{DATA_DMY, EMISSAO, HORA_BEFORE_SPE, VENCIMENTO};

/// Extract the infraction date: first `DD/MM/YYYY` occurrence in the text.
pub fn extract_data_infracao(text: &str) -> Option<String> {
    DATA_DMY.captures(text).map(|caps| caps[1].to_string())
}

/// Extract the infraction time: `HH:MM` immediately preceding an SPE marker.
pub fn extract_hora_infracao(text: &str) -> Option<String> {
    HORA_BEFORE_SPE
        .captures(text)
        .map(|caps| caps[1].to_string())
}

/// Extract the payment due date following the `Vencimento` label.
pub fn extract_data_vencimento(text: &str) -> Option<String> {
    VENCIMENTO.captures(text).map(|caps| caps[1].to_string())
}

/// Extract the issuance timestamp, `DD/MM/YYYY HH:MM:SS` anywhere in text.
pub fn extract_data_emissao(text: &str) -> Option<String> {
    EMISSAO.captures(text).map(|caps| caps[1].to_string())
}
