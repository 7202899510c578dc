//! Company, line-description and address extraction.

use super::patterns::{BAIRRO, EMPRESA, LINHA_DESC_AFTER_BA, LINHA_DESC_AFTER_LINHA, LOGRADOURO};

/// Extract the operating company name: the line between the company header
/// and the following SPE marker.
pub fn extract_empresa(text: &str) -> Option<String> {
    EMPRESA
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}

/// Extract the bus line description.
///
/// Two candidate anchors in priority order: the line after `Linha <number>`,
/// then the line after `BA <number>`.
pub fn extract_linha_descricao(text: &str) -> Option<String> {
    for pattern in [&*LINHA_DESC_AFTER_LINHA, &*LINHA_DESC_AFTER_BA] {
        if let Some(caps) = pattern.captures(text) {
            return Some(caps[1].trim().to_string());
        }
    }
    None
}

/// Extract the street address: remainder of the line after `Logradouro`.
pub fn extract_logradouro(text: &str) -> Option<String> {
    LOGRADOURO
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}

/// Extract the neighborhood: remainder of the line after `Bairro`.
pub fn extract_bairro(text: &str) -> Option<String> {
    BAIRRO.captures(text).map(|caps| caps[1].trim().to_string())
}
