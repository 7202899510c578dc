//! Identifier extraction - auto number, SPE code, vehicle, line, article,
//! group, DAM and agent registration.

use super::patterns::{
    ARTIGO, AUTO_AFTER_EMPRESA, AUTO_HEADER, AUTO_LABELED, DAM, GRUPO, LINHA, MATRICULA_AGENTE,
    SPE_CODE, UF, VEICULO,
};

/// Extract the infraction number.
///
/// Three candidate anchors are tried in fixed priority order; the first one
/// that matches wins and later candidates are never consulted.
pub fn extract_numero_auto(text: &str) -> Option<String> {
    for pattern in [&*AUTO_AFTER_EMPRESA, &*AUTO_LABELED, &*AUTO_HEADER] {
        if let Some(caps) = pattern.captures(text) {
            return Some(caps[1].trim().to_string());
        }
    }
    None
}

/// Extract the SPE segment code, normalized to the `SPE` prefix plus digits.
pub fn extract_spe(text: &str) -> Option<String> {
    SPE_CODE
        .captures(text)
        .map(|caps| format!("SPE{}", &caps[1]))
}

/// Extract the vehicle fleet prefix.
pub fn extract_veiculo_prefixo(text: &str) -> Option<String> {
    VEICULO
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}

/// Extract the two-letter state code.
pub fn extract_uf(text: &str) -> Option<String> {
    UF.captures(text).map(|caps| caps[1].to_string())
}

/// Extract the bus line number.
pub fn extract_linha(text: &str) -> Option<String> {
    LINHA.captures(text).map(|caps| caps[1].to_string())
}

/// Extract the severity group (letter with optional `-digits` suffix).
pub fn extract_grupo(text: &str) -> Option<String> {
    GRUPO.captures(text).map(|caps| caps[1].to_string())
}

/// Extract the payment-slip (DAM) number.
pub fn extract_numero_dam(text: &str) -> Option<String> {
    DAM.captures(text).map(|caps| caps[1].to_string())
}

/// Extract the article reference as `(article, item)` - the dotted numeric
/// code and the roman-numeral sub-item.
pub fn extract_artigo(text: &str) -> Option<(String, String)> {
    ARTIGO
        .captures(text)
        .map(|caps| (caps[2].to_string(), caps[3].to_string()))
}

/// Extract the issuing agent's registration number.
pub fn extract_matricula_agente(text: &str) -> Option<String> {
    MATRICULA_AGENTE
        .captures(text)
        .map(|caps| caps[1].to_string())
}
