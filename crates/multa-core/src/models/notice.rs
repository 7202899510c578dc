//! Flat record of fields extracted from one infraction notice.
//!
//! Wire keys follow the municipal notice vocabulary (numero_auto, valor_multa,
//! ...). A field is serialized if and only if its recognition rule matched;
//! consumers must treat an absent key as "not found", never as an error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome marker attached to every extraction payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusExtracao {
    /// Extraction completed. Partial field recognition is still a success.
    Sucesso,
    /// The document could not be processed at all (provider fault).
    Falha,
}

impl Default for StatusExtracao {
    fn default() -> Self {
        Self::Sucesso
    }
}

/// Structured data extracted from the first page of one notice PDF.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoticeRecord {
    /// Infraction number (número do auto de infração).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_auto: Option<String>,

    /// Operating company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empresa: Option<String>,

    /// Transit-system segment code, `SPE` prefix plus digits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spe: Option<String>,

    /// Infraction date, verbatim `DD/MM/YYYY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_infracao: Option<String>,

    /// Infraction time, `HH:MM`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hora_infracao: Option<String>,

    /// Vehicle fleet prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub veiculo_prefixo: Option<String>,

    /// Two-letter state code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uf: Option<String>,

    /// Bus line number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linha: Option<String>,

    /// Bus line description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linha_descricao: Option<String>,

    /// Fine value as a decimal number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor_multa: Option<Decimal>,

    /// Fine value as originally printed, with the currency symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor_multa_formatado: Option<String>,

    /// Payment due date, verbatim `DD/MM/YYYY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_vencimento: Option<String>,

    /// Payment-slip (DAM) number, `DDDDD/DDDD-D`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_dam: Option<String>,

    /// Infringed article code (dotted numeric form).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artigo: Option<String>,

    /// Article sub-item (roman numeral).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artigo_item: Option<String>,

    /// Infraction severity group, letter plus optional `-digits`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grupo: Option<String>,

    /// Canned infraction description, when recognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao_infracao: Option<String>,

    /// Street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logradouro: Option<String>,

    /// Neighborhood.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bairro: Option<String>,

    /// Free-form observation block, may span several lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacao: Option<String>,

    /// Issuance timestamp, verbatim `DD/MM/YYYY HH:MM:SS`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_emissao: Option<String>,

    /// Registration number of the issuing agent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matricula_agente: Option<String>,

    /// Number of recognition rules (out of 20) that produced a value.
    pub campos_extraidos: usize,

    /// Always `sucesso` for a record that reached assembly.
    pub status_extracao: StatusExtracao,
}

impl NoticeRecord {
    /// Count the recognition rules that matched.
    ///
    /// A rule that fills two keys (fine value, article) counts once, so the
    /// result ranges over 0..=20.
    pub fn count_extracted(&self) -> usize {
        [
            self.numero_auto.is_some(),
            self.empresa.is_some(),
            self.spe.is_some(),
            self.data_infracao.is_some(),
            self.hora_infracao.is_some(),
            self.veiculo_prefixo.is_some(),
            self.uf.is_some(),
            self.linha.is_some(),
            self.linha_descricao.is_some(),
            self.valor_multa.is_some(),
            self.data_vencimento.is_some(),
            self.numero_dam.is_some(),
            self.artigo.is_some(),
            self.grupo.is_some(),
            self.descricao_infracao.is_some(),
            self.logradouro.is_some(),
            self.bairro.is_some(),
            self.observacao.is_some(),
            self.data_emissao.is_some(),
            self.matricula_agente.is_some(),
        ]
        .iter()
        .filter(|found| **found)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_absent_fields_are_omitted() {
        let record = NoticeRecord {
            numero_auto: Some("AB1234".to_string()),
            campos_extraidos: 1,
            ..Default::default()
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["numero_auto"], "AB1234");
        assert_eq!(json["campos_extraidos"], 1);
        assert_eq!(json["status_extracao"], "sucesso");
        assert!(json.get("empresa").is_none());
        assert!(json.get("valor_multa").is_none());
    }

    #[test]
    fn test_valor_multa_serializes_as_number() {
        let record = NoticeRecord {
            valor_multa: Some(Decimal::from_str("12345.67").unwrap()),
            valor_multa_formatado: Some("R$ 12.345,67".to_string()),
            campos_extraidos: 1,
            ..Default::default()
        };

        let json = serde_json::to_value(&record).unwrap();
        assert!(json["valor_multa"].is_number());
        assert_eq!(json["valor_multa_formatado"], "R$ 12.345,67");
    }

    #[test]
    fn test_count_extracted_counts_rules_not_keys() {
        let record = NoticeRecord {
            valor_multa: Some(Decimal::from_str("100.00").unwrap()),
            valor_multa_formatado: Some("R$ 100,00".to_string()),
            artigo: Some("7.1".to_string()),
            artigo_item: Some("IV".to_string()),
            ..Default::default()
        };

        // Two rules matched, even though four keys are populated.
        assert_eq!(record.count_extracted(), 2);
    }
}
