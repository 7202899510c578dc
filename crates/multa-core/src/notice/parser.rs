//! Rule-based notice parser.

use tracing::debug;

use crate::models::notice::{NoticeRecord, StatusExtracao};

use super::rules::{amounts, dates, description, identifiers, location};

/// Trait for notice parsing.
pub trait NoticeParser {
    /// Parse a notice record from first-page text.
    ///
    /// Total over any input: unmatched fields are simply absent, and partial
    /// recognition is still a successful extraction.
    fn parse(&self, text: &str) -> NoticeRecord;
}

/// Parser applying the fixed battery of 20 recognition rules.
pub struct RuleBasedParser;

impl RuleBasedParser {
    /// Create a new rule-based parser.
    pub fn new() -> Self {
        Self
    }
}

impl Default for RuleBasedParser {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeParser for RuleBasedParser {
    fn parse(&self, text: &str) -> NoticeRecord {
        let mut record = NoticeRecord {
            numero_auto: identifiers::extract_numero_auto(text),
            empresa: location::extract_empresa(text),
            spe: identifiers::extract_spe(text),
            data_infracao: dates::extract_data_infracao(text),
            hora_infracao: dates::extract_hora_infracao(text),
            veiculo_prefixo: identifiers::extract_veiculo_prefixo(text),
            uf: identifiers::extract_uf(text),
            linha: identifiers::extract_linha(text),
            linha_descricao: location::extract_linha_descricao(text),
            data_vencimento: dates::extract_data_vencimento(text),
            numero_dam: identifiers::extract_numero_dam(text),
            grupo: identifiers::extract_grupo(text),
            descricao_infracao: description::extract_descricao_infracao(text),
            logradouro: location::extract_logradouro(text),
            bairro: location::extract_bairro(text),
            observacao: description::extract_observacao(text),
            data_emissao: dates::extract_data_emissao(text),
            matricula_agente: identifiers::extract_matricula_agente(text),
            ..Default::default()
        };

        if let Some(fine) = amounts::extract_valor_multa(text) {
            record.valor_multa = Some(fine.valor);
            record.valor_multa_formatado = Some(fine.formatado);
        }

        if let Some((artigo, item)) = identifiers::extract_artigo(text) {
            record.artigo = Some(artigo);
            record.artigo_item = Some(item);
        }

        record.campos_extraidos = record.count_extracted();
        record.status_extracao = StatusExtracao::Sucesso;

        debug!(
            "extracted {} of 20 fields from {} chars of text",
            record.campos_extraidos,
            text.len()
        );

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    const FULL_NOTICE: &str = "\
SECRETARIA MUNICIPAL DE MOBILIDADE URBANA
Auto de Infração e Imposição de Penalidade
Nº Auto: AI230151
Data da Infração
05/03/2024
Hora
10:22
SPE
4703
Veículo
30412
UF
BA
Linha
0111
CIRCULAR CENTRO VIA ESTACAO
Grupo
C-2
Código Artigo Inciso
33 7.1.2 IV
Deixar de cumprir os horários estabelecidos na OSO
Logradouro
AV SETE DE SETEMBRO, 1250
Bairro
COMERCIO
Valor da Multa
1.234,56
Vencimento
15/04/2024
DAM
11223/2024-5
Matrícula Agente
55231
Observação:
Veículo operando fora da escala autorizada
conforme boletim de operação
2024 Prefeitura Municipal
Emitido em 10/03/2024 08:15:42
";

    #[test]
    fn test_full_notice_extraction() {
        let record = RuleBasedParser::new().parse(FULL_NOTICE);

        assert_eq!(record.numero_auto.as_deref(), Some("AI230151"));
        assert_eq!(record.spe.as_deref(), Some("SPE4703"));
        assert_eq!(record.data_infracao.as_deref(), Some("05/03/2024"));
        assert_eq!(record.hora_infracao.as_deref(), Some("10:22"));
        assert_eq!(record.veiculo_prefixo.as_deref(), Some("30412"));
        assert_eq!(record.uf.as_deref(), Some("BA"));
        assert_eq!(record.linha.as_deref(), Some("0111"));
        assert_eq!(
            record.linha_descricao.as_deref(),
            Some("CIRCULAR CENTRO VIA ESTACAO")
        );
        assert_eq!(
            record.valor_multa,
            Some(Decimal::from_str("1234.56").unwrap())
        );
        assert_eq!(record.valor_multa_formatado.as_deref(), Some("R$ 1.234,56"));
        assert_eq!(record.data_vencimento.as_deref(), Some("15/04/2024"));
        assert_eq!(record.numero_dam.as_deref(), Some("11223/2024-5"));
        assert_eq!(record.artigo.as_deref(), Some("7.1.2"));
        assert_eq!(record.artigo_item.as_deref(), Some("IV"));
        assert_eq!(record.grupo.as_deref(), Some("C-2"));
        assert_eq!(
            record.descricao_infracao.as_deref(),
            Some("Deixar de cumprir os horários estabelecidos na OSO.")
        );
        assert_eq!(
            record.logradouro.as_deref(),
            Some("AV SETE DE SETEMBRO, 1250")
        );
        assert_eq!(record.bairro.as_deref(), Some("COMERCIO"));
        assert_eq!(
            record.observacao.as_deref(),
            Some("Veículo operando fora da escala autorizada\nconforme boletim de operação")
        );
        assert_eq!(
            record.data_emissao.as_deref(),
            Some("10/03/2024 08:15:42")
        );
        assert_eq!(record.matricula_agente.as_deref(), Some("55231"));

        // Everything but the company block is present on this template.
        assert_eq!(record.empresa, None);
        assert_eq!(record.campos_extraidos, 19);
        assert_eq!(record.status_extracao, StatusExtracao::Sucesso);
    }

    #[test]
    fn test_parse_is_total_on_empty_input() {
        let record = RuleBasedParser::new().parse("");
        assert_eq!(record.campos_extraidos, 0);
        assert_eq!(record.status_extracao, StatusExtracao::Sucesso);
        assert_eq!(record.numero_auto, None);
    }

    #[test]
    fn test_parse_is_total_on_unrelated_text() {
        let record = RuleBasedParser::new().parse("texto qualquer sem campos reconhecíveis");
        assert_eq!(record.campos_extraidos, 0);
        assert_eq!(record.status_extracao, StatusExtracao::Sucesso);
    }

    #[test]
    fn test_minimal_notice_counts_rules_once() {
        let text = "Nº Auto: AB1234\nGrupo\nC-2\n12.345,67\n";
        let record = RuleBasedParser::new().parse(text);

        assert_eq!(record.numero_auto.as_deref(), Some("AB1234"));
        assert_eq!(record.grupo.as_deref(), Some("C-2"));
        assert_eq!(
            record.valor_multa,
            Some(Decimal::from_str("12345.67").unwrap())
        );
        assert_eq!(record.valor_multa_formatado.as_deref(), Some("R$ 12.345,67"));
        // The fine-value rule fills two keys but counts as one field.
        assert_eq!(record.campos_extraidos, 3);
    }

    #[test]
    fn test_adding_anchor_increases_field_count() {
        let base = "Nº Auto: AB1234\n";
        let parser = RuleBasedParser::new();
        let before = parser.parse(base).campos_extraidos;

        let extended = format!("{base}Vencimento\n15/04/2024\n");
        let after = parser.parse(&extended).campos_extraidos;

        // The Vencimento anchor satisfies the due-date rule and, being the
        // first DD/MM/YYYY in the text, the plain-date rule as well.
        assert_eq!(before, 1);
        assert_eq!(after, 3);
    }

    #[test]
    fn test_numero_auto_priority_over_labeled_form() {
        // Matches both the Empresa-anchored and the labeled candidate: the
        // result equals applying the first-priority pattern only.
        let text = "Empresa\nXYZ999\nNº Auto: ABC123\n";
        let record = RuleBasedParser::new().parse(text);
        assert_eq!(record.numero_auto.as_deref(), Some("XYZ999"));
    }

    #[test]
    fn test_company_template_extraction() {
        let text = "\
Código / Nome da Empresa
TRANSNORTE COLETIVOS LTDA
SPE
4703
BA 0203
LITORANEA VIA ORLA
fim
";
        let record = RuleBasedParser::new().parse(text);
        assert_eq!(
            record.empresa.as_deref(),
            Some("TRANSNORTE COLETIVOS LTDA")
        );
        assert_eq!(record.spe.as_deref(), Some("SPE4703"));
        assert_eq!(record.linha_descricao.as_deref(), Some("LITORANEA VIA ORLA"));
        // The company line itself satisfies the first auto-number candidate.
        assert_eq!(record.numero_auto.as_deref(), Some("TRANSNORTE"));
    }
}
