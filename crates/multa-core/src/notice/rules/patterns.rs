//! Regex pattern table for infraction-notice extraction.
//!
//! Labeled anchors are `(?i)`; the identifier, date, value and timestamp
//! shapes are case-sensitive by construction. Anchors and captures mirror the
//! one template family these rules were authored against.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Auto number candidates, in priority order
    pub static ref AUTO_AFTER_EMPRESA: Regex = Regex::new(
        r"(?i)Empresa\s*[\n\r]\s*([A-Z0-9]+)"
    ).unwrap();

    pub static ref AUTO_LABELED: Regex = Regex::new(
        r"(?i)Nº Auto:\s*([A-Z0-9]+)"
    ).unwrap();

    pub static ref AUTO_HEADER: Regex = Regex::new(
        r"(?i)Identificação do Auto de Infração\s*[\n\r]\s*([A-Z0-9]+)"
    ).unwrap();

    // Company block: name sits between the header line and the SPE marker
    pub static ref EMPRESA: Regex = Regex::new(
        r"(?i)Código\s*/\s*Nome\s+da\s+Empresa\s*[\n\r]\s*(.+?)[\n\r]\s*SPE"
    ).unwrap();

    pub static ref SPE_CODE: Regex = Regex::new(
        r"SPE\s*[\n\r]?\s*(\d+)"
    ).unwrap();

    // Dates and times, kept verbatim
    pub static ref DATA_DMY: Regex = Regex::new(
        r"(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    pub static ref HORA_BEFORE_SPE: Regex = Regex::new(
        r"(\d{2}:\d{2})[\n\r]\s*SPE"
    ).unwrap();

    pub static ref VENCIMENTO: Regex = Regex::new(
        r"(?i)Vencimento[\n\r]\s*(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    pub static ref EMISSAO: Regex = Regex::new(
        r"(\d{2}/\d{2}/\d{4}\s+\d{2}:\d{2}:\d{2})"
    ).unwrap();

    // Vehicle, state, line
    pub static ref VEICULO: Regex = Regex::new(
        r"(?i)Veículo[\n\r]\s*(\d+)"
    ).unwrap();

    pub static ref UF: Regex = Regex::new(
        r"UF[\n\r]\s*([A-Z]{2})"
    ).unwrap();

    pub static ref LINHA: Regex = Regex::new(
        r"(?i)Linha[\n\r]\s*(\d+)"
    ).unwrap();

    // Line description candidates, in priority order
    pub static ref LINHA_DESC_AFTER_LINHA: Regex = Regex::new(
        r"(?i)Linha[\n\r]\s*\d+[\n\r]\s*(.+?)[\n\r]"
    ).unwrap();

    pub static ref LINHA_DESC_AFTER_BA: Regex = Regex::new(
        r"(?i)BA\s+\d+[\n\r]\s*(.+?)[\n\r]"
    ).unwrap();

    // Fine value, Brazilian grouping (1.234,56)
    pub static ref VALOR: Regex = Regex::new(
        r"(\d{1,}\.\d{3},\d{2})"
    ).unwrap();

    // Payment slip (DAM)
    pub static ref DAM: Regex = Regex::new(
        r"(\d{5}/\d{4}-\d)"
    ).unwrap();

    // Article reference: integer, dotted code, roman-numeral item
    pub static ref ARTIGO: Regex = Regex::new(
        r"(\d+)\s+([\d.]+)\s+([IVX]+)"
    ).unwrap();

    pub static ref GRUPO: Regex = Regex::new(
        r"(?i)Grupo[\n\r]\s*([A-Z](?:-\d+)?)"
    ).unwrap();

    pub static ref DESCRICAO_OSO: Regex = Regex::new(
        r"(?i)Deixar de cumprir os horários estabelecidos na OSO"
    ).unwrap();

    // Address block
    pub static ref LOGRADOURO: Regex = Regex::new(
        r"(?i)Logradouro[\n\r]\s*(.+)"
    ).unwrap();

    pub static ref BAIRRO: Regex = Regex::new(
        r"(?i)Bairro[\n\r]\s*(.+)"
    ).unwrap();

    // Observation block: runs until a year-led line or the salutation,
    // whichever comes first
    pub static ref OBSERVACAO: Regex = Regex::new(
        r"(?is)Observação:\s*[\n\r](.+?)(?:[\n\r]\d{4}|ILUSTRÍSSIMO)"
    ).unwrap();

    pub static ref MATRICULA_AGENTE: Regex = Regex::new(
        r"(?i)Matrícula\s+Agente[\n\r]\s*(\d+)"
    ).unwrap();
}
