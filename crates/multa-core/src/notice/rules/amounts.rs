//! Fine value extraction and Brazilian currency normalization.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::VALOR;

/// The fine value in both consumable forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FineAmount {
    /// Numeric value.
    pub valor: Decimal,
    /// The value exactly as printed on the notice, prefixed with `R$`.
    pub formatado: String,
}

/// Extract the fine value: first Brazilian-grouped amount (`1.234,56`) in the
/// text.
pub fn extract_valor_multa(text: &str) -> Option<FineAmount> {
    let caps = VALOR.captures(text)?;
    let printed = &caps[1];
    let valor = parse_brazilian_amount(printed)?;

    Some(FineAmount {
        valor,
        formatado: format!("R$ {}", printed),
    })
}

/// Parse a Brazilian-formatted amount (`12.345,67`): the dot is a grouping
/// separator, the comma is the decimal mark.
pub fn parse_brazilian_amount(s: &str) -> Option<Decimal> {
    let normalized = s.replace('.', "").replace(',', ".");
    Decimal::from_str(&normalized).ok()
}
