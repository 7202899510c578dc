//! Rule-based field extractors for Brazilian transit infraction notices.
//!
//! Each submodule covers one family of fields and exposes plain
//! `extract_*(text) -> Option<_>` functions over the full first-page text.
//! Rules are independent of each other; fields with alternative anchors apply
//! their candidates in fixed priority order, first match wins.

pub mod amounts;
pub mod dates;
pub mod description;
pub mod identifiers;
pub mod location;
pub mod patterns;

pub use amounts::{extract_valor_multa, parse_brazilian_amount, FineAmount};
pub use dates::{
    extract_data_emissao, extract_data_infracao, extract_data_vencimento, extract_hora_infracao,
};
pub use description::{extract_descricao_infracao, extract_observacao};
pub use identifiers::{
    extract_artigo, extract_grupo, extract_linha, extract_matricula_agente, extract_numero_auto,
    extract_numero_dam, extract_spe, extract_uf, extract_veiculo_prefixo,
};
pub use location::{
    extract_bairro, extract_empresa, extract_linha_descricao, extract_logradouro,
};
