//! End-to-end extraction over real PDF byte streams.
//!
//! Fixture documents are built in-memory with lopdf; assertions stick to
//! fields whose patterns match anywhere in the text, since content-stream
//! linearization does not guarantee the template's exact line layout.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use rust_decimal::Decimal;
use std::str::FromStr;

use multa_core::{extract_from_bytes, MultaError, PdfError, StatusExtracao};

/// Build a one-page PDF showing the given text lines.
fn notice_pdf(lines: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 12.into()]),
        Operation::new("TL", vec![14.into()]),
        Operation::new("Td", vec![50.into(), 750.into()]),
    ];
    for line in lines {
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        operations.push(Operation::new("T*", vec![]));
    }
    operations.push(Operation::new("ET", vec![]));

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out).unwrap();
    out
}

#[test]
fn extracts_position_free_fields_from_pdf() {
    let data = notice_pdf(&[
        "Auto de Infracao 05/03/2024",
        "Valor 1.234,56",
        "DAM 11223/2024-5",
        "Emitido em 10/03/2024 08:15:42",
    ]);

    let record = extract_from_bytes(&data).unwrap();

    assert_eq!(record.status_extracao, StatusExtracao::Sucesso);
    assert_eq!(record.data_infracao.as_deref(), Some("05/03/2024"));
    assert_eq!(
        record.valor_multa,
        Some(Decimal::from_str("1234.56").unwrap())
    );
    assert_eq!(record.valor_multa_formatado.as_deref(), Some("R$ 1.234,56"));
    assert_eq!(record.numero_dam.as_deref(), Some("11223/2024-5"));
    assert_eq!(record.data_emissao.as_deref(), Some("10/03/2024 08:15:42"));
    assert!(record.campos_extraidos >= 4);
}

#[test]
fn sparse_document_is_still_a_success() {
    let data = notice_pdf(&["documento sem campos conhecidos"]);

    let record = extract_from_bytes(&data).unwrap();
    assert_eq!(record.campos_extraidos, 0);
    assert_eq!(record.status_extracao, StatusExtracao::Sucesso);
}

#[test]
fn invalid_bytes_fail_fatally() {
    let result = extract_from_bytes(b"not a pdf at all");
    assert!(matches!(
        result,
        Err(MultaError::Pdf(PdfError::Parse(_)))
    ));
}

#[test]
fn zero_page_document_fails_fatally() {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => Vec::<Object>::new(),
        "Count" => 0,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    let mut data = Vec::new();
    doc.save_to(&mut data).unwrap();

    let result = extract_from_bytes(&data);
    assert!(matches!(
        result,
        Err(MultaError::Pdf(PdfError::NoPages))
    ));
}
