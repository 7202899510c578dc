//! Extraction routes - single document and batch.

use axum::extract::{FromRequest, Multipart, Request};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use tracing::warn;

use multa_core::{NoticeRecord, StatusExtracao};

const MSG_ENVIE_ARQUIVO: &str = "Envie um arquivo PDF via 'file' ou base64 via 'pdf_base64'";

pub fn routes() -> Router {
    Router::new()
        .route("/extrair-multa", post(extrair_multa))
        .route("/extrair-lote", post(extrair_lote))
}

/// JSON body variant of the single-document endpoint.
#[derive(Debug, Deserialize)]
struct Base64Payload {
    pdf_base64: String,
}

/// One entry of the batch response.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum LoteEntry {
    Sucesso {
        #[serde(flatten)]
        record: NoticeRecord,
        nome_arquivo: String,
    },
    Falha {
        nome_arquivo: String,
        erro: String,
        status_extracao: StatusExtracao,
    },
}

/// POST /extrair-multa - extract one notice, uploaded either as a multipart
/// `file` field or as a base64 JSON payload.
async fn extrair_multa(req: Request) -> Response {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();

    if content_type.starts_with("multipart/form-data") {
        match Multipart::from_request(req, &()).await {
            Ok(multipart) => extrair_multa_upload(multipart).await,
            Err(_) => erro(StatusCode::BAD_REQUEST, MSG_ENVIE_ARQUIVO),
        }
    } else if content_type.starts_with("application/json") {
        match Json::<Base64Payload>::from_request(req, &()).await {
            Ok(Json(payload)) => extrair_multa_base64(&payload),
            Err(_) => erro(StatusCode::BAD_REQUEST, MSG_ENVIE_ARQUIVO),
        }
    } else {
        erro(StatusCode::BAD_REQUEST, MSG_ENVIE_ARQUIVO)
    }
}

async fn extrair_multa_upload(mut multipart: Multipart) -> Response {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("").to_string();
        if filename.is_empty() {
            return erro(StatusCode::BAD_REQUEST, "Nenhum arquivo selecionado");
        }
        if !filename.ends_with(".pdf") {
            return erro(StatusCode::BAD_REQUEST, "Arquivo deve ser PDF");
        }

        return match field.bytes().await {
            Ok(bytes) => run_extraction(&bytes),
            Err(e) => erro(
                StatusCode::BAD_REQUEST,
                format!("Falha ao ler o arquivo enviado: {}", e),
            ),
        };
    }

    erro(StatusCode::BAD_REQUEST, MSG_ENVIE_ARQUIVO)
}

fn extrair_multa_base64(payload: &Base64Payload) -> Response {
    match BASE64.decode(payload.pdf_base64.as_bytes()) {
        Ok(bytes) => run_extraction(&bytes),
        Err(_) => erro(StatusCode::BAD_REQUEST, "Campo 'pdf_base64' não é base64 válido"),
    }
}

/// POST /extrair-lote - run the extractor over every `.pdf`-named multipart
/// field, sequentially and independently.
///
/// Entries whose filename does not end in `.pdf` are skipped without being
/// reported: `total_processado` counts processed documents only, and callers
/// depend on that count semantics. A document that fails extraction yields a
/// failure entry but never aborts the rest of the batch.
async fn extrair_lote(req: Request) -> Response {
    let mut multipart = match Multipart::from_request(req, &()).await {
        Ok(multipart) => multipart,
        Err(_) => return erro(StatusCode::BAD_REQUEST, "Nenhum arquivo enviado"),
    };

    let mut resultados: Vec<LoteEntry> = Vec::new();
    let mut any_field = false;

    while let Ok(Some(field)) = multipart.next_field().await {
        any_field = true;

        let nome_arquivo = field.file_name().unwrap_or("").to_string();
        if !nome_arquivo.ends_with(".pdf") {
            continue;
        }

        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("failed to read batch entry {}: {}", nome_arquivo, e);
                resultados.push(LoteEntry::Falha {
                    nome_arquivo,
                    erro: e.to_string(),
                    status_extracao: StatusExtracao::Falha,
                });
                continue;
            }
        };

        match multa_core::extract_from_bytes(&bytes) {
            Ok(record) => resultados.push(LoteEntry::Sucesso {
                record,
                nome_arquivo,
            }),
            Err(e) => {
                warn!("extraction failed for {}: {}", nome_arquivo, e);
                resultados.push(LoteEntry::Falha {
                    nome_arquivo,
                    erro: e.to_string(),
                    status_extracao: StatusExtracao::Falha,
                });
            }
        }
    }

    if !any_field {
        return erro(StatusCode::BAD_REQUEST, "Nenhum arquivo enviado");
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "total_processado": resultados.len(),
            "resultados": resultados,
        })),
    )
        .into_response()
}

fn run_extraction(data: &[u8]) -> Response {
    match multa_core::extract_from_bytes(data) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => {
            warn!("extraction failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "erro": e.to_string(),
                    "status_extracao": StatusExtracao::Falha,
                })),
            )
                .into_response()
        }
    }
}

fn erro(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(serde_json::json!({ "erro": message.into() })),
    )
        .into_response()
}
