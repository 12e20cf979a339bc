use actix_web::{web, HttpResponse, Responder};

use super::models::RenderRequest;
use super::{render, DisplayTree, DocumentError, DocumentType};
use crate::{metrics, ErrorResponse};

#[utoipa::path(
    context_path = "/api",
    tag = "Documents",
    get,
    path = "/documents/types",
    responses(
        (status = 200, description = "Supported document type tags", body = [String])
    )
)]
pub async fn list_document_types() -> impl Responder {
    let tags: Vec<&'static str> = DocumentType::ALL.iter().map(|t| t.tag()).collect();
    HttpResponse::Ok().json(tags)
}

#[utoipa::path(
    context_path = "/api",
    tag = "Documents",
    post,
    path = "/documents/{doc_type}/render",
    request_body = RenderRequest,
    responses(
        (status = 200, description = "Resolved display tree", body = DisplayTree),
        (status = 400, description = "Unsupported document type or invalid bundle", body = ErrorResponse)
    ),
    params(
        ("doc_type" = String, Path, description = "Document type tag, e.g. payslip or idCard")
    )
)]
pub async fn render_document(
    path: web::Path<String>,
    body: web::Json<RenderRequest>,
) -> impl Responder {
    let tag = path.into_inner();
    let request = body.into_inner();
    log::info!("Render request for '{}'", tag);

    let doc_type = match tag.parse::<DocumentType>() {
        Ok(doc_type) => doc_type,
        Err(e) => {
            metrics::record_render("unsupported", "rejected");
            return HttpResponse::BadRequest()
                .json(ErrorResponse::new("UnsupportedDocumentType", &e.to_string()));
        }
    };

    match render(doc_type, &request.bundle, &request.options) {
        Ok(tree) => {
            metrics::record_render(doc_type.tag(), "ok");
            HttpResponse::Ok().json(tree)
        }
        Err(e) => {
            metrics::record_render(doc_type.tag(), "invalid");
            HttpResponse::BadRequest().json(ErrorResponse::new(error_kind(&e), &e.to_string()))
        }
    }
}

fn error_kind(error: &DocumentError) -> &'static str {
    match error {
        DocumentError::UnsupportedDocumentType(_) => "UnsupportedDocumentType",
        DocumentError::InvalidBundle(_) => "InvalidBundle",
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/documents/types").route(web::get().to(list_document_types)))
        .service(
            web::resource("/documents/{doc_type}/render").route(web::post().to(render_document)),
        );
}
