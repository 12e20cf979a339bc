use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::{resolve_institution, Catalog, InstitutionRecord, Selection};
use crate::ErrorResponse;

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct SelectQuery {
    /// Text key to hash, usually a person's name.
    #[serde(default)]
    pub key: String,
    /// Optional institution name that wins over the hash when it matches.
    pub preferred: Option<String>,
}

#[utoipa::path(
    context_path = "/api",
    tag = "Institutions",
    get,
    path = "/institutions",
    responses(
        (status = 200, description = "Catalog in selection order", body = [InstitutionRecord])
    )
)]
pub async fn list_institutions() -> impl Responder {
    HttpResponse::Ok().json(Catalog::embedded().all())
}

#[utoipa::path(
    context_path = "/api",
    tag = "Institutions",
    get,
    path = "/institutions/select",
    params(SelectQuery),
    responses(
        (status = 200, description = "Institution and department chosen for the key", body = Selection)
    )
)]
pub async fn select_institution(query: web::Query<SelectQuery>) -> impl Responder {
    let selection = resolve_institution(Catalog::embedded(), query.preferred.as_deref(), &query.key);
    HttpResponse::Ok().json(selection)
}

#[utoipa::path(
    context_path = "/api",
    tag = "Institutions",
    get,
    path = "/institutions/{name}",
    responses(
        (status = 200, description = "Institution found", body = InstitutionRecord),
        (status = 404, description = "No institution with that name", body = ErrorResponse)
    ),
    params(
        ("name" = String, Path, description = "Full or short institution name")
    )
)]
pub async fn get_institution(path: web::Path<String>) -> impl Responder {
    match Catalog::embedded().by_name(&path) {
        Ok(institution) => HttpResponse::Ok().json(institution),
        Err(e) => HttpResponse::NotFound().json(ErrorResponse::not_found(&e.to_string())),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/institutions").route(web::get().to(list_institutions)))
        .service(web::resource("/institutions/select").route(web::get().to(select_institution)))
        .service(web::resource("/institutions/{name}").route(web::get().to(get_institution)));
}
