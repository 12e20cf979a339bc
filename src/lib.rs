use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpResponse, HttpServer, Responder};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod catalog;
pub mod config;
pub mod documents;
pub mod metrics;

use crate::config::ServerConfig;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NotFound", message)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::catalog::handlers::list_institutions,
        crate::catalog::handlers::select_institution,
        crate::catalog::handlers::get_institution,
        crate::documents::handlers::list_document_types,
        crate::documents::handlers::render_document
    ),
    components(
        schemas(
            catalog::InstitutionRecord,
            catalog::Selection,
            catalog::MatchedBy,
            documents::DocumentType,
            documents::DisplayTree,
            documents::Section,
            documents::Node,
            documents::display::Table,
            documents::display::StyleDescriptor,
            documents::models::DocumentBundle,
            documents::models::Company,
            documents::models::Employee,
            documents::models::BankDetails,
            documents::models::PayMeta,
            documents::models::EarningItem,
            documents::models::DeductionItem,
            documents::models::PayslipMode,
            documents::models::RenderOptions,
            documents::models::RenderRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Institutions", description = "Fictional institution catalog and deterministic selection."),
        (name = "Documents", description = "Specimen document rendering.")
    )
)]
pub struct ApiDoc;

/// Routes under `/api`. Shared by the server and handler tests.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.configure(catalog::handlers::config)
        .configure(documents::handlers::config);
}

async fn document_metrics() -> impl Responder {
    match metrics::export() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/plain; version=0.0.4")
            .body(body),
        Err(e) => {
            log::error!("Failed to encode render metrics: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&e.to_string()))
        }
    }
}

pub async fn run() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    // Build the catalog eagerly so a bad embedded table fails at startup.
    let institutions = catalog::Catalog::embedded().len();
    log::info!("Loaded {} catalog institutions", institutions);

    let prometheus = PrometheusMetricsBuilder::new("specimen_docs_server")
        .endpoint("/metrics")
        .build()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, format!("{:?}", e)))?;

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let allowed_origins = config.allowed_origins.clone();
    HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus.clone())
            .wrap(cors)
            .service(web::scope("/api").configure(configure_api))
            .service(web::resource("/metrics/documents").route(web::get().to(document_metrics)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
