//! Handler tests against the `/api` scope.

mod common;

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};

use specimen_docs_server::{configure_api, ErrorResponse};

use common::sample_bundle;

macro_rules! api_app {
    () => {
        test::init_service(App::new().service(web::scope("/api").configure(configure_api))).await
    };
}

#[actix_web::test]
async fn test_list_institutions() {
    let app = api_app!();
    let req = test::TestRequest::get().uri("/api/institutions").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 13);
    assert_eq!(entries[0]["name"], "Northgate State University");
    assert!(entries[0]["shortName"].is_string());
}

#[actix_web::test]
async fn test_select_by_key_and_preferred_name() {
    let app = api_app!();

    let req = test::TestRequest::get()
        .uri("/api/institutions/select?key=Alice")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["institution"]["name"], "Dunmore College");
    assert_eq!(body["department"], "Sociology");
    assert_eq!(body["hash"], 478);
    assert_eq!(body["matchedBy"], "hash");

    let req = test::TestRequest::get()
        .uri("/api/institutions/select?key=Alice&preferred=MIT")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["institution"]["shortName"], "MIT");
    assert_eq!(body["matchedBy"], "preferredName");
}

#[actix_web::test]
async fn test_get_institution_not_found() {
    let app = api_app!();
    let req = test::TestRequest::get()
        .uri("/api/institutions/Nowhere%20University")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "NotFound");
}

#[actix_web::test]
async fn test_list_document_types() {
    let app = api_app!();
    let req = test::TestRequest::get().uri("/api/documents/types").to_request();
    let body: Vec<String> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.len(), 7);
    assert!(body.contains(&"idCard".to_string()));
}

#[actix_web::test]
async fn test_render_payslip() {
    let app = api_app!();
    let payload = json!({
        "bundle": sample_bundle(),
        "options": { "issuedOn": "2026-10-16" }
    });
    let req = test::TestRequest::post()
        .uri("/api/documents/payslip/render")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["documentType"], "payslip");
    assert_eq!(body["watermark"], "SPECIMEN - NOT A VALID DOCUMENT");
}

#[actix_web::test]
async fn test_render_unknown_type_is_bad_request() {
    let app = api_app!();
    let payload = json!({ "bundle": sample_bundle() });
    let req = test::TestRequest::post()
        .uri("/api/documents/bogus/render")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "UnsupportedDocumentType");
}

#[actix_web::test]
async fn test_render_invalid_bundle_is_bad_request() {
    let app = api_app!();
    let mut bundle = sample_bundle();
    bundle.company.name = String::new();
    let payload = json!({ "bundle": bundle });
    let req = test::TestRequest::post()
        .uri("/api/documents/w2/render")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "InvalidBundle");
    assert!(body.message.contains("company.name"));
}
