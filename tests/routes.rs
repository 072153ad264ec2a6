//! In-process route tests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use material_compare::config::AppConfig;
use material_compare::HttpServer;

mod common;

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_index_lists_all_materials() {
    let app = common::sample_server().router();

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_text(response).await;
    assert!(body.contains("Pure Iron"));
    assert!(body.contains("1006 Steel"));
    assert!(body.contains("M-15 Steel"));
}

#[tokio::test]
async fn test_compare_two_materials() {
    let app = common::sample_server().router();

    let response = app
        .oneshot(common::compare_request("material1=Pure+Iron&material2=1006+Steel"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_text(response).await;
    assert!(body.contains("Pure Iron"));
    assert!(body.contains("1006 Steel"));
    assert!(body.contains("Electrical_conductivity [MS/m]"));
    assert!(body.contains("<td>10.44</td><td>5.8</td>"));
}

#[tokio::test]
async fn test_compare_swapped_order() {
    let app = HttpServer::new(AppConfig::default(), common::two_material_store()).router();

    let response = app
        .oneshot(common::compare_request("material1=1006%20Steel&material2=Pure%20Iron"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_text(response).await;
    assert!(body.contains("<td>5.8</td><td>10.44</td>"));
}

#[tokio::test]
async fn test_compare_material_with_itself() {
    let app = common::sample_server().router();

    let response = app
        .oneshot(common::compare_request("material1=M-15+Steel&material2=M-15+Steel"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_text(response).await;
    assert!(body.contains("<td>1.9</td><td>1.9</td>"));
}

#[tokio::test]
async fn test_compare_unknown_material() {
    let app = common::sample_server().router();

    let response = app
        .oneshot(common::compare_request("material1=Pure+Iron&material2=Copper"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = common::body_text(response).await;
    assert!(body.contains("Unknown material: Copper"));
}

#[tokio::test]
async fn test_compare_is_case_sensitive() {
    let app = common::sample_server().router();

    let response = app
        .oneshot(common::compare_request("material1=pure+iron&material2=1006+Steel"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_compare_missing_field() {
    let app = common::sample_server().router();

    let response = app
        .oneshot(common::compare_request("material1=Pure+Iron"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = common::body_text(response).await;
    assert!(body.contains("Invalid form submission"));
}

#[tokio::test]
async fn test_compare_requires_post() {
    let app = common::sample_server().router();

    let response = app.oneshot(get("/compare")).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_health() {
    let app = common::sample_server().router();

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&common::body_text(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["materials"], 3);
}

#[tokio::test]
async fn test_request_id_generated_and_propagated() {
    let app = common::sample_server().router();

    let response = app.clone().oneshot(get("/")).await.unwrap();
    let generated = response.headers().get("x-request-id").unwrap();
    assert!(uuid::Uuid::parse_str(generated.to_str().unwrap()).is_ok());

    let request = Request::builder()
        .uri("/")
        .header("x-request-id", "test-id-42")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers().get("x-request-id").unwrap(), "test-id-42");
}

#[tokio::test]
async fn test_security_headers() {
    let app = common::sample_server().router();
    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.headers().get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(response.headers().get("x-frame-options").unwrap(), "DENY");

    let mut config = AppConfig::default();
    config.security.enable_headers = false;
    let app = HttpServer::new(config, common::sample_store()).router();
    let response = app.oneshot(get("/")).await.unwrap();
    assert!(response.headers().get("x-frame-options").is_none());
}

#[tokio::test]
async fn test_body_limit() {
    let mut config = AppConfig::default();
    config.security.max_body_size = 16;
    let app = HttpServer::new(config, common::sample_store()).router();

    let response = app
        .oneshot(common::compare_request("material1=Pure+Iron&material2=1006+Steel"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = common::body_text(response).await;
    assert!(body.contains("Invalid form submission"));
}

#[tokio::test]
async fn test_unknown_route() {
    let app = common::sample_server().router();
    let response = app.oneshot(get("/materials")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
