//! Shared utilities for integration tests.

use std::net::SocketAddr;

use axum::body::Body;
use axum::http::{header, Request, Response};
use tokio::net::TcpListener;

use material_compare::config::AppConfig;
use material_compare::lifecycle::Shutdown;
use material_compare::{HttpServer, Material, MaterialStore};

pub const SAMPLE_MATERIALS: &str = r#"[
    {"name": "Pure Iron", "electrical_conductivity": 10.44},
    {"name": "1006 Steel", "electrical_conductivity": 5.8},
    {"name": "M-15 Steel", "electrical_conductivity": 1.9}
]"#;

/// Store with the three sample materials.
pub fn sample_store() -> MaterialStore {
    MaterialStore::from_json_str(SAMPLE_MATERIALS).unwrap()
}

/// Store with two materials, as in the basic comparison scenario.
#[allow(dead_code)]
pub fn two_material_store() -> MaterialStore {
    MaterialStore::from_materials(vec![
        Material::new("Pure Iron", 10.44),
        Material::new("1006 Steel", 5.8),
    ])
    .unwrap()
}

/// Server over the sample store with default settings.
#[allow(dead_code)]
pub fn sample_server() -> HttpServer {
    HttpServer::new(AppConfig::default(), sample_store())
}

/// Build a form-encoded POST to `/compare`.
#[allow(dead_code)]
pub fn compare_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/compare")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read a response body as UTF-8 text.
#[allow(dead_code)]
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Start `server` on an ephemeral port. Returns its address.
#[allow(dead_code)]
pub async fn spawn_server(server: HttpServer, shutdown: &Shutdown) -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let rx = shutdown.subscribe();

    let handle = tokio::spawn(async move {
        server.run(listener, rx).await.unwrap();
    });
    (addr, handle)
}
