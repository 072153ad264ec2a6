//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, body limit, headers)
//! - Bind server to listener and serve until shutdown

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Request},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{set_header::SetResponseHeaderLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::catalog::MaterialStore;
use crate::compare::Comparator;
use crate::config::AppConfig;
use crate::http::handlers::{compare_materials, health, list_materials};
use crate::http::middleware::track_metrics;
use crate::http::request::{self, propagate_request_id_layer, set_request_id_layer};
use crate::lifecycle::shutdown;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MaterialStore>,
    pub comparator: Arc<Comparator>,
}

/// HTTP server for the material comparison app.
pub struct HttpServer {
    router: Router,
    store: Arc<MaterialStore>,
}

impl HttpServer {
    /// Create a server comparing electrical conductivity.
    pub fn new(config: AppConfig, store: MaterialStore) -> Self {
        Self::with_comparator(config, store, Comparator::default())
    }

    /// Create a server with a custom set of compared properties.
    pub fn with_comparator(config: AppConfig, store: MaterialStore, comparator: Comparator) -> Self {
        tracing::debug!(
            properties = ?comparator.labels().collect::<Vec<_>>(),
            "Comparator configured"
        );

        let store = Arc::new(store);
        let state = AppState {
            store: store.clone(),
            comparator: Arc::new(comparator),
        };

        let router = Self::build_router(&config, state);
        Self { router, store }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/", get(list_materials))
            .route("/compare", post(compare_materials))
            .route("/health", get(health))
            .route_layer(middleware::from_fn(track_metrics))
            .with_state(state)
            .layer(DefaultBodyLimit::max(config.security.max_body_size));

        if config.security.enable_headers {
            router = router
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("DENY"),
                ));
        }

        router.layer(
            ServiceBuilder::new()
                .layer(set_request_id_layer())
                .layer(propagate_request_id_layer())
                .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                    tracing::info_span!(
                        "http_request",
                        method = %req.method(),
                        uri = %req.uri(),
                        request_id = %request::request_id(req).unwrap_or("unknown"),
                    )
                }))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.timeouts.request_secs,
                ))),
        )
    }

    /// Router with all middleware, for serving or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn store(&self) -> &MaterialStore {
        &self.store
    }

    /// Serve on `listener` until a shutdown signal arrives, then drain.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            materials = self.store.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait_for(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
