//! Startup orchestration.
//!
//! # Responsibilities
//! - Load the material store named by the config
//! - Build the HTTP server around it
//!
//! # Design Decisions
//! - Fail fast: any load error is fatal
//! - Metrics exporter is installed by the binary, not here, so tests can
//!   bootstrap without binding extra ports

use crate::catalog::{CatalogResult, MaterialStore};
use crate::config::AppConfig;
use crate::http::HttpServer;
use crate::observability::metrics;

/// Load materials and build a ready-to-run server.
pub fn bootstrap(config: AppConfig) -> CatalogResult<HttpServer> {
    let store = MaterialStore::load(&config.data.materials_path).map_err(|e| {
        tracing::error!(
            path = %config.data.materials_path.display(),
            data_format = e.is_data_format(),
            error = %e,
            "Failed to load materials"
        );
        e
    })?;

    metrics::record_materials_loaded(store.len());
    Ok(HttpServer::new(config, store))
}
