//! Metrics collection and exposition.
//!
//! # Metrics
//! - `http_requests_total` (counter): requests by method, path, status
//! - `http_request_duration_seconds` (histogram): latency distribution
//! - `materials_loaded` (gauge): size of the material store
//! - `material_comparisons_total` (counter): successful comparisons
//! - `material_lookup_failures_total` (counter): unknown material names

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one completed HTTP request.
pub fn record_request(method: &str, path: &str, status: u16, start: Instant) {
    let status = status.to_string();
    ::metrics::counter!(
        "http_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.clone()
    )
    .increment(1);
    ::metrics::histogram!(
        "http_request_duration_seconds",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());
}

pub fn record_materials_loaded(count: usize) {
    ::metrics::gauge!("materials_loaded").set(count as f64);
}

pub fn record_comparison() {
    ::metrics::counter!("material_comparisons_total").increment(1);
}

pub fn record_lookup_failure() {
    ::metrics::counter!("material_lookup_failures_total").increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_metrics_reports_taken_port() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        assert!(init_metrics(addr).is_err());
    }
}
