//! Request handlers.

use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    Form, Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{Material, MaterialStore};
use crate::http::response::AppError;
use crate::http::server::AppState;
use crate::http::views;
use crate::observability::metrics;

/// Fields submitted by the comparison form.
#[derive(Debug, Clone, Deserialize)]
pub struct CompareForm {
    pub material1: String,
    pub material2: String,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub materials: usize,
}

/// `GET /`: all materials in store order.
pub async fn list_materials(State(state): State<AppState>) -> Html<String> {
    Html(views::index_page(state.store.all()))
}

/// `POST /compare`: compare the two materials named in the form.
pub async fn compare_materials(
    State(state): State<AppState>,
    form: Result<Form<CompareForm>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let Form(form) = form.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected compare form");
        AppError::InvalidForm(rejection.body_text())
    })?;

    tracing::debug!(
        material1 = %form.material1,
        material2 = %form.material2,
        "Comparing materials"
    );

    let material1 = resolve(&state.store, &form.material1)?;
    let material2 = resolve(&state.store, &form.material2)?;

    let result = state.comparator.compare(material1, material2);
    metrics::record_comparison();

    Ok(Html(views::comparison_page(
        material1.name(),
        material2.name(),
        &result,
    )))
}

fn resolve<'a>(store: &'a MaterialStore, name: &str) -> Result<&'a Material, AppError> {
    store.find_by_name(name).map_err(|_| {
        tracing::warn!(material = %name, "Unknown material requested");
        metrics::record_lookup_failure();
        AppError::UnknownMaterial(name.to_string())
    })
}

/// `GET /health`: liveness plus store size.
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        materials: state.store.len(),
    })
}
