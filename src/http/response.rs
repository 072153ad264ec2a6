//! Error responses.
//!
//! # Responsibilities
//! - Map handler failures to HTTP status codes
//! - Render failures as HTML pages naming the problem
//!
//! # Design Decisions
//! - Unknown material names are a client error (400), not a 500
//! - Store-level data errors never reach here: they abort startup

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::http::views;

/// Errors surfaced by request handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// A submitted material name is not in the store.
    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    /// The submitted form is missing fields or could not be decoded.
    #[error("Invalid form submission: {0}")]
    InvalidForm(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnknownMaterial(_) | AppError::InvalidForm(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Html(views::error_page(status, &self.to_string()))).into_response()
    }
}
