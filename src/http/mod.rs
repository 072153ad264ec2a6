//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID)
//!     → handlers.rs (store lookup, comparison)
//!     → views.rs (HTML rendering)
//!     → response.rs (error → status + error page)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;
pub mod views;

pub use request::X_REQUEST_ID;
pub use response::AppError;
pub use server::{AppState, HttpServer};
