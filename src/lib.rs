//! Material comparison web service.
//!
//! Loads a fixed list of materials from JSON at startup and serves two
//! pages: the material list, and a side-by-side comparison of two
//! materials chosen through a form.

pub mod catalog;
pub mod compare;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use catalog::{CatalogError, Material, MaterialStore};
pub use compare::{Comparator, ComparisonResult};
pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
