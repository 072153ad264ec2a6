//! Material catalog subsystem.
//!
//! # Data Flow
//! ```text
//! materials.json
//!     → material.rs (one Material per record)
//!     → store.rs (order preserved, names checked for uniqueness)
//!     → MaterialStore (immutable, shared via Arc to handlers)
//! ```
//!
//! # Design Decisions
//! - Loaded once at startup; there is no reload path
//! - Duplicate names and negative conductivities are rejected at load
//! - Lookup is exact and case-sensitive

pub mod error;
pub mod material;
pub mod store;

pub use error::{CatalogError, CatalogResult};
pub use material::Material;
pub use store::MaterialStore;
