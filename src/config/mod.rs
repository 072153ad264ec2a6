//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → CLI overrides (main.rs)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so an empty file is a valid config
//! - Validation separates syntactic (serde) from semantic checks
//! - No hot reload: the material data is fixed for the process lifetime

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_with_overrides, ConfigError};
pub use schema::AppConfig;
pub use schema::{DataConfig, ListenerConfig, LogFormat, ObservabilityConfig, SecurityConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
