//! Catalog error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or querying the material catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The data file could not be read.
    #[error("failed to read materials file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data source is not well-formed or a required field is missing.
    #[error("malformed materials data: {0}")]
    DataFormat(#[from] serde_json::Error),

    /// Two records share the same name.
    #[error("duplicate material name: {0}")]
    DuplicateName(String),

    /// Conductivity is negative or not a finite number.
    #[error("invalid electrical conductivity {value} for material {name}")]
    InvalidConductivity { name: String, value: f64 },

    /// No material with the requested name exists.
    #[error("material not found: {0}")]
    NotFound(String),
}

impl CatalogError {
    /// True for failures caused by the contents of the data source.
    pub fn is_data_format(&self) -> bool {
        matches!(
            self,
            CatalogError::DataFormat(_)
                | CatalogError::DuplicateName(_)
                | CatalogError::InvalidConductivity { .. }
        )
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
