//! Material records.

use serde::{Deserialize, Serialize};

/// A named substance and its electrical conductivity.
///
/// Fields are private so a record cannot change after it is loaded.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Material {
    name: String,

    /// Electrical conductivity in MS/m.
    electrical_conductivity: f64,
}

impl Material {
    /// Create a new material.
    pub fn new(name: impl Into<String>, electrical_conductivity: f64) -> Self {
        Self {
            name: name.into(),
            electrical_conductivity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Electrical conductivity in MS/m.
    pub fn electrical_conductivity(&self) -> f64 {
        self.electrical_conductivity
    }
}
