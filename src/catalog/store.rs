//! In-memory material store.
//!
//! # Responsibilities
//! - Parse the materials data source into an ordered list
//! - Enforce unique names and valid conductivity values
//! - Resolve materials by exact name

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::material::Material;

/// Read-only, ordered collection of materials.
///
/// Order matches the data source and is used for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialStore {
    materials: Vec<Material>,
}

impl MaterialStore {
    /// Build a store from already constructed materials.
    pub fn from_materials(materials: Vec<Material>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(materials.len());
        for material in &materials {
            let value = material.electrical_conductivity();
            if !value.is_finite() || value < 0.0 {
                return Err(CatalogError::InvalidConductivity {
                    name: material.name().to_string(),
                    value,
                });
            }
            if !seen.insert(material.name()) {
                return Err(CatalogError::DuplicateName(material.name().to_string()));
            }
        }

        if materials.is_empty() {
            tracing::warn!("Material store is empty");
        }

        Ok(Self { materials })
    }

    /// Parse a JSON array of material records.
    pub fn from_json_str(source: &str) -> CatalogResult<Self> {
        let materials: Vec<Material> = serde_json::from_str(source)?;
        Self::from_materials(materials)
    }

    /// Parse a JSON array of material records from a reader.
    pub fn from_reader<R: Read>(reader: R) -> CatalogResult<Self> {
        let materials: Vec<Material> = serde_json::from_reader(reader)?;
        Self::from_materials(materials)
    }

    /// Load the store from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_reader(BufReader::new(file))?;

        tracing::info!(
            path = %path.display(),
            count = store.len(),
            "Loaded materials"
        );
        Ok(store)
    }

    /// Find the material with exactly this name (case-sensitive).
    pub fn find_by_name(&self, name: &str) -> CatalogResult<&Material> {
        self.materials
            .iter()
            .find(|m| m.name() == name)
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    /// All materials in source order.
    pub fn all(&self) -> &[Material] {
        &self.materials
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
