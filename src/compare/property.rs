//! Comparable material properties.

use crate::catalog::Material;

/// A single property that can be read from a material for comparison.
pub trait Property: Send + Sync + std::fmt::Debug {
    /// Label used as the key in a comparison result, including the unit.
    fn label(&self) -> &'static str;

    /// Value of this property for the given material.
    fn value(&self, material: &Material) -> f64;
}

/// Electrical conductivity in MS/m.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElectricalConductivity;

impl ElectricalConductivity {
    pub const LABEL: &'static str = "Electrical_conductivity [MS/m]";
}

impl Property for ElectricalConductivity {
    fn label(&self) -> &'static str {
        Self::LABEL
    }

    fn value(&self, material: &Material) -> f64 {
        material.electrical_conductivity()
    }
}
