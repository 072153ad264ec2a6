//! Pairwise material comparison.

use crate::catalog::Material;
use crate::compare::property::{ElectricalConductivity, Property};

/// One entry of a comparison: a property label and the value for each material.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyComparison {
    pub label: &'static str,
    pub first: f64,
    pub second: f64,
}

impl PropertyComparison {
    /// Values as `(first, second)`.
    pub fn pair(&self) -> (f64, f64) {
        (self.first, self.second)
    }
}

/// Mapping from property label to `(first, second)` values.
///
/// Entries keep the order in which the comparator's properties were registered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonResult {
    entries: Vec<PropertyComparison>,
}

impl ComparisonResult {
    /// Pair recorded for the given label.
    pub fn get(&self, label: &str) -> Option<(f64, f64)> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(PropertyComparison::pair)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyComparison> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compares two materials across a fixed list of properties.
#[derive(Debug)]
pub struct Comparator {
    properties: Vec<Box<dyn Property>>,
}

impl Comparator {
    /// Create a comparator over the given properties.
    pub fn new(properties: Vec<Box<dyn Property>>) -> Self {
        Self { properties }
    }

    /// Register an additional property. Its entry is appended after existing ones.
    pub fn with_property(mut self, property: impl Property + 'static) -> Self {
        self.properties.push(Box::new(property));
        self
    }

    /// Labels of all registered properties, in order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.properties.iter().map(|p| p.label())
    }

    /// Compare `first` against `second`.
    ///
    /// Order matters: each pair is `(first's value, second's value)`.
    /// Comparing a material with itself is allowed.
    pub fn compare(&self, first: &Material, second: &Material) -> ComparisonResult {
        let entries = self
            .properties
            .iter()
            .map(|p| PropertyComparison {
                label: p.label(),
                first: p.value(first),
                second: p.value(second),
            })
            .collect();

        ComparisonResult { entries }
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new(vec![Box::new(ElectricalConductivity)])
    }
}
