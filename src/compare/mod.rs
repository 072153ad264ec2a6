//! Material comparison.
//!
//! # Data Flow
//! ```text
//! (Material, Material)
//!     → comparator.rs (walk registered properties in order)
//!     → property.rs (extract one value per material)
//!     → ComparisonResult (label → (first, second))
//! ```
//!
//! # Design Decisions
//! - Each property contributes exactly one entry
//! - Adding a property never changes `Comparator::compare`
//! - Results are built per request and never cached

pub mod comparator;
pub mod property;

pub use comparator::{Comparator, ComparisonResult, PropertyComparison};
pub use property::{ElectricalConductivity, Property};
