//! Reference-row types for the static LCA tables

/// Per-kg impact coefficients for a textile material
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialProfile {
    /// Material name (e.g. "Cotton", "Recycled_Polyester")
    pub name: &'static str,
    /// CO2 equivalent emitted per kg of material, in kg
    pub co2_per_kg: f64,
    /// Water consumed per kg of material, in litres
    pub water_per_kg: f64,
}

/// Physical and processing characteristics of a garment type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GarmentSpec {
    /// Garment type name (e.g. "T-shirt", "Saree")
    pub name: &'static str,
    /// Typical finished weight in kg
    pub weight_kg: f64,
    /// Processing impact beyond raw material (cutting, sewing, dyeing)
    pub manufacturing_multiplier: f64,
}

/// Manufacturing-efficiency scalar for a brand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrandFactor {
    pub name: &'static str,
    /// Scalar in [0.65, 1.35]; "Unknown" carries the neutral 1.00
    pub multiplier: f64,
}

/// Savings scalar for an item's wear condition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionFactor {
    pub name: &'static str,
    /// Scalar in [0.08, 1.00]; not monotonic in wear
    pub multiplier: f64,
}

/// Citation for a block of reference coefficients
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataSource {
    pub key: &'static str,
    pub name: &'static str,
    pub year: &'static str,
}
