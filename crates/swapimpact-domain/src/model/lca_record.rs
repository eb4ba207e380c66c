//! Synthetic LCA record type

use serde::{Deserialize, Serialize};

/// One row of the synthetic LCA dataset
///
/// A record is a deterministic function of the four reference tables:
/// one per (item_type, material, brand, condition) combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LcaRecord {
    pub item_type: String,
    pub material: String,
    pub brand: String,
    pub condition: String,
    /// Garment weight in kg
    pub weight_kg: f64,
    /// CO2 impact in kg, floored at 0.01
    pub co2_kg: f64,
    /// Water impact in litres, floored at 1
    pub water_l: f64,
    /// Waste impact in kg, floored at 0.001
    pub waste_kg: f64,
    pub manufacturing_multiplier: f64,
    pub brand_multiplier: f64,
    pub condition_multiplier: f64,
}
