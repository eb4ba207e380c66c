//! Synthetic LCA dataset builder
//!
//! Expands the four reference tables into one record per
//! (item_type, material, brand, condition) combination. Pure arithmetic
//! over static tables: same output on every call.

use crate::constants::{BRAND_FACTORS, CONDITION_FACTORS, GARMENT_SPECS, MATERIAL_PROFILES};
use crate::model::LcaRecord;

/// Waste generated per kg of garment weight
const WASTE_FRACTION: f64 = 0.15;

/// Build the full synthetic dataset
///
/// Iterates item_type, material, brand, condition in table-declaration
/// order. Every derived impact is floored at its minimum:
/// co2_kg >= 0.01, water_l >= 1, waste_kg >= 0.001.
pub fn build_lca_dataset() -> Vec<LcaRecord> {
    let capacity = GARMENT_SPECS.len()
        * MATERIAL_PROFILES.len()
        * BRAND_FACTORS.len()
        * CONDITION_FACTORS.len();
    let mut records = Vec::with_capacity(capacity);

    for garment in GARMENT_SPECS {
        for material in MATERIAL_PROFILES {
            for brand in BRAND_FACTORS {
                for condition in CONDITION_FACTORS {
                    let weight = garment.weight_kg;
                    let manufacturing = garment.manufacturing_multiplier;

                    let base_co2 = material.co2_per_kg * weight * manufacturing;
                    let base_water = material.water_per_kg * weight * manufacturing;
                    let base_waste = weight * WASTE_FRACTION;

                    let final_co2 = base_co2 * brand.multiplier * condition.multiplier;
                    let final_water = base_water * brand.multiplier * condition.multiplier;
                    let final_waste = base_waste * brand.multiplier * condition.multiplier;

                    records.push(LcaRecord {
                        item_type: garment.name.to_string(),
                        material: material.name.to_string(),
                        brand: brand.name.to_string(),
                        condition: condition.name.to_string(),
                        weight_kg: weight,
                        co2_kg: round_to(final_co2.max(0.01), 3),
                        water_l: round_to(final_water.max(1.0), 0),
                        waste_kg: round_to(final_waste.max(0.001), 4),
                        manufacturing_multiplier: manufacturing,
                        brand_multiplier: brand.multiplier,
                        condition_multiplier: condition.multiplier,
                    });
                }
            }
        }
    }

    records
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
