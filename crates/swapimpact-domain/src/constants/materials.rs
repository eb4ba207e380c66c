//! Per-kg impact coefficients for textile materials
//!
//! Coefficients follow Higg MSI 2023 except Silk and Leather (Kering EPL
//! 2022), Denim (Quantis 2018), and Khadi (estimated for hand-spun,
//! hand-woven cloth). See `sources` for the citation registry.

use crate::model::MaterialProfile;

/// Material impact table, declaration order is load-bearing
pub static MATERIAL_PROFILES: &[MaterialProfile] = &[
    MaterialProfile { name: "Cotton", co2_per_kg: 16.0, water_per_kg: 13500.0 },
    MaterialProfile { name: "Organic_Cotton", co2_per_kg: 12.5, water_per_kg: 9000.0 },
    MaterialProfile { name: "Polyester", co2_per_kg: 15.6, water_per_kg: 390.0 },
    MaterialProfile { name: "Recycled_Polyester", co2_per_kg: 8.2, water_per_kg: 280.0 },
    MaterialProfile { name: "Wool", co2_per_kg: 56.5, water_per_kg: 7500.0 },
    MaterialProfile { name: "Linen", co2_per_kg: 9.5, water_per_kg: 2500.0 },
    MaterialProfile { name: "Silk", co2_per_kg: 27.3, water_per_kg: 10000.0 },
    MaterialProfile { name: "Viscose", co2_per_kg: 15.2, water_per_kg: 3000.0 },
    MaterialProfile { name: "Leather", co2_per_kg: 110.0, water_per_kg: 17000.0 },
    MaterialProfile { name: "Denim", co2_per_kg: 23.2, water_per_kg: 10850.0 },
    MaterialProfile { name: "Khadi", co2_per_kg: 5.0, water_per_kg: 4000.0 },
];

/// Get material profile by name
pub fn get_material_profile(name: &str) -> Option<&'static MaterialProfile> {
    MATERIAL_PROFILES.iter().find(|m| m.name == name)
}
