//! Garment type specifications
//!
//! Weights and manufacturing multipliers per Quantis 2018; Kurta_Kurti and
//! Saree are estimated for Indian apparel.

use crate::model::GarmentSpec;

/// Garment spec table, declaration order is load-bearing
pub static GARMENT_SPECS: &[GarmentSpec] = &[
    GarmentSpec { name: "T-shirt", weight_kg: 0.18, manufacturing_multiplier: 1.4 },
    GarmentSpec { name: "Jeans", weight_kg: 0.68, manufacturing_multiplier: 2.8 },
    GarmentSpec { name: "Hoodie", weight_kg: 0.58, manufacturing_multiplier: 1.6 },
    GarmentSpec { name: "Kurta_Kurti", weight_kg: 0.30, manufacturing_multiplier: 1.6 },
    GarmentSpec { name: "Saree", weight_kg: 0.80, manufacturing_multiplier: 1.5 },
];

/// Get garment spec by type name
pub fn get_garment_spec(name: &str) -> Option<&'static GarmentSpec> {
    GARMENT_SPECS.iter().find(|g| g.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garment_count() {
        assert_eq!(GARMENT_SPECS.len(), 5);
    }

    #[test]
    fn test_tshirt_spec() {
        let spec = get_garment_spec("T-shirt").unwrap();
        assert_eq!(spec.weight_kg, 0.18);
        assert_eq!(spec.manufacturing_multiplier, 1.4);
    }

    #[test]
    fn test_jeans_heaviest_processing() {
        let jeans = get_garment_spec("Jeans").unwrap();
        for g in GARMENT_SPECS {
            assert!(g.manufacturing_multiplier <= jeans.manufacturing_multiplier);
        }
    }
}
