//! Brand manufacturing-efficiency multipliers
//!
//! Lower means a cleaner supply chain. The table skews toward Indian
//! retail brands; "Unknown" is the neutral fallback for unrecognized
//! brands and must stay in the table.

use crate::model::BrandFactor;

/// Fallback brand label used when an input brand is not in the table
pub const UNKNOWN_BRAND: &str = "Unknown";

/// Brand multiplier table, declaration order is load-bearing
pub static BRAND_FACTORS: &[BrandFactor] = &[
    BrandFactor { name: "Aditya_Birla_Fashion_Retail", multiplier: 0.82 },
    BrandFactor { name: "Allen_Solly", multiplier: 0.82 },
    BrandFactor { name: "Van_Heusen", multiplier: 0.82 },
    BrandFactor { name: "Westside", multiplier: 0.88 },
    BrandFactor { name: "Zudio", multiplier: 0.92 },
    BrandFactor { name: "LifeStyle", multiplier: 0.90 },
    BrandFactor { name: "Fabindia", multiplier: 0.75 },
    BrandFactor { name: "Reebok", multiplier: 0.84 },
    BrandFactor { name: "HRX", multiplier: 0.85 },
    BrandFactor { name: "Patagonia", multiplier: 0.65 },
    BrandFactor { name: "H&M", multiplier: 0.90 },
    BrandFactor { name: "Zara", multiplier: 0.92 },
    BrandFactor { name: "Levi", multiplier: 0.84 },
    BrandFactor { name: "Nike", multiplier: 0.82 },
    BrandFactor { name: "Adidas", multiplier: 0.80 },
    BrandFactor { name: "Shein", multiplier: 1.35 },
    BrandFactor { name: "Unknown", multiplier: 1.00 },
];

/// Get brand factor by name
pub fn get_brand_factor(name: &str) -> Option<&'static BrandFactor> {
    BRAND_FACTORS.iter().find(|b| b.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_count() {
        assert_eq!(BRAND_FACTORS.len(), 17);
    }

    #[test]
    fn test_unknown_is_neutral() {
        let unknown = get_brand_factor(UNKNOWN_BRAND).unwrap();
        assert_eq!(unknown.multiplier, 1.00);
    }

    #[test]
    fn test_multiplier_range() {
        for b in BRAND_FACTORS {
            assert!(b.multiplier >= 0.65 && b.multiplier <= 1.35, "{}", b.name);
        }
    }

    #[test]
    fn test_range_endpoints_present() {
        assert_eq!(get_brand_factor("Patagonia").unwrap().multiplier, 0.65);
        assert_eq!(get_brand_factor("Shein").unwrap().multiplier, 1.35);
    }

    #[test]
    fn test_names_unique() {
        for (i, a) in BRAND_FACTORS.iter().enumerate() {
            for b in &BRAND_FACTORS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
