//! Item attributes and estimate result types

use serde::{Deserialize, Serialize};
use swapimpact_types::{Error, Result};

/// Attributes describing a swapped clothing item
///
/// Values are free-form strings; unseen ones degrade to the encoder
/// fallback during inference instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAttributes {
    pub item_type: String,
    pub material: String,
    pub brand: String,
    pub condition: String,
}

impl ItemAttributes {
    /// Build attributes, rejecting blank fields
    pub fn new(item_type: &str, material: &str, brand: &str, condition: &str) -> Result<Self> {
        for (field, value) in [
            ("item_type", item_type),
            ("material", material),
            ("brand", brand),
            ("condition", condition),
        ] {
            if value.trim().is_empty() {
                return Err(Error::InvalidAttribute(format!("{} must not be blank", field)));
            }
        }

        Ok(Self {
            item_type: item_type.to_string(),
            material: material.to_string(),
            brand: brand.to_string(),
            condition: condition.to_string(),
        })
    }
}

/// Predicted environmental savings for one swap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsEstimate {
    /// How the estimate was produced (always "ml_prediction")
    pub method: String,
    /// CO2 avoided in kg, >= 0
    pub co2_saved_kg: f64,
    /// Water avoided in litres, >= 0
    pub water_saved_l: f64,
    /// Waste avoided in kg, >= 0
    pub waste_saved_kg: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_attributes() {
        let attrs = ItemAttributes::new("T-shirt", "Cotton", "H&M", "Good").unwrap();
        assert_eq!(attrs.item_type, "T-shirt");
        assert_eq!(attrs.brand, "H&M");
    }

    #[test]
    fn test_blank_field_rejected() {
        assert!(ItemAttributes::new("", "Cotton", "H&M", "Good").is_err());
        assert!(ItemAttributes::new("T-shirt", "  ", "H&M", "Good").is_err());
        assert!(ItemAttributes::new("T-shirt", "Cotton", "H&M", "").is_err());
    }

    #[test]
    fn test_unseen_values_accepted_at_boundary() {
        // Unknown labels are a soft-fallback concern for inference, not
        // a validation failure here.
        assert!(ItemAttributes::new("Cape", "Vibranium", "NoSuchBrand", "Mint").is_ok());
    }
}
