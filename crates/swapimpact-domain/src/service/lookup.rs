//! Aggregate lookups over the synthetic dataset
//!
//! Inference resolves its numeric inputs from the dataset rather than from
//! the raw reference tables: median weight per item type, mean multiplier
//! per attribute value. All lookups return None on an empty match so the
//! caller can apply its fallback policy.

use crate::model::LcaRecord;

/// Median weight_kg among records matching `item_type`
///
/// Every record for a given item type currently shares one weight, but
/// the median stays stable if the dataset ever grows heterogeneous.
pub fn median_weight_kg(records: &[LcaRecord], item_type: &str) -> Option<f64> {
    let mut weights: Vec<f64> = records
        .iter()
        .filter(|r| r.item_type == item_type)
        .map(|r| r.weight_kg)
        .collect();
    median(&mut weights)
}

/// Mean manufacturing multiplier among records matching `item_type`
pub fn mean_manufacturing_multiplier(records: &[LcaRecord], item_type: &str) -> Option<f64> {
    mean(
        records
            .iter()
            .filter(|r| r.item_type == item_type)
            .map(|r| r.manufacturing_multiplier),
    )
}

/// Mean brand multiplier among records matching `brand`
pub fn mean_brand_multiplier(records: &[LcaRecord], brand: &str) -> Option<f64> {
    mean(
        records
            .iter()
            .filter(|r| r.brand == brand)
            .map(|r| r.brand_multiplier),
    )
}

/// Mean condition multiplier among records matching `condition`
pub fn mean_condition_multiplier(records: &[LcaRecord], condition: &str) -> Option<f64> {
    mean(
        records
            .iter()
            .filter(|r| r.condition == condition)
            .map(|r| r.condition_multiplier),
    )
}

/// Median weight over the whole dataset (empty-aggregate fallback)
pub fn global_median_weight_kg(records: &[LcaRecord]) -> Option<f64> {
    let mut weights: Vec<f64> = records.iter().map(|r| r.weight_kg).collect();
    median(&mut weights)
}

/// Mean manufacturing multiplier over the whole dataset
pub fn global_mean_manufacturing_multiplier(records: &[LcaRecord]) -> Option<f64> {
    mean(records.iter().map(|r| r.manufacturing_multiplier))
}

/// Mean brand multiplier over the whole dataset
pub fn global_mean_brand_multiplier(records: &[LcaRecord]) -> Option<f64> {
    mean(records.iter().map(|r| r.brand_multiplier))
}

/// Mean condition multiplier over the whole dataset
pub fn global_mean_condition_multiplier(records: &[LcaRecord]) -> Option<f64> {
    mean(records.iter().map(|r| r.condition_multiplier))
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}
