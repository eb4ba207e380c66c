//! Feature assembly for the impact models
//!
//! Ten columns in a fixed order: the four encoded categoricals, the four
//! resolved numerics, and two interaction terms computed post-encoding.
//! Training and inference must assemble rows through the same functions
//! or the scaler statistics stop lining up.

use std::collections::BTreeMap;

use ndarray::Array2;
use swapimpact_domain::LcaRecord;
use swapimpact_ml::LabelEncoder;
use swapimpact_types::MlError;

/// Categorical columns, in encoding order
pub const CATEGORICAL_COLS: [&str; 4] = ["item_type", "material", "brand", "condition"];

/// Feature columns, in matrix order
pub const FEATURE_COLS: [&str; 10] = [
    "item_type_encoded",
    "material_encoded",
    "brand_encoded",
    "condition_encoded",
    "weight_kg",
    "manufacturing_multiplier",
    "brand_multiplier",
    "condition_multiplier",
    "weight_material_interaction",
    "brand_condition_interaction",
];

/// Numeric inputs to one feature row
#[derive(Debug, Clone, Copy)]
pub struct RowInputs {
    pub item_type_code: usize,
    pub material_code: usize,
    pub brand_code: usize,
    pub condition_code: usize,
    pub weight_kg: f64,
    pub manufacturing_multiplier: f64,
    pub brand_multiplier: f64,
    pub condition_multiplier: f64,
}

/// Assemble one raw (unscaled) feature row
pub fn assemble_row(inputs: &RowInputs) -> [f64; 10] {
    let material = inputs.material_code as f64;
    let brand = inputs.brand_code as f64;
    let condition = inputs.condition_code as f64;
    [
        inputs.item_type_code as f64,
        material,
        brand,
        condition,
        inputs.weight_kg,
        inputs.manufacturing_multiplier,
        inputs.brand_multiplier,
        inputs.condition_multiplier,
        inputs.weight_kg * material,
        brand * condition,
    ]
}

/// Read a categorical column off a record
pub fn categorical_value<'a>(record: &'a LcaRecord, column: &str) -> &'a str {
    match column {
        "item_type" => &record.item_type,
        "material" => &record.material,
        "brand" => &record.brand,
        "condition" => &record.condition,
        _ => "",
    }
}

/// Read a target column off a record
pub fn target_value(record: &LcaRecord, target: &str) -> f64 {
    match target {
        "co2_kg" => record.co2_kg,
        "water_l" => record.water_l,
        "waste_kg" => record.waste_kg,
        _ => 0.0,
    }
}

/// Build the raw feature matrix for the whole dataset
///
/// The encoders must have been fitted over these records; every label
/// encodes without falling back.
pub fn build_feature_matrix(
    records: &[LcaRecord],
    encoders: &BTreeMap<String, LabelEncoder>,
) -> Result<Array2<f64>, MlError> {
    let mut data = Vec::with_capacity(records.len() * FEATURE_COLS.len());

    for record in records {
        let mut codes = [0usize; 4];
        for (slot, column) in codes.iter_mut().zip(CATEGORICAL_COLS) {
            let encoder = encoders
                .get(column)
                .ok_or_else(|| MlError::EmptyVocabulary(column.to_string()))?;
            *slot = encoder
                .encode(categorical_value(record, column))
                .ok_or_else(|| MlError::EmptyVocabulary(column.to_string()))?;
        }

        let row = assemble_row(&RowInputs {
            item_type_code: codes[0],
            material_code: codes[1],
            brand_code: codes[2],
            condition_code: codes[3],
            weight_kg: record.weight_kg,
            manufacturing_multiplier: record.manufacturing_multiplier,
            brand_multiplier: record.brand_multiplier,
            condition_multiplier: record.condition_multiplier,
        });
        data.extend_from_slice(&row);
    }

    Array2::from_shape_vec((records.len(), FEATURE_COLS.len()), data)
        .map_err(|_| MlError::DimensionMismatch {
            expected: FEATURE_COLS.len(),
            got: 0,
        })
}
