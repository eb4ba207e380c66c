//! Persistable fitted state of a trained estimator

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::encoder::LabelEncoder;
use crate::forest::BaggedForest;
use crate::metrics::RegressionMetrics;
use crate::scaler::StandardScaler;

/// Bumped when the serialized layout changes incompatibly
pub const ARTIFACT_SCHEMA_VERSION: u32 = 1;

/// Regression targets, one forest each
pub const TARGET_COLUMNS: [&str; 3] = ["co2_kg", "water_l", "waste_kg"];

/// Everything inference needs, and nothing it has to refit
///
/// The synthetic dataset itself is not stored; it is a deterministic
/// function of the reference tables and is rebuilt on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorArtifact {
    pub schema_version: u32,
    pub trained_at: DateTime<Utc>,
    pub seed: u64,
    pub tree_count: usize,
    pub test_fraction: f64,
    /// One encoder per categorical column, keyed by column name
    pub encoders: BTreeMap<String, LabelEncoder>,
    pub scaler: StandardScaler,
    /// One forest per target, keyed by target column
    pub forests: BTreeMap<String, BaggedForest>,
    /// Holdout metrics per target, keyed by target column
    pub metrics: BTreeMap<String, RegressionMetrics>,
}

impl EstimatorArtifact {
    /// True when every target has a fitted forest
    pub fn is_complete(&self) -> bool {
        TARGET_COLUMNS.iter().all(|t| self.forests.contains_key(*t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn minimal_artifact() -> EstimatorArtifact {
        let features = array![[0.0, 1.0], [1.0, 0.0], [2.0, 2.0]];
        let targets = array![1.0, 2.0, 3.0];
        let forest = BaggedForest::fit(
            &features,
            &targets,
            &[0, 1, 2],
            crate::forest::ForestParams {
                tree_count: 2,
                ..Default::default()
            },
            1,
        )
        .unwrap();

        let mut forests = BTreeMap::new();
        for target in TARGET_COLUMNS {
            forests.insert(target.to_string(), forest.clone());
        }

        let mut encoders = BTreeMap::new();
        encoders.insert(
            "brand".to_string(),
            LabelEncoder::fit("brand", ["H&M", "Unknown"]).unwrap(),
        );

        EstimatorArtifact {
            schema_version: ARTIFACT_SCHEMA_VERSION,
            trained_at: DateTime::<Utc>::MIN_UTC,
            seed: 42,
            tree_count: 2,
            test_fraction: 0.2,
            encoders,
            scaler: StandardScaler::fit(&features).unwrap(),
            forests,
            metrics: BTreeMap::new(),
        }
    }

    #[test]
    fn test_json_round_trip() {
        let artifact = minimal_artifact();
        let json = serde_json::to_string(&artifact).unwrap();
        let restored: EstimatorArtifact = serde_json::from_str(&json).unwrap();
        assert_eq!(artifact, restored);
    }

    #[test]
    fn test_completeness() {
        let mut artifact = minimal_artifact();
        assert!(artifact.is_complete());
        artifact.forests.remove("water_l");
        assert!(!artifact.is_complete());
    }
}
