//! Estimator Service - core use case for swap-impact estimation
//!
//! This service owns the complete estimation workflow:
//! 1. Build the synthetic LCA dataset from the reference tables
//! 2. Fit label encoders and the feature scaler over the dataset
//! 3. Fit one bagged forest per impact target on a seeded split
//! 4. Resolve new item attributes and predict savings
//!
//! A trained estimator is immutable from the point of view of
//! `estimate` (`&self`); retraining builds new fitted state. Hosts that
//! retrain while serving should construct a fresh instance and swap the
//! active reference rather than retraining a shared one in place.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use swapimpact_domain::constants::UNKNOWN_BRAND;
use swapimpact_domain::service::lookup;
use swapimpact_domain::{build_lca_dataset, ItemAttributes, LcaRecord, SavingsEstimate};
use swapimpact_ml::{
    train_test_split, BaggedForest, EstimatorArtifact, ForestParams, LabelEncoder,
    RegressionMetrics, ResolvedLabel, StandardScaler, TreeParams, ARTIFACT_SCHEMA_VERSION,
    TARGET_COLUMNS,
};
use swapimpact_types::{EstimatorError, Result};

use crate::features::{
    assemble_row, build_feature_matrix, categorical_value, target_value, RowInputs,
    CATEGORICAL_COLS,
};

/// Callback for training progress messages
pub type ProgressCallback = Box<dyn Fn(&str)>;

/// Method tag attached to every estimate
const ESTIMATE_METHOD: &str = "ml_prediction";

/// Options for training
#[derive(Debug, Clone, Copy)]
pub struct TrainOptions {
    /// Number of bagged trees per target
    pub tree_count: usize,
    /// Seed for the split and the bootstrap resamples
    pub seed: u64,
    /// Holdout fraction used for the metrics report
    pub test_fraction: f64,
    /// Worker threads for tree fitting. 0 = auto (CPU count)
    pub jobs: usize,
    /// Tree depth limit. None = grow until pure
    pub max_depth: Option<usize>,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            tree_count: 100,
            seed: 42,
            test_fraction: 0.2,
            jobs: 0,
            max_depth: None,
        }
    }
}

impl TrainOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tree_count(mut self, tree_count: usize) -> Self {
        self.tree_count = tree_count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_test_fraction(mut self, test_fraction: f64) -> Self {
        self.test_fraction = test_fraction;
        self
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Summary returned by a training run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    pub trained_at: DateTime<Utc>,
    pub tree_count: usize,
    pub seed: u64,
    pub train_samples: usize,
    pub test_samples: usize,
    /// Holdout metrics per target column
    pub metrics: BTreeMap<String, RegressionMetrics>,
}

/// Research-backed sustainability impact estimator for clothing swaps
///
/// Construction builds the deterministic synthetic dataset; `train` fits
/// the encoders, scaler, and per-target forests; `estimate` is read-only
/// over the fitted state and safe for concurrent callers.
pub struct SustainabilityEstimator {
    dataset: Vec<LcaRecord>,
    fitted: Option<EstimatorArtifact>,
}

impl Default for SustainabilityEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl SustainabilityEstimator {
    /// Create an untrained estimator over the synthetic dataset
    pub fn new() -> Self {
        Self {
            dataset: build_lca_dataset(),
            fitted: None,
        }
    }

    /// Rebuild a trained estimator from a persisted artifact
    ///
    /// The dataset is reconstructed from the reference tables; nothing
    /// is refitted.
    pub fn from_artifact(artifact: EstimatorArtifact) -> Self {
        Self {
            dataset: build_lca_dataset(),
            fitted: Some(artifact),
        }
    }

    /// The synthetic dataset the estimator was built over
    pub fn dataset(&self) -> &[LcaRecord] {
        &self.dataset
    }

    /// Whether a fitted state exists
    pub fn is_trained(&self) -> bool {
        self.fitted.is_some()
    }

    /// The fitted state, when trained
    pub fn artifact(&self) -> Option<&EstimatorArtifact> {
        self.fitted.as_ref()
    }

    /// Fit encoders, scaler, and the three target forests
    ///
    /// Idempotent for identical options; replaces any previous fitted
    /// state.
    pub fn train(
        &mut self,
        options: &TrainOptions,
        progress: Option<&ProgressCallback>,
    ) -> Result<TrainingReport> {
        let report_progress = |msg: &str| {
            if let Some(cb) = progress {
                cb(msg);
            }
        };

        report_progress("Fitting categorical encoders");
        let mut encoders = BTreeMap::new();
        for column in CATEGORICAL_COLS {
            let encoder = LabelEncoder::fit(
                column,
                self.dataset.iter().map(|r| categorical_value(r, column)),
            )?;
            encoders.insert(column.to_string(), encoder);
        }

        report_progress("Building and scaling the feature matrix");
        let raw = build_feature_matrix(&self.dataset, &encoders)?;
        let scaler = StandardScaler::fit(&raw)?;
        let scaled = scaler.transform(&raw)?;

        let jobs = if options.jobs == 0 {
            num_cpus::get()
        } else {
            options.jobs
        };
        let (train_indices, test_indices) =
            train_test_split(self.dataset.len(), options.test_fraction, options.seed);

        let mut forests = BTreeMap::new();
        let mut metrics = BTreeMap::new();
        for target in TARGET_COLUMNS {
            report_progress(&format!("Fitting {} forest ({} trees)", target, options.tree_count));

            let targets: Array1<f64> = self
                .dataset
                .iter()
                .map(|r| target_value(r, target))
                .collect();

            let forest = BaggedForest::fit(
                &scaled,
                &targets,
                &train_indices,
                ForestParams {
                    tree_count: options.tree_count,
                    tree: TreeParams {
                        max_depth: options.max_depth,
                        ..TreeParams::default()
                    },
                    seed: options.seed,
                },
                jobs,
            )?;

            let predicted: Vec<f64> = test_indices
                .iter()
                .map(|&i| forest.predict(&scaled.row(i).to_vec()))
                .collect();
            let actual: Vec<f64> = test_indices.iter().map(|&i| targets[i]).collect();
            let target_metrics = RegressionMetrics::from_predictions(&predicted, &actual)?;

            forests.insert(target.to_string(), forest);
            metrics.insert(target.to_string(), target_metrics);
        }

        let trained_at = Utc::now();
        self.fitted = Some(EstimatorArtifact {
            schema_version: ARTIFACT_SCHEMA_VERSION,
            trained_at,
            seed: options.seed,
            tree_count: options.tree_count,
            test_fraction: options.test_fraction,
            encoders,
            scaler,
            forests,
            metrics: metrics.clone(),
        });

        Ok(TrainingReport {
            trained_at,
            tree_count: options.tree_count,
            seed: options.seed,
            train_samples: train_indices.len(),
            test_samples: test_indices.len(),
            metrics,
        })
    }

    /// Predict the savings for one item
    ///
    /// Unseen categorical values degrade to the encoder fallback; every
    /// dataset lookup afterwards uses the resolved label, so the feature
    /// vector stays internally consistent. Only the untrained state is
    /// an error.
    pub fn estimate(&self, attributes: &ItemAttributes) -> Result<SavingsEstimate> {
        let fitted = self.fitted.as_ref().ok_or(EstimatorError::NotTrained)?;

        let item_type = self.resolve_label(fitted, "item_type", &attributes.item_type)?;
        let material = self.resolve_label(fitted, "material", &attributes.material)?;
        let brand = self.resolve_label(fitted, "brand", &attributes.brand)?;
        let condition = self.resolve_label(fitted, "condition", &attributes.condition)?;

        let weight_kg = lookup::median_weight_kg(&self.dataset, &item_type.label)
            .unwrap_or_else(|| {
                eprintln!(
                    "warning: no weight data for item_type '{}', using dataset median",
                    item_type.label
                );
                lookup::global_median_weight_kg(&self.dataset).unwrap_or(0.0)
            });
        let manufacturing_multiplier =
            lookup::mean_manufacturing_multiplier(&self.dataset, &item_type.label)
                .unwrap_or_else(|| {
                    eprintln!(
                        "warning: no manufacturing data for item_type '{}', using dataset mean",
                        item_type.label
                    );
                    lookup::global_mean_manufacturing_multiplier(&self.dataset).unwrap_or(1.0)
                });
        let brand_multiplier = lookup::mean_brand_multiplier(&self.dataset, &brand.label)
            .unwrap_or_else(|| {
                eprintln!(
                    "warning: no multiplier data for brand '{}', using dataset mean",
                    brand.label
                );
                lookup::global_mean_brand_multiplier(&self.dataset).unwrap_or(1.0)
            });
        let condition_multiplier =
            lookup::mean_condition_multiplier(&self.dataset, &condition.label).unwrap_or_else(
                || {
                    eprintln!(
                        "warning: no multiplier data for condition '{}', using dataset mean",
                        condition.label
                    );
                    lookup::global_mean_condition_multiplier(&self.dataset).unwrap_or(1.0)
                },
            );

        let raw = assemble_row(&RowInputs {
            item_type_code: item_type.code,
            material_code: material.code,
            brand_code: brand.code,
            condition_code: condition.code,
            weight_kg,
            manufacturing_multiplier,
            brand_multiplier,
            condition_multiplier,
        });
        let scaled = fitted.scaler.transform_row(&raw)?;

        let mut predictions = [0.0f64; 3];
        for (slot, target) in predictions.iter_mut().zip(TARGET_COLUMNS) {
            let forest = fitted.forests.get(target).ok_or_else(|| {
                EstimatorError::ArtifactCorrupted(format!("no forest for target '{}'", target))
            })?;
            *slot = round3(forest.predict(&scaled).max(0.0));
        }

        Ok(SavingsEstimate {
            method: ESTIMATE_METHOD.to_string(),
            co2_saved_kg: predictions[0],
            water_saved_l: predictions[1],
            waste_saved_kg: predictions[2],
        })
    }

    fn resolve_label(
        &self,
        fitted: &EstimatorArtifact,
        column: &str,
        value: &str,
    ) -> Result<ResolvedLabel> {
        let encoder = fitted.encoders.get(column).ok_or_else(|| {
            EstimatorError::ArtifactCorrupted(format!("no encoder for column '{}'", column))
        })?;

        let resolved = encoder.resolve(value, UNKNOWN_BRAND);
        if resolved.fell_back {
            eprintln!(
                "warning: unseen {} '{}', falling back to '{}'",
                column, value, resolved.label
            );
        }
        Ok(resolved)
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use swapimpact_types::Error;

    use std::sync::OnceLock;

    /// Small, depth-capped forest keeps test fits fast; semantics are
    /// unchanged
    fn quick_options() -> TrainOptions {
        TrainOptions::new()
            .with_tree_count(8)
            .with_jobs(1)
            .with_max_depth(Some(12))
    }

    /// One shared trained instance for the read-only tests
    fn trained_estimator() -> &'static SustainabilityEstimator {
        static SHARED: OnceLock<SustainabilityEstimator> = OnceLock::new();
        SHARED.get_or_init(|| {
            let mut estimator = SustainabilityEstimator::new();
            estimator.train(&quick_options(), None).unwrap();
            estimator
        })
    }

    fn attrs(item: &str, material: &str, brand: &str, condition: &str) -> ItemAttributes {
        ItemAttributes::new(item, material, brand, condition).unwrap()
    }

    #[test]
    fn test_estimate_before_train_fails() {
        let estimator = SustainabilityEstimator::new();
        let result = estimator.estimate(&attrs("T-shirt", "Cotton", "H&M", "Good"));
        assert!(matches!(
            result,
            Err(Error::Estimator(EstimatorError::NotTrained))
        ));
    }

    #[test]
    fn test_training_report() {
        let mut estimator = SustainabilityEstimator::new();
        let report = estimator.train(&quick_options(), None).unwrap();

        assert!(estimator.is_trained());
        assert_eq!(report.tree_count, 8);
        assert_eq!(report.train_samples, 4_488);
        assert_eq!(report.test_samples, 1_122);
        assert_eq!(report.metrics.len(), 3);
        for target in TARGET_COLUMNS {
            assert!(report.metrics[target].mae >= 0.0);
        }
    }

    #[test]
    fn test_scenario_tshirt_cotton_hm_good() {
        let estimator = trained_estimator();
        let estimate = estimator
            .estimate(&attrs("T-shirt", "Cotton", "H&M", "Good"))
            .unwrap();

        assert_eq!(estimate.method, "ml_prediction");
        // Closed-form value is 16.0 x 0.18 x 1.4 x 0.90 x 0.18 = 0.653 kg;
        // the learned model lands in the same order of magnitude.
        assert!(
            estimate.co2_saved_kg > 0.05 && estimate.co2_saved_kg < 4.0,
            "co2 = {}",
            estimate.co2_saved_kg
        );
        assert!(estimate.water_saved_l > 0.0);
        assert!(estimate.waste_saved_kg >= 0.0);
    }

    #[test]
    fn test_predictions_non_negative() {
        let estimator = trained_estimator();
        for (item, material, brand, condition) in [
            ("T-shirt", "Polyester", "Shein", "Like_New"),
            ("Jeans", "Denim", "Levi", "Poor"),
            ("Saree", "Silk", "Fabindia", "New"),
            ("Hoodie", "Wool", "Patagonia", "Fair"),
        ] {
            let estimate = estimator
                .estimate(&attrs(item, material, brand, condition))
                .unwrap();
            assert!(estimate.co2_saved_kg >= 0.0);
            assert!(estimate.water_saved_l >= 0.0);
            assert!(estimate.waste_saved_kg >= 0.0);
        }
    }

    #[test]
    fn test_unseen_brand_matches_unknown() {
        let estimator = trained_estimator();
        let fallback = estimator
            .estimate(&attrs("T-shirt", "Cotton", "NoSuchBrand", "Good"))
            .unwrap();
        let unknown = estimator
            .estimate(&attrs("T-shirt", "Cotton", "Unknown", "Good"))
            .unwrap();
        assert_eq!(fallback, unknown);
    }

    #[test]
    fn test_estimate_order_invariant() {
        let estimator = trained_estimator();
        let a = attrs("Jeans", "Denim", "Levi", "Good");
        let b = attrs("Saree", "Khadi", "Fabindia", "Excellent");

        let first_a = estimator.estimate(&a).unwrap();
        let first_b = estimator.estimate(&b).unwrap();
        let second_b = estimator.estimate(&b).unwrap();
        let second_a = estimator.estimate(&a).unwrap();

        assert_eq!(first_a, second_a);
        assert_eq!(first_b, second_b);
    }

    #[test]
    fn test_seeded_training_deterministic() {
        let query = attrs("Hoodie", "Polyester", "Nike", "Fair");

        let mut first = SustainabilityEstimator::new();
        first.train(&quick_options(), None).unwrap();
        let mut second = SustainabilityEstimator::new();
        second.train(&quick_options(), None).unwrap();

        assert_eq!(
            first.estimate(&query).unwrap(),
            second.estimate(&query).unwrap()
        );
    }

    #[test]
    fn test_retraining_replaces_state() {
        let mut estimator = SustainabilityEstimator::new();
        estimator.train(&quick_options(), None).unwrap();
        let first = estimator.artifact().unwrap().seed;

        estimator
            .train(&quick_options().with_seed(7), None)
            .unwrap();
        assert_eq!(estimator.artifact().unwrap().seed, 7);
        assert_ne!(first, 7);
    }

    #[test]
    fn test_artifact_round_trip_preserves_predictions() {
        let estimator = trained_estimator();
        let query = attrs("Kurta_Kurti", "Viscose", "Westside", "Good");
        let before = estimator.estimate(&query).unwrap();

        let artifact = estimator.artifact().unwrap().clone();
        let reloaded = SustainabilityEstimator::from_artifact(artifact);
        let after = reloaded.estimate(&query).unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn test_progress_callback_invoked() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let messages: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&messages);
        let callback: ProgressCallback = Box::new(move |msg| {
            sink.borrow_mut().push(msg.to_string());
        });

        let mut estimator = SustainabilityEstimator::new();
        estimator
            .train(&quick_options(), Some(&callback))
            .unwrap();

        let messages = messages.borrow();
        assert!(messages.iter().any(|m| m.contains("encoders")));
        assert!(messages.iter().any(|m| m.contains("co2_kg")));
    }
}
