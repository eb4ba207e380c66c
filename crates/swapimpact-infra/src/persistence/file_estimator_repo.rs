//! File-based storage for the trained estimator artifact
//!
//! The artifact is a single pretty-printed JSON document. A missing file
//! is a typed condition (`EstimatorError::ArtifactMissing`), never a
//! silently absent estimator.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use swapimpact_ml::{EstimatorArtifact, ARTIFACT_SCHEMA_VERSION};
use swapimpact_types::{EstimatorError, Result};

/// Repository for one artifact file
pub struct FileEstimatorRepository {
    artifact_path: PathBuf,
}

impl FileEstimatorRepository {
    /// Create a repository for the given artifact path
    pub fn new(artifact_path: PathBuf) -> Self {
        Self { artifact_path }
    }

    /// Path the artifact is stored at
    pub fn artifact_path(&self) -> &Path {
        &self.artifact_path
    }

    /// Whether a persisted artifact exists
    pub fn exists(&self) -> bool {
        self.artifact_path.exists()
    }

    /// Write the artifact, creating parent directories as needed
    pub fn save(&self, artifact: &EstimatorArtifact) -> Result<()> {
        if let Some(parent) = self.artifact_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(&self.artifact_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, artifact)?;
        Ok(())
    }

    /// Load the artifact
    ///
    /// Fails with `ArtifactMissing` when no file exists and
    /// `ArtifactCorrupted` when the content cannot be decoded or was
    /// written by an incompatible schema.
    pub fn load(&self) -> Result<EstimatorArtifact> {
        if !self.exists() {
            return Err(EstimatorError::ArtifactMissing {
                path: self.artifact_path.clone(),
            }
            .into());
        }

        let file = File::open(&self.artifact_path)?;
        let reader = BufReader::new(file);
        let artifact: EstimatorArtifact = serde_json::from_reader(reader)
            .map_err(|e| EstimatorError::ArtifactCorrupted(e.to_string()))?;

        if artifact.schema_version != ARTIFACT_SCHEMA_VERSION {
            return Err(EstimatorError::ArtifactCorrupted(format!(
                "schema version {} is not supported (expected {})",
                artifact.schema_version, ARTIFACT_SCHEMA_VERSION
            ))
            .into());
        }
        if !artifact.is_complete() {
            return Err(EstimatorError::ArtifactCorrupted(
                "artifact is missing a target forest".to_string(),
            )
            .into());
        }

        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use ndarray::array;
    use std::collections::BTreeMap;
    use swapimpact_ml::{BaggedForest, ForestParams, LabelEncoder, StandardScaler, TARGET_COLUMNS};
    use swapimpact_types::Error;

    fn sample_artifact() -> EstimatorArtifact {
        let features = array![[0.0, 1.0], [1.0, 0.0], [2.0, 2.0], [3.0, 1.0]];
        let targets = array![1.0, 2.0, 3.0, 4.0];
        let forest = BaggedForest::fit(
            &features,
            &targets,
            &[0, 1, 2, 3],
            ForestParams {
                tree_count: 3,
                ..ForestParams::default()
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
            LabelEncoder::fit("brand", ["H&M", "Unknown", "Zara"]).unwrap(),
        );

        EstimatorArtifact {
            schema_version: ARTIFACT_SCHEMA_VERSION,
            trained_at: DateTime::<Utc>::MIN_UTC,
            seed: 42,
            tree_count: 3,
            test_fraction: 0.2,
            encoders,
            scaler: StandardScaler::fit(&features).unwrap(),
            forests,
            metrics: BTreeMap::new(),
        }
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileEstimatorRepository::new(dir.path().join("estimator.json"));

        let artifact = sample_artifact();
        repo.save(&artifact).unwrap();
        assert!(repo.exists());

        let loaded = repo.load().unwrap();
        assert_eq!(artifact, loaded);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let repo =
            FileEstimatorRepository::new(dir.path().join("nested").join("estimator.json"));
        repo.save(&sample_artifact()).unwrap();
        assert!(repo.exists());
    }

    #[test]
    fn test_missing_artifact_is_typed() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileEstimatorRepository::new(dir.path().join("estimator.json"));
        let result = repo.load();
        assert!(matches!(
            result,
            Err(Error::Estimator(EstimatorError::ArtifactMissing { .. }))
        ));
    }

    #[test]
    fn test_corrupted_artifact_is_typed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("estimator.json");
        std::fs::write(&path, "not json at all").unwrap();

        let repo = FileEstimatorRepository::new(path);
        let result = repo.load();
        assert!(matches!(
            result,
            Err(Error::Estimator(EstimatorError::ArtifactCorrupted(_)))
        ));
    }

    #[test]
    fn test_incomplete_artifact_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileEstimatorRepository::new(dir.path().join("estimator.json"));

        let mut artifact = sample_artifact();
        artifact.forests.remove("waste_kg");
        repo.save(&artifact).unwrap();

        let result = repo.load();
        assert!(matches!(
            result,
            Err(Error::Estimator(EstimatorError::ArtifactCorrupted(_)))
        ));
    }
}
