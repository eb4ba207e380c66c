//! Repository adapters for persistence layer

use std::path::PathBuf;

use swapimpact_infra::FileEstimatorRepository;
use swapimpact_types::Result;

use crate::app::SustainabilityEstimator;
use crate::config::Config;

/// Open the estimator artifact repository at the configured path
pub fn open_estimator_repo(config: &Config) -> Result<FileEstimatorRepository> {
    Ok(FileEstimatorRepository::new(config.model_path()?))
}

/// Open the estimator artifact repository at a custom path
pub fn open_estimator_repo_at(path: PathBuf) -> FileEstimatorRepository {
    FileEstimatorRepository::new(path)
}

/// Load a ready-to-serve estimator from the configured artifact
///
/// Fails with `EstimatorError::ArtifactMissing` when nothing has been
/// trained yet.
pub fn load_trained_estimator(config: &Config) -> Result<SustainabilityEstimator> {
    let repo = open_estimator_repo(config)?;
    let artifact = repo.load()?;
    Ok(SustainabilityEstimator::from_artifact(artifact))
}
