//! Error types for swapimpact

use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[allow(dead_code)]
    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Errors from the learning primitives
#[derive(Debug, Error)]
pub enum MlError {
    #[error("Cannot fit encoder for '{0}': no distinct values")]
    EmptyVocabulary(String),

    #[error("Cannot fit model on an empty training set")]
    EmptyTrainingSet,

    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// Errors from the estimator lifecycle
#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("Estimator is not trained. Run training first.")]
    NotTrained,

    #[error("No trained estimator artifact at {}", path.display())]
    ArtifactMissing { path: PathBuf },

    #[error("Trained estimator artifact is corrupted: {0}")]
    ArtifactCorrupted(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Model error: {0}")]
    Ml(#[from] MlError),

    #[error("Estimator error: {0}")]
    Estimator(#[from] EstimatorError),

    #[error("Invalid item attribute: {0}")]
    InvalidAttribute(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
