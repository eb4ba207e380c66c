//! Application use cases

pub mod estimator_service;

pub use estimator_service::{
    ProgressCallback, SustainabilityEstimator, TrainOptions, TrainingReport,
};
