//! Application service layer - estimator use cases, config, adapters

pub mod app;
pub mod config;
pub mod features;
pub mod repository;

pub use app::{ProgressCallback, SustainabilityEstimator, TrainOptions, TrainingReport};
pub use config::Config;
