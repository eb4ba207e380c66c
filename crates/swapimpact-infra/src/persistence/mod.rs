//! Persistence implementations

mod file_estimator_repo;

pub use file_estimator_repo::FileEstimatorRepository;
