//! Infrastructure layer - persistence implementations, exporters

pub mod dataset_csv;
pub mod persistence;

pub use dataset_csv::export_dataset;
pub use persistence::FileEstimatorRepository;
