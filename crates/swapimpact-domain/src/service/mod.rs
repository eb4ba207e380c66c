//! Domain services

pub mod dataset_builder;
pub mod lookup;

pub use dataset_builder::build_lca_dataset;
