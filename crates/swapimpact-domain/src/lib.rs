//! Domain layer: models, reference tables, and the synthetic LCA dataset

pub mod constants;
pub mod model;
pub mod service;

pub use model::{
    BrandFactor, ConditionFactor, DataSource, GarmentSpec, ItemAttributes, LcaRecord,
    MaterialProfile, SavingsEstimate,
};
pub use service::build_lca_dataset;
