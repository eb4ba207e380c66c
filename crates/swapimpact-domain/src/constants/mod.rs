//! Reference constants for LCA impact calculation
//!
//! The tables are literature-derived and immutable. Declaration order is
//! part of the contract: the synthetic dataset builder iterates them in
//! order, which keeps the dataset (and everything trained on it)
//! reproducible.

pub mod brands;
pub mod conditions;
pub mod garments;
pub mod materials;
pub mod sources;

pub use brands::{get_brand_factor, BRAND_FACTORS, UNKNOWN_BRAND};
pub use conditions::{get_condition_factor, CONDITION_FACTORS};
pub use garments::{get_garment_spec, GARMENT_SPECS};
pub use materials::{get_material_profile, MATERIAL_PROFILES};
pub use sources::DATA_SOURCES;
