//! Learning primitives for the swap-impact estimator
//!
//! Everything here is plain-data and seed-deterministic: categorical
//! label encoding, feature standardization, shuffle splits, and bagged
//! regression trees. Fitted state serializes as an [`EstimatorArtifact`]
//! so inference after reload never refits anything.

pub mod artifact;
pub mod encoder;
pub mod forest;
pub mod metrics;
pub mod scaler;
pub mod split;
pub mod tree;

pub use artifact::{EstimatorArtifact, ARTIFACT_SCHEMA_VERSION, TARGET_COLUMNS};
pub use encoder::{LabelEncoder, ResolvedLabel};
pub use forest::{BaggedForest, ForestParams};
pub use metrics::RegressionMetrics;
pub use scaler::StandardScaler;
pub use split::train_test_split;
pub use tree::{RegressionTree, TreeParams};
