//! Bagged ensemble of regression trees
//!
//! Each tree fits a bootstrap resample of the training indices; the
//! ensemble predicts the mean over trees. Per-tree seeds are derived
//! from the master seed before any work is dispatched, so worker-thread
//! scheduling cannot change the fitted result.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use swapimpact_types::MlError;

use crate::tree::{RegressionTree, TreeParams};

/// Ensemble configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForestParams {
    /// Number of bagged trees
    pub tree_count: usize,
    /// Growth limits shared by every tree
    pub tree: TreeParams,
    /// Master seed for bootstrap resampling
    pub seed: u64,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            tree_count: 100,
            tree: TreeParams::default(),
            seed: 42,
        }
    }
}

/// A fitted bagged forest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaggedForest {
    params: ForestParams,
    trees: Vec<RegressionTree>,
}

impl BaggedForest {
    /// Fit the ensemble on the rows selected by `train_indices`
    ///
    /// `jobs` is the worker-thread count; 1 fits sequentially.
    pub fn fit(
        features: &Array2<f64>,
        targets: &Array1<f64>,
        train_indices: &[usize],
        params: ForestParams,
        jobs: usize,
    ) -> Result<Self, MlError> {
        if train_indices.is_empty() {
            return Err(MlError::EmptyTrainingSet);
        }
        if params.tree_count == 0 {
            return Err(MlError::EmptyTrainingSet);
        }

        let seeds: Vec<u64> = (0..params.tree_count)
            .map(|i| derive_tree_seed(params.seed, i))
            .collect();

        let trees = if jobs <= 1 {
            let mut trees = Vec::with_capacity(params.tree_count);
            for &seed in &seeds {
                trees.push(fit_single_tree(
                    features,
                    targets,
                    train_indices,
                    &params.tree,
                    seed,
                )?);
            }
            trees
        } else {
            fit_parallel(features, targets, train_indices, &params, &seeds, jobs)?
        };

        Ok(Self { params, trees })
    }

    /// Mean prediction over all trees
    pub fn predict(&self, row: &[f64]) -> f64 {
        let sum: f64 = self.trees.iter().map(|t| t.predict(row)).sum();
        sum / self.trees.len() as f64
    }

    /// Number of fitted trees
    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// The configuration used to fit this forest
    pub fn params(&self) -> &ForestParams {
        &self.params
    }
}

/// Worker-pool fan-out over tree indices
fn fit_parallel(
    features: &Array2<f64>,
    targets: &Array1<f64>,
    train_indices: &[usize],
    params: &ForestParams,
    seeds: &[u64],
    jobs: usize,
) -> Result<Vec<RegressionTree>, MlError> {
    let tree_count = params.tree_count;
    let next_index = AtomicUsize::new(0);
    let slots: Mutex<Vec<Option<Result<RegressionTree, MlError>>>> =
        Mutex::new((0..tree_count).map(|_| None).collect());

    std::thread::scope(|scope| {
        for _ in 0..jobs.min(tree_count) {
            scope.spawn(|| loop {
                let i = next_index.fetch_add(1, Ordering::SeqCst);
                if i >= tree_count {
                    break;
                }
                let fitted =
                    fit_single_tree(features, targets, train_indices, &params.tree, seeds[i]);
                let mut guard = slots.lock().unwrap();
                guard[i] = Some(fitted);
            });
        }
    });

    let mut trees = Vec::with_capacity(tree_count);
    for slot in slots.into_inner().unwrap() {
        match slot {
            Some(Ok(tree)) => trees.push(tree),
            Some(Err(e)) => return Err(e),
            None => return Err(MlError::EmptyTrainingSet),
        }
    }
    Ok(trees)
}

fn fit_single_tree(
    features: &Array2<f64>,
    targets: &Array1<f64>,
    train_indices: &[usize],
    tree_params: &TreeParams,
    seed: u64,
) -> Result<RegressionTree, MlError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let bootstrap: Vec<usize> = (0..train_indices.len())
        .map(|_| train_indices[rng.random_range(0..train_indices.len())])
        .collect();
    RegressionTree::fit(features.view(), targets.view(), &bootstrap, tree_params)
}

/// Mix the tree index into the master seed (splitmix64 increment)
fn derive_tree_seed(master: u64, tree_index: usize) -> u64 {
    master.wrapping_add((tree_index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}
