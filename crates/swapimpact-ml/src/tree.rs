//! CART regression tree
//!
//! Splits greedily on the variance reduction of the target, thresholds
//! at midpoints between adjacent distinct feature values. Nodes live in
//! a flat arena with the root at index 0, which keeps the serialized
//! form compact and the walk allocation-free.

use std::cmp::Ordering;

use ndarray::{ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};
use swapimpact_types::MlError;

/// Tree growth limits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreeParams {
    /// Maximum depth, None = grow until pure
    pub max_depth: Option<usize>,
    /// Minimum samples a node needs to be considered for splitting
    pub min_samples_split: usize,
    /// Minimum samples each child must keep
    pub min_samples_leaf: usize,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum Node {
    Leaf {
        value: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// A fitted regression tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTree {
    nodes: Vec<Node>,
}

impl RegressionTree {
    /// Fit on the rows of `features` selected by `indices`
    ///
    /// `indices` may repeat rows (bootstrap resamples do).
    pub fn fit(
        features: ArrayView2<f64>,
        targets: ArrayView1<f64>,
        indices: &[usize],
        params: &TreeParams,
    ) -> Result<Self, MlError> {
        if indices.is_empty() {
            return Err(MlError::EmptyTrainingSet);
        }
        if features.nrows() != targets.len() {
            return Err(MlError::DimensionMismatch {
                expected: features.nrows(),
                got: targets.len(),
            });
        }

        let mut nodes = Vec::new();
        build_node(&mut nodes, &features, &targets, indices, 0, params);
        Ok(Self { nodes })
    }

    /// Predict a single feature row
    pub fn predict(&self, row: &[f64]) -> f64 {
        let mut i = 0;
        loop {
            match &self.nodes[i] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    i = if row[*feature] <= *threshold { *left } else { *right };
                }
            }
        }
    }

    /// Total node count (leaves + splits)
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

struct CandidateSplit {
    feature: usize,
    threshold: f64,
    score: f64,
}

/// Recursively grow a subtree, returning its root index in the arena
fn build_node(
    nodes: &mut Vec<Node>,
    features: &ArrayView2<f64>,
    targets: &ArrayView1<f64>,
    indices: &[usize],
    depth: usize,
    params: &TreeParams,
) -> usize {
    let n = indices.len() as f64;
    let value = indices.iter().map(|&i| targets[i]).sum::<f64>() / n;

    let depth_exhausted = params.max_depth.is_some_and(|d| depth >= d);
    if indices.len() < params.min_samples_split || depth_exhausted {
        nodes.push(Node::Leaf { value });
        return nodes.len() - 1;
    }

    let Some(split) = best_split(features, targets, indices, params.min_samples_leaf) else {
        nodes.push(Node::Leaf { value });
        return nodes.len() - 1;
    };

    let (left_indices, right_indices): (Vec<usize>, Vec<usize>) = indices
        .iter()
        .copied()
        .partition(|&i| features[[i, split.feature]] <= split.threshold);

    let node_index = nodes.len();
    nodes.push(Node::Leaf { value });
    let left = build_node(nodes, features, targets, &left_indices, depth + 1, params);
    let right = build_node(nodes, features, targets, &right_indices, depth + 1, params);
    nodes[node_index] = Node::Split {
        feature: split.feature,
        threshold: split.threshold,
        left,
        right,
    };
    node_index
}

/// Best variance-reduction split over all features, None when no split
/// improves on the parent
///
/// Ties resolve to the first candidate in (feature, threshold) order, so
/// the result is deterministic for a given sample set.
fn best_split(
    features: &ArrayView2<f64>,
    targets: &ArrayView1<f64>,
    indices: &[usize],
    min_samples_leaf: usize,
) -> Option<CandidateSplit> {
    let n = indices.len();
    let n_f = n as f64;
    let total_sum: f64 = indices.iter().map(|&i| targets[i]).sum();
    let total_sumsq: f64 = indices.iter().map(|&i| targets[i] * targets[i]).sum();
    let total_sse = total_sumsq - total_sum * total_sum / n_f;

    let mut best: Option<CandidateSplit> = None;
    let mut order: Vec<(f64, f64)> = Vec::with_capacity(n);

    for feature in 0..features.ncols() {
        order.clear();
        order.extend(indices.iter().map(|&i| (features[[i, feature]], targets[i])));
        order.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

        let mut left_sum = 0.0;
        let mut left_sumsq = 0.0;
        for i in 1..n {
            let (x_prev, y_prev) = order[i - 1];
            left_sum += y_prev;
            left_sumsq += y_prev * y_prev;

            let x = order[i].0;
            if x <= x_prev {
                continue;
            }
            if i < min_samples_leaf || n - i < min_samples_leaf {
                continue;
            }

            let left_n = i as f64;
            let right_n = n_f - left_n;
            let right_sum = total_sum - left_sum;
            let right_sumsq = total_sumsq - left_sumsq;
            let left_sse = left_sumsq - left_sum * left_sum / left_n;
            let right_sse = right_sumsq - right_sum * right_sum / right_n;
            let score = total_sse - (left_sse + right_sse);

            if score > best.as_ref().map_or(1e-12, |b| b.score) {
                best = Some(CandidateSplit {
                    feature,
                    threshold: (x_prev + x) / 2.0,
                    score,
                });
            }
        }
    }

    best
}
