//! Flat-array regression tree storage.
//!
//! Trees are stored as parallel node arrays for cheap traversal and a
//! serialization format that is trivial to validate. Child indices are
//! local to the tree (0 = root) and must point forward, which rules out
//! cycles without a reachability pass.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structural validation errors for [`Tree`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeValidationError {
    /// Tree has no nodes.
    #[error("tree has no nodes")]
    EmptyTree,

    /// The parallel node arrays disagree on the node count.
    #[error("node arrays have inconsistent lengths")]
    LengthMismatch,

    /// A child pointer references an out-of-bounds node.
    #[error("node {node} {side} child {child} is out of bounds ({n_nodes} nodes)")]
    ChildOutOfBounds {
        node: usize,
        side: &'static str,
        child: u32,
        n_nodes: usize,
    },

    /// A child pointer does not point past its parent.
    #[error("node {node} {side} child {child} does not point forward")]
    ChildNotForward {
        node: usize,
        side: &'static str,
        child: u32,
    },

    /// A split references a feature the model does not have.
    #[error("node {node} splits on feature {feature} but the model has {n_features} features")]
    SplitFeatureOutOfBounds {
        node: usize,
        feature: u32,
        n_features: usize,
    },
}

/// A single regression tree stored as parallel node arrays.
///
/// Every array has one entry per node. Leaf nodes are flagged in `is_leaf`
/// and read their output from `leaf_values`; their split and child entries
/// are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Tree {
    pub split_indices: Vec<u32>,
    pub split_thresholds: Vec<f32>,
    pub left_children: Vec<u32>,
    pub right_children: Vec<u32>,
    pub is_leaf: Vec<bool>,
    pub leaf_values: Vec<f32>,
}

impl Tree {
    /// Creates a single-leaf tree that always predicts `value`.
    #[must_use]
    pub fn leaf(value: f32) -> Self {
        Self {
            split_indices: vec![0],
            split_thresholds: vec![0.0],
            left_children: vec![0],
            right_children: vec![0],
            is_leaf: vec![true],
            leaf_values: vec![value],
        }
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn n_nodes(&self) -> usize {
        self.split_indices.len()
    }

    /// Validates the tree structure against the model's feature count.
    ///
    /// # Errors
    ///
    /// Returns the first structural problem found: inconsistent array
    /// lengths, out-of-bounds or non-forward child pointers, or a split on
    /// a feature the model does not have.
    pub fn validate(&self, n_features: usize) -> Result<(), TreeValidationError> {
        let n_nodes = self.n_nodes();
        if n_nodes == 0 {
            return Err(TreeValidationError::EmptyTree);
        }

        if self.split_thresholds.len() != n_nodes
            || self.left_children.len() != n_nodes
            || self.right_children.len() != n_nodes
            || self.is_leaf.len() != n_nodes
            || self.leaf_values.len() != n_nodes
        {
            return Err(TreeValidationError::LengthMismatch);
        }

        for node in 0..n_nodes {
            if self.is_leaf[node] {
                continue;
            }

            let feature = self.split_indices[node];
            if feature as usize >= n_features {
                return Err(TreeValidationError::SplitFeatureOutOfBounds {
                    node,
                    feature,
                    n_features,
                });
            }

            for (side, child) in [
                ("left", self.left_children[node]),
                ("right", self.right_children[node]),
            ] {
                if child as usize >= n_nodes {
                    return Err(TreeValidationError::ChildOutOfBounds {
                        node,
                        side,
                        child,
                        n_nodes,
                    });
                }
                if child as usize <= node {
                    return Err(TreeValidationError::ChildNotForward { node, side, child });
                }
            }
        }

        Ok(())
    }

    /// Traverses the tree for one feature row and returns the leaf value.
    ///
    /// Callers must have validated the tree and checked that `row` covers
    /// every split feature; both hold for trees inside a loaded model.
    #[must_use]
    pub fn predict_row(&self, row: &[f32]) -> f32 {
        let mut node = 0;
        while !self.is_leaf[node] {
            let feature = self.split_indices[node] as usize;
            node = if row[feature] < self.split_thresholds[node] {
                self.left_children[node] as usize
            } else {
                self.right_children[node] as usize
            };
        }
        self.leaf_values[node]
    }
}
