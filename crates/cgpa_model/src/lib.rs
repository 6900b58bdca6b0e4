//! ML model crate for student CGPA prediction.
//!
//! This crate loads a pre-trained random-forest regressor from a JSON
//! artifact, runs inference on encoded feature records, and exposes the
//! per-feature importance weights the model was trained with. There is no
//! training path: the artifact is produced elsewhere and only consumed
//! here.

use std::path::{Path, PathBuf};

use feature_encoder::{ColumnManifest, EncodedRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod importance;
mod tree;

pub use importance::FeatureImportance;
pub use tree::{Tree, TreeValidationError};

/// Errors that can occur while loading or invoking the model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Artifact file could not be read.
    #[error("failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Artifact file is not a valid model payload.
    #[error("failed to parse model artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Artifact could not be written.
    #[error("failed to write model artifact {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Model could not be serialized into an artifact payload.
    #[error("failed to serialize model artifact {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Model declares no input features.
    #[error("model declares no input features")]
    NoFeatures,

    /// Model contains no trees.
    #[error("model contains no trees")]
    NoTrees,

    /// Importance vector length disagrees with the feature count.
    #[error("model has {n_features} features but {n_weights} importance weights")]
    ImportanceLengthMismatch { n_features: usize, n_weights: usize },

    /// An importance weight is negative.
    #[error("importance weight for feature {feature} is negative ({weight})")]
    NegativeImportance { feature: usize, weight: f32 },

    /// A tree failed structural validation.
    #[error("tree {tree} is invalid: {source}")]
    InvalidTree {
        tree: usize,
        #[source]
        source: TreeValidationError,
    },

    /// An encoded record does not match the model's feature count.
    #[error("record has {actual} features but the model expects {expected}")]
    FeatureCountMismatch { expected: usize, actual: usize },

    /// The column manifest does not match the model's feature count.
    #[error("column manifest names {manifest} columns but the model expects {expected}")]
    ManifestMismatch { expected: usize, manifest: usize },
}

/// Serialized artifact payload.
///
/// Produced by the external training pipeline; this crate only reads and
/// (for fixtures) writes it.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ModelArtifact {
    n_features: usize,
    feature_importances: Vec<f32>,
    trees: Vec<Tree>,
}

/// A loaded CGPA regression model.
///
/// Immutable once constructed: load it at startup and pass it by reference
/// into every prediction call.
#[derive(Debug, Clone)]
pub struct CgpaModel {
    trees: Vec<Tree>,
    feature_importances: Vec<f32>,
    n_features: usize,
}

impl CgpaModel {
    /// Builds a model from its parts, validating the whole structure.
    ///
    /// # Errors
    ///
    /// Returns an error if the model has no features or trees, if the
    /// importance vector disagrees with the feature count or contains
    /// negative weights, or if any tree fails structural validation.
    pub fn new(
        trees: Vec<Tree>,
        feature_importances: Vec<f32>,
        n_features: usize,
    ) -> Result<Self, ModelError> {
        if n_features == 0 {
            return Err(ModelError::NoFeatures);
        }
        if trees.is_empty() {
            return Err(ModelError::NoTrees);
        }
        if feature_importances.len() != n_features {
            return Err(ModelError::ImportanceLengthMismatch {
                n_features,
                n_weights: feature_importances.len(),
            });
        }
        if let Some((feature, weight)) = feature_importances
            .iter()
            .enumerate()
            .find(|(_, weight)| **weight < 0.0)
        {
            return Err(ModelError::NegativeImportance {
                feature,
                weight: *weight,
            });
        }
        for (index, tree) in trees.iter().enumerate() {
            tree.validate(n_features)
                .map_err(|source| ModelError::InvalidTree {
                    tree: index,
                    source,
                })?;
        }

        Ok(Self {
            trees,
            feature_importances,
            n_features,
        })
    }

    /// Loads and validates a model from a JSON artifact file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// payload fails [`Self::new`] validation. A load failure is fatal for
    /// the application.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let data = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let artifact: ModelArtifact =
            serde_json::from_str(&data).map_err(|source| ModelError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Self::new(
            artifact.trees,
            artifact.feature_importances,
            artifact.n_features,
        )
    }

    /// Writes the model to a JSON artifact file.
    ///
    /// Used for fixtures and for re-exporting models produced elsewhere.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ModelError> {
        let artifact = ModelArtifact {
            n_features: self.n_features,
            feature_importances: self.feature_importances.clone(),
            trees: self.trees.clone(),
        };

        let data =
            serde_json::to_string_pretty(&artifact).map_err(|source| ModelError::Serialize {
                path: path.to_path_buf(),
                source,
            })?;

        std::fs::write(path, data).map_err(|source| ModelError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Number of input features the model was trained on.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Number of trees in the ensemble.
    #[must_use]
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Predicts the CGPA for one encoded record.
    ///
    /// Random-forest regression: the prediction is the mean of the tree
    /// outputs.
    ///
    /// # Errors
    ///
    /// Returns an error if the record's feature count does not match the
    /// model, which indicates a manifest/estimator disagreement rather than
    /// bad user input.
    pub fn predict(&self, record: &EncodedRecord) -> Result<f32, ModelError> {
        if record.len() != self.n_features {
            return Err(ModelError::FeatureCountMismatch {
                expected: self.n_features,
                actual: record.len(),
            });
        }

        let sum: f32 = self
            .trees
            .iter()
            .map(|tree| tree.predict_row(record.values()))
            .sum();

        Ok(sum / self.trees.len() as f32)
    }

    /// Pairs the model's importance weights with the manifest columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest length disagrees with the model's
    /// feature count.
    pub fn importance(&self, manifest: &ColumnManifest) -> Result<FeatureImportance, ModelError> {
        if manifest.len() != self.n_features {
            return Err(ModelError::ManifestMismatch {
                expected: self.n_features,
                manifest: manifest.len(),
            });
        }

        Ok(FeatureImportance::new(
            manifest.columns(),
            &self.feature_importances,
        ))
    }
}

#[cfg(test)]
mod tests {
    use feature_encoder::align;

    use super::*;

    fn record(values: &[(&str, f32)], manifest: &ColumnManifest) -> EncodedRecord {
        align(values, manifest)
    }

    fn two_column_manifest() -> ColumnManifest {
        ColumnManifest::from_columns(vec!["a".to_string(), "b".to_string()]).unwrap()
    }

    #[test]
    fn test_prediction_is_mean_of_trees() {
        let model = CgpaModel::new(
            vec![Tree::leaf(2.0), Tree::leaf(3.0), Tree::leaf(4.0)],
            vec![0.5, 0.5],
            2,
        )
        .unwrap();

        let manifest = two_column_manifest();
        let prediction = model
            .predict(&record(&[("a", 1.0), ("b", 1.0)], &manifest))
            .unwrap();
        assert!((prediction - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_predict_rejects_wrong_feature_count() {
        let model = CgpaModel::new(vec![Tree::leaf(3.0)], vec![1.0, 0.0, 0.0], 3).unwrap();
        let manifest = two_column_manifest();
        let result = model.predict(&record(&[("a", 1.0)], &manifest));
        assert!(matches!(
            result,
            Err(ModelError::FeatureCountMismatch {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_new_rejects_importance_length_mismatch() {
        let result = CgpaModel::new(vec![Tree::leaf(3.0)], vec![1.0], 2);
        assert!(matches!(
            result,
            Err(ModelError::ImportanceLengthMismatch {
                n_features: 2,
                n_weights: 1
            })
        ));
    }

    #[test]
    fn test_new_rejects_negative_importance() {
        let result = CgpaModel::new(vec![Tree::leaf(3.0)], vec![0.5, -0.1], 2);
        assert!(matches!(
            result,
            Err(ModelError::NegativeImportance { feature: 1, .. })
        ));
    }

    #[test]
    fn test_new_rejects_empty_ensemble() {
        assert!(matches!(
            CgpaModel::new(vec![], vec![1.0], 1),
            Err(ModelError::NoTrees)
        ));
    }

    #[test]
    fn test_importance_pairs_manifest_columns() {
        let model = CgpaModel::new(vec![Tree::leaf(3.0)], vec![0.25, 0.75], 2).unwrap();
        let importance = model.importance(&two_column_manifest()).unwrap();
        assert_eq!(importance.get("a"), Some(0.25));
        assert_eq!(importance.get("b"), Some(0.75));
    }

    #[test]
    fn test_importance_rejects_wrong_manifest() {
        let model = CgpaModel::new(vec![Tree::leaf(3.0)], vec![1.0], 1).unwrap();
        let result = model.importance(&two_column_manifest());
        assert!(matches!(
            result,
            Err(ModelError::ManifestMismatch {
                expected: 1,
                manifest: 2
            })
        ));
    }

    #[test]
    fn test_artifact_roundtrip_through_file() {
        let model = CgpaModel::new(
            vec![Tree::leaf(2.5), Tree::leaf(3.5)],
            vec![0.4, 0.6],
            2,
        )
        .unwrap();

        let path = std::env::temp_dir().join(format!(
            "cgpa_model_roundtrip_{}.json",
            std::process::id()
        ));
        model.save(&path).unwrap();

        let loaded = CgpaModel::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.n_features(), 2);
        assert_eq!(loaded.n_trees(), 2);

        let manifest = two_column_manifest();
        let prediction = loaded
            .predict(&align(&[("a", 0.0), ("b", 0.0)], &manifest))
            .unwrap();
        assert!((prediction - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_load_missing_file() {
        let result = CgpaModel::load(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(ModelError::Io { .. })));
    }

    #[test]
    fn test_load_corrupt_payload() {
        let path = std::env::temp_dir().join(format!(
            "cgpa_model_corrupt_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{ not json ").unwrap();

        let result = CgpaModel::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ModelError::Parse { .. })));
    }
}
