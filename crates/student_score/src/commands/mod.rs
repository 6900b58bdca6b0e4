//! CLI command implementations.

pub mod insights;
pub mod predict;

use std::path::Path;

use anyhow::{Context, Result};
use cgpa_model::CgpaModel;
use feature_encoder::ColumnManifest;

/// Loads both model artifacts, failing fast with the offending file named.
///
/// Both files are loaded once per invocation and treated as immutable for
/// the rest of the run.
///
/// # Errors
///
/// Returns an error if either artifact cannot be loaded or validated.
pub fn load_artifacts(
    model_path: &Path,
    columns_path: &Path,
) -> Result<(CgpaModel, ColumnManifest)> {
    let model = CgpaModel::load(model_path).context("loading estimator artifact")?;
    let manifest = ColumnManifest::load(columns_path).context("loading column manifest")?;
    Ok((model, manifest))
}
