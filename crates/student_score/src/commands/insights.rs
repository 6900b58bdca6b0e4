//! Insights command - shows the model's ranked feature importances.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::report;

/// Runs the insights command.
///
/// # Errors
///
/// Returns an error if an artifact fails to load or if the estimator and
/// manifest disagree on the feature set.
pub fn run(model_path: &Path, columns_path: &Path) -> Result<()> {
    info!(model = %model_path.display(), "Inspecting model importances");

    let (model, manifest) = super::load_artifacts(model_path, columns_path)?;

    info!(
        trees = model.n_trees(),
        features = model.n_features(),
        "Model loaded"
    );

    let importance = model.importance(&manifest)?;
    report::render_importance_chart(&importance.top_k(report::TOP_FEATURES));

    Ok(())
}
