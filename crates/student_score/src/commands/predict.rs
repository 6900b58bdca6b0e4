//! Predict command - runs one encode, predict, present cycle for a student.

use std::path::Path;

use anyhow::Result;
use feature_encoder::encode;
use student_structs::{recommendations_for, PerformanceTier, StudentProfile};
use tracing::info;

use crate::report;

/// Runs the predict command.
///
/// # Arguments
///
/// * `model_path` - Path to the serialized estimator
/// * `columns_path` - Path to the ordered column manifest
/// * `profile` - Raw student attributes from the form
///
/// # Errors
///
/// Returns an error if an artifact fails to load or if the estimator and
/// manifest disagree on the feature set.
pub fn run(model_path: &Path, columns_path: &Path, profile: &StudentProfile) -> Result<()> {
    info!(
        model = %model_path.display(),
        columns = %columns_path.display(),
        "Predicting CGPA"
    );

    let (model, manifest) = super::load_artifacts(model_path, columns_path)?;

    let record = encode(profile, &manifest);
    let score = model.predict(&record)?;
    let tier = PerformanceTier::from_score(score);
    let recommendations = recommendations_for(profile);
    let importance = model.importance(&manifest)?;

    report::render_prediction(profile, score, tier, &recommendations);
    report::render_importance_chart(&importance.top_k(report::TOP_FEATURES));

    Ok(())
}
