//! Terminal presentation of prediction results.
//!
//! The core hands this module well-formed data only: a numeric score, a
//! tier, recommendation strings, and an ordered list of (column, weight)
//! pairs. Everything here is formatting.

use student_structs::{PerformanceTier, Recommendation, StudentProfile};
use tracing::info;

/// How many features the importance chart shows.
pub const TOP_FEATURES: usize = 10;

/// Width of the longest importance bar, in characters.
const BAR_WIDTH: usize = 40;

/// Renders the prediction result, explanation, and recommendations.
pub fn render_prediction(
    profile: &StudentProfile,
    score: f32,
    tier: PerformanceTier,
    recommendations: &[Recommendation],
) {
    info!("=== Prediction ===");
    info!("Predicted CGPA: {score:.2}");
    info!("Performance Level: {tier}");
    info!("Why this CGPA?");
    info!(
        "The model prediction is influenced mainly by Academic Hours ({}) and CGPA Trend ({}).",
        profile.academic_hours, profile.cgpa_trend
    );

    info!("=== Recommendations ===");
    if recommendations.is_empty() {
        info!("Keep up the current study habits.");
    } else {
        for recommendation in recommendations {
            info!("  {recommendation}");
        }
    }
}

/// Renders a horizontal bar chart of ranked feature importances.
///
/// Bars are scaled against the highest weight in the list, so the top
/// feature always spans the full width.
pub fn render_importance_chart(ranked: &[(String, f32)]) {
    info!("=== Model Insights ===");

    let max_weight = match ranked.first() {
        Some((_, weight)) => *weight,
        None => {
            info!("No importance weights to display");
            return;
        }
    };

    for (column, weight) in ranked {
        let bar = "#".repeat(bar_len(*weight, max_weight));
        info!("  {:>16} | {:<width$} {:.3}", column, bar, weight, width = BAR_WIDTH);
    }
}

/// Scales a weight into a bar length relative to the chart maximum.
fn bar_len(weight: f32, max_weight: f32) -> usize {
    if max_weight <= 0.0 {
        return 0;
    }
    ((weight / max_weight) * BAR_WIDTH as f32).round() as usize
}
