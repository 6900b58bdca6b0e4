//! Per-feature importance ranking.
//!
//! Importance weights come straight from the trained artifact; they are
//! fixed per loaded model and do not vary by request.

use core::cmp::Ordering;

/// Importance weights paired with the trained column names.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureImportance {
    entries: Vec<(String, f32)>,
}

impl FeatureImportance {
    /// Pairs column names with their weights, in manifest order.
    ///
    /// Callers must pass slices of equal length; the model checks this
    /// before constructing the mapping.
    pub(crate) fn new(columns: &[String], weights: &[f32]) -> Self {
        let entries = columns
            .iter()
            .cloned()
            .zip(weights.iter().copied())
            .collect();
        Self { entries }
    }

    /// Returns all (column, weight) entries in manifest order.
    #[must_use]
    pub fn entries(&self) -> &[(String, f32)] {
        &self.entries
    }

    /// Returns the weight for a column, if the model knows it.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<f32> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, weight)| *weight)
    }

    /// Returns the `k` highest-weighted entries, descending by weight.
    ///
    /// The sort is stable: entries with equal weights keep their manifest
    /// order.
    #[must_use]
    pub fn top_k(&self, k: usize) -> Vec<(String, f32)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked.truncate(k);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn importance(pairs: &[(&str, f32)]) -> FeatureImportance {
        let columns: Vec<String> = pairs.iter().map(|(name, _)| (*name).to_string()).collect();
        let weights: Vec<f32> = pairs.iter().map(|(_, weight)| *weight).collect();
        FeatureImportance::new(&columns, &weights)
    }

    #[test]
    fn test_top_k_sorts_descending() {
        let ranked = importance(&[("a", 0.1), ("b", 0.6), ("c", 0.3)]).top_k(3);
        let names: Vec<&str> = ranked.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["b", "c", "a"]);
        assert!(ranked.windows(2).all(|pair| pair[0].1 >= pair[1].1));
    }

    #[test]
    fn test_top_k_truncates() {
        let many: Vec<(String, f32)> = (0..15).map(|i| (format!("f{i}"), i as f32)).collect();
        let columns: Vec<String> = many.iter().map(|(name, _)| name.clone()).collect();
        let weights: Vec<f32> = many.iter().map(|(_, weight)| *weight).collect();
        let ranked = FeatureImportance::new(&columns, &weights).top_k(10);
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0].0, "f14");
    }

    #[test]
    fn test_top_k_ties_keep_manifest_order() {
        let ranked = importance(&[("a", 0.2), ("b", 0.5), ("c", 0.2), ("d", 0.2)]).top_k(4);
        let names: Vec<&str> = ranked.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["b", "a", "c", "d"]);
    }

    #[test]
    fn test_get_by_column_name() {
        let imp = importance(&[("a", 0.2), ("b", 0.5)]);
        assert_eq!(imp.get("b"), Some(0.5));
        assert_eq!(imp.get("z"), None);
    }
}
