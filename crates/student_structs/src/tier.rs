use serde::{Deserialize, Serialize};

/// Qualitative performance tier derived from a predicted CGPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum PerformanceTier {
    Excellent,
    Good,
    NeedsImprovement,
}

impl PerformanceTier {
    /// Classifies a predicted CGPA into a tier.
    ///
    /// Thresholds: Excellent at 3.5 and above, Good at 3.0 and above,
    /// Needs Improvement below 3.0. Boundaries are inclusive on the
    /// higher tier.
    #[must_use]
    pub fn from_score(score: f32) -> Self {
        if score >= 3.5 {
            Self::Excellent
        } else if score >= 3.0 {
            Self::Good
        } else {
            Self::NeedsImprovement
        }
    }

    /// Returns the display string for this tier.
    #[must_use]
    pub const fn as_display_string(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl core::fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_display_string())
    }
}
