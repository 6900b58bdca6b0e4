//! Rule-based study recommendations derived from the raw form inputs.
//!
//! The rules are fixed and independent of the model output: each one looks
//! only at the submitted attributes.

use crate::{CgpaTrend, StudentProfile};

/// Below this many daily academic hours the study-time rule fires.
const MIN_FOCUSED_HOURS: u8 = 4;

/// Above this many devices the distraction rule fires.
const MAX_HEALTHY_DEVICES: u8 = 3;

/// A single study recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    IncreaseStudyHours,
    ReduceDeviceUsage,
    ReviewWeakSubjects,
}

impl Recommendation {
    /// Returns the advice text shown to the student.
    #[must_use]
    pub const fn advice(self) -> &'static str {
        match self {
            Self::IncreaseStudyHours => "Increase daily academic hours.",
            Self::ReduceDeviceUsage => "Reduce device usage for better focus.",
            Self::ReviewWeakSubjects => "Review weak subjects and revise regularly.",
        }
    }
}

impl core::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.advice())
    }
}

/// Evaluates every recommendation rule against a profile.
///
/// Each rule triggers independently; a profile that trips all three rules
/// receives all three recommendations, and a profile that trips none
/// receives an empty list.
#[must_use]
pub fn recommendations_for(profile: &StudentProfile) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if profile.academic_hours < MIN_FOCUSED_HOURS {
        recommendations.push(Recommendation::IncreaseStudyHours);
    }

    if profile.devices > MAX_HEALTHY_DEVICES {
        recommendations.push(Recommendation::ReduceDeviceUsage);
    }

    if profile.cgpa_trend == CgpaTrend::Decrease {
        recommendations.push(Recommendation::ReviewWeakSubjects);
    }

    recommendations
}
