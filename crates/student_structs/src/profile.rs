use serde::{Deserialize, Serialize};

use crate::{CgpaTrend, Gender, StudyYear};

/// Raw student attributes from a single form submission.
///
/// Built fresh per submission and discarded once the prediction has been
/// rendered. All fields come from fixed enumerated or bounded controls, so
/// no further validation happens downstream.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct StudentProfile {
    /// Student gender
    pub gender: Gender,

    /// Number of devices the student uses (1-5)
    pub devices: u8,

    /// Academic hours per day (1-15)
    pub academic_hours: u8,

    /// Current study year (recorded, not fed to the model)
    pub study_year: StudyYear,

    /// Recent CGPA trend
    pub cgpa_trend: CgpaTrend,
}
