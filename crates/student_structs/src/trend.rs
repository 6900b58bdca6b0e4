use serde::{Deserialize, Serialize};

/// Recent CGPA trend reported by the student.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Serialize,
    strum::Display,
    clap::ValueEnum,
)]
pub enum CgpaTrend {
    Increase,
    Decrease,
    None,
}

impl CgpaTrend {
    /// Ordinal code the model was trained with.
    ///
    /// Increase = 1, Decrease = 0, None = 2. These codes are an artifact of
    /// the training data and are not a one-hot encoding; the values must
    /// match the trained model exactly.
    #[must_use]
    pub const fn model_code(self) -> f32 {
        match self {
            Self::Increase => 1.0,
            Self::Decrease => 0.0,
            Self::None => 2.0,
        }
    }
}
