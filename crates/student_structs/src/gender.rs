use serde::{Deserialize, Serialize};

/// Student gender as offered by the input form.
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
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Binary indicator the model was trained with (Male = 1, Female = 0).
    #[must_use]
    pub const fn indicator(self) -> f32 {
        match self {
            Self::Male => 1.0,
            Self::Female => 0.0,
        }
    }
}
