use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Study year as offered by the input form.
///
/// Collected alongside the other attributes but not part of the trained
/// feature set; the encoder ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, clap::ValueEnum)]
pub enum StudyYear {
    #[value(name = "1")]
    First,
    #[value(name = "2")]
    Second,
    #[value(name = "3")]
    Third,
    #[value(name = "4")]
    Fourth,
    #[value(name = "post-graduate")]
    PostGraduate,
}

impl StudyYear {
    /// Returns the form string representation for this study year.
    #[must_use]
    pub const fn as_form_string(self) -> &'static str {
        match self {
            Self::First => "1",
            Self::Second => "2",
            Self::Third => "3",
            Self::Fourth => "4",
            Self::PostGraduate => "Post Graduate",
        }
    }

    /// Returns an iterator over all study years offered by the form.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::First,
            Self::Second,
            Self::Third,
            Self::Fourth,
            Self::PostGraduate,
        ]
        .into_iter()
    }
}

impl core::fmt::Display for StudyYear {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_form_string())
    }
}

impl FromStr for StudyYear {
    type Err = anyhow::Error;

    /// Returns the study year from a form string.
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().replace([' ', '_'], "-").as_str() {
            "1" | "first" => Ok(Self::First),
            "2" | "second" => Ok(Self::Second),
            "3" | "third" => Ok(Self::Third),
            "4" | "fourth" => Ok(Self::Fourth),
            "post-graduate" | "postgraduate" => Ok(Self::PostGraduate),
            _ => Err(anyhow::anyhow!("Invalid study year: {s}")),
        }
    }
}
