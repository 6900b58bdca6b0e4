//! Common structs for student attributes shared across crates.

mod gender;
mod profile;
mod recommend;
mod study_year;
mod tier;
mod trend;

pub use gender::*;
pub use profile::*;
pub use recommend::*;
pub use study_year::*;
pub use tier::*;
pub use trend::*;
