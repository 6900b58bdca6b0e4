//! Feature encoder crate for the student CGPA model.
//!
//! This crate turns raw form inputs into a single model-ready record whose
//! columns exactly match the ordered column manifest the model was trained
//! on. Columns the manifest names but the input does not produce (unlisted
//! one-hot categories) are filled with zero; columns the input produces but
//! the manifest does not name are dropped.

use std::path::{Path, PathBuf};

use student_structs::StudentProfile;
use thiserror::Error;

/// Column names the trained model knows the semantic input fields by.
pub mod columns {
    /// Binary gender indicator.
    pub const GENDER: &str = "Gender";
    /// Device count, passed through unchanged.
    pub const DEVICES: &str = "Devices";
    /// Daily academic hours, passed through unchanged.
    pub const ACADEMIC_HOURS: &str = "Academic Hours";
    /// Ordinal CGPA trend code.
    pub const CGPA_TREND: &str = "CGPA Trend";
}

/// Errors that can occur while loading the column manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Manifest file could not be read.
    #[error("failed to read column manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest file is not a JSON array of column names.
    #[error("failed to parse column manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Manifest names no columns.
    #[error("column manifest is empty")]
    Empty,

    /// Manifest names the same column twice.
    #[error("column manifest lists '{column}' more than once")]
    DuplicateColumn { column: String },
}

/// The ordered list of column names the model was trained on.
///
/// Defines the exact shape of valid model input: every encoded record has
/// one value per manifest column, in manifest order. Loaded once at startup
/// and treated as immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnManifest {
    columns: Vec<String>,
}

impl ColumnManifest {
    /// Builds a manifest from an ordered column list.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty or contains duplicates.
    pub fn from_columns(columns: Vec<String>) -> Result<Self, ManifestError> {
        if columns.is_empty() {
            return Err(ManifestError::Empty);
        }

        for (i, column) in columns.iter().enumerate() {
            if columns[..i].contains(column) {
                return Err(ManifestError::DuplicateColumn {
                    column: column.clone(),
                });
            }
        }

        Ok(Self { columns })
    }

    /// Loads the manifest from a JSON file containing an array of names.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a JSON string
    /// array, or fails [`Self::from_columns`] validation. A load failure is
    /// fatal for the application: no prediction can be made without the
    /// manifest.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let data = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let columns: Vec<String> =
            serde_json::from_str(&data).map_err(|source| ManifestError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_columns(columns)
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the manifest names no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the ordered column names.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the position of a column, if the manifest names it.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// A single row of feature values aligned to a [`ColumnManifest`].
///
/// Value order matches the manifest column order exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedRecord {
    values: Vec<f32>,
}

impl EncodedRecord {
    /// Returns the feature values in manifest order.
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Returns the number of feature values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the record holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Encodes a student profile into a record aligned to the manifest.
///
/// The semantic fields resolve to their trained column names (see
/// [`columns`]); gender becomes a binary indicator, the CGPA trend its
/// ordinal training code, and the bounded integers pass through unchanged.
/// Study year is deliberately not encoded: the model was never trained on
/// it.
#[must_use]
pub fn encode(profile: &StudentProfile, manifest: &ColumnManifest) -> EncodedRecord {
    let named = named_features(profile);
    align(&named, manifest)
}

/// Resolves each semantic input field to its trained column name and value.
fn named_features(profile: &StudentProfile) -> Vec<(&'static str, f32)> {
    vec![
        (columns::GENDER, profile.gender.indicator()),
        (columns::DEVICES, f32::from(profile.devices)),
        (columns::ACADEMIC_HOURS, f32::from(profile.academic_hours)),
        (columns::CGPA_TREND, profile.cgpa_trend.model_code()),
    ]
}

/// Aligns named values to the manifest column order.
///
/// Manifest columns without a matching named value are zero-filled (this is
/// how unlisted one-hot categories default to zero); named values without a
/// manifest column are dropped.
#[must_use]
pub fn align(values: &[(&str, f32)], manifest: &ColumnManifest) -> EncodedRecord {
    let aligned = manifest
        .columns()
        .iter()
        .map(|column| {
            values
                .iter()
                .find(|(name, _)| name == column)
                .map_or(0.0, |(_, value)| *value)
        })
        .collect();

    EncodedRecord { values: aligned }
}
