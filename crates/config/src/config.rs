use std::path::PathBuf;

/// Default location of the serialized estimator.
pub const DEFAULT_MODEL_PATH: &str = "artifacts/student_model.json";

/// Default location of the ordered column manifest.
pub const DEFAULT_COLUMNS_PATH: &str = "artifacts/model_columns.json";

/// Model artifact locations resolved from the environment.
///
/// Resolved once at startup and passed around explicitly so tests can
/// substitute their own artifact paths.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the serialized estimator
    pub model_path: PathBuf,

    /// Path to the ordered column manifest
    pub columns_path: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `STUDENT_MODEL_PATH`: path to the estimator artifact (default: `artifacts/student_model.json`)
    /// - `MODEL_COLUMNS_PATH`: path to the column manifest (default: `artifacts/model_columns.json`)
    #[must_use]
    pub fn from_env() -> Self {
        // Load .env file
        dotenvy::dotenv().ok();

        let model_path = std::env::var("STUDENT_MODEL_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH), PathBuf::from);

        let columns_path = std::env::var("MODEL_COLUMNS_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_COLUMNS_PATH), PathBuf::from);

        Self {
            model_path,
            columns_path,
        }
    }
}
