//! Student Academic Performance Predictor
//!
//! A machine learning-based tool for predicting a student's CGPA from
//! study-habit attributes.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use student_score::commands;
use student_structs::{CgpaTrend, Gender, StudentProfile, StudyYear};
use tracing_subscriber::EnvFilter;

/// Student Academic Performance Predictor
#[derive(Parser)]
#[command(name = "student-score")]
#[command(about = "ML-based CGPA prediction for student academic performance")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the serialized estimator (overrides STUDENT_MODEL_PATH)
    #[arg(long, global = true)]
    model: Option<PathBuf>,

    /// Path to the ordered column manifest (overrides MODEL_COLUMNS_PATH)
    #[arg(long, global = true)]
    columns: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict the CGPA for a single student
    Predict {
        /// Student gender
        #[arg(short, long, value_enum)]
        gender: Gender,

        /// Number of devices the student uses (1-5)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        devices: u8,

        /// Academic hours per day (1-15)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=15))]
        academic_hours: u8,

        /// Current study year
        #[arg(short, long, value_enum)]
        study_year: StudyYear,

        /// Recent CGPA trend
        #[arg(short, long, value_enum)]
        cgpa_trend: CgpaTrend,
    },

    /// Show the model's ranked feature importances
    Insights,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = config::Config::from_env();
    let model_path = cli.model.unwrap_or(config.model_path);
    let columns_path = cli.columns.unwrap_or(config.columns_path);

    match cli.command {
        Commands::Predict {
            gender,
            devices,
            academic_hours,
            study_year,
            cgpa_trend,
        } => {
            let profile = StudentProfile {
                gender,
                devices,
                academic_hours,
                study_year,
                cgpa_trend,
            };
            commands::predict::run(&model_path, &columns_path, &profile)?;
        }
        Commands::Insights => {
            commands::insights::run(&model_path, &columns_path)?;
        }
    }

    Ok(())
}
