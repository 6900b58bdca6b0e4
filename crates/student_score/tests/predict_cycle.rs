//! End-to-end encode, predict, present cycles over real artifact files.

use std::path::PathBuf;

use cgpa_model::{CgpaModel, Tree};
use feature_encoder::{encode, ColumnManifest};
use student_score::commands;
use student_structs::{
    recommendations_for, CgpaTrend, Gender, PerformanceTier, Recommendation, StudentProfile,
    StudyYear,
};

const MANIFEST_JSON: &str = r#"["Gender","Devices","Academic Hours","CGPA Trend"]"#;

/// Writes a constant-output model plus manifest into a fresh temp dir.
fn write_artifacts(tag: &str, prediction: f32) -> (PathBuf, PathBuf) {
    let dir = std::env::temp_dir().join(format!("student_score_{}_{}", tag, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let model_path = dir.join("student_model.json");
    let columns_path = dir.join("model_columns.json");

    let model = CgpaModel::new(
        vec![Tree::leaf(prediction)],
        vec![0.10, 0.17, 0.45, 0.28],
        4,
    )
    .unwrap();
    model.save(&model_path).unwrap();
    std::fs::write(&columns_path, MANIFEST_JSON).unwrap();

    (model_path, columns_path)
}

#[test]
fn average_student_scores_good_with_no_recommendations() {
    let (model_path, columns_path) = write_artifacts("good", 3.2);

    let profile = StudentProfile {
        gender: Gender::Male,
        devices: 2,
        academic_hours: 6,
        study_year: StudyYear::Second,
        cgpa_trend: CgpaTrend::None,
    };

    let manifest = ColumnManifest::load(&columns_path).unwrap();
    let model = CgpaModel::load(&model_path).unwrap();

    let record = encode(&profile, &manifest);
    assert_eq!(record.values(), &[1.0, 2.0, 6.0, 2.0]);

    let score = model.predict(&record).unwrap();
    assert!((score - 3.2).abs() < 1e-6);
    assert_eq!(PerformanceTier::from_score(score), PerformanceTier::Good);
    assert!(recommendations_for(&profile).is_empty());
}

#[test]
fn struggling_student_gets_every_recommendation() {
    let (model_path, columns_path) = write_artifacts("struggling", 2.1);

    let profile = StudentProfile {
        gender: Gender::Female,
        devices: 5,
        academic_hours: 2,
        study_year: StudyYear::First,
        cgpa_trend: CgpaTrend::Decrease,
    };

    let manifest = ColumnManifest::load(&columns_path).unwrap();
    let model = CgpaModel::load(&model_path).unwrap();

    let record = encode(&profile, &manifest);
    assert_eq!(record.values(), &[0.0, 5.0, 2.0, 0.0]);

    let score = model.predict(&record).unwrap();
    assert_eq!(
        PerformanceTier::from_score(score),
        PerformanceTier::NeedsImprovement
    );
    assert_eq!(
        recommendations_for(&profile),
        vec![
            Recommendation::IncreaseStudyHours,
            Recommendation::ReduceDeviceUsage,
            Recommendation::ReviewWeakSubjects,
        ]
    );
}

#[test]
fn predict_command_runs_against_artifacts() {
    let (model_path, columns_path) = write_artifacts("command", 3.6);

    let profile = StudentProfile {
        gender: Gender::Male,
        devices: 1,
        academic_hours: 10,
        study_year: StudyYear::Fourth,
        cgpa_trend: CgpaTrend::Increase,
    };

    commands::predict::run(&model_path, &columns_path, &profile).unwrap();
    commands::insights::run(&model_path, &columns_path).unwrap();
}

#[test]
fn missing_artifacts_fail_fast() {
    let missing = PathBuf::from("does/not/exist.json");
    let (model_path, _) = write_artifacts("missing", 3.0);

    let profile = StudentProfile {
        gender: Gender::Male,
        devices: 2,
        academic_hours: 6,
        study_year: StudyYear::Second,
        cgpa_trend: CgpaTrend::None,
    };

    // Missing estimator
    assert!(commands::predict::run(&missing, &missing, &profile).is_err());
    // Missing manifest
    assert!(commands::predict::run(&model_path, &missing, &profile).is_err());
}

#[test]
fn manifest_estimator_disagreement_surfaces_as_error() {
    let dir = std::env::temp_dir().join(format!("student_score_mismatch_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let model_path = dir.join("student_model.json");
    let columns_path = dir.join("model_columns.json");

    // Model trained on 3 features, manifest naming 4.
    let model = CgpaModel::new(vec![Tree::leaf(3.0)], vec![0.5, 0.3, 0.2], 3).unwrap();
    model.save(&model_path).unwrap();
    std::fs::write(&columns_path, MANIFEST_JSON).unwrap();

    let profile = StudentProfile {
        gender: Gender::Male,
        devices: 2,
        academic_hours: 6,
        study_year: StudyYear::Second,
        cgpa_trend: CgpaTrend::None,
    };

    assert!(commands::predict::run(&model_path, &columns_path, &profile).is_err());
}
