//! Tests for the classifier capability

use std::io::Write;

use serde_json::json;

use super::{LinearModel, OutcomeModel};
use crate::types::MatchResult;

fn three_class_model() -> LinearModel {
    serde_json::from_value(json!({
        "feature_names": ["elo_for", "elo_against", "form_for"],
        "classes": ["W", "D", "L"],
        "coefficients": [
            [0.01, -0.01, 0.5],
            [0.0, 0.0, 0.0],
            [-0.01, 0.01, -0.5]
        ],
        "intercepts": [0.0, 0.0, 0.0]
    }))
    .unwrap()
}

#[test]
fn test_probabilities_sum_to_one() {
    let model = three_class_model();
    let probs = model.predict(&[1850.0, 1790.0, 2.4]).unwrap();
    assert_eq!(probs.len(), 3);
    let total: f64 = probs.iter().map(|(_, p)| p).sum();
    assert!((total - 1.0).abs() < 1e-9);
    assert!(probs.iter().all(|(_, p)| (0.0..=1.0).contains(p)));
}

#[test]
fn test_stronger_side_gets_higher_win_prob() {
    let model = three_class_model();
    let probs = model.predict(&[1900.0, 1600.0, 3.0]).unwrap();
    let win = probs
        .iter()
        .find(|(o, _)| *o == MatchResult::Win)
        .map(|(_, p)| *p)
        .unwrap();
    let loss = probs
        .iter()
        .find(|(o, _)| *o == MatchResult::Loss)
        .map(|(_, p)| *p)
        .unwrap();
    assert!(win > loss);
}

#[test]
fn test_two_class_artifact_omits_missing_class() {
    let model: LinearModel = serde_json::from_value(json!({
        "feature_names": ["elo_for"],
        "classes": ["W", "L"],
        "coefficients": [[0.1], [-0.1]],
        "intercepts": [0.0, 0.0]
    }))
    .unwrap();
    let probs = model.predict(&[10.0]).unwrap();
    assert_eq!(probs.len(), 2);
    assert!(probs.iter().all(|(o, _)| *o != MatchResult::Draw));
    let total: f64 = probs.iter().map(|(_, p)| p).sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn test_wrong_row_length_is_model_error() {
    let model = three_class_model();
    assert!(model.predict(&[1850.0]).is_err());
}

#[test]
fn test_coefficient_arity_mismatch_fails_validation() {
    let model: Result<LinearModel, _> = serde_json::from_value(json!({
        "feature_names": ["elo_for", "form_for"],
        "classes": ["W", "D", "L"],
        "coefficients": [[0.1], [0.0], [-0.1]],
        "intercepts": [0.0, 0.0, 0.0]
    }));
    let model = model.unwrap();
    assert!(model.validate().is_err());
}

#[test]
fn test_unknown_class_label_fails_validation() {
    let model: LinearModel = serde_json::from_value(json!({
        "feature_names": ["elo_for"],
        "classes": ["X"],
        "coefficients": [[0.1]],
        "intercepts": [0.0]
    }))
    .unwrap();
    assert!(model.validate().is_err());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let artifact = json!({
        "feature_names": ["elo_for"],
        "classes": ["W", "L"],
        "coefficients": [[0.1], [-0.1]],
        "intercepts": [0.0, 0.0]
    });
    write!(file, "{}", artifact).unwrap();

    let model = LinearModel::load(file.path()).unwrap();
    assert_eq!(model.feature_names(), &["elo_for".to_string()]);
}

#[test]
fn test_load_missing_file_fails() {
    assert!(LinearModel::load("/nonexistent/model.json").is_err());
}
