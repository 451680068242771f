//! Integration tests for CLI config parsing and util helpers.

use nabla_cli::classify::input::{validate_tsv_or_csv_file, ClassifyTrainConfig};

// ---------------------------------------------------------------------------
// validate_tsv_or_csv_file
// ---------------------------------------------------------------------------

#[test]
fn validate_tsv_file_exists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.tsv");
    std::fs::File::create(&path).unwrap();
    assert!(validate_tsv_or_csv_file(path.to_str().unwrap()).is_ok());
}

#[test]
fn validate_csv_file_exists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    std::fs::File::create(&path).unwrap();
    assert!(validate_tsv_or_csv_file(path.to_str().unwrap()).is_ok());
}

#[test]
fn validate_wrong_extension_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.txt");
    std::fs::File::create(&path).unwrap();
    assert!(validate_tsv_or_csv_file(path.to_str().unwrap()).is_err());
}

#[test]
fn validate_nonexistent_file_errors() {
    assert!(validate_tsv_or_csv_file("/nonexistent/path/data.csv").is_err());
}

// ---------------------------------------------------------------------------
// ClassifyTrainConfig defaults & serialization
// ---------------------------------------------------------------------------

#[test]
fn train_config_default_values() {
    let cfg = ClassifyTrainConfig::default();
    assert_eq!(cfg.learning_rates, vec![0.01, 0.001, 0.0001]);
    assert_eq!(cfg.num_iterations, 3000);
    assert_eq!(cfg.cost_interval, 100);
    assert_eq!(cfg.image_side, 64);
    assert_eq!(cfg.channels, 3);
    assert!(!cfg.synthetic);
    assert!(!cfg.no_report);
}

#[test]
fn train_config_serializes_to_json() {
    let cfg = ClassifyTrainConfig::default();
    let json = serde_json::to_string_pretty(&cfg).unwrap();
    assert!(json.contains("learning_rates"));
    assert!(json.contains("num_iterations"));
    assert!(json.contains("output_report"));
}

#[test]
fn train_config_round_trips_json() {
    let cfg = ClassifyTrainConfig::default();
    let json = serde_json::to_string(&cfg).unwrap();
    let cfg2: ClassifyTrainConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(cfg.learning_rates, cfg2.learning_rates);
    assert_eq!(cfg.num_iterations, cfg2.num_iterations);
    assert_eq!(cfg.output_report, cfg2.output_report);
}

#[test]
fn train_config_partial_json_falls_back_to_defaults() {
    let cfg: ClassifyTrainConfig =
        serde_json::from_str("{\"synthetic\": true, \"num_iterations\": 50}").unwrap();
    assert!(cfg.synthetic);
    assert_eq!(cfg.num_iterations, 50);
    // untouched fields keep their defaults
    assert_eq!(cfg.cost_interval, 100);
    assert_eq!(cfg.learning_rates, vec![0.01, 0.001, 0.0001]);
}

#[test]
fn train_config_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("train_config.json");
    let json = serde_json::to_string_pretty(&ClassifyTrainConfig::default()).unwrap();
    std::fs::write(&path, json).unwrap();

    let loaded: ClassifyTrainConfig =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded.num_iterations, 3000);
}
