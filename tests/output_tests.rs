use opmetrics::output::validate_path;
use opmetrics::output::{read_profile, write_profile};
use opmetrics::parser::schema::{MetricsProfile, OpMetrics, OpMetricsDb};
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::NamedTempFile;

fn create_test_profile() -> MetricsProfile {
    MetricsProfile::new(OpMetricsDb {
        metrics_db: vec![OpMetrics {
            category: "MatMul".to_string(),
            occurrences: 3,
            time_ps: 150,
            self_time_ps: 120,
            flops: 2048,
            bytes_accessed: 512,
            ..OpMetrics::new(0, "dense/MatMul")
        }],
        total_time_ps: 200,
        total_op_time_ps: 150,
    })
}

#[test]
fn test_write_and_read_profile() {
    let profile = create_test_profile();
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    write_profile(&profile, path).unwrap();
    let loaded = read_profile(path).unwrap();

    assert_eq!(loaded.version, profile.version);
    assert_eq!(loaded.generated_at, profile.generated_at);
    assert_eq!(loaded.db, profile.db);
}

#[test]
fn test_validate_output_path_empty() {
    let result = validate_path(Path::new(""));
    assert!(result.is_err());
}

#[test]
fn test_validate_output_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let result = validate_path(temp_dir.path());
    assert!(result.is_err());
}

#[test]
fn test_write_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/profile.json");

    write_profile(&create_test_profile(), &nested_path).unwrap();

    assert!(nested_path.exists());
}

#[test]
fn test_empty_provenance_not_serialized() {
    let temp_file = NamedTempFile::new().unwrap();
    write_profile(&create_test_profile(), temp_file.path()).unwrap();

    let text = std::fs::read_to_string(temp_file.path()).unwrap();
    assert!(!text.contains("provenance"));
    assert!(text.contains("\"total_op_time_ps\": 150"));
}
