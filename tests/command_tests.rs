use opmetrics::commands::{
    execute_derive, execute_ingest, execute_merge, validate_args, DeriveArgs, IngestArgs,
    InspectArgs, MergeArgs,
};
use opmetrics::output::read_profile;
use opmetrics::utils::config::IDLE_OP_NAME;
use std::path::PathBuf;

#[test]
fn test_validate_inspect_args_valid() {
    let args = InspectArgs {
        input: PathBuf::from("coarse.json"),
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_inspect_args_top_zero() {
    let args = InspectArgs {
        top: 0,
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_inspect_args_top_too_large() {
    let args = InspectArgs {
        top: 2000,
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_ingest_args_empty_input() {
    let args = IngestArgs {
        input: PathBuf::new(),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_derive_args_same_file() {
    let args = DeriveArgs {
        input: PathBuf::from("db.json"),
        output: PathBuf::from("db.json"),
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_merge_args() {
    assert!(validate_args(&MergeArgs::default()).is_err());

    let args = MergeArgs {
        inputs: vec![PathBuf::from("a.json"), PathBuf::from("b.json")],
        output: PathBuf::from("a.json"),
    };
    assert!(validate_args(&args).is_err());

    let args = MergeArgs {
        inputs: vec![PathBuf::from("a.json"), PathBuf::from("b.json")],
        output: PathBuf::from("merged.json"),
    };
    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_ingest_derive_merge_pipeline() {
    let temp_dir = tempfile::tempdir().unwrap();
    let records_path = temp_dir.path().join("records.json");
    std::fs::write(
        &records_path,
        r#"[
            {"module_id": 1, "name": "fusion.1", "category": "fusion", "provenance": "net/Relu:Relu",
             "occurrences": 1, "time_ps": 40, "self_time_ps": 40},
            {"module_id": 1, "name": "fusion.1", "provenance": "net/Relu:Relu",
             "occurrences": 1, "time_ps": 40, "self_time_ps": 40},
            {"module_id": 1, "name": "copy.2", "provenance": "net/Relu:Relu",
             "occurrences": 1, "time_ps": 20, "self_time_ps": 20}
        ]"#,
    )
    .unwrap();

    let fine_path = temp_dir.path().join("fine.json");
    let ingest = IngestArgs {
        input: records_path,
        output: fine_path.clone(),
        total_time_ps: 200,
        add_idle: true,
    };
    validate_args(&ingest).unwrap();
    execute_ingest(&ingest).unwrap();

    let fine = read_profile(&fine_path).unwrap().db;
    assert_eq!(fine.metrics_db.len(), 3);
    assert_eq!(fine.total_op_time_ps, 100);
    assert_eq!(fine.get(0, IDLE_OP_NAME).unwrap().time_ps, 100);

    let coarse_path = temp_dir.path().join("coarse.json");
    execute_derive(&DeriveArgs {
        input: fine_path.clone(),
        output: coarse_path.clone(),
    })
    .unwrap();

    let coarse = read_profile(&coarse_path).unwrap().db;
    assert_eq!(coarse.metrics_db.len(), 2);
    let relu = coarse.get(0, "net/Relu").unwrap();
    assert_eq!(relu.category, "Relu");
    assert_eq!(relu.occurrences, 2);
    assert_eq!(relu.time_ps, 100);
    assert_eq!(coarse.total_time_ps, 200);

    let merged_path = temp_dir.path().join("merged.json");
    execute_merge(&MergeArgs {
        inputs: vec![coarse_path.clone(), coarse_path],
        output: merged_path.clone(),
    })
    .unwrap();

    let merged = read_profile(&merged_path).unwrap().db;
    assert_eq!(merged.get(0, "net/Relu").unwrap().time_ps, 200);
    assert_eq!(merged.total_time_ps, 200);
    assert_eq!(merged.total_op_time_ps, 200);
}

#[test]
fn test_ingest_does_not_duplicate_idle_record() {
    let temp_dir = tempfile::tempdir().unwrap();
    let records_path = temp_dir.path().join("records.json");
    std::fs::write(
        &records_path,
        r#"[
            {"module_id": 1, "name": "fusion.1", "provenance": "net/Relu:Relu",
             "occurrences": 1, "time_ps": 60, "self_time_ps": 60},
            {"module_id": 0, "name": "IDLE", "category": "IDLE",
             "occurrences": 1, "time_ps": 40, "self_time_ps": 40}
        ]"#,
    )
    .unwrap();

    let fine_path = temp_dir.path().join("fine.json");
    execute_ingest(&IngestArgs {
        input: records_path,
        output: fine_path.clone(),
        total_time_ps: 100,
        add_idle: true,
    })
    .unwrap();

    let fine = read_profile(&fine_path).unwrap().db;
    let idle_count = fine
        .metrics_db
        .iter()
        .filter(|m| m.key() == (0, IDLE_OP_NAME))
        .count();
    assert_eq!(fine.metrics_db.len(), 2);
    assert_eq!(idle_count, 1);
    assert_eq!(fine.get(0, IDLE_OP_NAME).unwrap().time_ps, 40);
    assert_eq!(fine.total_op_time_ps, 60);
}
