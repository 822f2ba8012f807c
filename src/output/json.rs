//! JSON profile reader and writer.
//!
//! Writes `MetricsProfile` envelopes with pretty formatting and reads them
//! back with a schema version check.

use super::validate_path;
use crate::parser::schema::{MetricsProfile, OpMetrics};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write a profile to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let profile = MetricsProfile::new(coarse_db);
/// write_profile(&profile, "coarse.json")?;
/// ```
pub fn write_profile(profile: &MetricsProfile, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing profile to: {}", output_path.display());

    validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, profile)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    debug!(
        "Profile written ({} records)",
        profile.db.metrics_db.len()
    );

    Ok(())
}

/// Read a profile from a JSON file
///
/// # Errors
/// * `OutputError::ReadFailed` - File read error
/// * `OutputError::SerializationFailed` - JSON parse error
/// * `OutputError::IncompatibleVersion` - Profile written by another schema version
pub fn read_profile(input_path: impl AsRef<Path>) -> Result<MetricsProfile, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading profile from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::ReadFailed)?;
    let profile: MetricsProfile = serde_json::from_reader(BufReader::new(file))?;

    if profile.version != SCHEMA_VERSION {
        return Err(OutputError::IncompatibleVersion {
            expected: SCHEMA_VERSION.to_string(),
            found: profile.version,
        });
    }

    debug!(
        "Profile loaded: version {}, {} records",
        profile.version,
        profile.db.metrics_db.len()
    );

    Ok(profile)
}

/// Read a JSON array of raw records
///
/// Missing fields default to zero / empty.
pub fn read_records(input_path: impl AsRef<Path>) -> Result<Vec<OpMetrics>, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading raw records from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::ReadFailed)?;
    let records: Vec<OpMetrics> = serde_json::from_reader(BufReader::new(file))?;

    debug!("Loaded {} raw records", records.len());

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::OpMetricsDb;
    use tempfile::NamedTempFile;

    #[test]
    fn test_version_mismatch_rejected() {
        let mut profile = MetricsProfile::new(OpMetricsDb::new());
        profile.version = "0.0.1".to_string();

        let temp_file = NamedTempFile::new().unwrap();
        write_profile(&profile, temp_file.path()).unwrap();

        let err = read_profile(temp_file.path()).unwrap_err();
        assert!(matches!(err, OutputError::IncompatibleVersion { .. }));
    }

    #[test]
    fn test_read_records() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"[{{"module_id": 1, "name": "a", "time_ps": 5}}, {{"name": "IDLE"}}]"#
        )
        .unwrap();

        let records = read_records(temp_file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].time_ps, 5);
        assert_eq!(records[1].module_id, 0);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_records("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, OutputError::ReadFailed(_)));
    }
}
