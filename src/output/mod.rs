//! Readers and writers for metrics databases.
//!
//! This module handles moving data to and from disk:
//! - JSON profiles (a versioned envelope around one database)
//! - JSON arrays of raw records

pub mod json;

// Re-export main functions
pub use json::{read_profile, read_records, write_profile};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
