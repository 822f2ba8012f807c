//! Record and database schema definitions.
//!
//! These types are both the in-memory model used by the builders and the
//! structure of the JSON files we read and write. Missing fields in input
//! JSON default to zero / empty so raw record dumps can stay sparse.

use crate::utils::config::SCHEMA_VERSION;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Metrics for a single operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpMetrics {
    /// Compiled module the operation came from (0 = no specific module)
    pub module_id: u64,

    /// Operation name, unique within its module
    pub name: String,

    /// Classification label, usually the operation type
    pub category: String,

    /// Number of executions this record represents
    pub occurrences: u32,

    /// Inclusive time in picoseconds
    pub time_ps: u64,

    /// Exclusive time in picoseconds
    pub self_time_ps: u64,

    /// Floating-point operations performed
    pub flops: u64,

    /// Bytes read and written
    pub bytes_accessed: u64,

    /// Encoded fullname of the coarse operation this record belongs to
    #[serde(skip_serializing_if = "String::is_empty")]
    pub provenance: String,
}

impl OpMetrics {
    /// Create an empty record for `(module_id, name)`
    pub fn new(module_id: u64, name: impl Into<String>) -> Self {
        Self {
            module_id,
            name: name.into(),
            ..Default::default()
        }
    }

    /// Identity key of this record within a database
    pub fn key(&self) -> (u64, &str) {
        (self.module_id, self.name.as_str())
    }
}

/// An ordered collection of operation metrics plus the measurement window
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpMetricsDb {
    /// Records in insertion order
    pub metrics_db: Vec<OpMetrics>,

    /// Wall-clock time covered by the measurement window
    pub total_time_ps: u64,

    /// Time attributable to known operations
    pub total_op_time_ps: u64,
}

impl OpMetricsDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.metrics_db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics_db.is_empty()
    }

    /// Find a record by identity with a linear scan.
    ///
    /// Builders keep their own index; this is for readers of a finished db.
    pub fn get(&self, module_id: u64, name: &str) -> Option<&OpMetrics> {
        self.metrics_db
            .iter()
            .find(|m| m.module_id == module_id && m.name == name)
    }
}

/// Top-level structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsProfile {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the profile was generated
    pub generated_at: String,

    /// The database itself
    pub db: OpMetricsDb,
}

impl MetricsProfile {
    /// Wrap a database with the current schema version and timestamp
    pub fn new(db: OpMetricsDb) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            db,
        }
    }
}
