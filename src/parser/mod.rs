//! Metric record schema and provenance decoding.
//!
//! This module handles:
//! - The record and database types shared by every aggregator
//! - The versioned profile envelope written to disk
//! - Decoding provenance strings into (operation name, operation type)

pub mod provenance;
pub mod schema;

// Re-export main types
pub use provenance::{parse_op_fullname, FullnameDecoder, OpCategory, ProvenanceDecoder, TfOp};
pub use schema::{MetricsProfile, OpMetrics, OpMetricsDb};
