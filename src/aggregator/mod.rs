//! Aggregation of operation metrics into deduplicated databases.
//!
//! This module provides:
//! - Identity-keyed find-or-create insertion (`builder`)
//! - Raw record ingestion into a fine-grained database (`ingest`)
//! - Fine-to-coarse rollups keyed by provenance (`derived`)
//! - Idle time computation (`idle`)
//! - Merging independently built shard databases (`merge`)
//! - Top-op and summary statistics (`summary`)

pub mod builder;
pub mod derived;
pub mod idle;
pub mod ingest;
pub mod merge;
pub mod summary;

// Re-export main types and functions
pub use builder::OpMetricsDbBuilder;
pub use derived::{build_coarse_from_fine, build_coarse_from_fine_with, combine_metrics, DerivedDbBuilder};
pub use idle::{add_idle_op, idle_time_ps, idle_time_ratio};
pub use ingest::build_fine_db;
pub use merge::merge_shards;
pub use summary::{calculate_db_summary, calculate_top_ops, DbSummary, TopOp};
