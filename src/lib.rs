//! OpMetrics
//!
//! Deduplicated per-operation performance metrics databases.
//!
//! Raw measurement records are folded into a fine-grained database keyed by
//! `(module_id, name)`, which can then be rolled up into a coarse-grained
//! database of named operations using each record's provenance. Idle time
//! is whatever part of the measurement window no operation accounts for.
//!
//! ## Getting Started
//!
//! ```ignore
//! use opmetrics::aggregator::{build_coarse_from_fine, build_fine_db, idle_time_ratio};
//!
//! let fine = build_fine_db(&records, total_time_ps)?;
//! let coarse = build_coarse_from_fine(&fine)?;
//! println!("idle: {:.1}%", idle_time_ratio(&coarse) * 100.0);
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
