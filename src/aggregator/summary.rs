//! Summary statistics and top operations for a database.
//!
//! The top ops are the primary targets for optimization.

use super::idle::{idle_time_ps, idle_time_ratio};
use crate::parser::schema::OpMetricsDb;
use crate::utils::math::safe_divide;
use log::debug;
use serde::Serialize;

/// One entry of the top-ops ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopOp {
    pub module_id: u64,
    pub name: String,
    pub category: String,
    pub occurrences: u32,
    pub time_ps: u64,

    /// Percentage of the total measurement window
    pub percentage: f64,
}

/// Calculate the `top_n` operations by inclusive time
///
/// Ties are broken by name so the ranking is stable.
pub fn calculate_top_ops(db: &OpMetricsDb, top_n: usize) -> Vec<TopOp> {
    debug!(
        "Calculating top {} ops from {} records",
        top_n,
        db.metrics_db.len()
    );

    let mut ranked: Vec<_> = db.metrics_db.iter().collect();
    ranked.sort_by(|a, b| b.time_ps.cmp(&a.time_ps).then_with(|| a.name.cmp(&b.name)));

    ranked
        .into_iter()
        .take(top_n)
        .map(|m| TopOp {
            module_id: m.module_id,
            name: m.name.clone(),
            category: m.category.clone(),
            occurrences: m.occurrences,
            time_ps: m.time_ps,
            percentage: safe_divide(m.time_ps as f64, db.total_time_ps as f64) * 100.0,
        })
        .collect()
}

/// Database-wide statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DbSummary {
    pub record_count: usize,
    pub total_time_ps: u64,
    pub total_op_time_ps: u64,
    pub idle_time_ps: u64,
    pub idle_time_ratio: f64,
    pub total_flops: u64,
    pub total_bytes_accessed: u64,
}

impl DbSummary {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and the inspect command
    pub fn summary(&self) -> String {
        format!(
            "Records: {} | Total: {} ps | Ops: {} ps | Idle: {} ps ({:.1}%) | FLOPs: {} | Bytes: {}",
            self.record_count,
            self.total_time_ps,
            self.total_op_time_ps,
            self.idle_time_ps,
            self.idle_time_ratio * 100.0,
            self.total_flops,
            self.total_bytes_accessed
        )
    }
}

/// Calculate database-wide statistics
pub fn calculate_db_summary(db: &OpMetricsDb) -> DbSummary {
    DbSummary {
        record_count: db.metrics_db.len(),
        total_time_ps: db.total_time_ps,
        total_op_time_ps: db.total_op_time_ps,
        idle_time_ps: idle_time_ps(db),
        idle_time_ratio: idle_time_ratio(db),
        total_flops: db.metrics_db.iter().map(|m| m.flops).fold(0, u64::saturating_add),
        total_bytes_accessed: db
            .metrics_db
            .iter()
            .map(|m| m.bytes_accessed)
            .fold(0, u64::saturating_add),
    }
}
