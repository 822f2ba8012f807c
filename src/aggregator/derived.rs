//! Fine-to-coarse rollups.
//!
//! A fine-grained database (one record per compiled kernel) is re-grouped
//! into a coarse-grained one (one record per named operation) using the
//! provenance each fine record carries. Coarse records live under module 0.

use super::builder::OpMetricsDbBuilder;
use crate::parser::provenance::{FullnameDecoder, ProvenanceDecoder};
use crate::parser::schema::{OpMetrics, OpMetricsDb};
use crate::utils::config::{IDLE_CATEGORY, IDLE_OP_NAME, NO_MODULE_ID};
use crate::utils::error::AggregateError;
use log::{debug, warn};

/// Combine `source` into `target` with the rollup rules
///
/// Occurrences take the max: constituents of one coarse op run in lock-step,
/// so the busiest one is the op's count. All other counters are summed.
/// Identity, category and provenance are left untouched.
pub fn combine_metrics(target: &mut OpMetrics, source: &OpMetrics) {
    target.occurrences = target.occurrences.max(source.occurrences);
    target.time_ps = target.time_ps.saturating_add(source.time_ps);
    target.self_time_ps = target.self_time_ps.saturating_add(source.self_time_ps);
    target.flops = target.flops.saturating_add(source.flops);
    target.bytes_accessed = target.bytes_accessed.saturating_add(source.bytes_accessed);
}

/// Builder that folds fine-grained records into coarse-grained ones
///
/// **Public** - composes `OpMetricsDbBuilder` rather than extending it
#[derive(Debug)]
pub struct DerivedDbBuilder<'a> {
    builder: OpMetricsDbBuilder<'a>,
}

impl<'a> DerivedDbBuilder<'a> {
    /// Attach to an empty coarse database
    ///
    /// # Errors
    /// * `AggregateError::NonEmptyDatabase` - the database already has records
    pub fn new(db: &'a mut OpMetricsDb) -> Result<Self, AggregateError> {
        Ok(Self {
            builder: OpMetricsDbBuilder::new(db)?,
        })
    }

    /// Fold `source` into the coarse record named `target_name`
    ///
    /// The first category seen for a coarse record sticks.
    pub fn fold(&mut self, target_name: &str, target_category: &str, source: &OpMetrics) {
        let coarse = self.builder.find_or_create(NO_MODULE_ID, target_name);

        if coarse.category.is_empty() {
            coarse.category = target_category.to_string();
        }

        combine_metrics(coarse, source);
    }

    /// Set the measurement window totals of the coarse database
    pub fn set_totals(&mut self, total_time_ps: u64, total_op_time_ps: u64) {
        self.builder.set_totals(total_time_ps, total_op_time_ps);
    }
}

/// Build a coarse-grained database from a fine-grained one
///
/// Uses the default fullname decoder for provenance strings.
///
/// # Example
/// ```ignore
/// let coarse = build_coarse_from_fine(&fine)?;
/// println!("{} coarse ops", coarse.metrics_db.len());
/// ```
pub fn build_coarse_from_fine(fine_db: &OpMetricsDb) -> Result<OpMetricsDb, AggregateError> {
    build_coarse_from_fine_with(fine_db, &FullnameDecoder)
}

/// Build a coarse-grained database with a caller-supplied provenance decoder
///
/// Records with empty provenance are expected to be the synthetic idle
/// record and are folded under `("IDLE", "IDLE")`. The measurement totals
/// are copied from `fine_db` unchanged.
pub fn build_coarse_from_fine_with<D>(
    fine_db: &OpMetricsDb,
    decoder: &D,
) -> Result<OpMetricsDb, AggregateError>
where
    D: ProvenanceDecoder + ?Sized,
{
    debug!(
        "Deriving coarse database from {} fine records",
        fine_db.metrics_db.len()
    );

    let mut coarse_db = OpMetricsDb::new();
    {
        let mut builder = DerivedDbBuilder::new(&mut coarse_db)?;

        for fine in &fine_db.metrics_db {
            if !fine.provenance.is_empty() {
                let (name, op_type) = decoder.decode(&fine.provenance);
                builder.fold(&name, &op_type, fine);
            } else {
                if fine.name != IDLE_OP_NAME {
                    warn!(
                        "Record {}:{} has no provenance; folding it into {}",
                        fine.module_id, fine.name, IDLE_OP_NAME
                    );
                }
                builder.fold(IDLE_OP_NAME, IDLE_CATEGORY, fine);
            }
        }

        builder.set_totals(fine_db.total_time_ps, fine_db.total_op_time_ps);
    }

    debug!("Derived {} coarse records", coarse_db.metrics_db.len());

    Ok(coarse_db)
}
