//! Identity-keyed insertion into an `OpMetricsDb`.
//!
//! A database never holds two records with the same `(module_id, name)`.
//! The builder enforces this with a lookup index that lives only as long as
//! the builder itself and is never written into the database.

use crate::parser::schema::{OpMetrics, OpMetricsDb};
use crate::utils::error::AggregateError;
use log::debug;
use std::collections::HashMap;

/// Find-or-create builder over a database it populates from empty
///
/// **Public** - used directly for raw ingestion and composed by the
/// derived and merge builders
#[derive(Debug)]
pub struct OpMetricsDbBuilder<'a> {
    db: &'a mut OpMetricsDb,

    /// module_id -> name -> position in `db.metrics_db`
    index: HashMap<u64, HashMap<String, usize>>,
}

impl<'a> OpMetricsDbBuilder<'a> {
    /// Attach a builder to an empty database
    ///
    /// # Errors
    /// * `AggregateError::NonEmptyDatabase` - the database already has records
    pub fn new(db: &'a mut OpMetricsDb) -> Result<Self, AggregateError> {
        if !db.metrics_db.is_empty() {
            return Err(AggregateError::NonEmptyDatabase {
                records: db.metrics_db.len(),
            });
        }

        Ok(Self {
            db,
            index: HashMap::new(),
        })
    }

    /// Return the record for `(module_id, name)`, appending a zeroed one if absent
    ///
    /// Repeated calls with the same key always resolve to the same record.
    pub fn find_or_create(&mut self, module_id: u64, name: &str) -> &mut OpMetrics {
        let by_name = self.index.entry(module_id).or_default();

        let position = match by_name.get(name) {
            Some(&position) => position,
            None => {
                let position = self.db.metrics_db.len();
                self.db.metrics_db.push(OpMetrics::new(module_id, name));
                by_name.insert(name.to_string(), position);
                position
            }
        };

        &mut self.db.metrics_db[position]
    }

    /// Accumulate one raw measurement into its record
    ///
    /// Counters are summed since every raw record is a separate execution.
    /// Category and provenance are taken from the first record that has them.
    pub fn ingest(&mut self, raw: &OpMetrics) -> &mut OpMetrics {
        let metrics = self.find_or_create(raw.module_id, &raw.name);

        if metrics.category.is_empty() {
            metrics.category.clone_from(&raw.category);
        }
        if metrics.provenance.is_empty() {
            metrics.provenance.clone_from(&raw.provenance);
        }

        metrics.occurrences = metrics.occurrences.saturating_add(raw.occurrences);
        metrics.time_ps = metrics.time_ps.saturating_add(raw.time_ps);
        metrics.self_time_ps = metrics.self_time_ps.saturating_add(raw.self_time_ps);
        metrics.flops = metrics.flops.saturating_add(raw.flops);
        metrics.bytes_accessed = metrics.bytes_accessed.saturating_add(raw.bytes_accessed);

        metrics
    }

    /// Number of distinct records created so far
    pub fn len(&self) -> usize {
        self.db.metrics_db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.metrics_db.is_empty()
    }

    /// Set the measurement window totals of the target database
    pub fn set_totals(&mut self, total_time_ps: u64, total_op_time_ps: u64) {
        debug!(
            "Setting totals: total_time_ps={} total_op_time_ps={}",
            total_time_ps, total_op_time_ps
        );
        self.db.total_time_ps = total_time_ps;
        self.db.total_op_time_ps = total_op_time_ps;
    }
}
