//! Raw record ingestion into a fine-grained database.

use super::builder::OpMetricsDbBuilder;
use crate::parser::schema::{OpMetrics, OpMetricsDb};
use crate::utils::config::{IDLE_OP_NAME, NO_MODULE_ID};
use crate::utils::error::AggregateError;
use log::debug;

/// Build a fine-grained database from raw measurement records
///
/// **Public** - main entry point for raw ingestion
///
/// # Arguments
/// * `records` - Raw records; repeated `(module_id, name)` keys are merged
/// * `total_time_ps` - Length of the measurement window
///
/// # Returns
/// A database whose `total_op_time_ps` is the sum of ingested self time,
/// excluding any `IDLE` record already present in the input
pub fn build_fine_db<'r, I>(records: I, total_time_ps: u64) -> Result<OpMetricsDb, AggregateError>
where
    I: IntoIterator<Item = &'r OpMetrics>,
{
    let mut db = OpMetricsDb::new();
    {
        let mut builder = OpMetricsDbBuilder::new(&mut db)?;
        let mut total_op_time_ps = 0u64;
        let mut ingested = 0usize;

        for raw in records {
            if raw.key() != (NO_MODULE_ID, IDLE_OP_NAME) {
                total_op_time_ps = total_op_time_ps.saturating_add(raw.self_time_ps);
            }
            builder.ingest(raw);
            ingested += 1;
        }

        debug!(
            "Ingested {} raw records into {} unique ops",
            ingested,
            builder.len()
        );

        builder.set_totals(total_time_ps, total_op_time_ps);
    }

    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_fine_db_counts_distinct_keys() {
        let records = vec![
            OpMetrics { self_time_ps: 10, occurrences: 1, ..OpMetrics::new(1, "a") },
            OpMetrics { self_time_ps: 20, occurrences: 1, ..OpMetrics::new(1, "b") },
            OpMetrics { self_time_ps: 30, occurrences: 1, ..OpMetrics::new(1, "a") },
            OpMetrics { self_time_ps: 5, occurrences: 1, ..OpMetrics::new(2, "a") },
        ];

        let db = build_fine_db(&records, 100).unwrap();

        assert_eq!(db.metrics_db.len(), 3);
        assert_eq!(db.total_time_ps, 100);
        assert_eq!(db.total_op_time_ps, 65);
        assert_eq!(db.get(1, "a").map(|m| m.occurrences), Some(2));
        assert_eq!(db.get(1, "a").map(|m| m.self_time_ps), Some(40));
    }

    #[test]
    fn test_idle_record_is_not_op_time() {
        let records = vec![
            OpMetrics { self_time_ps: 60, ..OpMetrics::new(1, "a") },
            OpMetrics { self_time_ps: 40, ..OpMetrics::new(NO_MODULE_ID, IDLE_OP_NAME) },
        ];

        let db = build_fine_db(&records, 100).unwrap();

        assert_eq!(db.metrics_db.len(), 2);
        assert_eq!(db.total_op_time_ps, 60);
    }

    #[test]
    fn test_build_fine_db_empty() {
        let db = build_fine_db(&Vec::<OpMetrics>::new(), 0).unwrap();
        assert_eq!(db, OpMetricsDb::new());
    }
}
