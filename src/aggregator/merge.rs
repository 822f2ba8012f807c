//! Merging shard databases.
//!
//! Independent record streams can be aggregated into separate databases
//! (one builder each, no shared state) and merged afterwards. The merge uses
//! the same combination rules as the fine-to-coarse rollup, so it does not
//! depend on shard order.
//!
//! All shards cover the same measurement window. Time, flops and bytes do not
//! depend on how records were split; occurrences do, since shards are
//! combined with max while records inside a shard are summed.

use super::builder::OpMetricsDbBuilder;
use super::derived::combine_metrics;
use crate::parser::schema::OpMetricsDb;
use crate::utils::error::AggregateError;
use log::debug;

/// Merge shard databases keyed by `(module_id, name)`
///
/// First-seen category and provenance win. `total_time_ps` is the shared
/// window (max over shards); `total_op_time_ps` is summed.
pub fn merge_shards(shards: &[OpMetricsDb]) -> Result<OpMetricsDb, AggregateError> {
    let mut merged = OpMetricsDb::new();
    {
        let mut builder = OpMetricsDbBuilder::new(&mut merged)?;
        let mut total_time_ps = 0u64;
        let mut total_op_time_ps = 0u64;

        for shard in shards {
            for source in &shard.metrics_db {
                let target = builder.find_or_create(source.module_id, &source.name);
                if target.category.is_empty() {
                    target.category.clone_from(&source.category);
                }
                if target.provenance.is_empty() {
                    target.provenance.clone_from(&source.provenance);
                }
                combine_metrics(target, source);
            }
            total_time_ps = total_time_ps.max(shard.total_time_ps);
            total_op_time_ps = total_op_time_ps.saturating_add(shard.total_op_time_ps);
        }

        debug!("Merged {} shards into {} records", shards.len(), builder.len());
        builder.set_totals(total_time_ps, total_op_time_ps);
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::OpMetrics;

    fn shard(records: Vec<OpMetrics>, total_time_ps: u64, total_op_time_ps: u64) -> OpMetricsDb {
        OpMetricsDb {
            metrics_db: records,
            total_time_ps,
            total_op_time_ps,
        }
    }

    #[test]
    fn test_merge_shards() {
        let a = shard(
            vec![
                OpMetrics { category: "fusion".into(), occurrences: 2, time_ps: 10, ..OpMetrics::new(1, "f") },
                OpMetrics { occurrences: 1, time_ps: 3, ..OpMetrics::new(1, "g") },
            ],
            50,
            13,
        );
        let b = shard(
            vec![OpMetrics { category: "loop".into(), occurrences: 4, time_ps: 7, ..OpMetrics::new(1, "f") }],
            40,
            7,
        );

        let merged = merge_shards(&[a, b]).unwrap();

        assert_eq!(merged.metrics_db.len(), 2);
        let f = merged.get(1, "f").unwrap();
        assert_eq!(f.category, "fusion");
        assert_eq!(f.occurrences, 4);
        assert_eq!(f.time_ps, 17);
        assert_eq!(merged.total_time_ps, 50);
        assert_eq!(merged.total_op_time_ps, 20);
    }

    #[test]
    fn test_merge_sums_are_order_independent() {
        let a = shard(vec![OpMetrics { occurrences: 1, time_ps: 5, flops: 9, ..OpMetrics::new(0, "x") }], 10, 5);
        let b = shard(vec![OpMetrics { occurrences: 3, time_ps: 2, flops: 1, ..OpMetrics::new(0, "x") }], 10, 2);

        let ab = merge_shards(&[a.clone(), b.clone()]).unwrap();
        let ba = merge_shards(&[b, a]).unwrap();

        assert_eq!(ab, ba);
    }

    #[test]
    fn test_merge_keeps_single_window() {
        let a = shard(vec![OpMetrics { time_ps: 30, ..OpMetrics::new(1, "x") }], 100, 30);
        let b = shard(vec![OpMetrics { time_ps: 20, ..OpMetrics::new(1, "y") }], 100, 20);

        let merged = merge_shards(&[a, b]).unwrap();

        assert_eq!(merged.total_time_ps, 100);
        assert_eq!(merged.total_op_time_ps, 50);
    }

    #[test]
    fn test_merge_no_shards() {
        assert_eq!(merge_shards(&[]).unwrap(), OpMetricsDb::new());
    }
}
