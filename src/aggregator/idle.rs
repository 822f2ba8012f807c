//! Idle time computations over a finished database.
//!
//! Idle time is the part of the measurement window not attributed to any
//! operation: `total_time_ps - total_op_time_ps`.

use crate::parser::schema::{OpMetrics, OpMetricsDb};
use crate::utils::config::{IDLE_CATEGORY, IDLE_OP_NAME, NO_MODULE_ID};
use crate::utils::math::safe_divide;
use log::warn;

/// Idle time in picoseconds
///
/// Clamped to 0 when op time exceeds the window (logged as a warning).
pub fn idle_time_ps(db: &OpMetricsDb) -> u64 {
    if db.total_op_time_ps > db.total_time_ps {
        warn!(
            "Op time ({} ps) exceeds total time ({} ps); treating idle time as 0",
            db.total_op_time_ps, db.total_time_ps
        );
    }
    db.total_time_ps.saturating_sub(db.total_op_time_ps)
}

/// Fraction of the window spent idle, in `[0, 1]`
///
/// A window with zero total time has zero idle ratio.
pub fn idle_time_ratio(db: &OpMetricsDb) -> f64 {
    if db.total_time_ps == 0 {
        return 0.0;
    }
    let busy = safe_divide(db.total_op_time_ps as f64, db.total_time_ps as f64);
    (1.0 - busy).clamp(0.0, 1.0)
}

/// Append a synthetic `IDLE` record holding the idle time
///
/// Bypasses deduplication: call at most once per database.
pub fn add_idle_op(db: &mut OpMetricsDb) {
    let idle_ps = idle_time_ps(db);

    db.metrics_db.push(OpMetrics {
        category: IDLE_CATEGORY.to_string(),
        occurrences: 1,
        time_ps: idle_ps,
        self_time_ps: idle_ps,
        ..OpMetrics::new(NO_MODULE_ID, IDLE_OP_NAME)
    });
}
