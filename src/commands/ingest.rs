//! Ingest command implementation.
//!
//! The ingest command:
//! 1. Reads raw records
//! 2. Deduplicates them into a fine-grained database
//! 3. Optionally appends the IDLE record
//! 4. Writes the profile

use crate::aggregator::{add_idle_op, build_fine_db, calculate_db_summary};
use crate::commands::models::IngestArgs;
use crate::output::{read_records, write_profile};
use crate::parser::schema::MetricsProfile;
use crate::utils::config::{IDLE_OP_NAME, NO_MODULE_ID};
use anyhow::{Context, Result};
use log::{info, warn};
use std::time::Instant;

/// Execute the ingest command
///
/// **Public** - main entry point called from main.rs
pub fn execute_ingest(args: &IngestArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Reading raw records from: {}", args.input.display());
    let records = read_records(&args.input).context("Failed to read raw records")?;

    info!("Ingesting {} records...", records.len());
    let mut db = build_fine_db(&records, args.total_time_ps)
        .context("Failed to build fine-grained database")?;

    if args.add_idle {
        if db.get(NO_MODULE_ID, IDLE_OP_NAME).is_some() {
            warn!("Input already has an {} record; not adding another", IDLE_OP_NAME);
        } else {
            add_idle_op(&mut db);
        }
    }

    info!("Fine database: {}", calculate_db_summary(&db).summary());

    write_profile(&MetricsProfile::new(db), &args.output)
        .context("Failed to write fine-grained profile")?;
    info!("✓ Profile written to: {}", args.output.display());

    info!(
        "Ingest completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}
