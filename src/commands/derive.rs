//! Derive command implementation.
//!
//! Rolls a fine-grained profile up into a coarse-grained one.

use crate::aggregator::{build_coarse_from_fine, calculate_db_summary};
use crate::commands::models::DeriveArgs;
use crate::output::{read_profile, write_profile};
use crate::parser::schema::MetricsProfile;
use anyhow::{Context, Result};
use log::{debug, info};

/// Execute the derive command
///
/// **Public** - main entry point called from main.rs
pub fn execute_derive(args: &DeriveArgs) -> Result<()> {
    info!("Reading fine-grained profile: {}", args.input.display());
    let fine = read_profile(&args.input).context("Failed to read fine-grained profile")?;
    debug!("Fine database: {}", calculate_db_summary(&fine.db).summary());

    let coarse = build_coarse_from_fine(&fine.db).context("Failed to derive coarse database")?;
    info!("Coarse database: {}", calculate_db_summary(&coarse).summary());

    write_profile(&MetricsProfile::new(coarse), &args.output)
        .context("Failed to write coarse-grained profile")?;
    info!("✓ Profile written to: {}", args.output.display());

    Ok(())
}
