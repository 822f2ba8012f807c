//! Merge command implementation.
//!
//! Combines shard profiles that were aggregated independently.

use crate::aggregator::{calculate_db_summary, merge_shards};
use crate::commands::models::MergeArgs;
use crate::output::{read_profile, write_profile};
use crate::parser::schema::MetricsProfile;
use anyhow::{Context, Result};
use log::info;

/// Execute the merge command
///
/// **Public** - main entry point called from main.rs
pub fn execute_merge(args: &MergeArgs) -> Result<()> {
    let shards = args
        .inputs
        .iter()
        .map(|path| {
            read_profile(path)
                .map(|profile| profile.db)
                .with_context(|| format!("Failed to read shard {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    info!("Merging {} shards...", shards.len());
    let merged = merge_shards(&shards).context("Failed to merge shards")?;
    info!("Merged database: {}", calculate_db_summary(&merged).summary());

    write_profile(&MetricsProfile::new(merged), &args.output)
        .context("Failed to write merged profile")?;
    info!("✓ Profile written to: {}", args.output.display());

    Ok(())
}
