//! Inspect and version commands.

use crate::aggregator::{calculate_db_summary, calculate_top_ops, TopOp};
use crate::commands::models::InspectArgs;
use crate::output::read_profile;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};

/// Print a profile's summary and its top ops to stdout
///
/// **Public** - main entry point called from main.rs
pub fn execute_inspect(args: &InspectArgs) -> Result<()> {
    let profile = read_profile(&args.input).context("Failed to read profile")?;
    let summary = calculate_db_summary(&profile.db);

    println!("Profile: {}", args.input.display());
    println!("  Version:   {}", profile.version);
    println!("  Generated: {}", profile.generated_at);
    println!("  {}", summary.summary());
    println!();
    println!("{}", format_top_ops(&calculate_top_ops(&profile.db, args.top)));

    Ok(())
}

/// Render the top-ops table
pub fn format_top_ops(top_ops: &[TopOp]) -> String {
    if top_ops.is_empty() {
        return "No operations recorded".to_string();
    }

    let mut out = format!(
        "{:<4} {:<40} {:<16} {:>10} {:>16} {:>7}\n",
        "#", "Operation", "Category", "Count", "Time (ps)", "%"
    );
    for (rank, op) in top_ops.iter().enumerate() {
        out.push_str(&format!(
            "{:<4} {:<40} {:<16} {:>10} {:>16} {:>6.1}%\n",
            rank + 1,
            op.name,
            op.category,
            op.occurrences,
            op.time_ps,
            op.percentage
        ));
    }
    out
}

/// Display version information
pub fn display_version() {
    println!("opmetrics v{}", env!("CARGO_PKG_VERSION"));
    println!("Profile Schema: v{}", SCHEMA_VERSION);
}
