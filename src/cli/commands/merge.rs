//! Merge command implementation
//!
//! Runs the merge pipeline on a blocking thread and prints a summary.

use super::shared::setup_logging;
use crate::cli::args::MergeArgs;
use crate::error::Result;
use crate::merge::MergePipeline;
use crate::models::MergeStats;
use colored::*;
use tokio::task;
use tracing::{debug, info};

/// Merge command runner
pub async fn run_merge(args: MergeArgs) -> Result<()> {
    setup_logging(&args.log);
    debug!("Command line arguments: {:?}", args);

    let pipeline = MergePipeline::new(args.to_config());
    info!(
        "Merging {} + {} + {}",
        pipeline.config().services_path.display(),
        pipeline.config().reporting_centres_path.display(),
        pipeline.config().locations_path.display()
    );

    let stats = task::spawn_blocking(move || pipeline.run()).await??;

    if !args.log.quiet {
        print_summary(&stats);
    }

    Ok(())
}

fn print_summary(stats: &MergeStats) {
    println!("{}", "Merge complete".bright_green().bold());
    println!(
        "  {} {} locations, {} services, {} reporting centres",
        "Read:".bright_cyan(),
        stats.locations_read,
        stats.services_read,
        stats.reporting_centres_read
    );
    println!(
        "  {} {} rows to {}",
        "Wrote:".bright_cyan(),
        stats.rows_written.to_string().bright_white().bold(),
        stats.output_path.display()
    );
    if stats.services_dropped > 0 {
        println!(
            "  {} {} service rows without a matching centre",
            "Dropped:".bright_yellow(),
            stats.services_dropped
        );
    }
    println!(
        "  {} {:.2}s",
        "Time:".bright_cyan(),
        stats.elapsed.as_secs_f64()
    );
}
