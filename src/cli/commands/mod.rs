//! Command implementations for the centre finder CLI
//!
//! Each command lives in its own module:
//! - `merge`: join the sources into the merged table
//! - `serve`: answer lookups over the merged table

pub mod merge;
pub mod serve;
pub mod shared;

use crate::Result;
use crate::cli::args::Commands;

/// Dispatch to the handler for the chosen subcommand
pub async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Merge(merge_args) => merge::run_merge(merge_args).await,
        Commands::Serve(serve_args) => serve::run_serve(serve_args).await,
    }
}
