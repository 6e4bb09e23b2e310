//! Serve command implementation

use super::shared::setup_logging;
use crate::cli::args::ServeArgs;
use crate::error::Result;
use crate::server;
use tracing::debug;

/// Serve command runner
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    setup_logging(&args.log);
    debug!("Command line arguments: {:?}", args);

    server::serve(&args.to_config()).await
}
