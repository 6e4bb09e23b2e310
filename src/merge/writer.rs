//! Merged table CSV writer.

use crate::error::Result;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;
use tracing::debug;

/// Write the merged frame as CSV with a header row.
///
/// Any existing file at `path` is replaced; missing parent directories are
/// created. Returns the size of the written file in bytes.
pub fn write_merged(df: &mut DataFrame, path: &Path) -> Result<u64> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = File::create(path)?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;

    let size = fs::metadata(path)?.len();
    debug!("Wrote {} rows ({} bytes) to {}", df.height(), size, path.display());

    Ok(size)
}
