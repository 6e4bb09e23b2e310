//! Merge pipeline.
//!
//! Reads the centre services and reporting centres tables and the centre
//! locations document, joins them on CentreID and writes one row per
//! (centre, service) pair to the merged table. Every run recomputes the
//! output from scratch and replaces the previous file.

pub mod join;
pub mod sources;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use join::merge_sources;
pub use sources::{load_centre_locations, load_centre_services, load_reporting_centres};
pub use writer::write_merged;

use crate::config::MergeConfig;
use crate::constants::source_columns::CENTRE_ID;
use crate::error::Result;
use crate::models::MergeStats;
use polars::prelude::DataFrame;
use std::time::Instant;
use tracing::{info, warn};

/// One-shot batch job turning the three sources into the merged table
#[derive(Debug, Clone)]
pub struct MergePipeline {
    config: MergeConfig,
}

impl MergePipeline {
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Load, join and write.
    ///
    /// Nothing is written unless every source loads cleanly.
    pub fn run(&self) -> Result<MergeStats> {
        let start_time = Instant::now();
        self.config.validate()?;

        let locations =
            load_centre_locations(&self.config.locations_path, &self.config.centre_element)?;
        let services = load_centre_services(&self.config.services_path)?;
        let reporting_centres = load_reporting_centres(&self.config.reporting_centres_path)?;

        info!(
            "Loaded {} locations, {} services, {} reporting centres",
            locations.height(),
            services.height(),
            reporting_centres.height()
        );

        let mut stats = MergeStats {
            locations_read: locations.height(),
            services_read: services.height(),
            reporting_centres_read: reporting_centres.height(),
            services_dropped: count_unmatched_services(&locations, &services, &reporting_centres)?,
            output_path: self.config.output_path.clone(),
            ..Default::default()
        };

        if stats.services_dropped > 0 {
            warn!(
                "{} service rows reference a centre missing from the locations or reporting centres",
                stats.services_dropped
            );
        }

        let mut merged = merge_sources(locations, services, reporting_centres)?;
        write_merged(&mut merged, &self.config.output_path)?;

        stats.rows_written = merged.height();
        stats.elapsed = start_time.elapsed();

        info!(
            "Wrote {} merged rows to {} in {:.2}s",
            stats.rows_written,
            stats.output_path.display(),
            stats.elapsed.as_secs_f64()
        );

        Ok(stats)
    }
}

fn count_unmatched_services(
    locations: &DataFrame,
    services: &DataFrame,
    reporting_centres: &DataFrame,
) -> Result<usize> {
    let located = sources::centre_ids(locations)?;
    let reporting = sources::centre_ids(reporting_centres)?;

    let service_ids = services.column(CENTRE_ID)?.as_materialized_series().str()?;
    Ok(service_ids
        .into_iter()
        .flatten()
        .filter(|id| !located.contains(*id) || !reporting.contains(*id))
        .count())
}
