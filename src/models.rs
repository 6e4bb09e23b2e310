//! Core data structures for the merge pipeline and lookup service.
//!
//! [`CentreLocation`] is one parsed entry of the locations document. [`MergedRecord`] is the
//! denormalized row written by the pipeline and read back by the lookup
//! service.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Geographic position of a centre, from the locations document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CentreLocation {
    pub centre_id: String,
    pub lat: String,
    pub lon: String,
}

/// One row of the merged table: a (centre, service) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRecord {
    #[serde(rename = "CentreServiceID")]
    pub centre_service_id: String,
    #[serde(rename = "Service")]
    pub service: String,
    #[serde(rename = "CentreID")]
    pub centre_id: String,
    #[serde(rename = "Suburb")]
    pub suburb: String,
    #[serde(rename = "Postcode")]
    pub postcode: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

/// A reporting centre as returned by service lookups
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentreSummary {
    #[serde(rename = "CentreID")]
    pub centre_id: String,
    #[serde(rename = "Suburb")]
    pub suburb: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

impl From<&MergedRecord> for CentreSummary {
    fn from(record: &MergedRecord) -> Self {
        Self {
            centre_id: record.centre_id.clone(),
            suburb: record.suburb.clone(),
            latitude: record.latitude,
            longitude: record.longitude,
        }
    }
}

/// Services available at one postcode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostcodeServices {
    pub postcode: String,
    pub suburb: String,
    pub services: Vec<String>,
}

/// Reporting centres offering one service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceCentres {
    pub service: String,
    pub reporting_centres: Vec<CentreSummary>,
}

/// Merge run statistics
#[derive(Debug, Default, Clone)]
pub struct MergeStats {
    /// Number of centres read from the locations document
    pub locations_read: usize,
    /// Number of rows read from the centre services table
    pub services_read: usize,
    /// Number of rows read from the reporting centres table
    pub reporting_centres_read: usize,
    /// Number of rows written to the merged table
    pub rows_written: usize,
    /// Service rows whose centre is missing from the locations or reporting centres
    pub services_dropped: usize,
    /// Merged table written by this run
    pub output_path: PathBuf,
    /// Total merge time
    pub elapsed: Duration,
}
