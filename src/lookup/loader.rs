//! Merged table loading
//!
//! The merged CSV is read once at startup. A missing file, a missing column,
//! an empty required field or a coordinate that is not a decimal stops the
//! load; the service never starts on partial data.

use super::CentreIndex;
use crate::constants::merged_columns;
use crate::error::{CentreError, Result};
use crate::models::MergedRecord;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

impl CentreIndex {
    /// Load the merged table from `path` and build the index
    pub fn load(path: &Path) -> Result<Self> {
        let start_time = Instant::now();
        let records = read_merged_records(path)?;

        let index = Self::from_records(records);
        info!(
            "Loaded {} merged rows from {} ({} postcodes, {} services) in {:.2}s",
            index.record_count(),
            path.display(),
            index.postcode_count(),
            index.service_count(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(index)
    }
}

/// Read and validate every row of the merged table
pub fn read_merged_records(path: &Path) -> Result<Vec<MergedRecord>> {
    if !path.is_file() {
        return Err(CentreError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    for &column in merged_columns::ALL {
        if !headers.iter().any(|header| header == column) {
            return Err(CentreError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }
    debug!("Merged table headers: {:?}", headers);

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<MergedRecord>().enumerate() {
        let record_number = index + 1;
        let record = row.map_err(|e| CentreError::InvalidRecord {
            path: path.to_path_buf(),
            reason: format!("record {}: {}", record_number, e),
        })?;

        check_required_fields(&record, path, record_number)?;
        records.push(record);
    }

    Ok(records)
}

fn check_required_fields(record: &MergedRecord, path: &Path, record_number: usize) -> Result<()> {
    let fields = [
        (merged_columns::CENTRE_SERVICE_ID, &record.centre_service_id),
        (merged_columns::SERVICE, &record.service),
        (merged_columns::CENTRE_ID, &record.centre_id),
        (merged_columns::SUBURB, &record.suburb),
        (merged_columns::POSTCODE, &record.postcode),
    ];

    if let Some((field, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
        return Err(CentreError::MissingValue {
            path: path.to_path_buf(),
            field: field.to_string(),
            record: record_number,
        });
    }

    // f64 parsing accepts NaN and inf, which are not coordinates
    for (field, value) in [
        (merged_columns::LATITUDE, record.latitude),
        (merged_columns::LONGITUDE, record.longitude),
    ] {
        if !value.is_finite() {
            return Err(CentreError::InvalidRecord {
                path: path.to_path_buf(),
                reason: format!("record {}: {} is not a decimal ({})", record_number, field, value),
            });
        }
    }

    Ok(())
}
