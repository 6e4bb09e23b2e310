//! Source table loading.
//!
//! The two CSV tables are read straight into polars frames with every column
//! typed as text, so identifiers and coordinates keep their exact spelling.
//! The locations document is walked with a streaming XML reader and turned
//! into a frame with the same column conventions.

use crate::constants::source_columns::{CENTRE_ID, LAT, LON, REPORTING_CENTRES, SERVICES};
use crate::error::{CentreError, Result};
use crate::models::CentreLocation;
use polars::prelude::*;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load the centre services table (CentreServiceID, CentreID, Service)
pub fn load_centre_services(path: &Path) -> Result<DataFrame> {
    read_csv_table(path, SERVICES)
}

/// Load the reporting centres table (CentreID, Suburb, Postcode)
pub fn load_reporting_centres(path: &Path) -> Result<DataFrame> {
    read_csv_table(path, REPORTING_CENTRES)
}

/// Load the centre locations document as a frame (CentreID, Lat, Lon)
pub fn load_centre_locations(path: &Path, element: &str) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(CentreError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    let locations = parse_centre_locations(&content, element, path)?;
    debug!(
        "Parsed {} <{}> elements from {}",
        locations.len(),
        element,
        path.display()
    );

    locations_frame(&locations)
}

/// Read a CSV table, keeping only the required columns.
///
/// Every required column must exist and hold a value on every row.
pub fn read_csv_table(path: &Path, required: &[&str]) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(CentreError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    check_required_columns(&df, path, required)?;
    debug!("Read {} rows from {}", df.height(), path.display());

    Ok(df.select(required.iter().copied())?)
}

fn check_required_columns(df: &DataFrame, path: &Path, required: &[&str]) -> Result<()> {
    for &name in required {
        let column = df.column(name).map_err(|_| CentreError::MissingColumn {
            path: path.to_path_buf(),
            column: name.to_string(),
        })?;

        if column.null_count() == 0 {
            continue;
        }

        let values = column.as_materialized_series().str()?;
        let row = values
            .into_iter()
            .position(|value| value.is_none())
            .unwrap_or_default();

        return Err(CentreError::MissingValue {
            path: path.to_path_buf(),
            field: name.to_string(),
            record: row + 1,
        });
    }

    Ok(())
}

/// Parse every `element` directly under the document root into a location.
///
/// Field values are the trimmed text content of the `CentreID`, `Lat` and
/// `Lon` children. Records are numbered from 1 in error messages.
pub fn parse_centre_locations(
    xml: &str,
    element: &str,
    path: &Path,
) -> Result<Vec<CentreLocation>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let xml_error = |source| CentreError::Xml {
        path: path.to_path_buf(),
        source,
    };

    let mut locations = Vec::new();
    let mut depth = 0usize;
    let mut current: Option<PartialLocation> = None;
    let mut field: Option<String> = None;

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(start) => {
                depth += 1;
                let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
                if depth == 2 && name == element {
                    current = Some(PartialLocation::default());
                } else if depth == 3 && current.is_some() {
                    field = Some(name);
                }
            }
            Event::Empty(empty) => {
                // A self-closing centre has no fields at all.
                if depth == 1 && empty.local_name().as_ref() == element.as_bytes() {
                    let record = locations.len() + 1;
                    locations.push(PartialLocation::default().finish(path, record)?);
                }
            }
            Event::Text(text) if depth == 3 => {
                if let (Some(location), Some(name)) = (current.as_mut(), field.as_deref()) {
                    let value = text.unescape().map_err(xml_error)?;
                    location.append(name, &value);
                }
            }
            Event::CData(data) if depth == 3 => {
                if let (Some(location), Some(name)) = (current.as_mut(), field.as_deref()) {
                    location.append(name, String::from_utf8_lossy(&data).trim());
                }
            }
            Event::End(_) => {
                if depth == 3 {
                    field = None;
                } else if depth == 2 {
                    if let Some(location) = current.take() {
                        let record = locations.len() + 1;
                        locations.push(location.finish(path, record)?);
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(locations)
}

#[derive(Debug, Default)]
struct PartialLocation {
    centre_id: Option<String>,
    lat: Option<String>,
    lon: Option<String>,
}

impl PartialLocation {
    fn append(&mut self, field: &str, text: &str) {
        let slot = match field {
            CENTRE_ID => &mut self.centre_id,
            LAT => &mut self.lat,
            LON => &mut self.lon,
            _ => return,
        };
        slot.get_or_insert_with(String::new).push_str(text);
    }

    fn finish(self, path: &Path, record: usize) -> Result<CentreLocation> {
        let require = |value: Option<String>, field: &str| {
            value
                .filter(|v| !v.is_empty())
                .ok_or_else(|| CentreError::MissingValue {
                    path: path.to_path_buf(),
                    field: field.to_string(),
                    record,
                })
        };

        Ok(CentreLocation {
            centre_id: require(self.centre_id, CENTRE_ID)?,
            lat: require(self.lat, LAT)?,
            lon: require(self.lon, LON)?,
        })
    }
}

/// Build a text-typed (CentreID, Lat, Lon) frame from parsed locations
pub fn locations_frame(locations: &[CentreLocation]) -> Result<DataFrame> {
    let ids: Vec<&str> = locations.iter().map(|l| l.centre_id.as_str()).collect();
    let lats: Vec<&str> = locations.iter().map(|l| l.lat.as_str()).collect();
    let lons: Vec<&str> = locations.iter().map(|l| l.lon.as_str()).collect();

    Ok(DataFrame::new(vec![
        Column::new(CENTRE_ID.into(), ids),
        Column::new(LAT.into(), lats),
        Column::new(LON.into(), lons),
    ])?)
}

/// Distinct CentreID values of a source frame
pub fn centre_ids(df: &DataFrame) -> Result<HashSet<String>> {
    let ids = df.column(CENTRE_ID)?.as_materialized_series().str()?;
    Ok(ids.into_iter().flatten().map(str::to_string).collect())
}
