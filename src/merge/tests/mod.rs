//! Shared fixtures for merge pipeline tests

use crate::config::MergeConfig;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub mod sources_tests;

pub const LOCATIONS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<CentreLocations>
  <Centre>
    <CentreID>1</CentreID>
    <Lat>-37.8230</Lat>
    <Lon>145.0000</Lon>
  </Centre>
  <Centre>
    <CentreID>2</CentreID>
    <Lat>-37.8100</Lat>
    <Lon>144.9600</Lon>
  </Centre>
  <Centre>
    <CentreID>3</CentreID>
    <Lat>-37.8190</Lat>
    <Lon>145.1250</Lon>
  </Centre>
  <Centre>
    <CentreID>4</CentreID>
    <Lat>-37.7000</Lat>
    <Lon>144.9000</Lon>
  </Centre>
</CentreLocations>
"#;

/// Centre 5 has no location, centre 4 has no reporting centre
pub const SERVICES_CSV: &str = "CentreServiceID,CentreID,Service
101,1,GP
102,1,Dental
103,2,GP
104,3,Pharmacy
105,5,GP
106,4,Dental
";

pub const REPORTING_CENTRES_CSV: &str = "CentreID,Suburb,Postcode
1,Richmond,3121
2,Melbourne,3000
3,Box Hill,3128
5,Carlton,3053
";

pub const EXPECTED_MERGED_CSV: &str =
    "CentreServiceID,Service,CentreID,Suburb,Postcode,Latitude,Longitude
101,GP,1,Richmond,3121,-37.8230,145.0000
102,Dental,1,Richmond,3121,-37.8230,145.0000
103,GP,2,Melbourne,3000,-37.8100,144.9600
104,Pharmacy,3,Box Hill,3128,-37.8190,145.1250
";

/// Write the three fixture sources into `dir` and return a config for them
pub fn write_sources(dir: &Path) -> MergeConfig {
    write_sources_with(dir, SERVICES_CSV, REPORTING_CENTRES_CSV, LOCATIONS_XML)
}

pub fn write_sources_with(
    dir: &Path,
    services: &str,
    reporting_centres: &str,
    locations: &str,
) -> MergeConfig {
    let config = MergeConfig::in_dir(dir);
    fs::write(&config.services_path, services).unwrap();
    fs::write(&config.reporting_centres_path, reporting_centres).unwrap();
    fs::write(&config.locations_path, locations).unwrap();
    config
}

pub fn fixture_dir() -> (TempDir, MergeConfig) {
    let temp_dir = TempDir::new().unwrap();
    let config = write_sources(temp_dir.path());
    (temp_dir, config)
}
