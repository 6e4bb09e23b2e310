//! Tests for source table loading

use super::*;
use crate::error::CentreError;
use crate::merge::sources::{
    load_centre_locations, load_centre_services, load_reporting_centres, parse_centre_locations,
};
use std::path::{Path, PathBuf};

fn string_column(df: &polars::prelude::DataFrame, name: &str) -> Vec<String> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap().to_string())
        .collect()
}

#[test]
fn test_parse_centre_locations() {
    let locations = parse_centre_locations(LOCATIONS_XML, "Centre", Path::new("test.xml")).unwrap();

    assert_eq!(locations.len(), 4);
    assert_eq!(locations[0].centre_id, "1");
    assert_eq!(locations[0].lat, "-37.8230");
    assert_eq!(locations[0].lon, "145.0000");
    assert_eq!(locations[3].centre_id, "4");
}

#[test]
fn test_parse_ignores_other_elements_and_children() {
    let xml = r#"<Root>
  <Metadata><CentreID>99</CentreID></Metadata>
  <Centre>
    <Name>Main &amp; Co</Name>
    <CentreID>7</CentreID>
    <Lat><![CDATA[-37.5]]></Lat>
    <Lon>144.5</Lon>
  </Centre>
</Root>"#;

    let locations = parse_centre_locations(xml, "Centre", Path::new("test.xml")).unwrap();

    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].centre_id, "7");
    assert_eq!(locations[0].lat, "-37.5");
    assert_eq!(locations[0].lon, "144.5");
}

#[test]
fn test_parse_custom_element_name() {
    let xml = "<Sites><Site><CentreID>A</CentreID><Lat>1.5</Lat><Lon>2.5</Lon></Site></Sites>";

    let locations = parse_centre_locations(xml, "Site", Path::new("test.xml")).unwrap();
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].centre_id, "A");

    let none = parse_centre_locations(xml, "Centre", Path::new("test.xml")).unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_parse_missing_child_is_fatal() {
    let xml = "<Root>
  <Centre><CentreID>1</CentreID><Lat>1</Lat><Lon>2</Lon></Centre>
  <Centre><CentreID>2</CentreID><Lat>1</Lat></Centre>
</Root>";

    match parse_centre_locations(xml, "Centre", Path::new("test.xml")) {
        Err(CentreError::MissingValue { field, record, .. }) => {
            assert_eq!(field, "Lon");
            assert_eq!(record, 2);
        }
        other => panic!("expected MissingValue, got {:?}", other),
    }
}

#[test]
fn test_parse_empty_centre_is_fatal() {
    let xml = "<Root><Centre/></Root>";

    assert!(matches!(
        parse_centre_locations(xml, "Centre", Path::new("test.xml")),
        Err(CentreError::MissingValue { record: 1, .. })
    ));
}

#[test]
fn test_parse_malformed_xml() {
    let xml = "<Root><Centre><CentreID>1</Lat></Centre></Root>";

    assert!(matches!(
        parse_centre_locations(xml, "Centre", Path::new("test.xml")),
        Err(CentreError::Xml { .. })
    ));
}

#[test]
fn test_load_centre_locations_frame() {
    let (_temp_dir, config) = fixture_dir();

    let df = load_centre_locations(&config.locations_path, "Centre").unwrap();

    assert_eq!(df.height(), 4);
    assert_eq!(string_column(&df, "CentreID"), vec!["1", "2", "3", "4"]);
    assert_eq!(string_column(&df, "Lat")[1], "-37.8100");
}

#[test]
fn test_load_csv_tables_keep_text() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config = write_sources_with(
        temp_dir.path(),
        "CentreServiceID,CentreID,Service,Notes\n007,01,GP,walk-in\n",
        "CentreID,Suburb,Postcode\n01,Richmond,0800\n",
        LOCATIONS_XML,
    );

    let services = load_centre_services(&config.services_path).unwrap();
    assert_eq!(services.width(), 3);
    assert_eq!(string_column(&services, "CentreServiceID"), vec!["007"]);
    assert_eq!(string_column(&services, "CentreID"), vec!["01"]);

    let reporting = load_reporting_centres(&config.reporting_centres_path).unwrap();
    assert_eq!(string_column(&reporting, "Postcode"), vec!["0800"]);
}

#[test]
fn test_load_missing_column_is_fatal() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config = write_sources_with(
        temp_dir.path(),
        SERVICES_CSV,
        "CentreID,Suburb\n1,Richmond\n",
        LOCATIONS_XML,
    );

    match load_reporting_centres(&config.reporting_centres_path) {
        Err(CentreError::MissingColumn { column, .. }) => assert_eq!(column, "Postcode"),
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn test_load_missing_value_is_fatal() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config = write_sources_with(
        temp_dir.path(),
        "CentreServiceID,CentreID,Service\n101,1,GP\n102,,Dental\n",
        REPORTING_CENTRES_CSV,
        LOCATIONS_XML,
    );

    match load_centre_services(&config.services_path) {
        Err(CentreError::MissingValue { field, record, .. }) => {
            assert_eq!(field, "CentreID");
            assert_eq!(record, 2);
        }
        other => panic!("expected MissingValue, got {:?}", other),
    }
}

#[test]
fn test_load_missing_file() {
    let missing = PathBuf::from("/nonexistent/centreServices.csv");

    assert!(matches!(
        load_centre_services(&missing),
        Err(CentreError::SourceNotFound { .. })
    ));
    assert!(matches!(
        load_centre_locations(&missing.with_extension("xml"), "Centre"),
        Err(CentreError::SourceNotFound { .. })
    ));
}
