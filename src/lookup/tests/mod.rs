//! Shared test utilities and fixtures for lookup tests

use crate::lookup::CentreIndex;
use crate::models::MergedRecord;


pub const MERGED_CSV: &str = "CentreServiceID,Service,CentreID,Suburb,Postcode,Latitude,Longitude
101,GP,1,Richmond,3121,-37.823,145.0
102,Dental,1,Richmond,3121,-37.823,145.0
103,GP,2,Melbourne,3000,-37.81,144.96
104,Pharmacy,3,Box Hill,3128,-37.819,145.125
105,Dental,4,Cremorne,3121,-37.83,144.99
";

pub fn create_test_record(
    centre_service_id: &str,
    service: &str,
    centre_id: &str,
    suburb: &str,
    postcode: &str,
    latitude: f64,
    longitude: f64,
) -> MergedRecord {
    MergedRecord {
        centre_service_id: centre_service_id.to_string(),
        service: service.to_string(),
        centre_id: centre_id.to_string(),
        suburb: suburb.to_string(),
        postcode: postcode.to_string(),
        latitude,
        longitude,
    }
}

/// Same rows as [`MERGED_CSV`]
pub fn create_test_index() -> CentreIndex {
    CentreIndex::from_records(vec![
        create_test_record("101", "GP", "1", "Richmond", "3121", -37.823, 145.0),
        create_test_record("102", "Dental", "1", "Richmond", "3121", -37.823, 145.0),
        create_test_record("103", "GP", "2", "Melbourne", "3000", -37.81, 144.96),
        create_test_record("104", "Pharmacy", "3", "Box Hill", "3128", -37.819, 145.125),
        create_test_record("105", "Dental", "4", "Cremorne", "3121", -37.83, 144.99),
    ])
}
