//! Application constants for the centre finder
//!
//! File names, column names and server defaults shared by the merge
//! pipeline, the lookup service and the CLI.

// =============================================================================
// Source and Output Files
// =============================================================================

/// Default path of the centre services table
pub const DEFAULT_SERVICES_FILE: &str = "centreServices.csv";

/// Default path of the reporting centres table
pub const DEFAULT_REPORTING_CENTRES_FILE: &str = "reportingCentres.csv";

/// Default path of the centre locations document
pub const DEFAULT_LOCATIONS_FILE: &str = "centreLocations.xml";

/// Default path of the merged output table
pub const DEFAULT_MERGED_FILE: &str = "reportingCentre_service_locations.csv";

/// Repeated XML element holding one centre location
pub const DEFAULT_CENTRE_ELEMENT: &str = "Centre";

// =============================================================================
// Column Names
// =============================================================================

/// Source column names
pub mod source_columns {
    pub const CENTRE_ID: &str = "CentreID";
    pub const CENTRE_SERVICE_ID: &str = "CentreServiceID";
    pub const SERVICE: &str = "Service";
    pub const SUBURB: &str = "Suburb";
    pub const POSTCODE: &str = "Postcode";
    pub const LAT: &str = "Lat";
    pub const LON: &str = "Lon";

    pub const SERVICES: &[&str] = &[CENTRE_SERVICE_ID, CENTRE_ID, SERVICE];
    pub const REPORTING_CENTRES: &[&str] = &[CENTRE_ID, SUBURB, POSTCODE];
    pub const LOCATIONS: &[&str] = &[CENTRE_ID, LAT, LON];
}

/// Merged table column names, in output order
pub mod merged_columns {
    pub const CENTRE_SERVICE_ID: &str = "CentreServiceID";
    pub const SERVICE: &str = "Service";
    pub const CENTRE_ID: &str = "CentreID";
    pub const SUBURB: &str = "Suburb";
    pub const POSTCODE: &str = "Postcode";
    pub const LATITUDE: &str = "Latitude";
    pub const LONGITUDE: &str = "Longitude";

    pub const ALL: &[&str] = &[
        CENTRE_SERVICE_ID,
        SERVICE,
        CENTRE_ID,
        SUBURB,
        POSTCODE,
        LATITUDE,
        LONGITUDE,
    ];
}

// =============================================================================
// Lookup Service
// =============================================================================

/// Exact length of a well-formed postcode query
pub const POSTCODE_LENGTH: usize = 4;

/// Default bind host for the lookup server
pub const DEFAULT_HOST: &str = "localhost";

/// Default bind port for the lookup server
pub const DEFAULT_PORT: u16 = 8080;

/// Route answering services-by-postcode queries
pub const SERVICES_ROUTE: &str = "/getServices";

/// Route answering reporting-centres-by-service queries
pub const RCENTRE_ROUTE: &str = "/getRCentre";
