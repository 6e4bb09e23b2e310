//! Configuration management and validation.
//!
//! Provides configuration structures for the merge pipeline (source and
//! output paths) and the lookup server (merged table path and bind address).

use crate::constants::{
    DEFAULT_CENTRE_ELEMENT, DEFAULT_HOST, DEFAULT_LOCATIONS_FILE, DEFAULT_MERGED_FILE,
    DEFAULT_PORT, DEFAULT_REPORTING_CENTRES_FILE, DEFAULT_SERVICES_FILE,
};
use crate::error::{CentreError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Merge pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Centre services table (CSV)
    pub services_path: PathBuf,

    /// Reporting centres table (CSV)
    pub reporting_centres_path: PathBuf,

    /// Centre locations document (XML)
    pub locations_path: PathBuf,

    /// Merged output table, overwritten on every run
    pub output_path: PathBuf,

    /// Name of the repeated XML element holding one centre
    pub centre_element: String,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            services_path: PathBuf::from(DEFAULT_SERVICES_FILE),
            reporting_centres_path: PathBuf::from(DEFAULT_REPORTING_CENTRES_FILE),
            locations_path: PathBuf::from(DEFAULT_LOCATIONS_FILE),
            output_path: PathBuf::from(DEFAULT_MERGED_FILE),
            centre_element: DEFAULT_CENTRE_ELEMENT.to_string(),
        }
    }
}

impl MergeConfig {
    /// Resolve all default file names against a data directory
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            services_path: dir.join(DEFAULT_SERVICES_FILE),
            reporting_centres_path: dir.join(DEFAULT_REPORTING_CENTRES_FILE),
            locations_path: dir.join(DEFAULT_LOCATIONS_FILE),
            output_path: dir.join(DEFAULT_MERGED_FILE),
            centre_element: DEFAULT_CENTRE_ELEMENT.to_string(),
        }
    }

    pub fn with_services_path(mut self, path: PathBuf) -> Self {
        self.services_path = path;
        self
    }

    pub fn with_reporting_centres_path(mut self, path: PathBuf) -> Self {
        self.reporting_centres_path = path;
        self
    }

    pub fn with_locations_path(mut self, path: PathBuf) -> Self {
        self.locations_path = path;
        self
    }

    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.output_path = path;
        self
    }

    pub fn with_centre_element(mut self, element: impl Into<String>) -> Self {
        self.centre_element = element.into();
        self
    }

    /// Check that every source exists before any file is read
    pub fn validate(&self) -> Result<()> {
        for path in [
            &self.services_path,
            &self.reporting_centres_path,
            &self.locations_path,
        ] {
            if !path.is_file() {
                return Err(CentreError::SourceNotFound { path: path.clone() });
            }
        }

        if self.centre_element.trim().is_empty() {
            return Err(CentreError::Configuration {
                message: "centre element name must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Lookup server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Merged table produced by the merge pipeline
    pub data_path: PathBuf,

    pub host: String,

    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_MERGED_FILE),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn with_data_path(mut self, path: PathBuf) -> Self {
        self.data_path = path;
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// `host:port` string handed to the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.data_path.is_file() {
            return Err(CentreError::SourceNotFound {
                path: self.data_path.clone(),
            });
        }

        if self.host.trim().is_empty() {
            return Err(CentreError::Configuration {
                message: "host must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
