//! Centre Finder Library
//!
//! Integrates service centre data from two CSV tables and one XML document
//! into a single denormalized CSV, and answers read-only lookups over it.
//!
//! This library provides tools for:
//! - Loading the centre services, reporting centres and centre locations sources
//! - Joining them on CentreID into one row per (centre, service) pair
//! - Indexing the merged table by postcode and by service
//! - Serving `getServices` and `getRCentre` lookups over HTTP

pub mod config;
pub mod constants;
pub mod error;
pub mod lookup;
pub mod merge;
pub mod models;
pub mod server;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::{MergeConfig, ServerConfig};
pub use error::{CentreError, LookupError, Result};
pub use lookup::CentreIndex;
pub use merge::MergePipeline;
pub use models::{CentreSummary, MergeStats, MergedRecord, PostcodeServices, ServiceCentres};
