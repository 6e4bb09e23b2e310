//! Command-line argument definitions for the centre finder
//!
//! This module defines the CLI interface using the clap derive API: a
//! `merge` command building the merged table and a `serve` command answering
//! lookups over it.

use crate::config::{MergeConfig, ServerConfig};
use crate::constants::{
    DEFAULT_CENTRE_ELEMENT, DEFAULT_HOST, DEFAULT_LOCATIONS_FILE, DEFAULT_MERGED_FILE,
    DEFAULT_PORT, DEFAULT_REPORTING_CENTRES_FILE, DEFAULT_SERVICES_FILE,
};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the centre finder
#[derive(Debug, Clone, Parser)]
#[command(
    name = "centre-finder",
    version,
    about = "Merge service centre sources and serve postcode/service lookups",
    long_about = "Joins the centre services and reporting centres tables with the centre \
                  locations document into one denormalized CSV, and serves read-only \
                  lookups of services by postcode and of reporting centres by service."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Join the three sources into the merged table
    Merge(MergeArgs),
    /// Serve lookups over the merged table
    Serve(ServeArgs),
}

/// Logging flags shared by every command
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct LogArgs {
    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors. Overrides verbose settings.
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl LogArgs {
    /// Get the tracing level name for the chosen verbosity
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Arguments for the merge command
#[derive(Debug, Clone, Parser)]
pub struct MergeArgs {
    /// Centre services table (CentreServiceID, CentreID, Service)
    #[arg(long = "services", value_name = "PATH", default_value = DEFAULT_SERVICES_FILE)]
    pub services_path: PathBuf,

    /// Reporting centres table (CentreID, Suburb, Postcode)
    #[arg(
        long = "reporting-centres",
        value_name = "PATH",
        default_value = DEFAULT_REPORTING_CENTRES_FILE
    )]
    pub reporting_centres_path: PathBuf,

    /// Centre locations document (repeated elements with CentreID, Lat, Lon)
    #[arg(long = "locations", value_name = "PATH", default_value = DEFAULT_LOCATIONS_FILE)]
    pub locations_path: PathBuf,

    /// Merged output table, replaced on every run
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = DEFAULT_MERGED_FILE
    )]
    pub output_path: PathBuf,

    /// Name of the repeated XML element holding one centre
    #[arg(long = "centre-element", value_name = "NAME", default_value = DEFAULT_CENTRE_ELEMENT)]
    pub centre_element: String,

    #[command(flatten)]
    pub log: LogArgs,
}

impl MergeArgs {
    pub fn to_config(&self) -> MergeConfig {
        MergeConfig::default()
            .with_services_path(self.services_path.clone())
            .with_reporting_centres_path(self.reporting_centres_path.clone())
            .with_locations_path(self.locations_path.clone())
            .with_output_path(self.output_path.clone())
            .with_centre_element(self.centre_element.clone())
    }
}

/// Arguments for the serve command
#[derive(Debug, Clone, Parser)]
pub struct ServeArgs {
    /// Merged table produced by `merge`
    #[arg(short = 'd', long = "data", value_name = "PATH", default_value = DEFAULT_MERGED_FILE)]
    pub data_path: PathBuf,

    /// Host to bind
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to bind
    #[arg(short = 'p', long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[command(flatten)]
    pub log: LogArgs,
}

impl ServeArgs {
    pub fn to_config(&self) -> ServerConfig {
        ServerConfig::default()
            .with_data_path(self.data_path.clone())
            .with_host(self.host.clone())
            .with_port(self.port)
    }
}
