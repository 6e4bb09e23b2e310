//! Lookup service over the merged table.
//!
//! The merged table is loaded once and grouped in a single pass into typed
//! maps keyed by postcode and by service. The resulting [`CentreIndex`] is
//! immutable; request handlers share it behind an `Arc`.

use crate::models::{CentreSummary, MergedRecord, PostcodeServices, ServiceCentres};
use std::collections::HashMap;

pub mod loader;
pub mod query;

#[cfg(test)]
pub mod tests;

pub use query::Lookup;

/// Immutable index of merged records for postcode and service queries
#[derive(Debug, Clone, Default)]
pub struct CentreIndex {
    /// Merged rows in table order
    pub(crate) records: Vec<MergedRecord>,

    /// One group per distinct (postcode, suburb) pair, in first-appearance order
    pub(crate) postcode_groups: Vec<PostcodeServices>,

    /// postcode → first suburb seen and the services of every row at that postcode
    pub(crate) postcodes: HashMap<String, PostcodeServices>,

    /// One group per distinct service, in first-appearance order
    pub(crate) service_groups: Vec<ServiceCentres>,

    /// service → position in `service_groups`
    pub(crate) services: HashMap<String, usize>,
}

impl CentreIndex {
    /// Group merged rows by postcode and by service
    pub fn from_records(records: Vec<MergedRecord>) -> Self {
        let mut postcode_groups: Vec<PostcodeServices> = Vec::new();
        let mut group_positions: HashMap<(String, String), usize> = HashMap::new();
        let mut postcodes: HashMap<String, PostcodeServices> = HashMap::new();
        let mut service_groups: Vec<ServiceCentres> = Vec::new();
        let mut services: HashMap<String, usize> = HashMap::new();

        for record in &records {
            let group_key = (record.postcode.clone(), record.suburb.clone());
            let position = *group_positions.entry(group_key).or_insert_with(|| {
                postcode_groups.push(PostcodeServices {
                    postcode: record.postcode.clone(),
                    suburb: record.suburb.clone(),
                    services: Vec::new(),
                });
                postcode_groups.len() - 1
            });
            postcode_groups[position]
                .services
                .push(record.service.clone());

            postcodes
                .entry(record.postcode.clone())
                .or_insert_with(|| PostcodeServices {
                    postcode: record.postcode.clone(),
                    suburb: record.suburb.clone(),
                    services: Vec::new(),
                })
                .services
                .push(record.service.clone());

            let position = *services.entry(record.service.clone()).or_insert_with(|| {
                service_groups.push(ServiceCentres {
                    service: record.service.clone(),
                    reporting_centres: Vec::new(),
                });
                service_groups.len() - 1
            });
            service_groups[position]
                .reporting_centres
                .push(CentreSummary::from(record));
        }

        Self {
            records,
            postcode_groups,
            postcodes,
            service_groups,
            services,
        }
    }

    /// Number of merged rows
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Number of distinct postcodes
    pub fn postcode_count(&self) -> usize {
        self.postcodes.len()
    }

    /// Number of distinct services
    pub fn service_count(&self) -> usize {
        self.service_groups.len()
    }

    pub fn records(&self) -> &[MergedRecord] {
        &self.records
    }
}
