//! Postcode and service queries
//!
//! An omitted (or empty) parameter selects every group; a present parameter
//! is validated first and then looked up in the index.

use super::CentreIndex;
use crate::constants::POSTCODE_LENGTH;
use crate::error::LookupError;
use crate::models::{PostcodeServices, ServiceCentres};
use serde::Serialize;

/// Result of a query: one group, or every group when no key was given
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Lookup<'a, T> {
    One(&'a T),
    All(&'a [T]),
}

impl<T> Lookup<'_, T> {
    /// Number of groups in the answer
    pub fn len(&self) -> usize {
        match self {
            Lookup::One(_) => 1,
            Lookup::All(groups) => groups.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Treat an empty query parameter as omitted
fn present(param: Option<&str>) -> Option<&str> {
    param.filter(|value| !value.is_empty())
}

/// Reject postcodes that are not exactly four characters long
pub fn validate_postcode(postcode: &str) -> Result<(), LookupError> {
    let length = postcode.chars().count();
    if length != POSTCODE_LENGTH {
        return Err(LookupError::Invalid(format!(
            "postcode must be {} characters, got {} ('{}')",
            POSTCODE_LENGTH, length, postcode
        )));
    }
    Ok(())
}

impl CentreIndex {
    /// Services at one postcode, with the suburb it belongs to
    pub fn find_services(&self, postcode: &str) -> Result<&PostcodeServices, LookupError> {
        validate_postcode(postcode)?;
        self.postcodes
            .get(postcode)
            .ok_or_else(|| LookupError::NotFound(format!("no services at postcode {}", postcode)))
    }

    /// Every (postcode, suburb) group with its services
    pub fn all_postcode_services(&self) -> &[PostcodeServices] {
        &self.postcode_groups
    }

    /// Answer `getServices`: one postcode, or every postcode group when omitted
    pub fn services_by_postcode(
        &self,
        postcode: Option<&str>,
    ) -> Result<Lookup<'_, PostcodeServices>, LookupError> {
        match present(postcode) {
            Some(postcode) => self.find_services(postcode).map(Lookup::One),
            None => Ok(Lookup::All(self.all_postcode_services())),
        }
    }

    /// Reporting centres offering one service (exact, case-sensitive match)
    pub fn find_centres(&self, service: &str) -> Result<&ServiceCentres, LookupError> {
        self.services
            .get(service)
            .map(|&position| &self.service_groups[position])
            .ok_or_else(|| LookupError::NotFound(format!("no reporting centres offer '{}'", service)))
    }

    /// Every service with the reporting centres offering it
    pub fn all_service_centres(&self) -> &[ServiceCentres] {
        &self.service_groups
    }

    /// Answer `getRCentre`: one service, or every service group when omitted
    pub fn centres_by_service(
        &self,
        service: Option<&str>,
    ) -> Result<Lookup<'_, ServiceCentres>, LookupError> {
        match present(service) {
            Some(service) => self.find_centres(service).map(Lookup::One),
            None => Ok(Lookup::All(self.all_service_centres())),
        }
    }
}
