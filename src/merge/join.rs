//! The two-step equi-join producing the merged table.

use crate::constants::merged_columns::{LATITUDE, LONGITUDE};
use crate::constants::source_columns::{
    CENTRE_ID, CENTRE_SERVICE_ID, LAT, LON, POSTCODE, SERVICE, SUBURB,
};
use crate::error::Result;
use polars::prelude::*;

/// Join the three source frames on CentreID.
///
/// 1. locations ⋈ services → (CentreID, Lat, Lon, CentreServiceID, Service)
/// 2. reporting centres ⋈ step 1 → adds Suburb, Postcode
///
/// Both joins are inner joins: a centre or service without a match on the
/// other side is dropped. Rows follow the reporting centres table, and within
/// one centre the services table, so the output is stable to input order.
pub fn merge_sources(
    locations: DataFrame,
    services: DataFrame,
    reporting_centres: DataFrame,
) -> Result<DataFrame> {
    let key = [col(CENTRE_ID)];
    let inner_join = || {
        JoinArgs {
            maintain_order: MaintainOrderJoin::LeftRight,
            ..JoinArgs::new(JoinType::Inner)
        }
    };

    let located_services = locations.lazy().join(
        services.lazy(),
        key.clone(),
        key.clone(),
        inner_join(),
    );

    let merged = reporting_centres
        .lazy()
        .join(
            located_services,
            key.clone(),
            key,
            inner_join(),
        )
        .select([
            col(CENTRE_SERVICE_ID),
            col(SERVICE),
            col(CENTRE_ID),
            col(SUBURB),
            col(POSTCODE),
            col(LAT).alias(LATITUDE),
            col(LON).alias(LONGITUDE),
        ])
        .collect()?;

    Ok(merged)
}
