pub mod postgres;

use crate::model::{AirportRecord, RouteRecord};
use std::future::Future;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("route store query failed: {0}")]
    Sql(#[from] sqlx::Error),
}

/// Lookup of route and airport reference data.
pub trait RouteStore: Send + Sync {
    /// Returns the route for `callsign`, or [`RouteRecord::unknown`] when none is known.
    fn get_route(
        &self,
        callsign: &str,
    ) -> impl Future<Output = Result<RouteRecord, StoreError>> + Send;

    fn get_airport(
        &self,
        icao: &str,
    ) -> impl Future<Output = Result<Option<AirportRecord>, StoreError>> + Send;
}
