//! Resolves the scheduled route for a callsign and decides whether an
//! observed position is consistent with it.
//!
//! [`RouteResolver`] handles a single callsign, [`BatchResolver`] fans a
//! list of callsigns out over it. Both are generic over a [`RouteStore`]
//! and a [`PlausibilityOracle`]; [`PgRouteStore`] and
//! [`HttpPlausibilityOracle`] are the backends used by the service.

pub mod batch;
pub mod model;
pub mod oracle;
pub mod resolver;
pub mod store;

#[cfg(test)]
mod fakes;

pub use batch::BatchResolver;
pub use model::{AirportRecord, Position, RouteRecord, RouteRequest, UNKNOWN_ROUTE};
pub use oracle::http::HttpPlausibilityOracle;
pub use oracle::{OracleError, PlausibilityOracle, PlausibilityQuery, SegmentVerdict};
pub use resolver::{ResolveError, RouteResolver};
pub use store::postgres::PgRouteStore;
pub use store::{RouteStore, StoreError};
