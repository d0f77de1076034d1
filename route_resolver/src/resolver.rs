use crate::model::{Position, RouteRecord};
use crate::oracle::{OracleError, PlausibilityOracle, PlausibilityQuery, SegmentVerdict};
use crate::store::{RouteStore, StoreError};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

/// Resolves one callsign against an observed position.
pub struct RouteResolver<S, O> {
    store: S,
    oracle: O,
}

impl<S, O> RouteResolver<S, O>
where
    S: RouteStore,
    O: PlausibilityOracle,
{
    pub fn new(store: S, oracle: O) -> Self {
        Self { store, oracle }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Route for `callsign` without any plausibility check.
    pub async fn lookup(&self, callsign: &str) -> Result<RouteRecord, ResolveError> {
        Ok(self.store.get_route(callsign).await?)
    }

    /// Fetches the route for `callsign` and annotates it with whether `position`
    /// lies plausibly on it.
    ///
    /// Segments are checked in chain order and the first plausible one decides.
    /// When none is plausible the verdict and distance of the last segment are
    /// kept. Unknown routes come back untouched; a known route without any
    /// segment is reported implausible.
    #[instrument(skip(self, position), fields(lat = %position.lat, lng = %position.lng))]
    pub async fn resolve(
        &self,
        callsign: &str,
        position: &Position,
    ) -> Result<RouteRecord, ResolveError> {
        let mut route = self.store.get_route(callsign).await?;
        if route.is_unknown() {
            debug!(name: "route.unknown", "no route known, skipping plausibility check");
            return Ok(route);
        }

        let mut last: Option<SegmentVerdict> = None;
        let mut checked = Vec::new();
        for (a, b) in route.segments() {
            checked.push(format!("{}-{}", a.display_code(), b.display_code()));
            let verdict = self
                .oracle
                .check(&PlausibilityQuery::for_segment(position, a, b))
                .await?;
            last = Some(verdict);
            if verdict.plausible {
                break;
            }
        }

        // A known route without a segment cannot place the position on it
        let Some(verdict) = last else {
            warn!(name: "route.no_segments", airport_codes = %route.airport_codes, "known route without segments");
            route.plausible = Some(false);
            return Ok(route);
        };

        if verdict.plausible {
            debug!(name: "route.plausible", checked = ?checked, distance_nm = verdict.distance_nm, "position is on route");
        } else {
            info!(name: "route.implausible", checked = ?checked, distance_nm = verdict.distance_nm, "position is off route");
        }

        route.plausible = Some(verdict.plausible);
        route.plausibility_distance_nm = Some(verdict.distance_nm);
        Ok(route)
    }
}
