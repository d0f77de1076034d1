//! In-memory store and oracle used by the unit tests.

use crate::model::{AirportRecord, RouteRecord};
use crate::oracle::{OracleError, PlausibilityOracle, PlausibilityQuery, SegmentVerdict};
use crate::store::{RouteStore, StoreError};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub fn airport(icao: &str, iata: &str, lat: f64, lon: f64) -> AirportRecord {
    AirportRecord {
        icao: icao.into(),
        iata: iata.into(),
        name: format!("{icao} airport"),
        country_iso2: "ZZ".into(),
        lat,
        lon,
    }
}

#[derive(Default)]
pub struct FakeStore {
    routes: HashMap<String, RouteRecord>,
    unavailable: HashSet<String>,
    delays: HashMap<String, Duration>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl FakeStore {
    pub fn with_route(mut self, route: RouteRecord) -> Self {
        self.routes.insert(route.callsign.clone(), route);
        self
    }

    pub fn unavailable_for(mut self, callsign: &str) -> Self {
        self.unavailable.insert(callsign.into());
        self
    }

    /// Makes `get_route` for `callsign` take `millis` before answering.
    pub fn with_delay(mut self, callsign: &str, millis: u64) -> Self {
        self.delays
            .insert(callsign.into(), Duration::from_millis(millis));
        self
    }

    /// Highest number of `get_route` calls that were running at once.
    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

impl RouteStore for FakeStore {
    async fn get_route(&self, callsign: &str) -> Result<RouteRecord, StoreError> {
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(running, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(callsign) {
            tokio::time::sleep(*delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.unavailable.contains(callsign) {
            return Err(StoreError::Sql(sqlx::Error::PoolTimedOut));
        }
        Ok(self
            .routes
            .get(callsign)
            .cloned()
            .unwrap_or_else(|| RouteRecord::unknown(callsign)))
    }

    async fn get_airport(&self, icao: &str) -> Result<Option<AirportRecord>, StoreError> {
        Ok(self
            .routes
            .values()
            .flat_map(|r| r.airports.iter())
            .find(|a| a.icao == icao)
            .cloned())
    }
}

type SegmentKey = (String, String, String, String);

/// Answers per segment from a script and records every query it receives.
#[derive(Default)]
pub struct ScriptedOracle {
    verdicts: HashMap<SegmentKey, SegmentVerdict>,
    calls: Mutex<Vec<PlausibilityQuery>>,
}

impl ScriptedOracle {
    pub fn with_verdict(
        mut self,
        a: &AirportRecord,
        b: &AirportRecord,
        plausible: bool,
        distance_nm: f64,
    ) -> Self {
        let key = (
            format!("{:.5}", a.lat),
            format!("{:.5}", a.lon),
            format!("{:.5}", b.lat),
            format!("{:.5}", b.lon),
        );
        self.verdicts.insert(
            key,
            SegmentVerdict {
                plausible,
                distance_nm,
            },
        );
        self
    }

    pub fn calls(&self) -> Vec<PlausibilityQuery> {
        self.calls.lock().unwrap().clone()
    }
}

impl PlausibilityOracle for ScriptedOracle {
    async fn check(&self, query: &PlausibilityQuery) -> Result<SegmentVerdict, OracleError> {
        self.calls.lock().unwrap().push(query.clone());
        query.validate()?;

        let key = (
            query.a_lat.clone(),
            query.a_lon.clone(),
            query.b_lat.clone(),
            query.b_lon.clone(),
        );
        Ok(self.verdicts.get(&key).copied().unwrap_or(SegmentVerdict {
            plausible: false,
            distance_nm: 999.0,
        }))
    }
}
