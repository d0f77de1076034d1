use crate::model::{AirportRecord, RouteRecord};
use crate::store::{RouteStore, StoreError};
use sqlx::{Pool, Postgres};
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

#[derive(sqlx::FromRow)]
struct RouteRow {
    callsign: String,
    number: String,
    airline_code: String,
    airport_codes: String,
}

/// [`RouteStore`] over the `routes` and `airports` tables.
#[derive(Clone)]
pub struct PgRouteStore {
    pool: Pool<Postgres>,
}

impl PgRouteStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    async fn fetch_airports(&self, icaos: &[String]) -> Result<Vec<AirportRecord>, StoreError> {
        sqlx::query_as::<_, AirportRecord>(
            r"
            SELECT icao, iata, name, country_iso2, lat, lon
            FROM airports
            WHERE icao = ANY($1)
            ",
        )
        .bind(icaos)
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::Sql)
    }
}

/// Splits a `-` joined ICAO chain, dropping empty parts.
fn split_airport_codes(airport_codes: &str) -> Vec<String> {
    airport_codes
        .split('-')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_uppercase)
        .collect()
}

/// Orders `airports` along `chain`. `None` if any code in the chain has no record.
fn order_along_chain(
    chain: &[String],
    airports: Vec<AirportRecord>,
) -> Option<Vec<AirportRecord>> {
    let by_icao: HashMap<String, AirportRecord> = airports
        .into_iter()
        .map(|a| (a.icao.to_uppercase(), a))
        .collect();

    chain.iter().map(|icao| by_icao.get(icao).cloned()).collect()
}

/// Why a route row could not become a known route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IncompleteRoute {
    NotFound,
    TooShort,
    MissingAirport,
}

/// Builds the known route for `row` from the `airports` fetched for its chain.
fn assemble_route(
    row: Option<&RouteRow>,
    airports: Vec<AirportRecord>,
) -> Result<RouteRecord, IncompleteRoute> {
    let row = row.ok_or(IncompleteRoute::NotFound)?;
    let chain = split_airport_codes(&row.airport_codes);
    if chain.len() < 2 {
        return Err(IncompleteRoute::TooShort);
    }
    let airports = order_along_chain(&chain, airports).ok_or(IncompleteRoute::MissingAirport)?;

    Ok(RouteRecord::known(
        row.callsign.clone(),
        row.number.clone(),
        row.airline_code.clone(),
        airports,
    ))
}

impl RouteStore for PgRouteStore {
    #[instrument(skip(self))]
    async fn get_route(&self, callsign: &str) -> Result<RouteRecord, StoreError> {
        let callsign = callsign.trim().to_uppercase();

        let row = sqlx::query_as::<_, RouteRow>(
            r"
            SELECT callsign, number, airline_code, airport_codes
            FROM routes
            WHERE callsign = $1
            ",
        )
        .bind(&callsign)
        .fetch_optional(&self.pool)
        .await?;

        let chain = row
            .as_ref()
            .map(|r| split_airport_codes(&r.airport_codes))
            .unwrap_or_default();
        let airports = if chain.len() >= 2 {
            self.fetch_airports(&chain).await?
        } else {
            Vec::new()
        };

        match assemble_route(row.as_ref(), airports) {
            Ok(route) => Ok(route),
            Err(incomplete) => {
                let airport_codes = row.as_ref().map_or("", |r| r.airport_codes.as_str());
                match incomplete {
                    IncompleteRoute::NotFound => {
                        debug!(name: "route.not_found", %callsign, "no route row for callsign");
                    }
                    IncompleteRoute::TooShort => {
                        warn!(name: "route.chain.too_short", %callsign, airport_codes, "route has fewer than two airports");
                    }
                    IncompleteRoute::MissingAirport => {
                        warn!(name: "route.chain.missing_airport", %callsign, airport_codes, "route references an unknown airport");
                    }
                }
                Ok(RouteRecord::unknown(callsign))
            }
        }
    }

    #[instrument(skip(self))]
    async fn get_airport(&self, icao: &str) -> Result<Option<AirportRecord>, StoreError> {
        sqlx::query_as::<_, AirportRecord>(
            r"
            SELECT icao, iata, name, country_iso2, lat, lon
            FROM airports
            WHERE icao = $1
            ",
        )
        .bind(icao.trim().to_uppercase())
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::Sql)
    }
}
