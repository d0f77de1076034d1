use crate::state::AppState;
use crate::v0::error::ApiError;
use crate::v0::pretty::PrettyJson;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use route_resolver::{PlausibilityOracle, RouteStore};

/// Airport record for an ICAO code, 404 if the store has none.
pub async fn get_airport<S, O>(
    State(state): State<AppState<S, O>>,
    Path(icao): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    S: RouteStore,
    O: PlausibilityOracle,
{
    state
        .resolver
        .store()
        .get_airport(&icao)
        .await?
        .map(PrettyJson)
        .ok_or(ApiError::AirportNotFound(icao))
}
