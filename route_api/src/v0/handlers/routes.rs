use crate::state::AppState;
use crate::v0::api_models::{PlaneList, RoutesetEntry};
use crate::v0::error::ApiError;
use crate::v0::pretty::PrettyJson;
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use route_resolver::{PlausibilityOracle, Position, RouteStore};
use tracing::warn;

/// Route for a callsign, without a plausibility verdict.
pub async fn get_route<S, O>(
    State(state): State<AppState<S, O>>,
    Path(callsign): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    S: RouteStore,
    O: PlausibilityOracle,
{
    let route = state.resolver.lookup(&callsign).await?;
    Ok(PrettyJson(route))
}

/// Route for a callsign, annotated with whether `lat`/`lng` lies on it.
pub async fn get_route_with_position<S, O>(
    State(state): State<AppState<S, O>>,
    Path((callsign, lat, lng)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, ApiError>
where
    S: RouteStore,
    O: PlausibilityOracle,
{
    let route = state
        .resolver
        .resolve(&callsign, &Position::new(lat, lng))
        .await?;
    Ok(PrettyJson(route))
}

/// Resolves every plane in the list; failures are reported in their own slot.
pub async fn post_routeset<S, O>(
    State(state): State<AppState<S, O>>,
    Json(plane_list): Json<PlaneList>,
) -> impl IntoResponse
where
    S: RouteStore,
    O: PlausibilityOracle,
{
    let callsigns = plane_list
        .planes
        .iter()
        .map(|p| p.callsign.clone())
        .collect::<Vec<_>>();

    let results = state.batch.resolve_all(plane_list.planes).await;

    let entries = callsigns
        .into_iter()
        .zip(results)
        .map(|(callsign, result)| match result {
            Ok(route) => RoutesetEntry::Resolved(route),
            Err(e) => {
                warn!(%callsign, error = %e, "routeset item failed");
                RoutesetEntry::Failed {
                    callsign,
                    error: e.to_string(),
                }
            }
        })
        .collect::<Vec<_>>();

    PrettyJson(entries)
}
