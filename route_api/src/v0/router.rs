use crate::state::AppState;
use crate::v0::handlers::airports::get_airport;
use crate::v0::handlers::routes::{get_route, get_route_with_position, post_routeset};
use axum::Router;
use axum::routing::{get, post};
use route_resolver::{PlausibilityOracle, RouteStore};

pub fn router<S, O>() -> Router<AppState<S, O>>
where
    S: RouteStore + 'static,
    O: PlausibilityOracle + 'static,
{
    Router::<AppState<S, O>>::new()
        .route("/route/{callsign}", get(get_route::<S, O>))
        .route(
            "/route/{callsign}/{lat}/{lng}",
            get(get_route_with_position::<S, O>),
        )
        .route("/routeset", post(post_routeset::<S, O>))
        .route("/airport/{icao}", get(get_airport::<S, O>))
}
