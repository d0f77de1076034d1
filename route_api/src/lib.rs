pub mod error;
pub mod state;
mod v0;

pub use state::AppState;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use route_resolver::{PlausibilityOracle, RouteStore};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Full HTTP surface: health check plus the `/api/0` routes, CORS open to any origin.
pub fn app<S, O>(state: AppState<S, O>) -> Router
where
    S: RouteStore + 'static,
    O: PlausibilityOracle + 'static,
{
    Router::new()
        .route("/health", get(|| async { StatusCode::OK }))
        .nest("/api/0", v0::router::<S, O>())
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
