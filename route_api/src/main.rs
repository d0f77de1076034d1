use route_api::error::MainError;
use route_api::{AppState, app};
use route_resolver::{HttpPlausibilityOracle, PgRouteStore};
use shared::error::InitializationError;
use shared::{init_tracing, initialize_db, load_config, shutdown_listener};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), MainError> {
    init_tracing()?;

    let config = load_config().map_err(InitializationError::from)?;
    info!(
        name: "config.loaded",
        oracle = %config.oracle.base_url,
        batch_concurrency = config.resolver.batch_concurrency,
        "config loaded"
    );

    let pool = initialize_db(&config.postgres).await?;
    let store = PgRouteStore::new(pool);
    let oracle = HttpPlausibilityOracle::from_config(&config.oracle)?;
    let state = AppState::new(store, oracle, config.resolver.batch_concurrency);

    let listen_addr = &config.server.listen_addr;
    info!(name: "server.starting", "starting server at {listen_addr}");
    let listener = TcpListener::bind(listen_addr).await?;
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_listener(None))
        .await?;

    Ok(())
}
