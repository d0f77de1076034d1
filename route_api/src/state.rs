use route_resolver::{BatchResolver, PlausibilityOracle, RouteResolver, RouteStore};
use std::sync::Arc;

pub struct AppState<S, O> {
    pub resolver: Arc<RouteResolver<S, O>>,
    pub batch: BatchResolver<S, O>,
}

impl<S, O> AppState<S, O>
where
    S: RouteStore,
    O: PlausibilityOracle,
{
    pub fn new(store: S, oracle: O, batch_concurrency: usize) -> Self {
        let resolver = Arc::new(RouteResolver::new(store, oracle));
        let batch = BatchResolver::new(Arc::clone(&resolver), batch_concurrency);
        Self { resolver, batch }
    }
}

impl<S, O> Clone for AppState<S, O> {
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
            batch: self.batch.clone(),
        }
    }
}
