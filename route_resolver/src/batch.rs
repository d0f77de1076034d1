use crate::model::{RouteRecord, RouteRequest};
use crate::oracle::PlausibilityOracle;
use crate::resolver::{ResolveError, RouteResolver};
use crate::store::RouteStore;
use futures::StreamExt;
use futures::stream;
use std::sync::Arc;
use tracing::{info, instrument};

/// Resolves a list of requests independently, keeping one result slot per request.
pub struct BatchResolver<S, O> {
    resolver: Arc<RouteResolver<S, O>>,
    concurrency: usize,
}

impl<S, O> Clone for BatchResolver<S, O> {
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
            concurrency: self.concurrency,
        }
    }
}

impl<S, O> BatchResolver<S, O>
where
    S: RouteStore,
    O: PlausibilityOracle,
{
    /// `concurrency` is clamped to at least one resolution in flight.
    pub fn new(resolver: Arc<RouteResolver<S, O>>, concurrency: usize) -> Self {
        Self {
            resolver,
            concurrency: concurrency.max(1),
        }
    }

    pub fn resolver(&self) -> &RouteResolver<S, O> {
        &self.resolver
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Output has the same length and order as `requests`. A failed item only
    /// occupies its own slot.
    #[instrument(skip_all, fields(requests = requests.len()))]
    pub async fn resolve_all(
        &self,
        requests: Vec<RouteRequest>,
    ) -> Vec<Result<RouteRecord, ResolveError>> {
        let resolver = &self.resolver;
        let results: Vec<_> = stream::iter(requests)
            .map(|req| async move { resolver.resolve(&req.callsign, &req.position).await })
            .buffered(self.concurrency)
            .collect()
            .await;

        let failed = results.iter().filter(|r| r.is_err()).count();
        info!(name: "batch.resolved", total = results.len(), failed, "batch resolution finished");
        results
    }
}
