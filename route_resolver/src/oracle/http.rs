use crate::oracle::{OracleError, PlausibilityOracle, PlausibilityQuery, SegmentVerdict};
use reqwest::Client;
use shared::OracleConfig;
use std::time::Duration;
use tracing::{instrument, trace};

/// [`PlausibilityOracle`] served over HTTP at `{base_url}/plausible`.
///
/// Coordinates are validated locally before a request is sent, so malformed
/// text never reaches the remote service.
#[derive(Clone)]
pub struct HttpPlausibilityOracle {
    client: Client,
    endpoint: String,
}

impl HttpPlausibilityOracle {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/plausible", base_url.trim_end_matches('/')),
        })
    }

    pub fn from_config(config: &OracleConfig) -> Result<Self, reqwest::Error> {
        Self::new(
            &config.base_url,
            Duration::from_secs(config.timeout_seconds),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PlausibilityOracle for HttpPlausibilityOracle {
    #[instrument(skip(self))]
    async fn check(&self, query: &PlausibilityQuery) -> Result<SegmentVerdict, OracleError> {
        query.validate()?;

        let verdict = self
            .client
            .get(&self.endpoint)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json::<SegmentVerdict>()
            .await?;

        trace!(name: "oracle.checked", plausible = verdict.plausible, distance_nm = verdict.distance_nm);
        Ok(verdict)
    }
}
