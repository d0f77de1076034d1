use route_resolver::{RouteRecord, RouteRequest};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PlaneList {
    pub planes: Vec<RouteRequest>,
}

/// One slot of a `/routeset` response.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RoutesetEntry {
    Resolved(RouteRecord),
    Failed { callsign: String, error: String },
}
