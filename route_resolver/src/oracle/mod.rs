pub mod http;

use crate::model::{AirportRecord, Position};
use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("malformed coordinate {field}: {value:?}")]
    MalformedCoordinate { field: &'static str, value: String },
    #[error("plausibility oracle request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Outcome of checking one segment.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SegmentVerdict {
    pub plausible: bool,
    #[serde(rename = "distance")]
    pub distance_nm: f64,
}

/// Observed position plus the two ends of a segment, all as decimal-degree text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlausibilityQuery {
    pub lat: String,
    pub lng: String,
    pub a_lat: String,
    pub a_lon: String,
    pub b_lat: String,
    pub b_lon: String,
}

impl PlausibilityQuery {
    /// Airport coordinates are always rendered with five fractional digits.
    /// The observed position is passed on as given, minus surrounding whitespace.
    pub fn for_segment(position: &Position, a: &AirportRecord, b: &AirportRecord) -> Self {
        Self {
            lat: position.lat.trim().to_string(),
            lng: position.lng.trim().to_string(),
            a_lat: format!("{:.5}", a.lat),
            a_lon: format!("{:.5}", a.lon),
            b_lat: format!("{:.5}", b.lat),
            b_lon: format!("{:.5}", b.lon),
        }
    }

    fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("lat", self.lat.as_str()),
            ("lng", self.lng.as_str()),
            ("a_lat", self.a_lat.as_str()),
            ("a_lon", self.a_lon.as_str()),
            ("b_lat", self.b_lat.as_str()),
            ("b_lon", self.b_lon.as_str()),
        ]
    }

    /// Fails on the first field that is not a finite decimal number.
    pub fn validate(&self) -> Result<(), OracleError> {
        for (field, value) in self.fields() {
            match value.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => {}
                _ => {
                    return Err(OracleError::MalformedCoordinate {
                        field,
                        value: value.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Judges whether a position is consistent with travel along a segment.
pub trait PlausibilityOracle: Send + Sync {
    fn check(
        &self,
        query: &PlausibilityQuery,
    ) -> impl Future<Output = Result<SegmentVerdict, OracleError>> + Send;
}
