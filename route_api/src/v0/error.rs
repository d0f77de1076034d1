use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use route_resolver::{OracleError, ResolveError, StoreError};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// JSON error body, `{"statusCode": 404, "message": "..."}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessage {
    #[serde(skip)]
    status: StatusCode,
    status_code: u16,
    message: String,
}

impl ErrorMessage {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            status_code: status.as_u16(),
            message: message.into(),
        }
    }
}

impl IntoResponse for ErrorMessage {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("airport {0} not found")]
    AirportNotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Resolve(ResolveError::Store(_)) | ApiError::Store(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApiError::Resolve(ResolveError::Oracle(OracleError::MalformedCoordinate { .. })) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Resolve(ResolveError::Oracle(OracleError::Request(_))) => {
                StatusCode::BAD_GATEWAY
            }
            ApiError::AirportNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::Resolve(ResolveError::Store(e)) | ApiError::Store(e) => {
                warn!(error = ?e, "route store error");
                "route store unavailable".to_string()
            }
            ApiError::Resolve(ResolveError::Oracle(e @ OracleError::MalformedCoordinate { .. })) => {
                warn!(error = %e, "rejected position");
                e.to_string()
            }
            ApiError::Resolve(ResolveError::Oracle(OracleError::Request(e))) => {
                warn!(error = ?e, "plausibility oracle request failed");
                "plausibility oracle unavailable".to_string()
            }
            ApiError::AirportNotFound(_) => self.to_string(),
        };
        ErrorMessage::new(self.status(), message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    async fn body_of(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn error_body_carries_numeric_status() {
        let body = serde_json::to_value(ErrorMessage::new(StatusCode::BAD_GATEWAY, "down")).unwrap();
        assert_eq!(body, json!({"statusCode": 502, "message": "down"}));
    }

    #[tokio::test]
    async fn missing_airport_is_not_found() {
        let response = ApiError::AirportNotFound("ZZZZ".into()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_of(response).await;
        assert_eq!(body["statusCode"], 404);
        assert_eq!(body["message"], "airport ZZZZ not found");
    }

    #[tokio::test]
    async fn malformed_coordinate_names_the_field() {
        let err = ApiError::from(ResolveError::Oracle(OracleError::MalformedCoordinate {
            field: "lng",
            value: "east".into(),
        }));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let body = body_of(err.into_response()).await;
        assert_eq!(body["statusCode"], 400);
        assert!(body["message"].as_str().unwrap().contains("lng"));
    }

    #[test]
    fn store_failures_are_service_unavailable() {
        let direct = ApiError::Store(StoreError::Sql(sqlx::Error::PoolTimedOut));
        let resolved = ApiError::Resolve(ResolveError::Store(StoreError::Sql(
            sqlx::Error::PoolTimedOut,
        )));
        assert_eq!(direct.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(resolved.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
