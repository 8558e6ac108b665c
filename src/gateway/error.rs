use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::constants::JUDGE_STATUS_HEADER;
use crate::scoring::ScoringError;

/// Judge status reported when a request is rejected before scoring.
pub const JUDGE_STATUS_SKIPPED: &str = "skipped";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid request: {0}")]
    InvalidStrategy(#[from] ScoringError),
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::InvalidRequest(_) | GatewayError::InvalidStrategy(_) => {
                StatusCode::BAD_REQUEST
            }
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            JUDGE_STATUS_HEADER,
            HeaderValue::from_static(JUDGE_STATUS_SKIPPED),
        );

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
