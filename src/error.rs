//! Error handling
//!
//! Every failure on the predict path renders as HTTP 200 with
//! `{"error": "<message>"}`. Clients key off the body shape, not the
//! status code, so errors never surface as 4xx/5xx here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type PredictResult<T> = Result<T, PredictError>;

#[derive(Debug, Error)]
pub enum PredictError {
    /// Request body is missing or is not valid JSON
    #[error("invalid JSON body: {0}")]
    InvalidJson(String),

    /// Top-level JSON value is not an object
    #[error("expected a JSON object of feature values, got {0}")]
    NotAnObject(&'static str),

    /// A feature value could not be coerced to a float
    #[error("could not convert value for feature '{name}' to a number: {value}")]
    NotNumeric { name: String, value: String },
}

impl IntoResponse for PredictError {
    fn into_response(self) -> Response {
        tracing::debug!("predict failed: {}", self);

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (StatusCode::OK, body).into_response()
    }
}
