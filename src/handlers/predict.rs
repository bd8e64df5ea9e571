//! Prediction handler
//!
//! The body is taken as raw bytes rather than through the `Json`
//! extractor: extractor rejections answer with 4xx, and this endpoint's
//! contract is that every failure, malformed JSON included, comes back as
//! HTTP 200 with an `{"error": ...}` body.

use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::error::{PredictError, PredictResult};
use crate::features;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: i64,
}

/// Run the predict transform: parse, vectorize, scale, classify.
pub async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> PredictResult<Json<PredictResponse>> {
    let value: Value =
        serde_json::from_slice(&body).map_err(|e| PredictError::InvalidJson(e.to_string()))?;

    let payload = value
        .as_object()
        .ok_or(PredictError::NotAnObject(json_type_name(&value)))?;

    let artifacts = &state.artifacts;
    let vector = features::build_vector(&artifacts.columns, payload)?;
    let scaled = artifacts.scaler.transform(&vector);
    let prediction = artifacts.classifier.predict(&scaled);

    Ok(Json(PredictResponse { prediction }))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
