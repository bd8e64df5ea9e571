//! Feature vector assembly
//!
//! Builds the fixed-length input vector by walking the feature schema in
//! order and looking each name up in the request payload. Missing names
//! default to 0.0; keys outside the schema are ignored.

use ndarray::Array1;
use serde_json::{Map, Value};

use crate::error::{PredictError, PredictResult};

/// Build the ordered feature vector for one request payload.
pub fn build_vector(columns: &[String], payload: &Map<String, Value>) -> PredictResult<Array1<f64>> {
    let mut features = Vec::with_capacity(columns.len());

    for name in columns {
        let value = match payload.get(name) {
            Some(value) => coerce_number(name, value)?,
            None => 0.0,
        };
        features.push(value);
    }

    Ok(Array1::from_vec(features))
}

/// Coerce a single JSON value to f64 with the same leniency the service
/// has always had: numbers pass through, numeric strings are parsed
/// (surrounding whitespace allowed), booleans become 0/1. Everything
/// else, including an explicit null, is a conversion failure.
fn coerce_number(name: &str, value: &Value) -> PredictResult<f64> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| PredictError::NotNumeric {
            name: name.to_string(),
            value: n.to_string(),
        }),
        Value::String(s) => s.trim().parse().map_err(|_| PredictError::NotNumeric {
            name: name.to_string(),
            value: s.clone(),
        }),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        other => Err(PredictError::NotNumeric {
            name: name.to_string(),
            value: other.to_string(),
        }),
    }
}
