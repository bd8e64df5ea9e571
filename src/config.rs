//! Configuration module

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Path to the feature-schema artifact (ordered column names)
    pub columns_path: String,

    /// Path to the fitted scaler artifact
    pub scaler_path: String,

    /// Path to the fitted classifier artifact
    pub model_path: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),

            columns_path: env::var("COLUMNS_PATH")
                .unwrap_or_else(|_| "columns.json".to_string()),

            scaler_path: env::var("SCALER_PATH")
                .unwrap_or_else(|_| "scaler.json".to_string()),

            model_path: env::var("MODEL_PATH")
                .unwrap_or_else(|_| "model.json".to_string()),
        }
    }
}
