//! Standard (z-score) scaler
//!
//! Holds the per-feature mean and scale fitted during training and applies
//! `(x - mean) / scale` before classification. Read-only after load.

use ndarray::Array1;

/// Fitted z-score normalization parameters
#[derive(Debug, Clone)]
pub struct StandardScaler {
    mean: Array1<f64>,
    scale: Array1<f64>,
}

impl StandardScaler {
    /// Build from the fitted per-feature vectors. The artifact loader
    /// checks both lengths against the feature schema beforehand.
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Self {
        Self {
            mean: Array1::from_vec(mean),
            scale: Array1::from_vec(scale),
        }
    }

    /// Number of features this scaler was fitted on
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Transform a feature vector of length `n_features`.
    pub fn transform(&self, features: &Array1<f64>) -> Array1<f64> {
        (features - &self.mean) / &self.scale
    }
}
