//! Linear classifier
//!
//! The fitted model is exported as one coefficient row and one intercept
//! per class. Prediction is an argmax over the per-class decision scores,
//! mapped through the class-label list. Entirely deterministic.

use ndarray::{Array1, Array2};

/// Fitted multinomial linear classifier
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    /// Integer class labels, one per coefficient row
    classes: Vec<i64>,

    /// Shape (n_classes, n_features)
    coefficients: Array2<f64>,

    /// One intercept per class
    intercepts: Array1<f64>,
}

impl LinearClassifier {
    /// Build from exported model parameters. Rows must all have the same
    /// length and match the number of classes and intercepts; the artifact
    /// loader validates that before calling this.
    pub fn new(classes: Vec<i64>, coefficients: Array2<f64>, intercepts: Vec<f64>) -> Self {
        Self {
            classes,
            coefficients,
            intercepts: Array1::from_vec(intercepts),
        }
    }

    pub fn n_features(&self) -> usize {
        self.coefficients.ncols()
    }

    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    /// Predict the class label for a scaled feature vector.
    ///
    /// Ties keep the lowest-index class so repeated calls on the same
    /// input always return the same label.
    pub fn predict(&self, features: &Array1<f64>) -> i64 {
        let scores = self.coefficients.dot(features) + &self.intercepts;

        let mut best = 0;
        for (idx, &score) in scores.iter().enumerate() {
            if score > scores[best] {
                best = idx;
            }
        }

        self.classes[best]
    }
}
