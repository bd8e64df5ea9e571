//! Fitted model artifacts: the scaler and the classifier.

pub mod classifier;
pub mod scaler;

pub use classifier::LinearClassifier;
pub use scaler::StandardScaler;
