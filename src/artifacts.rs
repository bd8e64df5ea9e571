//! Artifact loader
//!
//! Loads the three fitted artifacts at process startup: the ordered
//! feature schema, the scaler, and the classifier. All three are flat JSON
//! exports of the training run. Loading happens once, before the server
//! binds; any failure here is fatal and the process never serves traffic.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use ndarray::Array2;
use serde::Deserialize;

use crate::config::Config;
use crate::model::{LinearClassifier, StandardScaler};

/// Everything the predict path needs, loaded once and read-only after.
#[derive(Debug)]
pub struct Artifacts {
    /// Ordered feature names the classifier expects
    pub columns: Vec<String>,
    pub scaler: StandardScaler,
    pub classifier: LinearClassifier,
}

/// On-disk shape of `scaler.json` (StandardScaler `mean_` / `scale_`)
#[derive(Deserialize)]
struct ScalerFile {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

/// On-disk shape of `model.json` (one coefficient row per class)
#[derive(Deserialize)]
struct ModelFile {
    classes: Vec<i64>,
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

impl Artifacts {
    /// Load and cross-validate all artifacts named by the configuration.
    pub fn load(config: &Config) -> Result<Self> {
        let columns: Vec<String> = read_json(&config.columns_path)?;
        if columns.is_empty() {
            bail!("feature schema {} is empty", config.columns_path);
        }

        let scaler_file: ScalerFile = read_json(&config.scaler_path)?;
        if scaler_file.mean.len() != columns.len() || scaler_file.scale.len() != columns.len() {
            bail!(
                "scaler {} was fitted on {} features, schema has {}",
                config.scaler_path,
                scaler_file.mean.len(),
                columns.len()
            );
        }
        let scaler = StandardScaler::new(scaler_file.mean, scaler_file.scale);

        let model_file: ModelFile = read_json(&config.model_path)?;
        let classifier = build_classifier(model_file, columns.len(), &config.model_path)?;

        tracing::info!(
            "Artifacts loaded: {} features, {} classes",
            columns.len(),
            classifier.n_classes()
        );

        Ok(Self {
            columns,
            scaler,
            classifier,
        })
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T> {
    let raw = fs::read_to_string(Path::new(path))
        .with_context(|| format!("failed to read artifact {}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse artifact {}", path))
}

fn build_classifier(file: ModelFile, n_features: usize, path: &str) -> Result<LinearClassifier> {
    let n_classes = file.classes.len();
    if n_classes == 0 {
        bail!("model {} defines no classes", path);
    }
    if file.coefficients.len() != n_classes || file.intercepts.len() != n_classes {
        bail!(
            "model {} has {} classes but {} coefficient rows and {} intercepts",
            path,
            n_classes,
            file.coefficients.len(),
            file.intercepts.len()
        );
    }
    for (idx, row) in file.coefficients.iter().enumerate() {
        if row.len() != n_features {
            bail!(
                "model {} coefficient row {} has {} entries, schema has {} features",
                path,
                idx,
                row.len(),
                n_features
            );
        }
    }

    let flat: Vec<f64> = file.coefficients.into_iter().flatten().collect();
    let coefficients = Array2::from_shape_vec((n_classes, n_features), flat)
        .with_context(|| format!("failed to shape coefficients from {}", path))?;

    Ok(LinearClassifier::new(
        file.classes,
        coefficients,
        file.intercepts,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_artifact(dir: &TempDir, name: &str, contents: &str) -> String {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path.to_string_lossy().into_owned()
    }

    fn config_with(dir: &TempDir, columns: &str, scaler: &str, model: &str) -> Config {
        Config {
            port: 5000,
            columns_path: write_artifact(dir, "columns.json", columns),
            scaler_path: write_artifact(dir, "scaler.json", scaler),
            model_path: write_artifact(dir, "model.json", model),
        }
    }

    #[test]
    fn loads_consistent_artifacts() {
        let dir = TempDir::new().unwrap();
        let config = config_with(
            &dir,
            r#"["temp", "co2"]"#,
            r#"{"mean": [10.0, 400.0], "scale": [5.0, 20.0]}"#,
            r#"{"classes": [0, 1], "coefficients": [[1.0, 0.0], [0.0, 1.0]], "intercepts": [0.0, 0.0]}"#,
        );

        let artifacts = Artifacts::load(&config).unwrap();
        assert_eq!(artifacts.columns, vec!["temp", "co2"]);
        assert_eq!(artifacts.scaler.n_features(), 2);
        assert_eq!(artifacts.classifier.n_classes(), 2);
    }

    #[test]
    fn missing_artifact_is_fatal() {
        let dir = TempDir::new().unwrap();
        let mut config = config_with(
            &dir,
            r#"["temp"]"#,
            r#"{"mean": [0.0], "scale": [1.0]}"#,
            r#"{"classes": [0], "coefficients": [[1.0]], "intercepts": [0.0]}"#,
        );
        config.model_path = dir.path().join("absent.json").to_string_lossy().into_owned();

        assert!(Artifacts::load(&config).is_err());
    }

    #[test]
    fn rejects_scaler_schema_mismatch() {
        let dir = TempDir::new().unwrap();
        let config = config_with(
            &dir,
            r#"["temp", "co2"]"#,
            r#"{"mean": [0.0], "scale": [1.0]}"#,
            r#"{"classes": [0], "coefficients": [[1.0, 1.0]], "intercepts": [0.0]}"#,
        );

        let err = Artifacts::load(&config).unwrap_err();
        assert!(err.to_string().contains("fitted on 1 features"));
    }

    #[test]
    fn rejects_ragged_coefficients() {
        let dir = TempDir::new().unwrap();
        let config = config_with(
            &dir,
            r#"["temp", "co2"]"#,
            r#"{"mean": [0.0, 0.0], "scale": [1.0, 1.0]}"#,
            r#"{"classes": [0, 1], "coefficients": [[1.0, 1.0], [1.0]], "intercepts": [0.0, 0.0]}"#,
        );

        assert!(Artifacts::load(&config).is_err());
    }

    #[test]
    fn rejects_undeserializable_artifact() {
        let dir = TempDir::new().unwrap();
        let config = config_with(
            &dir,
            "not json at all",
            r#"{"mean": [0.0], "scale": [1.0]}"#,
            r#"{"classes": [0], "coefficients": [[1.0]], "intercepts": [0.0]}"#,
        );

        assert!(Artifacts::load(&config).is_err());
    }
}
