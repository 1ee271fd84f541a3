// file: src/classify/logistic.rs
// description: pre-trained logistic model behind the classifier seam
// reference: serialized coefficient artifact from model training

use crate::error::{PipelineError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// The external classifier boundary. Implementations consume a scaled
/// feature vector and return the probability that the patent is useful.
pub trait UsefulnessClassifier {
    fn predict_probability(&self, features: &[f64]) -> Result<f64>;

    /// Number of features the artifact was trained on.
    fn input_len(&self) -> usize;
}

/// Logistic regression with coefficients shipped as a JSON artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct LogisticModel {
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LogisticModel {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| PipelineError::ModelLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let model: LogisticModel =
            serde_json::from_str(&raw).map_err(|e| PipelineError::ModelLoad {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if model.coefficients.is_empty() {
            return Err(PipelineError::ModelLoad {
                path: path.to_path_buf(),
                message: "artifact has no coefficients".to_string(),
            });
        }

        info!(
            "Loaded usefulness classifier with {} coefficients",
            model.coefficients.len()
        );
        Ok(model)
    }

    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }
}

impl UsefulnessClassifier for LogisticModel {
    fn predict_probability(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.coefficients.len() {
            return Err(PipelineError::Shape {
                expected: self.coefficients.len(),
                actual: features.len(),
            });
        }

        let logit: f64 = self
            .coefficients
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;

        Ok(sigmoid(logit))
    }

    fn input_len(&self) -> usize {
        self.coefficients.len()
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
