// file: src/features/scaler.rs
// description: standard-scaler artifact applied before classification
// reference: serialized (mean, scale) pairs from model training

use crate::error::{PipelineError, Result};
use crate::features::FeatureVector;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Per-element standardization `(x - mean) / scale`, with parameters fitted
/// at training time and shipped as a JSON artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl FeatureScaler {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| PipelineError::ModelLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let scaler: FeatureScaler =
            serde_json::from_str(&raw).map_err(|e| PipelineError::ModelLoad {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        scaler.check_shape()?;
        info!("Loaded feature scaler for {} elements", scaler.mean.len());
        Ok(scaler)
    }

    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        let scaler = Self { mean, scale };
        scaler.check_shape()?;
        Ok(scaler)
    }

    fn check_shape(&self) -> Result<()> {
        if self.mean.len() != FeatureVector::LEN {
            return Err(PipelineError::Shape {
                expected: FeatureVector::LEN,
                actual: self.mean.len(),
            });
        }
        if self.scale.len() != FeatureVector::LEN {
            return Err(PipelineError::Shape {
                expected: FeatureVector::LEN,
                actual: self.scale.len(),
            });
        }
        Ok(())
    }

    /// Standardizes an assembled feature vector. Zero scale elements pass
    /// the centered value through unchanged, matching how training handles
    /// constant features.
    pub fn transform(&self, features: &FeatureVector) -> Result<Vec<f64>> {
        if features.len() != self.mean.len() {
            return Err(PipelineError::Shape {
                expected: self.mean.len(),
                actual: features.len(),
            });
        }

        Ok(features
            .as_slice()
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(&x, (&mean, &scale))| {
                let centered = x as f64 - mean;
                if scale == 0.0 {
                    centered
                } else {
                    centered / scale
                }
            })
            .collect())
    }
}
