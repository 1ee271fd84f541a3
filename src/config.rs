// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{PipelineError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub scrape: ScrapeConfig,
    pub models: ModelConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScrapeConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    pub embedding_path: PathBuf,
    pub scaler_path: PathBuf,
    pub classifier_path: PathBuf,
    pub embedding_dim: usize,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("PATENT_GAUGE")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            scrape: ScrapeConfig {
                base_url: "https://patents.google.com".to_string(),
                timeout_secs: 30,
                user_agent: format!("patent_gauge/{}", env!("CARGO_PKG_VERSION")),
            },
            models: ModelConfig {
                embedding_path: PathBuf::from("models/word2vec_claims.txt"),
                scaler_path: PathBuf::from("models/feature_scaler.json"),
                classifier_path: PathBuf::from("models/usefulness_model.json"),
                embedding_dim: 100,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.scrape.base_url.is_empty() {
            return Err(PipelineError::Config(
                "scrape.base_url must not be empty".to_string(),
            ));
        }

        if self.scrape.timeout_secs == 0 {
            return Err(PipelineError::Config(
                "scrape.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.models.embedding_dim == 0 {
            return Err(PipelineError::Config(
                "models.embedding_dim must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
