// file: src/pipeline/predictor.rs
// description: fetch, extract, vectorize, and score one patent
// reference: request pipeline orchestration

use crate::classify::{LogisticModel, UsefulnessClassifier};
use crate::config::Config;
use crate::embed::{mean_vector, EmbeddingModel};
use crate::error::Result;
use crate::extract::PatentRecord;
use crate::features::{FeatureScaler, FeatureVector};
use crate::scrape::{DocumentLoader, PageDocument};
use crate::text::ClaimNormalizer;
use crate::utils::{sanitize_patent_number, PatentNumber};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

const USEFUL_THRESHOLD: f64 = 0.5;

/// Scored outcome for one patent, plus the extracted record for display.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub patent_number: String,
    pub title: String,
    pub probability_useful: f64,
    pub useful: bool,
    pub record: PatentRecord,
}

/// The whole request pipeline with its process-scoped artifacts. Models are
/// loaded once at construction and shared read-only across requests.
pub struct PatentPipeline {
    loader: DocumentLoader,
    normalizer: ClaimNormalizer,
    embeddings: Arc<EmbeddingModel>,
    scaler: FeatureScaler,
    classifier: Box<dyn UsefulnessClassifier + Send + Sync>,
}

impl PatentPipeline {
    /// Loads every artifact named in the config. Fails fast on a missing or
    /// malformed artifact rather than at request time.
    pub fn from_config(config: &Config) -> Result<Self> {
        let loader = DocumentLoader::new(&config.scrape)?;
        let embeddings = Arc::new(EmbeddingModel::load(
            &config.models.embedding_path,
            config.models.embedding_dim,
        )?);
        let scaler = FeatureScaler::load(&config.models.scaler_path)?;
        let classifier = LogisticModel::load(&config.models.classifier_path)?;

        Ok(Self::assemble(loader, embeddings, scaler, Box::new(classifier)))
    }

    /// Wires a pipeline from already-loaded parts.
    pub fn assemble(
        loader: DocumentLoader,
        embeddings: Arc<EmbeddingModel>,
        scaler: FeatureScaler,
        classifier: Box<dyn UsefulnessClassifier + Send + Sync>,
    ) -> Self {
        Self {
            loader,
            normalizer: ClaimNormalizer::new(),
            embeddings,
            scaler,
            classifier,
        }
    }

    /// Fetches one patent page and scores it.
    pub async fn analyze(&self, raw_number: &str) -> Result<Prediction> {
        let patent = sanitize_patent_number(raw_number)?;
        let doc = self.loader.load(&patent).await?;
        self.evaluate(&patent, &doc)
    }

    /// Fetches one patent page and returns the extracted record without
    /// scoring it.
    pub async fn extract_only(&self, raw_number: &str) -> Result<PatentRecord> {
        let patent = sanitize_patent_number(raw_number)?;
        let doc = self.loader.load(&patent).await?;
        Ok(PatentRecord::from_document(&doc, patent.layout))
    }

    /// Synchronous scoring core over an already-fetched page. Field absence
    /// is absorbed by the record's defaults; only shape invariant
    /// violations can fail here.
    pub fn evaluate(&self, patent: &PatentNumber, doc: &PageDocument) -> Result<Prediction> {
        let record = PatentRecord::from_document(doc, patent.layout);

        let tokens = self.normalizer.normalize(&record.claim_text);
        debug!("Claim text reduced to {} cleaned tokens", tokens.len());

        let claim_embedding = mean_vector(&tokens, &self.embeddings);
        let features = FeatureVector::assemble(&record, &claim_embedding)?;
        let scaled = self.scaler.transform(&features)?;
        let probability_useful = self.classifier.predict_probability(&scaled)?;

        info!(
            "Scored {}: p(useful) = {:.4}",
            patent.number, probability_useful
        );

        Ok(Prediction {
            patent_number: patent.number.clone(),
            title: record.title.clone(),
            probability_useful,
            useful: probability_useful >= USEFUL_THRESHOLD,
            record,
        })
    }

    pub fn embedding_model(&self) -> &EmbeddingModel {
        &self.embeddings
    }

    /// Cross-checks that the loaded artifacts agree on the feature layout.
    pub fn verify_artifacts(&self) -> Result<()> {
        if self.embeddings.dimension() != FeatureVector::EMBEDDING_LEN {
            return Err(crate::error::PipelineError::Shape {
                expected: FeatureVector::EMBEDDING_LEN,
                actual: self.embeddings.dimension(),
            });
        }

        if self.classifier.input_len() != FeatureVector::LEN {
            return Err(crate::error::PipelineError::Shape {
                expected: FeatureVector::LEN,
                actual: self.classifier.input_len(),
            });
        }

        Ok(())
    }
}
