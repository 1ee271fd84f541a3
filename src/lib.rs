// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod classify;
pub mod config;
pub mod embed;
pub mod error;
pub mod extract;
pub mod features;
pub mod pipeline;
pub mod scrape;
pub mod text;
pub mod utils;

pub use classify::{LogisticModel, UsefulnessClassifier};
pub use config::{Config, ModelConfig, ScrapeConfig};
pub use embed::{mean_vector, EmbeddingModel};
pub use error::{PipelineError, Result};
pub use extract::{Classification, PatentRecord, CLASS_ALPHABET};
pub use features::{FeatureScaler, FeatureVector};
pub use pipeline::{PatentPipeline, Prediction};
pub use scrape::{DocumentLoader, PageDocument, PageLayout};
pub use text::ClaimNormalizer;
pub use utils::{sanitize_patent_number, PatentNumber};
