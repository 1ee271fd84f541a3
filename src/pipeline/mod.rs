// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

pub mod predictor;

pub use predictor::{PatentPipeline, Prediction};
