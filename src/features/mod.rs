// file: src/features/mod.rs
// description: feature vector assembly and scaling exports
// reference: internal module structure

pub mod assembler;
pub mod scaler;

pub use assembler::FeatureVector;
pub use scaler::FeatureScaler;
