// file: src/text/mod.rs
// description: claim text normalization module exports
// reference: internal module structure

pub mod lemma;
pub mod normalizer;
pub mod stopwords;

pub use normalizer::ClaimNormalizer;
