// file: src/embed/mod.rs
// description: word embedding model and text vectorization exports
// reference: internal module structure

pub mod model;
pub mod vectorizer;

pub use model::EmbeddingModel;
pub use vectorizer::mean_vector;
