// file: src/embed/vectorizer.rs
// description: order-invariant mean-of-embeddings text summarization
// reference: averaged word2vec sentence representation

use crate::embed::EmbeddingModel;

/// Element-wise mean of the embeddings of all in-vocabulary tokens.
/// Out-of-vocabulary tokens are skipped; if nothing matches, the zero
/// vector of the model's dimension is returned. The mean makes the result
/// invariant to token order.
pub fn mean_vector(tokens: &[String], model: &EmbeddingModel) -> Vec<f32> {
    let mut sum = vec![0.0f32; model.dimension()];
    let mut matched = 0usize;

    for token in tokens {
        if let Some(vector) = model.vector(token) {
            for (acc, value) in sum.iter_mut().zip(vector) {
                *acc += value;
            }
            matched += 1;
        }
    }

    if matched > 0 {
        for value in sum.iter_mut() {
            *value /= matched as f32;
        }
    }

    sum
}
