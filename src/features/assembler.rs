// file: src/features/assembler.rs
// description: fixed-shape classifier input vector assembly
// reference: classifier input layout contract

use crate::error::{PipelineError, Result};
use crate::extract::{Classification, PatentRecord, CLASS_ALPHABET};

/// The classifier's fixed input layout:
/// [one-hot classification (7)] + [6 numeric counts] + [claim embedding (100)].
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f32>);

impl FeatureVector {
    pub const ONE_HOT_LEN: usize = CLASS_ALPHABET.len();
    pub const NUMERIC_LEN: usize = 6;
    pub const EMBEDDING_LEN: usize = 100;
    pub const LEN: usize = Self::ONE_HOT_LEN + Self::NUMERIC_LEN + Self::EMBEDDING_LEN;

    /// Concatenates the record's categorical and numeric fields with the
    /// vectorized claim text. The embedding must already have the contract
    /// dimension; anything else is a shape violation.
    pub fn assemble(record: &PatentRecord, claim_embedding: &[f32]) -> Result<Self> {
        if claim_embedding.len() != Self::EMBEDDING_LEN {
            return Err(PipelineError::Shape {
                expected: Self::EMBEDDING_LEN,
                actual: claim_embedding.len(),
            });
        }

        let mut values = Vec::with_capacity(Self::LEN);
        values.extend_from_slice(&one_hot(record.classification));
        values.extend_from_slice(&[
            record.num_applications as f32,
            record.patent_citations as f32,
            record.non_patent_citations as f32,
            record.num_claims as f32,
            record.num_similar_prior_art as f32,
            record.num_inventors as f32,
        ]);
        values.extend_from_slice(claim_embedding);

        debug_assert_eq!(values.len(), Self::LEN);
        Ok(Self(values))
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One-hot encoding over the classification alphabet; all zero for an
/// unknown classification.
fn one_hot(classification: Classification) -> [f32; FeatureVector::ONE_HOT_LEN] {
    let mut slots = [0.0; FeatureVector::ONE_HOT_LEN];
    if let Some(letter) = classification.letter() {
        if let Some(index) = CLASS_ALPHABET.iter().position(|&c| c == letter) {
            slots[index] = 1.0;
        }
    }
    slots
}
