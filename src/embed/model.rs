// file: src/embed/model.rs
// description: pre-trained word embedding model in word2vec text format
// reference: word2vec text export (optional "vocab dim" header, one token per line)

use crate::error::{PipelineError, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// Read-only token → vector map, loaded once at startup and shared across
/// requests for the process lifetime.
pub struct EmbeddingModel {
    dim: usize,
    vectors: HashMap<String, Vec<f32>>,
}

impl EmbeddingModel {
    /// Loads a word2vec text-format file. The first line may be a
    /// `vocab_size dim` header; every other line is a token followed by
    /// `dim` floats. The discovered dimension must match `expected_dim`.
    pub fn load(path: &Path, expected_dim: usize) -> Result<Self> {
        let file = File::open(path).map_err(|e| PipelineError::ModelLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let reader = BufReader::new(file);
        let mut vectors: HashMap<String, Vec<f32>> = HashMap::new();
        let mut dim: Option<usize> = None;

        for (line_no, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| PipelineError::ModelLoad {
                path: path.to_path_buf(),
                message: format!("line {}: {}", line_no + 1, e),
            })?;

            let mut parts = line.split_whitespace();
            let token = match parts.next() {
                Some(token) => token,
                None => continue,
            };
            let values: Vec<&str> = parts.collect();

            // Header line: two integers, no token vector.
            if line_no == 0 && values.len() == 1 {
                if token.parse::<usize>().is_ok() {
                    if let Ok(header_dim) = values[0].parse::<usize>() {
                        dim = Some(header_dim);
                        continue;
                    }
                }
            }

            let vector: Vec<f32> = values
                .iter()
                .map(|v| v.parse::<f32>())
                .collect::<std::result::Result<_, _>>()
                .map_err(|e| PipelineError::ModelLoad {
                    path: path.to_path_buf(),
                    message: format!("line {}: bad float: {}", line_no + 1, e),
                })?;

            match dim {
                Some(d) if d != vector.len() => {
                    return Err(PipelineError::ModelLoad {
                        path: path.to_path_buf(),
                        message: format!(
                            "line {}: dimension {} does not match {}",
                            line_no + 1,
                            vector.len(),
                            d
                        ),
                    });
                }
                None => dim = Some(vector.len()),
                _ => {}
            }

            vectors.insert(token.to_string(), vector);
        }

        let dim = dim.ok_or_else(|| PipelineError::ModelLoad {
            path: path.to_path_buf(),
            message: "model file is empty".to_string(),
        })?;

        if dim != expected_dim {
            return Err(PipelineError::ModelLoad {
                path: path.to_path_buf(),
                message: format!("dimension {} does not match configured {}", dim, expected_dim),
            });
        }

        info!(
            "Loaded embedding model: {} tokens, dimension {}",
            vectors.len(),
            dim
        );

        Ok(Self { dim, vectors })
    }

    /// Builds a model directly from vectors. All vectors must share `dim`.
    pub fn from_vectors(dim: usize, vectors: HashMap<String, Vec<f32>>) -> Result<Self> {
        for (token, vector) in &vectors {
            if vector.len() != dim {
                return Err(PipelineError::Shape {
                    expected: dim,
                    actual: vector.len(),
                });
            }
            debug_assert!(!token.is_empty());
        }
        Ok(Self { dim, vectors })
    }

    pub fn dimension(&self) -> usize {
        self.dim
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectors.len()
    }

    /// Embedding for a token, if it is in the vocabulary.
    pub fn vector(&self, token: &str) -> Option<&[f32]> {
        self.vectors.get(token).map(|v| v.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_model(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_with_header() {
        let file = write_model("2 3\nclaim 0.1 0.2 0.3\ndevice 0.4 0.5 0.6\n");
        let model = EmbeddingModel::load(file.path(), 3).unwrap();
        assert_eq!(model.dimension(), 3);
        assert_eq!(model.vocabulary_size(), 2);
        assert_eq!(model.vector("claim").unwrap(), &[0.1, 0.2, 0.3]);
        assert_eq!(model.vector("missing"), None);
    }

    #[test]
    fn test_load_without_header() {
        let file = write_model("claim 0.1 0.2\ndevice 0.3 0.4\n");
        let model = EmbeddingModel::load(file.path(), 2).unwrap();
        assert_eq!(model.dimension(), 2);
        assert_eq!(model.vocabulary_size(), 2);
    }

    #[test]
    fn test_dimension_mismatch_between_lines() {
        let file = write_model("claim 0.1 0.2\ndevice 0.3\n");
        assert!(EmbeddingModel::load(file.path(), 2).is_err());
    }

    #[test]
    fn test_configured_dimension_mismatch() {
        let file = write_model("claim 0.1 0.2\n");
        assert!(EmbeddingModel::load(file.path(), 100).is_err());
    }

    #[test]
    fn test_empty_file_rejected() {
        let file = write_model("");
        assert!(EmbeddingModel::load(file.path(), 100).is_err());
    }

    #[test]
    fn test_missing_file_rejected() {
        let missing = Path::new("/nonexistent/model.txt");
        assert!(EmbeddingModel::load(missing, 100).is_err());
    }
}
