use nc_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// On-disk form of the pre-fitted vectorizer: term-to-column mapping plus
/// one idf weight per column. Produced by the training process, consumed
/// read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerArtifact {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
}

/// Maps cleaned text to a fixed-dimension tf-idf feature vector.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn from_artifact(artifact: VectorizerArtifact) -> Result<Self> {
        if artifact.idf.len() != artifact.vocabulary.len() {
            return Err(Error::Artifact(format!(
                "vectorizer artifact is inconsistent: {} vocabulary terms but {} idf weights",
                artifact.vocabulary.len(),
                artifact.idf.len()
            )));
        }
        if let Some((term, &column)) = artifact
            .vocabulary
            .iter()
            .find(|(_, &column)| column >= artifact.idf.len())
        {
            return Err(Error::Artifact(format!(
                "vectorizer artifact is inconsistent: term '{}' maps to column {} of {}",
                term,
                column,
                artifact.idf.len()
            )));
        }
        Ok(Self {
            vocabulary: artifact.vocabulary,
            idf: artifact.idf,
        })
    }

    /// Load the vectorizer artifact from disk. Missing or corrupt files are
    /// a fatal startup condition.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Artifact(format!("cannot read vectorizer artifact {}: {}", path.display(), e))
        })?;
        let artifact: VectorizerArtifact = serde_json::from_str(&contents).map_err(|e| {
            Error::Artifact(format!("cannot parse vectorizer artifact {}: {}", path.display(), e))
        })?;
        let vectorizer = Self::from_artifact(artifact)?;
        info!(
            "Loaded vectorizer from {} ({} terms)",
            path.display(),
            vectorizer.dimension()
        );
        Ok(vectorizer)
    }

    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    /// Term counts over the fitted vocabulary, weighted by idf and
    /// L2-normalized. Unseen terms contribute nothing; empty cleaned text
    /// yields the zero vector.
    pub fn transform(&self, cleaned: &str) -> Vec<f64> {
        let mut features = vec![0.0; self.dimension()];

        for token in cleaned.split_whitespace() {
            if let Some(&column) = self.vocabulary.get(token) {
                features[column] += 1.0;
            }
        }

        for (column, value) in features.iter_mut().enumerate() {
            *value *= self.idf[column];
        }

        let norm = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut features {
                *value /= norm;
            }
        }

        features
    }
}
