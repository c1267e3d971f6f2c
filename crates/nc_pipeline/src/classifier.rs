use nc_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::info;

/// Raw classifier output before formatting: class 1 = Real, class 0 = Fake.
/// The probability pair sums to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPrediction {
    pub class: usize,
    pub probabilities: [f64; 2],
}

/// Seam between the pipeline and whatever model backs it. Inference is
/// local and deterministic, so the trait is synchronous.
pub trait Classifier: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Feature dimension the model was trained on.
    fn n_features(&self) -> usize;

    fn predict(&self, features: &[f64]) -> Result<RawPrediction>;
}

/// On-disk form of the trained binary logistic regression model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub weights: Vec<f64>,
    pub intercept: f64,
}

/// Binary logistic regression over the tf-idf features. Positive class is
/// Real (class 1).
#[derive(Debug, Clone)]
pub struct LogisticModel {
    weights: Vec<f64>,
    intercept: f64,
}

impl LogisticModel {
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        if artifact.weights.is_empty() {
            return Err(Error::Artifact(
                "model artifact has no weights".to_string(),
            ));
        }
        Ok(Self {
            weights: artifact.weights,
            intercept: artifact.intercept,
        })
    }

    /// Load the model artifact from disk. Missing or corrupt files are a
    /// fatal startup condition.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Artifact(format!("cannot read model artifact {}: {}", path.display(), e))
        })?;
        let artifact: ModelArtifact = serde_json::from_str(&contents).map_err(|e| {
            Error::Artifact(format!("cannot parse model artifact {}: {}", path.display(), e))
        })?;
        let model = Self::from_artifact(artifact)?;
        info!(
            "Loaded model from {} ({} features)",
            path.display(),
            model.n_features()
        );
        Ok(model)
    }
}

impl Classifier for LogisticModel {
    fn name(&self) -> &str {
        "logistic"
    }

    fn n_features(&self) -> usize {
        self.weights.len()
    }

    fn predict(&self, features: &[f64]) -> Result<RawPrediction> {
        if features.len() != self.weights.len() {
            return Err(Error::DimensionMismatch {
                expected: self.weights.len(),
                found: features.len(),
            });
        }

        let score: f64 = self
            .weights
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;

        let p_real = 1.0 / (1.0 + (-score).exp());
        Ok(RawPrediction {
            class: usize::from(p_real >= 0.5),
            probabilities: [1.0 - p_real, p_real],
        })
    }
}

/// Returns the same prediction for every input. Stands in for a trained
/// model in tests and in demo serving.
#[derive(Debug, Clone)]
pub struct FixedClassifier {
    class: usize,
    probabilities: [f64; 2],
    n_features: usize,
}

impl FixedClassifier {
    pub fn new(class: usize, probabilities: [f64; 2], n_features: usize) -> Self {
        Self {
            class,
            probabilities,
            n_features,
        }
    }
}

impl Classifier for FixedClassifier {
    fn name(&self) -> &str {
        "fixed"
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, features: &[f64]) -> Result<RawPrediction> {
        if features.len() != self.n_features {
            return Err(Error::DimensionMismatch {
                expected: self.n_features,
                found: features.len(),
            });
        }
        Ok(RawPrediction {
            class: self.class,
            probabilities: self.probabilities,
        })
    }
}
