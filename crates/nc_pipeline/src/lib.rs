use nc_core::{Error, Result, Verdict};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

pub mod classifier;
pub mod formatter;
pub mod normalizer;
pub mod stopwords;
pub mod vectorizer;

use classifier::{Classifier, LogisticModel};
use normalizer::TextNormalizer;
use stopwords::StopwordSet;
use vectorizer::TfidfVectorizer;

/// Locations of the pre-trained artifacts the pipeline is built from.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub model_path: PathBuf,
    pub vectorizer_path: PathBuf,
    pub stopwords_path: Option<PathBuf>,
}

/// The text-to-prediction pipeline: normalize, vectorize, classify, format.
/// Every invocation is a pure function of the input plus the artifacts
/// loaded at startup; nothing here mutates after construction.
#[derive(Debug)]
pub struct Pipeline {
    normalizer: TextNormalizer,
    vectorizer: TfidfVectorizer,
    classifier: Arc<dyn Classifier>,
}

impl Pipeline {
    pub fn new(
        normalizer: TextNormalizer,
        vectorizer: TfidfVectorizer,
        classifier: Arc<dyn Classifier>,
    ) -> Result<Self> {
        if vectorizer.dimension() != classifier.n_features() {
            return Err(Error::DimensionMismatch {
                expected: classifier.n_features(),
                found: vectorizer.dimension(),
            });
        }
        Ok(Self {
            normalizer,
            vectorizer,
            classifier,
        })
    }

    /// Load both artifacts and fail fast on anything that would make
    /// predictions undefined: missing files, corrupt contents, or a
    /// vocabulary whose size disagrees with the model.
    pub fn load(config: &PipelineConfig) -> Result<Self> {
        let vectorizer = TfidfVectorizer::load(&config.vectorizer_path)?;
        let model = LogisticModel::load(&config.model_path)?;
        let stopwords = StopwordSet::load(config.stopwords_path.as_deref());

        let pipeline = Self::new(
            TextNormalizer::new(stopwords),
            vectorizer,
            Arc::new(model),
        )?;
        info!(
            "Pipeline ready: {} features, {} classifier",
            pipeline.dimension(),
            pipeline.classifier.name()
        );
        Ok(pipeline)
    }

    pub fn dimension(&self) -> usize {
        self.vectorizer.dimension()
    }

    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }

    /// Run one article through the full pipeline. Empty or degenerate input
    /// is valid: it vectorizes to zeros and still produces a verdict.
    pub fn analyze(&self, text: &str) -> Result<Verdict> {
        let cleaned = self.normalizer.normalize(text);
        let features = self.vectorizer.transform(&cleaned);
        let prediction = self.classifier.predict(&features)?;
        Ok(formatter::verdict(&prediction))
    }
}

pub mod prelude {
    pub use super::{Pipeline, PipelineConfig};
    pub use crate::classifier::{Classifier, FixedClassifier, LogisticModel};
    pub use crate::normalizer::TextNormalizer;
    pub use crate::stopwords::StopwordSet;
    pub use crate::vectorizer::TfidfVectorizer;
    pub use nc_core::{Label, Result, Verdict};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::FixedClassifier;
    use crate::vectorizer::VectorizerArtifact;
    use nc_core::Label;
    use std::collections::HashMap;

    const ARTICLE: &str = "BREAKING!!! Scientists 100% confirm the moon is made of cheese.";

    fn test_vectorizer() -> TfidfVectorizer {
        let vocabulary = HashMap::from([
            ("breaking".to_string(), 0),
            ("scientists".to_string(), 1),
            ("moon".to_string(), 2),
            ("cheese".to_string(), 3),
        ]);
        TfidfVectorizer::from_artifact(VectorizerArtifact {
            vocabulary,
            idf: vec![1.2, 1.0, 1.4, 2.0],
        })
        .unwrap()
    }

    fn fixed_pipeline(class: usize, probabilities: [f64; 2]) -> Pipeline {
        Pipeline::new(
            TextNormalizer::new(StopwordSet::bundled()),
            test_vectorizer(),
            Arc::new(FixedClassifier::new(class, probabilities, 4)),
        )
        .unwrap()
    }

    #[test]
    fn fake_scenario_end_to_end() {
        let verdict = fixed_pipeline(0, [0.91, 0.09]).analyze(ARTICLE).unwrap();
        assert_eq!(verdict.label, Label::Fake);
        assert_eq!(verdict.confidence_real_percent, 9.0);
    }

    #[test]
    fn real_scenario_end_to_end() {
        let verdict = fixed_pipeline(1, [0.12, 0.88]).analyze(ARTICLE).unwrap();
        assert_eq!(verdict.label, Label::Real);
        assert_eq!(verdict.confidence_real_percent, 88.0);
    }

    #[test]
    fn analyze_is_idempotent() {
        let model = LogisticModel::from_artifact(classifier::ModelArtifact {
            weights: vec![0.7, -0.2, 1.1, -0.9],
            intercept: 0.05,
        })
        .unwrap();
        let pipeline = Pipeline::new(
            TextNormalizer::new(StopwordSet::bundled()),
            test_vectorizer(),
            Arc::new(model),
        )
        .unwrap();

        let first = pipeline.analyze(ARTICLE).unwrap();
        let second = pipeline.analyze(ARTICLE).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_still_produces_a_verdict() {
        let verdict = fixed_pipeline(0, [0.91, 0.09]).analyze("").unwrap();
        assert_eq!(verdict.label, Label::Fake);
    }

    #[test]
    fn dimension_skew_fails_construction() {
        let err = Pipeline::new(
            TextNormalizer::new(StopwordSet::empty()),
            test_vectorizer(),
            Arc::new(FixedClassifier::new(1, [0.5, 0.5], 7)),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 7,
                found: 4
            }
        ));
    }

    #[test]
    fn load_fails_on_skewed_artifacts() {
        let dir = std::env::temp_dir().join("nc_pipeline_skew_test");
        std::fs::create_dir_all(&dir).unwrap();

        let vectorizer_path = dir.join("tfidf_vectorizer.json");
        std::fs::write(
            &vectorizer_path,
            r#"{"vocabulary": {"moon": 0, "cheese": 1}, "idf": [1.0, 2.0]}"#,
        )
        .unwrap();

        let model_path = dir.join("fake_news_model.json");
        std::fs::write(&model_path, r#"{"weights": [0.5, -0.5, 1.0], "intercept": 0.0}"#).unwrap();

        let err = Pipeline::load(&PipelineConfig {
            model_path,
            vectorizer_path,
            stopwords_path: None,
        })
        .unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { .. }));
    }

    #[test]
    fn load_round_trips_consistent_artifacts() {
        let dir = std::env::temp_dir().join("nc_pipeline_load_test");
        std::fs::create_dir_all(&dir).unwrap();

        let vectorizer_path = dir.join("tfidf_vectorizer.json");
        std::fs::write(
            &vectorizer_path,
            r#"{"vocabulary": {"moon": 0, "cheese": 1}, "idf": [1.0, 2.0]}"#,
        )
        .unwrap();

        let model_path = dir.join("fake_news_model.json");
        std::fs::write(&model_path, r#"{"weights": [0.5, -0.5], "intercept": 0.1}"#).unwrap();

        let pipeline = Pipeline::load(&PipelineConfig {
            model_path,
            vectorizer_path,
            stopwords_path: None,
        })
        .unwrap();
        assert_eq!(pipeline.dimension(), 2);

        let verdict = pipeline.analyze("The moon is made of cheese").unwrap();
        assert!(verdict.confidence_real_percent >= 0.0);
        assert!(verdict.confidence_real_percent <= 100.0);
    }
}
