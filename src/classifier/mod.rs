// WHY: Risk classification sits behind a narrow batch interface so the model
// implementation (native linear model, remote server, test stub) is pluggable

use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

pub mod artifact;
pub mod label;
pub mod linear;
pub mod tfidf;

pub use artifact::{ArtifactError, ClassifierArtifact, DEFAULT_MODEL_PATH};
pub use label::{RiskBand, RiskLabel, RiskLabelError};
pub use linear::LinearClassifier;
pub use tfidf::TfidfVectorizer;

/// Batch text classifier producing one risk label per input, in input order
pub trait RiskModel: Send + Sync {
    fn predict(&self, sentences: &[&str]) -> Vec<RiskLabel>;

    /// Short identifier used in logs
    fn name(&self) -> &str;
}

/// Native model: fitted TF-IDF vectorizer followed by a linear classifier
#[derive(Debug, Clone)]
pub struct LinearTextModel {
    artifact: ClassifierArtifact,
}

impl LinearTextModel {
    /// Wrap an artifact after validating it
    pub fn new(artifact: ClassifierArtifact) -> Result<Self, ArtifactError> {
        artifact.validate()?;
        Ok(Self { artifact })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        Ok(Self { artifact: ClassifierArtifact::load(path)? })
    }

    pub fn artifact(&self) -> &ClassifierArtifact {
        &self.artifact
    }
}

impl RiskModel for LinearTextModel {
    fn predict(&self, sentences: &[&str]) -> Vec<RiskLabel> {
        self.artifact
            .vectorizer
            .transform_batch(sentences)
            .iter()
            .map(|row| {
                let label = self.artifact.classifier.predict_row(row);
                debug_assert!(label.is_some(), "validated classifier always yields a class");
                label.unwrap_or(RiskLabel::NEUTRAL)
            })
            .collect()
    }

    fn name(&self) -> &str {
        "tfidf-linear"
    }
}

/// Shared, read-only handle to the process-wide risk model
#[derive(Clone)]
pub struct RiskClassifier {
    model: Arc<dyn RiskModel>,
}

impl RiskClassifier {
    pub fn new(model: Arc<dyn RiskModel>) -> Self {
        Self { model }
    }

    /// Load the native linear model from an artifact file
    pub fn from_artifact_path<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        Ok(Self::new(Arc::new(LinearTextModel::load(path)?)))
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Classify all sentences of one request in a single batched model call
    pub fn classify(&self, sentences: &[&str]) -> Vec<RiskLabel> {
        if sentences.is_empty() {
            return Vec::new();
        }

        let mut labels = self.model.predict(sentences);
        debug!(model = self.model.name(), sentences = sentences.len(), "Classified batch");

        if labels.len() != sentences.len() {
            // Keep the one-label-per-sentence contract even for a misbehaving model
            warn!(
                model = self.model.name(),
                expected = sentences.len(),
                actual = labels.len(),
                "Risk model returned the wrong number of labels"
            );
            labels.resize(sentences.len(), RiskLabel::NEUTRAL);
        }
        labels
    }
}

impl std::fmt::Debug for RiskClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RiskClassifier")
            .field("model", &self.model.name())
            .finish()
    }
}
