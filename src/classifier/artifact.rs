// WHY: The classifier artifact is loaded exactly once at startup and validated up front,
// so prediction never has to handle a malformed model

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use super::linear::LinearClassifier;
use super::tfidf::TfidfVectorizer;

/// Artifact layout version understood by this crate
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// Default artifact location, relative to the working directory
pub const DEFAULT_MODEL_PATH: &str = "models/nocebo_model.json";

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read classifier artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse classifier artifact: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid classifier artifact: {0}")]
    Invalid(String),
}

fn invalid(message: impl Into<String>) -> ArtifactError {
    ArtifactError::Invalid(message.into())
}

/// Serialized (feature extractor, classifier) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    pub format_version: u32,
    pub vectorizer: TfidfVectorizer,
    pub classifier: LinearClassifier,
}

impl ClassifierArtifact {
    /// Read, parse and validate an artifact file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact = Self::from_json_str(&content)?;

        info!(
            path = %path.display(),
            vocabulary = artifact.vectorizer.vocabulary_size(),
            classes = ?artifact.classifier.classes,
            "Loaded classifier artifact"
        );
        Ok(artifact)
    }

    /// Parse and validate an artifact from its JSON text
    pub fn from_json_str(json: &str) -> Result<Self, ArtifactError> {
        let artifact: Self = serde_json::from_str(json)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Check every shape and range the predictor relies on
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(invalid(format!(
                "unsupported format_version {} (expected {})",
                self.format_version, ARTIFACT_FORMAT_VERSION
            )));
        }
        self.validate_vectorizer()?;
        self.validate_classifier()
    }

    fn validate_vectorizer(&self) -> Result<(), ArtifactError> {
        let vectorizer = &self.vectorizer;
        let width = vectorizer.vocabulary.len();

        let (min_n, max_n) = vectorizer.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(invalid(format!("ngram_range ({min_n}, {max_n}) must satisfy 1 <= min <= max")));
        }
        if vectorizer.idf.len() != width {
            return Err(invalid(format!(
                "idf has {} entries but vocabulary has {}",
                vectorizer.idf.len(),
                width
            )));
        }
        if vectorizer.idf.iter().any(|w| !w.is_finite()) {
            return Err(invalid("idf contains non-finite values"));
        }

        let mut seen = HashSet::with_capacity(width);
        for (term, &column) in &vectorizer.vocabulary {
            if column >= width {
                return Err(invalid(format!("term {term:?} maps to column {column}, vocabulary width is {width}")));
            }
            if !seen.insert(column) {
                return Err(invalid(format!("column {column} is assigned to more than one term")));
            }
        }
        Ok(())
    }

    fn validate_classifier(&self) -> Result<(), ArtifactError> {
        let classifier = &self.classifier;
        let width = self.vectorizer.vocabulary.len();

        if classifier.classes.is_empty() {
            return Err(invalid("classifier declares no classes"));
        }
        let mut seen = HashSet::new();
        for &class in &classifier.classes {
            if !seen.insert(class) {
                return Err(invalid(format!("class {class} is declared twice")));
            }
        }

        let rows = classifier.coef.len();
        let binary = classifier.classes.len() == 2 && rows == 1;
        if rows != classifier.classes.len() && !binary {
            return Err(invalid(format!(
                "{} coefficient rows for {} classes",
                rows,
                classifier.classes.len()
            )));
        }
        if classifier.intercept.len() != rows {
            return Err(invalid(format!("{} intercepts for {} coefficient rows", classifier.intercept.len(), rows)));
        }
        for (index, weights) in classifier.coef.iter().enumerate() {
            if weights.len() != width {
                return Err(invalid(format!(
                    "coefficient row {index} has width {}, vocabulary has {width}",
                    weights.len()
                )));
            }
        }
        let all_finite = classifier
            .coef
            .iter()
            .flatten()
            .chain(&classifier.intercept)
            .all(|w| w.is_finite());
        if !all_finite {
            return Err(invalid("classifier weights contain non-finite values"));
        }
        Ok(())
    }
}
