// WHY: Single entry point composing splitter, classifier and tagger into per-sentence records

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use crate::classifier::{ArtifactError, RiskClassifier, RiskLabel, RiskModel};
use crate::rewrite::RewriteEngine;
use crate::sentence_splitter::split_sentences;
use crate::triggers::{detect_categories, TriggerCategory};

/// Analysis of one sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceResult {
    pub sentence: String,
    pub label: RiskLabel,
    /// Category-table order, no duplicates
    pub categories: Vec<TriggerCategory>,
}

/// Nocebo-risk analyzer sharing one read-only model across all calls
#[derive(Debug, Clone)]
pub struct NoceboAnalyzer {
    classifier: RiskClassifier,
    rewriter: &'static RewriteEngine,
}

impl NoceboAnalyzer {
    pub fn new(model: Arc<dyn RiskModel>) -> Self {
        Self::with_classifier(RiskClassifier::new(model))
    }

    pub fn with_classifier(classifier: RiskClassifier) -> Self {
        Self {
            classifier,
            rewriter: RewriteEngine::standard(),
        }
    }

    /// Load the classifier artifact once; failure here is fatal for the caller
    pub fn from_artifact_path<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        Ok(Self::with_classifier(RiskClassifier::from_artifact_path(path)?))
    }

    pub fn classifier(&self) -> &RiskClassifier {
        &self.classifier
    }

    /// Split, classify (one batch) and tag a block of text.
    ///
    /// Returns an empty list, without touching the model, when the text
    /// contains no sentences.
    pub fn analyze(&self, text: &str) -> Vec<SentenceResult> {
        let sentences = split_sentences(text);
        if sentences.is_empty() {
            return Vec::new();
        }

        let labels = self.classifier.classify(&sentences);
        let results: Vec<SentenceResult> = sentences
            .iter()
            .zip(labels)
            .map(|(sentence, label)| SentenceResult {
                sentence: sentence.to_string(),
                label,
                categories: detect_categories(sentence),
            })
            .collect();

        debug!(sentences = results.len(), "Analyzed text");
        results
    }

    /// Neutral rewrite of one sentence
    pub fn rewrite(&self, sentence: &str) -> String {
        self.rewriter.rewrite(sentence)
    }
}
