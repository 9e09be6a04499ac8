pub mod analysis;
pub mod classifier;
pub mod report;
pub mod rewrite;
pub mod sentence_splitter;
pub mod triggers;

// Re-export the two caller entry points and their record types
pub use analysis::{NoceboAnalyzer, SentenceResult};

// Re-export pipeline stages for callers that need them individually
pub use sentence_splitter::split_sentences;
pub use triggers::{detect_categories, TriggerCategory};
pub use rewrite::{rewrite, RewriteEngine};
pub use classifier::{
    ArtifactError, ClassifierArtifact, LinearTextModel, RiskBand, RiskClassifier, RiskLabel, RiskModel,
    DEFAULT_MODEL_PATH,
};
