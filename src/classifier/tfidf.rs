// WHY: Feature extraction half of the pre-trained artifact
// Reproduces a fitted TF-IDF vectorizer: lowercase, \w\w+ tokens, word n-grams

use regex_automata::meta::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Row normalization applied after idf weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    #[default]
    L2,
    L1,
    None,
}

fn default_lowercase() -> bool {
    true
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

/// Fitted TF-IDF vectorizer as stored in the classifier artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
    /// Inclusive word n-gram range
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    /// Replace raw counts with 1 + ln(count)
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default)]
    pub norm: Norm,
    /// Term -> feature column
    pub vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per feature column
    pub idf: Vec<f64>,
}

/// Sparse feature row: (column, weight) pairs sorted by column
pub type SparseRow = Vec<(usize, f64)>;

fn token_regex() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    // WHY: leftmost-first \w\w+ yields maximal word runs of two or more chars
    TOKEN.get_or_init(|| Regex::new(r"\w\w+").expect("token pattern must compile"))
}

impl TfidfVectorizer {
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Split a document into word tokens of two or more characters
    pub fn tokenize(&self, document: &str) -> Vec<String> {
        let document = if self.lowercase {
            document.to_lowercase()
        } else {
            document.to_string()
        };
        token_regex()
            .find_iter(&document)
            .map(|token| document[token.range()].to_string())
            .collect()
    }

    /// Expand tokens into space-joined word n-grams within the configured range
    pub fn ngrams(&self, tokens: &[String]) -> Vec<String> {
        let (min_n, max_n) = self.ngram_range;
        let mut grams = Vec::new();
        for n in min_n..=max_n.min(tokens.len()) {
            for window in tokens.windows(n) {
                grams.push(window.join(" "));
            }
        }
        grams
    }

    /// Transform one document into a normalized sparse TF-IDF row
    pub fn transform(&self, document: &str) -> SparseRow {
        let tokens = self.tokenize(document);
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for gram in self.ngrams(&tokens) {
            if let Some(&column) = self.vocabulary.get(&gram) {
                *counts.entry(column).or_insert(0.0) += 1.0;
            }
        }

        // Columns without an idf weight are skipped rather than indexed
        let mut row: SparseRow = counts
            .into_iter()
            .filter_map(|(column, count)| {
                let tf = if self.sublinear_tf { 1.0 + count.ln() } else { count };
                self.idf.get(column).map(|idf| (column, tf * idf))
            })
            .collect();
        row.sort_by_key(|(column, _)| *column);

        let magnitude = match self.norm {
            Norm::L2 => row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt(),
            Norm::L1 => row.iter().map(|(_, w)| w.abs()).sum::<f64>(),
            Norm::None => 1.0,
        };
        if magnitude > 0.0 {
            for (_, weight) in &mut row {
                *weight /= magnitude;
            }
        }
        row
    }

    /// Transform a batch of documents, preserving order
    pub fn transform_batch(&self, documents: &[&str]) -> Vec<SparseRow> {
        documents.iter().map(|document| self.transform(document)).collect()
    }
}
