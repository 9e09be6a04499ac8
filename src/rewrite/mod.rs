// WHY: Rule-based neutral rewriting with word-boundary, case-insensitive matching
// Each rule compiles to one meta regex; rules run strictly in table order

use anyhow::Result;
use regex_automata::{meta::Regex, util::syntax};
use std::sync::OnceLock;
use tracing::debug;

pub mod rules;

pub use rules::REPLACEMENT_RULES;

/// One compiled `(match_phrase, replacement)` pair
#[derive(Debug, Clone)]
pub struct ReplacementRule {
    phrase: &'static str,
    replacement: &'static str,
    pattern: Regex,
}

impl ReplacementRule {
    /// Compile a rule matching `phrase` as a whole word or phrase, ignoring case
    pub fn new(phrase: &'static str, replacement: &'static str) -> Result<Self> {
        let pattern = Regex::builder()
            .syntax(syntax::Config::new().case_insensitive(true))
            .build(&format!(r"\b{}\b", regex_syntax::escape(phrase)))?;

        Ok(Self { phrase, replacement, pattern })
    }

    pub fn phrase(&self) -> &'static str {
        self.phrase
    }

    pub fn replacement(&self) -> &'static str {
        self.replacement
    }

    /// Replace every match with the literal replacement, leaving other text verbatim
    /// Returns None when the rule does not match, so callers can skip the copy
    fn apply(&self, text: &str) -> Option<String> {
        let mut matches = self.pattern.find_iter(text).peekable();
        matches.peek()?;

        let mut rewritten = String::with_capacity(text.len() + self.replacement.len());
        let mut last_end = 0;
        for found in matches {
            rewritten.push_str(&text[last_end..found.start()]);
            rewritten.push_str(self.replacement);
            last_end = found.end();
        }
        rewritten.push_str(&text[last_end..]);
        Some(rewritten)
    }
}

/// Ordered rule set producing neutral-language rewrites
#[derive(Debug, Clone)]
pub struct RewriteEngine {
    rules: Vec<ReplacementRule>,
}

impl RewriteEngine {
    /// Compile an engine from ordered `(match_phrase, replacement)` pairs
    pub fn new(table: &[(&'static str, &'static str)]) -> Result<Self> {
        let rules = table
            .iter()
            .map(|(phrase, replacement)| ReplacementRule::new(phrase, replacement))
            .collect::<Result<Vec<_>>>()?;

        debug!("Compiled {} replacement rules", rules.len());
        Ok(Self { rules })
    }

    /// Process-wide engine over [`REPLACEMENT_RULES`], compiled on first use
    pub fn standard() -> &'static RewriteEngine {
        static STANDARD: OnceLock<RewriteEngine> = OnceLock::new();
        STANDARD.get_or_init(|| {
            // Table phrases are fixed literals, so compilation cannot fail at runtime
            RewriteEngine::new(REPLACEMENT_RULES).expect("built-in replacement rules must compile")
        })
    }

    pub fn rules(&self) -> &[ReplacementRule] {
        &self.rules
    }

    /// Rewrite a sentence by applying every rule in order to the progressively
    /// rewritten text. Text inserted by one rule is visible to later rules only.
    pub fn rewrite(&self, sentence: &str) -> String {
        let mut current = sentence.to_string();
        for rule in &self.rules {
            if let Some(rewritten) = rule.apply(&current) {
                current = rewritten;
            }
        }
        current
    }
}

/// Rewrite a sentence with the built-in replacement table
pub fn rewrite(sentence: &str) -> String {
    RewriteEngine::standard().rewrite(sentence)
}
