// WHY: Keyword-driven trigger tagging, independent of the statistical risk label
// Matching is plain case-insensitive substring containment on purpose; see DESIGN.md

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod phrases;

/// Thematic bucket of anxiety-inducing phrasing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerCategory {
    ThreatIntensity,
    Uncertainty,
    VividSideEffects,
    DirectiveHarshness,
}

impl TriggerCategory {
    /// All categories in table order; detection output follows this order
    pub const ALL: [TriggerCategory; 4] = [
        TriggerCategory::ThreatIntensity,
        TriggerCategory::Uncertainty,
        TriggerCategory::VividSideEffects,
        TriggerCategory::DirectiveHarshness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerCategory::ThreatIntensity => "threat_intensity",
            TriggerCategory::Uncertainty => "uncertainty",
            TriggerCategory::VividSideEffects => "vivid_side_effects",
            TriggerCategory::DirectiveHarshness => "directive_harshness",
        }
    }

    /// Ordered trigger phrases owned by this category
    pub fn phrases(&self) -> &'static [&'static str] {
        match self {
            TriggerCategory::ThreatIntensity => phrases::THREAT_INTENSITY,
            TriggerCategory::Uncertainty => phrases::UNCERTAINTY,
            TriggerCategory::VividSideEffects => phrases::VIVID_SIDE_EFFECTS,
            TriggerCategory::DirectiveHarshness => phrases::DIRECTIVE_HARSHNESS,
        }
    }

    /// First phrase of this category contained in an already-lowercased sentence
    fn first_match(&self, lowered: &str) -> Option<&'static str> {
        self.phrases().iter().copied().find(|phrase| lowered.contains(phrase))
    }
}

impl fmt::Display for TriggerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect trigger categories present in a sentence.
///
/// Returns categories in table order without duplicates. A sentence matching
/// nothing yields an empty list. Substring matching means `pain` also hits
/// `painless`, unlike the word-boundary matching used for rewrites.
pub fn detect_categories(sentence: &str) -> Vec<TriggerCategory> {
    let lowered = sentence.to_lowercase();
    TriggerCategory::ALL
        .iter()
        .copied()
        .filter(|category| category.first_match(&lowered).is_some())
        .collect()
}

/// Like [`detect_categories`], but also reports which phrase triggered each category
pub fn detect_category_hits(sentence: &str) -> Vec<(TriggerCategory, &'static str)> {
    let lowered = sentence.to_lowercase();
    TriggerCategory::ALL
        .iter()
        .filter_map(|category| category.first_match(&lowered).map(|phrase| (*category, phrase)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_threat_intensity() {
        assert_eq!(
            detect_categories("Rare complications include stroke."),
            vec![TriggerCategory::ThreatIntensity]
        );
    }

    #[test]
    fn test_detect_case_insensitive() {
        assert_eq!(detect_categories("STROKE risk"), detect_categories("stroke risk"));
        assert!(detect_categories("STROKE risk").contains(&TriggerCategory::ThreatIntensity));
    }

    #[test]
    fn test_detect_multiple_categories_in_table_order() {
        let sentence = "You must not ignore severe headache; it is still possible to recover.";
        assert_eq!(detect_categories(sentence), vec![
            TriggerCategory::ThreatIntensity,
            TriggerCategory::Uncertainty,
            TriggerCategory::VividSideEffects,
            TriggerCategory::DirectiveHarshness,
        ]);
    }

    #[test]
    fn test_detect_no_duplicates_when_many_phrases_hit() {
        // death, brain death, fatal and stroke all belong to one category
        let categories = detect_categories("Brain death or a fatal stroke.");
        assert_eq!(categories, vec![TriggerCategory::ThreatIntensity]);
    }

    #[test]
    fn test_detect_unrecognized_sentence_is_empty() {
        assert!(detect_categories("The clinic opens at nine.").is_empty());
        assert!(detect_categories("").is_empty());
    }

    #[test]
    fn test_detect_substring_matches_inside_words() {
        // Known precision limitation: containment, not word boundaries
        assert_eq!(
            detect_categories("A painless procedure."),
            vec![TriggerCategory::VividSideEffects]
        );
    }

    #[test]
    fn test_detect_is_deterministic() {
        let sentence = "Nausea is possible. Do not eat.";
        let first = detect_categories(sentence);
        let second = detect_categories(sentence);
        assert_eq!(first, second);
    }

    #[test]
    fn test_detect_category_hits_reports_first_phrase() {
        let hits = detect_category_hits("Severe bleeding is dangerous.");
        assert_eq!(hits, vec![
            (TriggerCategory::ThreatIntensity, "dangerous"),
            (TriggerCategory::VividSideEffects, "bleeding"),
        ]);
    }

    #[test]
    fn test_non_breaking_hyphen_phrase() {
        assert!(detect_categories("A life\u{2011}threatening event.")
            .contains(&TriggerCategory::ThreatIntensity));
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&TriggerCategory::VividSideEffects).unwrap();
        assert_eq!(json, "\"vivid_side_effects\"");
        assert_eq!(TriggerCategory::DirectiveHarshness.to_string(), "directive_harshness");
    }
}
