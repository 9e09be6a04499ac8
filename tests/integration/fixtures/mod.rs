// Test fixtures with known consent-style texts and expected outputs
// WHY: Golden-file testing requires deterministic input/output pairs for validation
#![allow(dead_code)]

/// Sedation discharge instructions with one sentence per risk profile
pub const SEDATION_TEXT: &str = "After sedation, you must not drive for 24 hours. Rare complications include stroke. If you feel unwell, seek urgent medical help.";

/// Expected text-format output for SEDATION_TEXT with the shipped model
pub const SEDATION_EXPECTED: &str = "Sentence: After sedation, you must not drive for 24 hours.
  Risk label: 1 (Mild)
  Categories: directive_harshness
  Suggestion: After sedation, you should not drive for 24 hours.

Sentence: Rare complications include stroke.
  Risk label: 3 (High)
  Categories: threat_intensity
  Suggestion: Rare issues include serious medical condition.

Sentence: If you feel unwell, seek urgent medical help.
  Risk label: 0 (Neutral)
  Categories:
  Suggestion: If you feel unwell, seek urgent medical help.

";

/// Consent paragraph spread over several lines with mixed punctuation
pub const CONSENT_TEXT: &str = "The procedure is routine and safe.
Severe bleeding is possible!   Nausea and headache may occur?
Cardiac arrest or death can occur. Do not eat after midnight.";

/// Expected (sentence, label) pairs for CONSENT_TEXT with the shipped model
pub const CONSENT_EXPECTED_LABELS: &[(&str, u8)] = &[
    ("The procedure is routine and safe.", 0),
    ("Severe bleeding is possible!", 2),
    ("Nausea and headache may occur?", 1),
    ("Cardiac arrest or death can occur.", 3),
    ("Do not eat after midnight.", 1),
];

/// Inputs that must produce no sentences
pub const EMPTY_INPUTS: &[&str] = &["", "   ", "\n\n\t", "\r\n"];
