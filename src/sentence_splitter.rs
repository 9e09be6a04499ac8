// WHY: Sentence segmentation is the first pipeline stage; everything downstream is per-sentence
// Boundaries are terminal punctuation followed by whitespace, nothing smarter

use regex_automata::meta::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Boundary pattern: one of `.!?` followed by a whitespace run
/// WHY: the punctuation stays with the left sentence, the whitespace run is dropped
const BOUNDARY_PATTERN: &str = r"[.!?]\s+";

fn boundary_regex() -> &'static Regex {
    static BOUNDARY: OnceLock<Regex> = OnceLock::new();
    BOUNDARY.get_or_init(|| {
        // The pattern is a compile-time constant, so failure here is a programming error
        Regex::new(BOUNDARY_PATTERN).expect("sentence boundary pattern must compile")
    })
}

/// Split raw text into trimmed sentence slices borrowed from the input.
///
/// Empty or whitespace-only input yields an empty list, which callers treat as
/// "no sentences found". Unicode terminal punctuation such as `。` or `…` is not
/// a boundary.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut sentence_start = 0;

    for boundary in boundary_regex().find_iter(text) {
        // All of [.!?] are single-byte, so +1 lands on a char boundary
        let sentence_end = boundary.start() + 1;
        push_trimmed(&mut sentences, &text[sentence_start..sentence_end]);
        sentence_start = boundary.end();
    }

    if sentence_start < text.len() {
        push_trimmed(&mut sentences, &text[sentence_start..]);
    }

    debug!("Split {} bytes into {} sentences", text.len(), sentences.len());
    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        sentences.push(piece);
    }
}
