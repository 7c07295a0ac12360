//! Sentence normalization and strict matching.
//!
//! Matching is exact after normalization. Tolerance for paraphrases comes
//! from listing them as acceptable sentences, never from fuzzy comparison.

use crate::model::SentenceGroup;

fn is_terminal_punctuation(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Lower-case, trim, drop trailing `.`, `!` and `?` and collapse runs of
/// whitespace to a single space.
///
/// Whitespace between trailing marks is dropped with them, so the result
/// is a fixed point: normalizing it again returns it unchanged.
pub fn normalize_sentence(s: &str) -> String {
    let lowered = s.to_lowercase();
    let stripped =
        lowered.trim_end_matches(|c: char| is_terminal_punctuation(c) || c.is_whitespace());
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether `user_sentence` equals any acceptable sentence after
/// normalization.
pub fn matches_any_sentence<S: AsRef<str>>(user_sentence: &str, acceptable: &[S]) -> bool {
    let user = normalize_sentence(user_sentence);
    acceptable
        .iter()
        .any(|candidate| normalize_sentence(candidate.as_ref()) == user)
}

impl SentenceGroup {
    /// Whether a learner's sentence matches the canonical sentence or one
    /// of the accepted paraphrases.
    pub fn accepts(&self, sentence: &str) -> bool {
        let user = normalize_sentence(sentence);
        std::iter::once(&self.canonical)
            .chain(&self.acceptable)
            .any(|candidate| normalize_sentence(candidate) == user)
    }
}
