//! Approximate string matching for fuzzy search
//!
//! Similarity is the Ratcliff/Obershelp "gestalt" ratio computed by
//! [`difflib`] over characters: twice the number of characters in matching
//! blocks divided by the combined length.

use difflib::sequencematcher::{Match, SequenceMatcher};

/// Minimum ratio for a fuzzy match
pub const FUZZY_THRESHOLD: f32 = 0.6;

/// Similarity ratio in `0.0..=1.0` between two strings.
///
/// Not symmetric: `b` is the side indexed for longest-match lookups.
pub fn similarity_ratio(a: &str, b: &str) -> f32 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut matcher: SequenceMatcher<char> = SequenceMatcher::new(a.as_slice(), b.as_slice());
    matcher.ratio()
}

/// Non-empty matching blocks between `a` and `b`, in character offsets
pub fn matching_blocks(a: &str, b: &str) -> Vec<Match> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut matcher: SequenceMatcher<char> = SequenceMatcher::new(a.as_slice(), b.as_slice());
    matcher
        .get_matching_blocks()
        .into_iter()
        .filter(|block| block.size > 0)
        .collect()
}

/// Whether `candidate` is a close match for `term` at the fuzzy threshold
pub fn is_close_match(term: &str, candidate: &str) -> bool {
    similarity_ratio(candidate, term) >= FUZZY_THRESHOLD
}
