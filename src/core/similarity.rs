use std::collections::HashSet;

/// Words shorter than this never count as shared
const MIN_SHARED_WORD_CHARS: usize = 3;

/// Word-overlap similarity between two free-text descriptions (0-1)
///
/// Both texts are lower-cased and split on whitespace. Every word of `seeker`
/// that also occurs in `other` and is at least three characters long counts
/// once per occurrence. The count is divided by the number of distinct words
/// across both texts.
///
/// Returns 0.0 when either text is empty or nothing is shared.
pub fn word_overlap(seeker: &str, other: &str) -> f64 {
    let seeker = seeker.to_lowercase();
    let other = other.to_lowercase();

    let seeker_words: Vec<&str> = seeker.split_whitespace().collect();
    let other_words: HashSet<&str> = other.split_whitespace().collect();

    if seeker_words.is_empty() || other_words.is_empty() {
        return 0.0;
    }

    let common = seeker_words
        .iter()
        .filter(|word| word.chars().count() >= MIN_SHARED_WORD_CHARS)
        .filter(|word| other_words.contains(*word))
        .count();

    let unique: HashSet<&str> = seeker_words
        .iter()
        .copied()
        .chain(other_words.iter().copied())
        .collect();

    // Repeated seeker words can push the raw ratio past 1
    (common as f64 / unique.len() as f64).min(1.0)
}
