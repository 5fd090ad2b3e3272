//! Scoring for accepted words

/// Point value of an accepted word: a flat 10 plus one per letter
///
/// Length is counted on the normalized word. The delta is awarded once, at
/// acceptance time, and never recomputed.
///
/// # Examples
/// ```
/// use word_scramble::core::score_delta;
///
/// assert_eq!(score_delta("silk"), 14);
/// assert_eq!(score_delta("owl"), 13);
/// ```
#[must_use]
pub fn score_delta(word: &str) -> u32 {
    10 + word.chars().count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_ten_plus_length() {
        assert_eq!(score_delta("owl"), 13);
        assert_eq!(score_delta("silk"), 14);
        assert_eq!(score_delta("silkworm"), 18);
    }

    #[test]
    fn delta_counts_chars_not_bytes() {
        // Normalization never produces non-ASCII today, but the contract is
        // character units, not bytes.
        assert_eq!(score_delta("café"), 14);
    }
}
