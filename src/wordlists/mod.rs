//! Word lists for the game
//!
//! Candidate root words and the bundled lexicon, compiled into the binary,
//! plus a loader for user-supplied replacements.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn start_words_are_valid_roots() {
        // Root words are lowercase ASCII and long enough to be interesting
        for &word in START_WORDS {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Root '{word}' contains non-lowercase chars"
            );
            assert!(word.len() >= 6, "Root '{word}' is too short to play");
        }
    }

    #[test]
    fn dictionary_words_are_clean() {
        for &word in DICTIONARY {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Entry '{word}' contains non-lowercase chars"
            );
            // Two-letter words stay in so real-but-short submissions reach
            // the length rule instead of failing the realness rule
            assert!(word.len() >= 2, "Entry '{word}' is too short");
        }
    }

    #[test]
    fn start_words_are_in_dictionary() {
        // The root itself must be a recognized word (the non-identity rule,
        // not the realness rule, is what blocks resubmitting it)
        let dictionary: std::collections::HashSet<_> = DICTIONARY.iter().collect();
        for &root in START_WORDS {
            assert!(dictionary.contains(&root), "Root '{root}' not in dictionary");
        }
    }

    #[test]
    fn default_root_is_a_start_word() {
        assert!(START_WORDS.contains(&crate::session::DEFAULT_ROOT));
    }
}
