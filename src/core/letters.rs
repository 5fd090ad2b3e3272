//! Letter multiset for the possibility rule
//!
//! A `LetterPool` counts how often each letter occurs in the root word, so a
//! candidate can be checked by multiset subtraction instead of string surgery.

use rustc_hash::FxHashMap;

/// Letter availability for one root word
///
/// Each letter of the root may be consumed at most once per occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, u32>,
}

impl LetterPool {
    /// Build a pool from a (normalized) root word
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts: FxHashMap<char, u32> = FxHashMap::default();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Check whether `candidate` can be spelled from the pool's letters
    ///
    /// Works on a scratch copy of the counts and fails fast on the first
    /// letter that is missing or exhausted.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::from_word("silkworm");
    /// assert!(pool.can_spell("silk"));
    /// assert!(pool.can_spell("worm"));
    /// assert!(!pool.can_spell("silly")); // only one 'l'
    /// ```
    #[must_use]
    pub fn can_spell(&self, candidate: &str) -> bool {
        let mut remaining = self.counts.clone();
        for ch in candidate.chars() {
            match remaining.get_mut(&ch) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }
        true
    }

    /// Number of occurrences of `letter` in the pool
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters in the pool
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().map(|&c| c as usize).sum()
    }

    /// True if the pool holds no letters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_counts_duplicates() {
        let pool = LetterPool::from_word("tomorrow");
        assert_eq!(pool.count_of('o'), 3);
        assert_eq!(pool.count_of('r'), 2);
        assert_eq!(pool.count_of('t'), 1);
        assert_eq!(pool.count_of('z'), 0);
        assert_eq!(pool.len(), 8);
    }

    #[test]
    fn can_spell_subset() {
        let pool = LetterPool::from_word("silkworm");
        assert!(pool.can_spell("silk"));
        assert!(pool.can_spell("worm"));
        assert!(pool.can_spell("silkworm"));
        assert!(pool.can_spell(""));
    }

    #[test]
    fn can_spell_rejects_missing_letter() {
        let pool = LetterPool::from_word("silkworm");
        assert!(!pool.can_spell("silky")); // no 'y'
        assert!(!pool.can_spell("word")); // no 'd'
    }

    #[test]
    fn can_spell_respects_multiplicity() {
        let pool = LetterPool::from_word("silkworm");
        assert!(!pool.can_spell("skis")); // one 's' only
        assert!(!pool.can_spell("mimms"));

        let double = LetterPool::from_word("football");
        assert!(double.can_spell("ball"));
        assert!(double.can_spell("tool"));
        assert!(!double.can_spell("boots")); // no 's'
    }

    #[test]
    fn can_spell_does_not_consume_pool() {
        let pool = LetterPool::from_word("silkworm");
        assert!(pool.can_spell("silk"));
        // A second check against the same pool sees the full letter set
        assert!(pool.can_spell("worm"));
        assert_eq!(pool.count_of('s'), 1);
    }

    #[test]
    fn empty_pool() {
        let pool = LetterPool::from_word("");
        assert!(pool.is_empty());
        assert!(pool.can_spell(""));
        assert!(!pool.can_spell("a"));
    }
}
