//! Dictionary-membership boundary
//!
//! The realness rule asks an opaque oracle whether a word exists. The trait
//! takes a language tag even though only `"en"` ships today, so a future
//! multi-language backend slots in without touching the pipeline.

use crate::wordlists::DICTIONARY;
use rustc_hash::FxHashSet;

/// Default language tag used when none is configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// Answers dictionary-membership queries
pub trait Lexicon {
    /// True if `word` is a recognized dictionary entry for `language`
    fn is_recognized(&self, word: &str, language: &str) -> bool;
}

/// Lexicon backed by the word list compiled into the binary
#[derive(Debug, Clone)]
pub struct EmbeddedLexicon {
    words: FxHashSet<&'static str>,
    language: &'static str,
}

impl EmbeddedLexicon {
    /// Build the English lexicon from the embedded dictionary
    #[must_use]
    pub fn new() -> Self {
        Self {
            words: DICTIONARY.iter().copied().collect(),
            language: DEFAULT_LANGUAGE,
        }
    }

    /// Number of entries in the lexicon
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the lexicon holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for EmbeddedLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon for EmbeddedLexicon {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        // Unknown language tags answer false rather than guessing
        language == self.language && self.words.contains(word)
    }
}

/// Lexicon loaded from a user-supplied word list file
///
/// Built by `main` from the `--dictionary` flag via
/// [`crate::wordlists::loader::load_from_file`].
#[derive(Debug, Clone)]
pub struct FileLexicon {
    words: FxHashSet<String>,
    language: String,
}

impl FileLexicon {
    /// Wrap an already-loaded word list, tagged with its language
    #[must_use]
    pub fn new(words: Vec<String>, language: impl Into<String>) -> Self {
        Self {
            words: words.into_iter().collect(),
            language: language.into(),
        }
    }
}

impl Lexicon for FileLexicon {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        language == self.language && self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_recognizes_common_words() {
        let lexicon = EmbeddedLexicon::new();
        assert!(lexicon.is_recognized("silk", "en"));
        assert!(lexicon.is_recognized("worm", "en"));
        assert!(lexicon.is_recognized("silkworm", "en"));
    }

    #[test]
    fn embedded_rejects_nonsense() {
        let lexicon = EmbeddedLexicon::new();
        assert!(!lexicon.is_recognized("zzqzz", "en"));
        assert!(!lexicon.is_recognized("", "en"));
    }

    #[test]
    fn embedded_rejects_other_languages() {
        let lexicon = EmbeddedLexicon::new();
        assert!(!lexicon.is_recognized("silk", "fr"));
        assert!(!lexicon.is_recognized("silk", ""));
    }

    #[test]
    fn file_lexicon_membership() {
        let lexicon = FileLexicon::new(vec!["silk".to_string(), "worm".to_string()], "en");
        assert!(lexicon.is_recognized("silk", "en"));
        assert!(!lexicon.is_recognized("moth", "en"));
        assert!(!lexicon.is_recognized("silk", "de"));
    }
}
