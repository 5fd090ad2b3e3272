//! Word validation pipeline
//!
//! Five rules, run in a fixed order with short-circuit on the first failure:
//! originality, possibility, realness, minimum length, non-identity. The
//! order is part of the game's observable behavior (a duplicate that is also
//! misspelled reports "already used", not "not recognized"), so it must not
//! be rearranged for cheapness.

use super::letters::LetterPool;
use crate::lexicon::Lexicon;
use std::fmt;

/// Minimum accepted word length, in characters
pub const MIN_WORD_LEN: usize = 3;

/// Why a submission was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectKind {
    DuplicateWord,
    NotPossible,
    NotReal,
    TooShort,
    SameAsRoot,
}

impl fmt::Display for RejectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateWord => write!(f, "word used already"),
            Self::NotPossible => write!(f, "word not possible"),
            Self::NotReal => write!(f, "word not recognized"),
            Self::TooShort => write!(f, "word too short"),
            Self::SameAsRoot => write!(f, "same as root word"),
        }
    }
}

/// A rejection diagnostic: machine-readable kind plus display text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub kind: RejectKind,
    pub title: &'static str,
    pub message: String,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

impl std::error::Error for Rejection {}

/// Outcome of running the pipeline on one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The normalized word passed every rule
    Accepted(String),
    /// A rule failed; the first failure wins
    Rejected(Rejection),
    /// Input was empty after normalization; deliberately a silent no-op
    Ignored,
}

/// Lowercase and trim a raw submission
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Run the validation pipeline on a raw submission
///
/// `used` is the accepted-word history (most recent first); `root` must
/// already be normalized. Returns [`Verdict::Ignored`] for input that is
/// empty after normalization.
pub fn validate<L: Lexicon + ?Sized>(
    raw: &str,
    root: &str,
    used: &[String],
    lexicon: &L,
    language: &str,
) -> Verdict {
    let word = normalize(raw);

    if word.is_empty() {
        return Verdict::Ignored;
    }

    if used.iter().any(|u| u == &word) {
        return Verdict::Rejected(Rejection {
            kind: RejectKind::DuplicateWord,
            title: "Word used already",
            message: "Be more original".to_string(),
        });
    }

    if !LetterPool::from_word(root).can_spell(&word) {
        return Verdict::Rejected(Rejection {
            kind: RejectKind::NotPossible,
            title: "Word not possible",
            message: format!("You can't spell that word from '{root}'!"),
        });
    }

    if !lexicon.is_recognized(&word, language) {
        return Verdict::Rejected(Rejection {
            kind: RejectKind::NotReal,
            title: "Word not recognized",
            message: "You can't just make them up, you know!".to_string(),
        });
    }

    if word.chars().count() < MIN_WORD_LEN {
        return Verdict::Rejected(Rejection {
            kind: RejectKind::TooShort,
            title: "Word too short",
            message: format!("At least {MIN_WORD_LEN} letters, please!"),
        });
    }

    if word == root {
        return Verdict::Rejected(Rejection {
            kind: RejectKind::SameAsRoot,
            title: "Same word",
            message: "You can't use the root word itself".to_string(),
        });
    }

    Verdict::Accepted(word)
}
