//! One-shot word check command
//!
//! Runs the validation pipeline once for a word against a given root, with
//! no session or timer. Useful for scripting and for settling arguments.

use crate::core::{Verdict, normalize, score_delta, validate};
use crate::lexicon::Lexicon;

/// Result of checking a single word against a root
pub struct CheckResult {
    pub root: String,
    pub word: String,
    pub verdict: Verdict,
    /// Points the word would have scored, if accepted
    pub delta: Option<u32>,
}

/// Check one word against a root word
///
/// The history is empty, so the originality rule never fires here; every
/// other rule behaves exactly as in a live session.
///
/// # Errors
///
/// Returns an error if the root itself is empty after normalization.
pub fn check_word<L: Lexicon>(
    root: &str,
    word: &str,
    lexicon: &L,
    language: &str,
) -> Result<CheckResult, String> {
    let root = normalize(root);
    if root.is_empty() {
        return Err("Root word must not be empty".to_string());
    }

    let verdict = validate(word, &root, &[], lexicon, language);
    let delta = match &verdict {
        Verdict::Accepted(accepted) => Some(score_delta(accepted)),
        _ => None,
    };

    Ok(CheckResult {
        root,
        word: normalize(word),
        verdict,
        delta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RejectKind;
    use crate::lexicon::EmbeddedLexicon;

    #[test]
    fn check_accepted_word_reports_delta() {
        let lexicon = EmbeddedLexicon::new();
        let result = check_word("silkworm", "silk", &lexicon, "en").unwrap();

        assert_eq!(result.root, "silkworm");
        assert_eq!(result.word, "silk");
        assert_eq!(result.verdict, Verdict::Accepted("silk".to_string()));
        assert_eq!(result.delta, Some(14));
    }

    #[test]
    fn check_rejected_word_has_no_delta() {
        let lexicon = EmbeddedLexicon::new();
        let result = check_word("silkworm", "silky", &lexicon, "en").unwrap();

        assert!(matches!(
            result.verdict,
            Verdict::Rejected(ref r) if r.kind == RejectKind::NotPossible
        ));
        assert_eq!(result.delta, None);
    }

    #[test]
    fn check_normalizes_root() {
        let lexicon = EmbeddedLexicon::new();
        let result = check_word("  SILKWORM ", "Worm", &lexicon, "en").unwrap();
        assert_eq!(result.root, "silkworm");
        assert_eq!(result.verdict, Verdict::Accepted("worm".to_string()));
    }

    #[test]
    fn check_empty_root_is_error() {
        let lexicon = EmbeddedLexicon::new();
        assert!(check_word("   ", "silk", &lexicon, "en").is_err());
    }
}
