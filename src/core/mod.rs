//! Core game logic
//!
//! The validation pipeline and scoring function. Everything here is pure:
//! no timers, no terminal, no randomness. The only outside contact is the
//! [`crate::lexicon::Lexicon`] lookup made by the realness rule.

mod letters;
mod score;
mod validate;

pub use letters::LetterPool;
pub use score::score_delta;
pub use validate::{RejectKind, Rejection, Verdict, normalize, validate};
