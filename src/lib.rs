//! Word Scramble
//!
//! A single-player word-building game: draw a root word, then spell as many
//! dictionary words as you can from its letters before the clock runs out.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::lexicon::EmbeddedLexicon;
//! use word_scramble::session::{GameSession, SubmitOutcome};
//!
//! let lexicon = EmbeddedLexicon::new();
//! let roots = vec!["silkworm".to_string()];
//! let mut session = GameSession::new(&lexicon, &roots, "en");
//!
//! match session.submit_word("silk") {
//!     SubmitOutcome::Accepted { delta, .. } => assert_eq!(delta, 14),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

// Core domain logic: validation pipeline and scoring
pub mod core;

// Game session state machine
pub mod session;

// Dictionary-membership boundary
pub mod lexicon;

// Embedded and file-backed word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
