//! Game session state machine
//!
//! A `GameSession` is the one mutable aggregate: root word, accepted-word
//! history, score, and countdown. Front ends drive it through three
//! operations (`start_game`, `submit_word`, `tick`) and re-read state after
//! each call; the session itself never touches a terminal or a clock.

use crate::core::{Rejection, Verdict, score_delta, validate};
use crate::lexicon::Lexicon;
use rand::seq::IndexedRandom;

/// Fallback root used when the candidate list is empty
pub const DEFAULT_ROOT: &str = "silkworm";

/// Length of one round, in seconds
pub const ROUND_SECONDS: u32 = 60;

/// Result of submitting one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Word passed every rule; `delta` was added to the score
    Accepted { word: String, delta: u32 },
    /// A rule failed; session state is untouched
    Rejected(Rejection),
    /// Empty submission; silently dropped
    Ignored,
}

/// Result of one timer tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Countdown still running
    Counting,
    /// Timer had expired; a fresh round was started
    Restarted,
}

/// One round of the game plus its borrowed collaborators
///
/// The lexicon and the candidate-root slice outlive the session, mirroring
/// how word lists are loaded once at startup and shared.
pub struct GameSession<'a, L: Lexicon> {
    lexicon: &'a L,
    roots: &'a [String],
    language: String,
    root_word: String,
    used_words: Vec<String>,
    score: u32,
    remaining_seconds: u32,
    timer_active: bool,
}

impl<'a, L: Lexicon> GameSession<'a, L> {
    /// Create a session and start the first round immediately
    ///
    /// Draws a root word at random from `roots`, falling back to
    /// [`DEFAULT_ROOT`] if the list is empty. An empty list is a degraded
    /// configuration, not an error; a missing list entirely is handled as a
    /// fatal condition by the caller before any session exists.
    pub fn new(lexicon: &'a L, roots: &'a [String], language: impl Into<String>) -> Self {
        let mut session = Self {
            lexicon,
            roots,
            language: language.into(),
            root_word: String::new(),
            used_words: Vec::new(),
            score: 0,
            remaining_seconds: ROUND_SECONDS,
            timer_active: true,
        };
        session.start_game();
        session
    }

    /// Start a fresh round, replacing all round state wholesale
    ///
    /// Draws a new root word, clears the history, zeroes the score, and
    /// rewinds the countdown.
    pub fn start_game(&mut self) {
        let mut rng = rand::rng();
        self.root_word = self
            .roots
            .choose(&mut rng)
            .cloned()
            .unwrap_or_else(|| DEFAULT_ROOT.to_string());
        self.used_words.clear();
        self.score = 0;
        self.remaining_seconds = ROUND_SECONDS;
        self.timer_active = true;
    }

    /// Submit a word for this round
    ///
    /// Runs the validation pipeline; on acceptance the normalized word goes
    /// to the front of the history and the score grows by `10 + length`.
    /// Rejections leave every field unchanged.
    pub fn submit_word(&mut self, raw: &str) -> SubmitOutcome {
        match validate(
            raw,
            &self.root_word,
            &self.used_words,
            self.lexicon,
            &self.language,
        ) {
            Verdict::Accepted(word) => {
                let delta = score_delta(&word);
                self.used_words.insert(0, word.clone());
                self.score += delta;
                SubmitOutcome::Accepted { word, delta }
            }
            Verdict::Rejected(rejection) => SubmitOutcome::Rejected(rejection),
            Verdict::Ignored => SubmitOutcome::Ignored,
        }
    }

    /// Advance the countdown by one second
    ///
    /// While the timer is active and time remains, decrements. Once the
    /// countdown has hit zero, the next tick stops the timer and starts a
    /// fresh round; the expired state is never observable across two ticks.
    pub fn tick(&mut self) -> TickOutcome {
        if self.timer_active && self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
            TickOutcome::Counting
        } else {
            self.timer_active = false;
            self.start_game();
            TickOutcome::Restarted
        }
    }

    /// The root word for the current round
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Current score
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Seconds left on the countdown
    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// True while the countdown is running
    #[must_use]
    pub fn timer_active(&self) -> bool {
        self.timer_active
    }

    /// Language tag passed to the lexicon
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }
}
