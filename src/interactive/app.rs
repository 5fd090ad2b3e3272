//! TUI application state and logic

use crate::lexicon::Lexicon;
use crate::session::{GameSession, SubmitOutcome, TickOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Running totals across rounds
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub words_accepted: usize,
    pub best_score: u32,
}

/// Feedback line shown in the message log
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<'a, L: Lexicon> {
    pub session: GameSession<'a, L>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl<'a, L: Lexicon> App<'a, L> {
    #[must_use]
    pub fn new(session: GameSession<'a, L>) -> Self {
        let root = session.root_word().to_uppercase();
        Self {
            session,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: format!("Spell words from the letters of {root}."),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a word and press Enter. Ctrl+N for a new game.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Submit the current input buffer to the session
    pub fn submit_input(&mut self) {
        let raw = self.input_buffer.clone();
        match self.session.submit_word(&raw) {
            SubmitOutcome::Accepted { word, delta } => {
                self.stats.words_accepted += 1;
                self.add_message(
                    &format!("{} accepted, +{delta} points", word.to_uppercase()),
                    MessageStyle::Success,
                );
                // Only an accepted word clears the buffer; a rejected one
                // stays put for editing
                self.input_buffer.clear();
            }
            SubmitOutcome::Rejected(rejection) => {
                self.add_message(
                    &format!("{}: {}", rejection.title, rejection.message),
                    MessageStyle::Error,
                );
            }
            SubmitOutcome::Ignored => {
                self.input_buffer.clear();
            }
        }
    }

    /// Start a new round at the player's request
    pub fn new_game(&mut self) {
        self.finish_round();
        self.session.start_game();
        self.input_buffer.clear();
        self.announce_round("New game started!");
    }

    /// Advance the countdown by one second
    pub fn tick(&mut self) {
        // The session restarts itself on the tick after expiry; the app just
        // narrates it and rolls the stats over
        let score_before = self.session.score();
        if self.session.tick() == TickOutcome::Restarted {
            self.stats.rounds_played += 1;
            self.stats.best_score = self.stats.best_score.max(score_before);
            self.input_buffer.clear();
            self.announce_round(&format!("Time's up! You scored {score_before}."));
        }
    }

    fn finish_round(&mut self) {
        self.stats.rounds_played += 1;
        self.stats.best_score = self.stats.best_score.max(self.session.score());
    }

    fn announce_round(&mut self, lead: &str) {
        let root = self.session.root_word().to_uppercase();
        self.add_message(lead, MessageStyle::Info);
        self.add_message(&format!("New root word: {root}"), MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui<L: Lexicon>(app: App<'_, L>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, L: Lexicon>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, L>,
) -> Result<()> {
    const TICK_INTERVAL: Duration = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Wait for input, but wake up in time for the next countdown tick
        let timeout = TICK_INTERVAL.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.new_game();
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        app.input_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.submit_input();
                    }
                    _ => {}
                }
            }
        }

        // Submit and tick stay serialized on this one loop
        if last_tick.elapsed() >= TICK_INTERVAL {
            app.tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    struct SetLexicon(FxHashSet<&'static str>);

    impl Lexicon for SetLexicon {
        fn is_recognized(&self, word: &str, _language: &str) -> bool {
            self.0.contains(word)
        }
    }

    fn lexicon_of(words: &[&'static str]) -> SetLexicon {
        SetLexicon(words.iter().copied().collect())
    }

    #[test]
    fn accepted_submission_clears_buffer() {
        let lexicon = lexicon_of(&["silk"]);
        let roots = vec!["silkworm".to_string()];
        let mut app = App::new(GameSession::new(&lexicon, &roots, "en"));

        app.input_buffer = "silk".to_string();
        app.submit_input();
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.score(), 14);
        assert_eq!(app.stats.words_accepted, 1);
    }

    #[test]
    fn rejected_submission_keeps_buffer() {
        let lexicon = lexicon_of(&[]);
        let roots = vec!["silkworm".to_string()];
        let mut app = App::new(GameSession::new(&lexicon, &roots, "en"));

        app.input_buffer = "silky".to_string();
        app.submit_input();
        assert_eq!(app.input_buffer, "silky");
        assert_eq!(app.session.score(), 0);
    }

    #[test]
    fn expiry_tick_rolls_stats_over() {
        let lexicon = lexicon_of(&["silk"]);
        let roots = vec!["silkworm".to_string()];
        let mut app = App::new(GameSession::new(&lexicon, &roots, "en"));

        app.input_buffer = "silk".to_string();
        app.submit_input();

        // Drain the countdown, then trigger the restart tick
        for _ in 0..crate::session::ROUND_SECONDS {
            app.tick();
        }
        assert_eq!(app.stats.rounds_played, 0);
        app.tick();
        assert_eq!(app.stats.rounds_played, 1);
        assert_eq!(app.stats.best_score, 14);
        assert_eq!(app.session.score(), 0);
    }

    #[test]
    fn message_log_is_capped() {
        let lexicon = lexicon_of(&[]);
        let roots = vec!["silkworm".to_string()];
        let mut app = App::new(GameSession::new(&lexicon, &roots, "en"));

        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().unwrap().text, "message 9");
    }
}
