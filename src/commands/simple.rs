//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI. The countdown is driven by wall
//! clock: the whole seconds that pass between submissions are applied as
//! ticks before each answer is judged.

use crate::lexicon::Lexicon;
use crate::output::formatters::timer_bar;
use crate::session::{GameSession, SubmitOutcome, TickOutcome};
use colored::Colorize;
use std::io::{self, Write};
use std::time::Instant;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_simple<L: Lexicon>(mut session: GameSession<'_, L>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Word Scramble - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Spell words from the letters of the root word before time runs out.");
    println!("Each accepted word scores 10 points plus one per letter.\n");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut last_seen = Instant::now();

    loop {
        println!("────────────────────────────────────────────────────────────");
        println!(
            "Root word: {}   Score: {}",
            session.root_word().to_uppercase().bright_yellow().bold(),
            session.score().to_string().bright_cyan().bold()
        );
        println!(
            "Time left: [{}] {}s",
            timer_bar(session.remaining_seconds(), 30).green(),
            session.remaining_seconds()
        );

        if !session.used_words().is_empty() {
            println!("\nWords so far:");
            for word in session.used_words() {
                println!("  {} {}", format!("({})", word.len()).bright_black(), word);
            }
        }
        println!();

        let input = get_user_input("Enter a word")?;

        // Apply the seconds that passed while the player was typing
        let elapsed = last_seen.elapsed().as_secs();
        last_seen = Instant::now();
        let mut restarted = false;
        for _ in 0..elapsed {
            if session.tick() == TickOutcome::Restarted {
                restarted = true;
                break;
            }
        }
        if restarted {
            println!(
                "\n{} New root word: {}\n",
                "⏰ Time's up!".bright_red().bold(),
                session.root_word().to_uppercase().bright_yellow().bold()
            );
            continue;
        }

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!(
                    "\n👋 Thanks for playing! Final score: {}\n",
                    session.score().to_string().bright_cyan().bold()
                );
                return Ok(());
            }
            "new" | "n" => {
                session.start_game();
                last_seen = Instant::now();
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        match session.submit_word(&input) {
            SubmitOutcome::Accepted { word, delta } => {
                println!(
                    "\n{} {} (+{} points)\n",
                    "✅".green(),
                    word.to_uppercase().bright_white().bold(),
                    delta
                );
            }
            SubmitOutcome::Rejected(rejection) => {
                println!(
                    "\n{} {}: {}\n",
                    "❌".red(),
                    rejection.title.bright_red().bold(),
                    rejection.message
                );
            }
            SubmitOutcome::Ignored => {}
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
