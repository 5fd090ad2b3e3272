//! Word Scramble - CLI
//!
//! Single-player word-building game: spell words from the letters of a root
//! word against a 60-second clock. TUI and plain CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use word_scramble::{
    commands::{check_word, run_simple},
    lexicon::{EmbeddedLexicon, FileLexicon, Lexicon},
    output::print_check_result,
    session::GameSession,
    wordlists::{START_WORDS, loader},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell as many words as you can from a root word before time runs out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a custom root-word list (default: embedded list)
    #[arg(short, long, global = true)]
    roots: Option<String>,

    /// Path to a custom dictionary (default: embedded English lexicon)
    #[arg(short, long, global = true)]
    dictionary: Option<String>,

    /// Language tag passed to the lexicon
    #[arg(short, long, global = true, default_value = "en")]
    language: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Check a single word against a root word
    Check {
        /// The root word to check against
        root: String,

        /// The word to validate
        word: String,
    },
}

/// Load the candidate root words based on the --roots flag
///
/// A missing or unreadable custom file is fatal: the game must not start
/// without a Root Word Source. (An empty-but-readable list is fine; the
/// session falls back to its fixed default root.)
fn load_roots(custom: Option<&str>) -> Result<Vec<String>> {
    match custom {
        None => Ok(loader::words_from_slice(START_WORDS)),
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("cannot read root word list '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let roots = load_roots(cli.roots.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Play);

    match cli.dictionary.as_deref() {
        None => {
            let lexicon = EmbeddedLexicon::new();
            run_command(command, &lexicon, &roots, &cli.language)
        }
        Some(path) => {
            let words = loader::load_from_file(path)
                .with_context(|| format!("cannot read dictionary '{path}'"))?;
            let lexicon = FileLexicon::new(words, cli.language.clone());
            run_command(command, &lexicon, &roots, &cli.language)
        }
    }
}

fn run_command<L: Lexicon>(
    command: Commands,
    lexicon: &L,
    roots: &[String],
    language: &str,
) -> Result<()> {
    match command {
        Commands::Play => {
            use word_scramble::interactive::{App, run_tui};

            let session = GameSession::new(lexicon, roots, language);
            run_tui(App::new(session))
        }
        Commands::Simple => {
            let session = GameSession::new(lexicon, roots, language);
            run_simple(session).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Check { root, word } => {
            let result =
                check_word(&root, &word, lexicon, language).map_err(|e| anyhow::anyhow!(e))?;
            print_check_result(&result);
            Ok(())
        }
    }
}
