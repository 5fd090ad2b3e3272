//! Display functions for command results

use crate::commands::CheckResult;
use crate::core::Verdict;
use colored::Colorize;

/// Print the result of a one-shot word check
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root: {}    Word: {}",
        result.root.to_uppercase().bright_yellow().bold(),
        result.word.to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match &result.verdict {
        Verdict::Accepted(word) => {
            let delta = result.delta.unwrap_or_default();
            println!(
                "\n{} '{}' is playable (+{} points)",
                "✅".green(),
                word,
                delta.to_string().bright_cyan().bold()
            );
        }
        Verdict::Rejected(rejection) => {
            println!(
                "\n{} {}",
                "❌".red(),
                rejection.title.bright_red().bold()
            );
            println!("   {}", rejection.message);
        }
        Verdict::Ignored => {
            println!("\n(empty submission, nothing to check)");
        }
    }
    println!();
}
