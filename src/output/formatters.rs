//! Formatting utilities for terminal output

use crate::session::ROUND_SECONDS;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format remaining seconds as a countdown bar
#[must_use]
pub fn timer_bar(remaining_seconds: u32, width: usize) -> String {
    create_progress_bar(f64::from(remaining_seconds), f64::from(ROUND_SECONDS), width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn timer_bar_scales_to_round_length() {
        assert_eq!(timer_bar(ROUND_SECONDS, 10), "██████████");
        assert_eq!(timer_bar(0, 10), "░░░░░░░░░░");
        assert_eq!(timer_bar(ROUND_SECONDS / 2, 10), "█████░░░░░");
    }
}
