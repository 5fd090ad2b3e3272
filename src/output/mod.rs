//! Terminal output formatting
//!
//! Display utilities for the non-TUI surfaces.

pub mod display;
pub mod formatters;

pub use display::print_check_result;
