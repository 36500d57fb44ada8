//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_emoji_grid, print_simulation_statistics, print_solve_result};
pub use formatters::{colorize_guess, guess_count, history_to_emoji};
