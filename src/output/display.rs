//! Display functions for command results

use super::formatters::{colorize_guess, create_progress_bar, guess_count, history_to_emoji};
use crate::commands::{SimulationStatistics, SolveResult};
use crate::core::Guess;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.solution.as_str().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            colorize_guess(&step.guess),
            step.guess.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
                if let Some(expected) = step.expected_remaining {
                    println!("  Expected:   {expected:.1} candidates");
                }
                if let Some(worst) = step.worst_case {
                    println!("  Worst case: {worst} candidates");
                }

                if step.candidates_after > 0 {
                    let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({:.1}x reduction)",
                        reduction.log2(),
                        reduction
                    );
                }
            }
        }
    }

    println!();
    if result.success() {
        println!(
            "{}",
            format!("✅ Solved in {}!", guess_count(result.steps.len()))
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {}", guess_count(result.steps.len()))
                .red()
                .bold()
        );
    }
}

/// Print simulation statistics
pub fn print_simulation_statistics(stats: &SimulationStatistics, strategy: &str) {
    println!("\n{}", "═".repeat(70));
    println!(" Simulation Results ({strategy}) ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Games played:    {}", stats.games);
    println!(
        "  Won:             {} {}",
        stats.wins,
        format!("({:.1}%)", stats.win_rate() * 100.0).green()
    );
    if stats.losses > 0 {
        println!(
            "  Lost:            {} {}",
            stats.losses,
            format!("({:.1}%)", (1.0 - stats.win_rate()) * 100.0).red()
        );
    }
    println!(
        "  Average guesses: {}",
        format!("{:.3}", stats.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:      {:.2}s",
        stats.total_time.as_secs_f64()
    );

    if stats.wins == 0 {
        return;
    }

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.distribution.values().copied().max().unwrap_or(1);
    for (&attempts, &count) in &stats.distribution {
        let percentage = count as f64 / stats.wins as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "  {:>9}: {} {count:4} ({percentage:5.1}%)",
            guess_count(attempts),
            bar.green()
        );
    }
}

/// Print the share grid for a finished game
pub fn print_emoji_grid(history: &[Guess]) {
    if !history.is_empty() {
        println!("\n{}\n", history_to_emoji(history));
    }
}
