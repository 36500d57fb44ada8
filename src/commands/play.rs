//! Interactive play against a hidden word
//!
//! Reads guesses line by line and prints colored feedback after each one.

use crate::game::{Game, GameStatus, GameSummary};
use crate::output::{colorize_guess, guess_count, history_to_emoji};
use colored::Colorize;
use log::debug;
use std::io::{self, BufRead, Write};

/// Words that end the game early
const QUIT_COMMANDS: [&str; 3] = ["quit", "exit", "q"];

/// Run an interactive game reading from `input` and writing to `output`
///
/// Rejected guesses print the reason and leave the game unchanged. Typing
/// `quit` or reaching end of input forfeits the game. The solution is
/// revealed when the game is lost.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    game: &mut Game<'_>,
    mut input: R,
    output: &mut W,
) -> io::Result<GameSummary> {
    writeln!(
        output,
        "\nGuess the {}-letter word in {} attempts. Type 'quit' to give up.\n",
        game.solution().len(),
        game.config().max_attempts
    )?;

    let mut line = String::new();
    while game.status() == GameStatus::Playing {
        write!(
            output,
            "Guess {}/{}: ",
            game.attempts_used() + 1,
            game.config().max_attempts
        )?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("Input closed, forfeiting");
            game.resign();
            break;
        }

        let entry = line.trim();
        if entry.is_empty() {
            continue;
        }
        if QUIT_COMMANDS
            .iter()
            .any(|cmd| entry.eq_ignore_ascii_case(cmd))
        {
            game.resign();
            break;
        }

        match game.submit_guess(entry) {
            Ok(guess) => writeln!(output, "  {}", colorize_guess(&guess))?,
            Err(e) => writeln!(output, "  {}", e.to_string().yellow())?,
        }
    }

    let summary = game.summary();
    write_outcome(output, &summary)?;
    Ok(summary)
}

fn write_outcome<W: Write>(output: &mut W, summary: &GameSummary) -> io::Result<()> {
    writeln!(output)?;
    if summary.status == GameStatus::Won {
        writeln!(
            output,
            "{}",
            format!("🎉 Solved in {}!", guess_count(summary.attempts_used))
                .green()
                .bold()
        )?;
    } else {
        writeln!(output, "{}", "Game over.".red().bold())?;
        writeln!(output, "The word was {}", summary.solution)?;
    }

    if !summary.history.is_empty() {
        writeln!(output, "\n{}", history_to_emoji(&summary.history))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::game::GameConfig;
    use std::io::Cursor;

    fn dictionary() -> Dictionary {
        Dictionary::load("crane\nsmart\nstart\nstats\n", 5).unwrap()
    }

    fn play(dictionary: &Dictionary, config: GameConfig, input: &str) -> (GameSummary, String) {
        let mut game = Game::with_solution(dictionary, config, "stats").unwrap();
        let mut output = Vec::new();
        let summary = run_play(&mut game, Cursor::new(input), &mut output).unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    #[test]
    fn winning_game() {
        let dictionary = dictionary();
        let (summary, output) = play(&dictionary, GameConfig::default(), "smart\nstats\n");

        assert_eq!(summary.status, GameStatus::Won);
        assert_eq!(summary.attempts_used, 2);
        assert!(output.contains("Solved in 2 guesses"));
        assert!(output.contains("🟩🟩🟩🟩🟩"));
        assert!(!output.contains("The word was"));
    }

    #[test]
    fn first_try_win_is_singular() {
        let dictionary = dictionary();
        let (summary, output) = play(&dictionary, GameConfig::default(), "stats\n");

        assert_eq!(summary.attempts_used, 1);
        assert!(output.contains("Solved in 1 guess!"));
    }

    #[test]
    fn invalid_guesses_are_reported_and_free() {
        let dictionary = dictionary();
        let (summary, output) = play(
            &dictionary,
            GameConfig::default(),
            "qqqqq\ncat\nsm4rt\nsmart\nsmart\n\n  stats  \n",
        );

        assert_eq!(summary.status, GameStatus::Won);
        assert_eq!(summary.attempts_used, 2);
        assert!(output.contains("not found"));
        assert!(output.contains("expected 5"));
        assert!(output.contains("Already guessed"));
        assert!(output.contains("Invalid guess"));
    }

    #[test]
    fn running_out_of_attempts_reveals_solution() {
        let dictionary = dictionary();
        let (summary, output) = play(&dictionary, GameConfig::new(2), "crane\nsmart\n");

        assert_eq!(summary.status, GameStatus::Lost);
        assert!(output.contains("The word was STATS"));
    }

    #[test]
    fn quit_forfeits() {
        let dictionary = dictionary();
        let (summary, output) = play(&dictionary, GameConfig::default(), "crane\nQUIT\nstats\n");

        assert_eq!(summary.status, GameStatus::Lost);
        assert_eq!(summary.attempts_used, 1);
        assert!(output.contains("The word was STATS"));
    }

    #[test]
    fn end_of_input_forfeits() {
        let dictionary = dictionary();
        let (summary, _) = play(&dictionary, GameConfig::default(), "crane\n");

        assert_eq!(summary.status, GameStatus::Lost);
        assert_eq!(summary.history.len(), 1);
    }

    #[test]
    fn ceiling_ends_endless_invalid_input() {
        let dictionary = dictionary();
        let input = "zzzzz\n".repeat(60);
        let (summary, output) = play(&dictionary, GameConfig::default(), &input);

        assert_eq!(summary.status, GameStatus::Lost);
        assert_eq!(summary.attempts_used, 0);
        assert!(output.contains("Attempt limit of 50"));
    }
}
