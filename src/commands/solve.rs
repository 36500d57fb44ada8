//! Word solving command
//!
//! Plays one game against a known solution and reports every step.

use crate::core::{Guess, Word};
use crate::dictionary::Dictionary;
use crate::error::GameError;
use crate::game::{Game, GameConfig, GameStatus, play_game};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Guesser, filter_candidates};

/// Configuration for solving a word
pub struct SolveConfig {
    pub solution: String,
    pub game: GameConfig,
}

impl SolveConfig {
    #[must_use]
    pub fn new(solution: String) -> Self {
        Self {
            solution,
            game: GameConfig::default(),
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub solution: Word,
    pub status: GameStatus,
    pub steps: Vec<SolveStep>,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.status == GameStatus::Won
    }
}

/// A single accepted guess and its effect on the candidate set
pub struct SolveStep {
    pub guess: Guess,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Entropy of the guess over the candidates it was chosen from
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
    /// Largest group of candidates sharing one feedback pattern
    pub worst_case: Option<usize>,
}

/// Solve a specific word with the given guesser
///
/// # Errors
///
/// Returns an error if the solution is not a valid dictionary word or the
/// game config is unplayable.
pub fn solve_word<G: Guesser + ?Sized>(
    dictionary: &Dictionary,
    config: SolveConfig,
    guesser: &mut G,
) -> Result<SolveResult, GameError> {
    let mut game = Game::with_solution(dictionary, config.game, &config.solution)?;
    let summary = play_game(&mut game, guesser);
    let rule = config.game.feedback;

    let steps = summary
        .history
        .iter()
        .enumerate()
        .map(|(turn, guess)| {
            let before = filter_candidates(dictionary, &summary.history[..turn]);
            let after = filter_candidates(dictionary, &summary.history[..=turn]);
            let metrics =
                (before.len() > 1).then(|| calculate_metrics(rule, guess.word(), &before));
            SolveStep {
                guess: guess.clone(),
                candidates_before: before.len(),
                candidates_after: after.len(),
                entropy: metrics.map(|m| m.entropy),
                expected_remaining: metrics.map(|m| m.expected_remaining),
                worst_case: metrics.map(|m| m.max_partition),
            }
        })
        .collect();

    Ok(SolveResult {
        solution: summary.solution,
        status: summary.status,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedbackRule;
    use crate::solver::{EntropyGuesser, FirstCandidateGuesser};

    #[test]
    fn solve_word_succeeds() {
        let dictionary = Dictionary::embedded(5).unwrap();
        let config = SolveConfig::new("stats".to_string());

        let result = solve_word(&dictionary, config, &mut EntropyGuesser::default()).unwrap();

        assert!(!result.steps.is_empty());
        assert!(result.steps.len() <= 6);
        assert_eq!(result.solution.as_str(), "STATS");
    }

    #[test]
    fn solve_records_shrinking_candidates() {
        let dictionary = Dictionary::embedded(5).unwrap();
        let config = SolveConfig::new("crane".to_string());

        let result = solve_word(&dictionary, config, &mut FirstCandidateGuesser).unwrap();

        assert_eq!(result.steps[0].candidates_before, dictionary.len());
        for step in &result.steps {
            assert!(step.candidates_after < step.candidates_before);
        }
        for pair in result.steps.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
    }

    #[test]
    fn solve_invalid_solution_returns_error() {
        let dictionary = Dictionary::embedded(5).unwrap();
        let config = SolveConfig::new("qqqqq".to_string());

        let result = solve_word(&dictionary, config, &mut FirstCandidateGuesser);
        assert!(matches!(result, Err(GameError::InvalidSolution(_))));
    }

    #[test]
    fn solve_respects_attempt_budget() {
        let dictionary = Dictionary::embedded(5).unwrap();
        let mut config = SolveConfig::new("zebra".to_string());
        config.game = GameConfig::new(2).with_feedback(FeedbackRule::Canonical);

        let result = solve_word(&dictionary, config, &mut FirstCandidateGuesser).unwrap();

        assert!(result.steps.len() <= 2);
        if !result.success() {
            assert_eq!(result.status, GameStatus::Lost);
        }
    }

    #[test]
    fn last_step_solves_on_success() {
        let dictionary = Dictionary::load("crane\nsmart\nstart\nstats\n", 5).unwrap();
        let config = SolveConfig::new("stats".to_string());

        let result = solve_word(&dictionary, config, &mut FirstCandidateGuesser).unwrap();

        assert!(result.success());
        let last = result.steps.last().unwrap();
        assert!(last.guess.is_solved());
        assert_eq!(last.candidates_before, 1);
        assert!(last.entropy.is_none());
        assert!(last.worst_case.is_none());
    }

    #[test]
    fn first_step_reports_partition_metrics() {
        let dictionary = Dictionary::load("crane\nsmart\nstart\nstats\n", 5).unwrap();
        let config = SolveConfig::new("stats".to_string());

        let result = solve_word(&dictionary, config, &mut FirstCandidateGuesser).unwrap();
        let first = &result.steps[0];

        // CRANE splits {CRANE}, {SMART, START}, {STATS}
        assert_eq!(first.guess.word().as_str(), "CRANE");
        assert_eq!(first.worst_case, Some(2));
        assert!((first.expected_remaining.unwrap() - 1.5).abs() < 1e-9);
        assert!((first.entropy.unwrap() - 1.5).abs() < 1e-9);
    }
}
