//! Batch simulation of automated games
//!
//! Plays many independent games in parallel and aggregates the outcomes.

use crate::dictionary::Dictionary;
use crate::error::GameError;
use crate::game::{Game, GameConfig, GameStatus, GameSummary, play_game};
use crate::solver::StrategyType;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub games: usize,
    /// Base seed; game `i` is seeded with `seed + i`
    pub seed: u64,
    pub strategy: String,
    pub game: GameConfig,
}

/// Aggregate outcome of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationStatistics {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    /// Winning games keyed by attempts used
    pub distribution: BTreeMap<usize, usize>,
    pub average_attempts: f64,
    pub total_time: Duration,
}

impl SimulationStatistics {
    /// Fraction of games won, in `[0, 1]`
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }

    fn from_summaries(summaries: &[GameSummary], total_time: Duration) -> Self {
        let mut distribution = BTreeMap::new();
        for summary in summaries.iter().filter(|s| s.status == GameStatus::Won) {
            *distribution.entry(summary.attempts_used).or_insert(0) += 1;
        }

        let wins: usize = distribution.values().sum();
        let total_attempts: usize = distribution
            .iter()
            .map(|(attempts, count)| attempts * count)
            .sum();
        let average_attempts = if wins > 0 {
            total_attempts as f64 / wins as f64
        } else {
            0.0
        };

        Self {
            games: summaries.len(),
            wins,
            losses: summaries.len() - wins,
            distribution,
            average_attempts,
            total_time,
        }
    }
}

/// Play `config.games` games and collect statistics
///
/// Each game draws its solution and seeds its guesser from its own RNG, so
/// results are identical for a given seed regardless of thread scheduling.
///
/// # Errors
///
/// Returns an error if the game config is invalid.
pub fn run_simulation(
    dictionary: &Dictionary,
    config: &SimulationConfig,
    show_progress: bool,
) -> Result<SimulationStatistics, GameError> {
    config.game.validate()?;
    info!(
        "Simulating {} games with strategy '{}' and seed {}",
        config.games, config.strategy, config.seed
    );

    let pb = if show_progress {
        progress_bar(config.games as u64)
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let summaries = (0..config.games)
        .into_par_iter()
        .map(|index| {
            let summary = simulate_one(dictionary, config, index as u64);
            pb.inc(1);
            summary
        })
        .collect::<Result<Vec<_>, _>>()?;
    pb.finish_with_message("Complete!");

    let stats = SimulationStatistics::from_summaries(&summaries, start.elapsed());
    info!(
        "Simulation finished: {}/{} won in {:.2}s",
        stats.wins,
        stats.games,
        stats.total_time.as_secs_f64()
    );
    Ok(stats)
}

fn simulate_one(
    dictionary: &Dictionary,
    config: &SimulationConfig,
    index: u64,
) -> Result<GameSummary, GameError> {
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(index));
    let mut game = Game::new(dictionary, config.game, &mut rng)?;
    let mut guesser = StrategyType::from_name(&config.strategy, rng.random(), config.game.feedback);
    Ok(play_game(&mut game, &mut guesser))
}

fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb
}
