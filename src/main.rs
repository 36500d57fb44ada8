//! Wordy - CLI
//!
//! Play a word-guessing game in the terminal, or let a strategy play it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{LevelFilter, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::{Path, PathBuf};
use wordy::{
    commands::{SimulationConfig, SolveConfig, run_play, run_simulation, solve_word},
    core::FeedbackRule,
    dictionary::{DEFAULT_WORD_LENGTH, Dictionary},
    game::{Game, GameConfig},
    output::{print_emoji_grid, print_simulation_statistics, print_solve_result},
    solver::StrategyType,
};

#[derive(Parser)]
#[command(
    name = "wordy",
    about = "Word-guessing game with colored feedback and automated solvers",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line (default: built-in list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Word length
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Valid guesses allowed per game
    #[arg(short, long, global = true, default_value_t = GameConfig::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Use two-pass duplicate-letter feedback
    #[arg(long, global = true)]
    canonical: bool,

    /// RNG seed for reproducible games (default: random)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play {
        /// Use this solution instead of a random one
        #[arg(long)]
        solution: Option<String>,
    },

    /// Let a strategy solve a specific word
    Solve {
        /// The solution to play against
        word: String,

        /// Strategy: first (default), random, entropy
        #[arg(short, long, default_value = "first")]
        strategy: String,
    },

    /// Play many automated games and report statistics
    Simulate {
        /// Number of games
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// Strategy: first (default), random, entropy
        #[arg(short, long, default_value = "first")]
        strategy: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level.as_str().to_lowercase()),
    )
    .init();
}

fn load_dictionary(path: Option<&Path>, length: usize) -> Result<Dictionary> {
    match path {
        Some(path) => Dictionary::from_file(path, length)
            .with_context(|| format!("loading dictionary from {}", path.display())),
        None => Dictionary::embedded(length).context("loading built-in dictionary"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(cli.dictionary.as_deref(), cli.length)?;

    let feedback = if cli.canonical {
        FeedbackRule::Canonical
    } else {
        FeedbackRule::Approximate
    };
    let config = GameConfig::new(cli.max_attempts).with_feedback(feedback);
    config.validate()?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("Using seed {seed}");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { solution: None });

    match command {
        Commands::Play { solution } => {
            run_play_command(&dictionary, config, seed, solution.as_deref())
        }
        Commands::Solve { word, strategy } => {
            run_solve_command(&dictionary, config, seed, &word, &strategy, cli.verbose > 0)
        }
        Commands::Simulate { games, strategy } => {
            run_simulate_command(&dictionary, config, seed, games, strategy)
        }
    }
}

fn run_play_command(
    dictionary: &Dictionary,
    config: GameConfig,
    seed: u64,
    solution: Option<&str>,
) -> Result<()> {
    let mut game = match solution {
        Some(word) => Game::with_solution(dictionary, config, word)?,
        None => Game::new(dictionary, config, &mut StdRng::seed_from_u64(seed))?,
    };

    let stdin = io::stdin();
    run_play(&mut game, stdin.lock(), &mut io::stdout())?;
    Ok(())
}

fn run_solve_command(
    dictionary: &Dictionary,
    config: GameConfig,
    seed: u64,
    word: &str,
    strategy_name: &str,
    verbose: bool,
) -> Result<()> {
    let mut guesser = StrategyType::from_name(strategy_name, seed, config.feedback);
    info!("Solving with strategy '{}'", guesser.name());

    let solve_config = SolveConfig {
        solution: word.to_string(),
        game: config,
    };
    let result = solve_word(dictionary, solve_config, &mut guesser)?;

    print_solve_result(&result, verbose);
    let history: Vec<_> = result.steps.iter().map(|s| s.guess.clone()).collect();
    print_emoji_grid(&history);
    Ok(())
}

fn run_simulate_command(
    dictionary: &Dictionary,
    config: GameConfig,
    seed: u64,
    games: usize,
    strategy: String,
) -> Result<()> {
    println!(
        "\n🎯 Simulating {games} games against {} words",
        dictionary.len()
    );

    let sim_config = SimulationConfig {
        games,
        seed,
        strategy,
        game: config,
    };
    let stats = run_simulation(dictionary, &sim_config, true)?;

    print_simulation_statistics(&stats, &sim_config.strategy);
    Ok(())
}
