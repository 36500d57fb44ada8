//! Game sequencing
//!
//! The state machine for a single game and the loop that drives it with an
//! automated guesser.

mod config;
mod runner;
mod state;

pub use config::GameConfig;
pub use runner::play_game;
pub use state::{Game, GameStatus, GameSummary};
