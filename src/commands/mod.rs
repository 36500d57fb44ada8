//! Command implementations

pub mod play;
pub mod simulate;
pub mod solve;

pub use play::run_play;
pub use simulate::{SimulationConfig, SimulationStatistics, run_simulation};
pub use solve::{SolveConfig, SolveResult, SolveStep, solve_word};
